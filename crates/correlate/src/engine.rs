mod belongs_to;
mod has_many;
mod many_to_many;
mod through;

mod predicate;
pub use predicate::Predicate;

use correlate_core::{
    schema::{Model, ModelId, RelationKind, Schema, Scope},
    stmt::{Expr, Select, Value},
    Connection, Error, Result,
};
use correlate_sql::Serializer;
use log::debug;

/// A caller-supplied refinement. Receives the in-progress candidate subquery
/// and returns a further-restricted one; applied last, after default scopes
/// and predicates, once per candidate.
pub type Refine = dyn Fn(Select) -> Select;

/// One scoped subquery contributing one `EXISTS(...)` disjunct, together
/// with the model it selects from. Chains re-root compilation at the target.
pub(crate) struct Candidate {
    pub(crate) select: Select,
    pub(crate) target: ModelId,
}

pub(crate) struct Compiler<'a> {
    pub(crate) schema: &'a Schema,
    pub(crate) connection: &'a mut dyn Connection,
    pub(crate) serializer: &'a Serializer,
}

/// Everything threaded through one compile call unchanged.
pub(crate) struct Context<'a> {
    /// The caller's predicate, applied to every candidate at the terminal
    /// level.
    pub(crate) predicate: Option<&'a Predicate>,

    /// The caller's refinement, applied after scopes and predicates.
    pub(crate) refine: Option<&'a Refine>,

    /// Scope carried down from an enclosing chain level.
    pub(crate) carried_scope: Option<Scope>,

    /// The caller's query, used to restrict the polymorphic discriminator
    /// probe to rows the caller can see. Absent at nested chain levels.
    pub(crate) root_query: Option<&'a Select>,
}

impl Compiler<'_> {
    /// Compiles the existence filter and attaches it to the caller's query.
    ///
    /// The query is only ever mutated here, in one final step; any earlier
    /// failure leaves it untouched.
    pub(crate) fn compile(
        &mut self,
        root: ModelId,
        mut query: Select,
        relation: &str,
        negated: bool,
        predicate: Option<&Predicate>,
        refine: Option<&Refine>,
    ) -> Result<Select> {
        let schema = self.schema;
        let root = schema.model(root);

        let expr = {
            let cx = Context {
                predicate,
                refine,
                carried_scope: None,
                root_query: Some(&query),
            };
            self.existence(root, relation, &cx, negated)?
        };

        query.and(expr);

        if log::log_enabled!(log::Level::Debug) {
            let mut params = Vec::<Value>::new();
            let sql = self.serializer.serialize(&query, &mut params);
            debug!("existence filter; relation={relation} negated={negated} sql={sql}");
        }

        Ok(query)
    }

    /// Builds the combined existence expression for one relationship,
    /// dispatching on its kind. Chains re-enter here for their terminal hop,
    /// re-rooted at the intermediate's target model.
    pub(crate) fn existence(
        &mut self,
        root: &Model,
        relation_name: &str,
        cx: &Context<'_>,
        negated: bool,
    ) -> Result<Expr> {
        let schema = self.schema;
        let relation = schema.relation(root.id, relation_name)?;

        let candidates = match &relation.kind {
            RelationKind::BelongsTo(belongs_to) => self.belongs_to_candidates(root, belongs_to, cx)?,
            RelationKind::HasMany(has_many) => self.has_many_candidates(root, has_many, cx)?,
            RelationKind::ManyToMany(many_to_many) => {
                self.many_to_many_candidates(root, many_to_many, cx)?
            }
            RelationKind::Through(through) => {
                self.through_candidates(root, relation_name, through, cx)?
            }
            kind @ RelationKind::HasOne(..) => {
                return Err(Error::unsupported_relationship(
                    root.name.upper_camel_case(),
                    relation_name,
                    kind.kind_name(),
                ))
            }
        };

        Ok(combine(candidates, negated))
    }
}

/// The boolean combinator: ORs the candidates' existence probes, negating
/// the whole expression when non-existence was asked for.
///
/// An empty candidate set is not an error: nothing can exist, so asserting
/// existence matches no rows and asserting non-existence matches all rows.
pub(crate) fn combine(candidates: Vec<Candidate>, negated: bool) -> Expr {
    if candidates.is_empty() {
        return negated.into();
    }

    if candidates.len() == 1 && negated {
        let candidate = candidates.into_iter().next().unwrap();
        return Expr::not_exists(candidate.select);
    }

    let expr = Expr::or_from_vec(
        candidates
            .into_iter()
            .map(|candidate| Expr::exists(candidate.select))
            .collect(),
    );

    if negated {
        Expr::not(expr)
    } else {
        expr
    }
}

/// Applies the post-correlation pipeline to a candidate: the relationship's
/// own scope, any scope carried down a chain, the caller's predicate, and
/// the caller's refinement, in that order.
pub(crate) fn finish_candidate(
    mut select: Select,
    target: &Model,
    scope: Option<&Scope>,
    cx: &Context<'_>,
) -> Candidate {
    if let Some(scope) = scope {
        select = scope.apply(select);
    }
    if let Some(scope) = &cx.carried_scope {
        select = scope.apply(select);
    }
    if let Some(predicate) = cx.predicate {
        select.and(predicate.to_expr(&target.table_name));
    }
    if let Some(refine) = cx.refine {
        select = refine(select);
    }

    Candidate {
        select,
        target: target.id,
    }
}
