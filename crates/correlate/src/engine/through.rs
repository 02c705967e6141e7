use super::{Candidate, Compiler, Context};

use correlate_core::{
    schema::{Model, RelationKind, Through},
    Error, Result,
};

impl Compiler<'_> {
    /// Chained relationships: build the intermediate hop as a carrier, then
    /// compile the terminal relationship re-rooted at the intermediate's
    /// target model and AND the nested existence expression into the
    /// carrier's filter. The caller's predicate and refinement only apply at
    /// the terminal level; the chain's own scope travels down with them.
    ///
    /// Intermediate hops may themselves be chains; the recursion bottoms out
    /// at the first non-chain hop. A polymorphic hop fans out into one
    /// carrier per resolved type, each nesting its own terminal expression.
    pub(crate) fn through_candidates(
        &mut self,
        root: &Model,
        relation_name: &str,
        through: &Through,
        cx: &Context<'_>,
    ) -> Result<Vec<Candidate>> {
        let schema = self.schema;
        let intermediate = schema.relation(root.id, &through.through)?;

        let carrier_cx = Context {
            predicate: None,
            refine: None,
            carried_scope: None,
            root_query: cx.root_query,
        };

        let carriers = match &intermediate.kind {
            RelationKind::BelongsTo(belongs_to) => {
                self.belongs_to_candidates(root, belongs_to, &carrier_cx)?
            }
            RelationKind::HasMany(has_many) => {
                self.has_many_candidates(root, has_many, &carrier_cx)?
            }
            RelationKind::ManyToMany(many_to_many) => {
                self.many_to_many_candidates(root, many_to_many, &carrier_cx)?
            }
            RelationKind::Through(nested) => {
                self.through_candidates(root, &through.through, nested, &carrier_cx)?
            }
            kind @ RelationKind::HasOne(..) => {
                return Err(Error::unsupported_relationship(
                    root.name.upper_camel_case(),
                    &*through.through,
                    kind.kind_name(),
                ))
            }
        };

        let terminal = through.source.as_deref().unwrap_or(relation_name);

        let carried_scope = match (&through.scope, &cx.carried_scope) {
            (Some(own), Some(outer)) => Some(own.then(outer)),
            (Some(own), None) => Some(own.clone()),
            (None, outer) => outer.clone(),
        };

        let mut candidates = vec![];

        for carrier in carriers {
            let hop = schema.model(carrier.target);

            if hop.relation(terminal).is_none() {
                return Err(Error::malformed_chain(
                    root.name.upper_camel_case(),
                    relation_name,
                    terminal,
                ));
            }

            let nested_cx = Context {
                predicate: cx.predicate,
                refine: cx.refine,
                carried_scope: carried_scope.clone(),
                root_query: None,
            };

            // Negation always wraps the outermost expression; nested levels
            // assert plain existence.
            let nested = self.existence(hop, terminal, &nested_cx, false)?;

            let mut select = carrier.select;
            select.and(nested);

            candidates.push(Candidate {
                select,
                target: carrier.target,
            });
        }

        Ok(candidates)
    }
}
