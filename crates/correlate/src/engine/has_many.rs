use super::{finish_candidate, Candidate, Compiler, Context};

use correlate_core::{
    schema::{HasMany, Model},
    stmt::{Expr, Select},
    Result,
};

impl Compiler<'_> {
    /// Reverse references: the target table holds a foreign key pointing
    /// back at the root. Always exactly one candidate; `as`-style typing is
    /// a filter on the child's discriminator, not a fan-out.
    pub(crate) fn has_many_candidates(
        &mut self,
        root: &Model,
        has_many: &HasMany,
        cx: &Context<'_>,
    ) -> Result<Vec<Candidate>> {
        let target = self.schema.model(has_many.target);
        let foreign_key = has_many
            .foreign_key
            .as_deref()
            .expect("foreign key is resolved by the schema builder");
        let source_key = has_many.source_key.as_deref().unwrap_or(&root.primary_key);

        let mut select = Select::one(
            target,
            Expr::eq(
                target.column(foreign_key),
                Expr::column(&root.table_name, source_key),
            ),
        );

        if let Some(type_column) = &has_many.as_type {
            select.and(Expr::in_list(target.column(type_column), root.type_tags()));
        }

        Ok(vec![finish_candidate(
            select,
            target,
            has_many.scope.as_ref(),
            cx,
        )])
    }
}
