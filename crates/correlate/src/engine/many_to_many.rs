use super::{finish_candidate, Candidate, Compiler, Context};

use correlate_core::{
    schema::{ManyToMany, Model},
    stmt::{Expr, Select},
    Result,
};

impl Compiler<'_> {
    /// Many-to-many: the correlation runs through the join table. The target
    /// is joined against the join table so predicates and scopes still apply
    /// to the far side's columns.
    pub(crate) fn many_to_many_candidates(
        &mut self,
        root: &Model,
        many_to_many: &ManyToMany,
        cx: &Context<'_>,
    ) -> Result<Vec<Candidate>> {
        let target = self.schema.model(many_to_many.target);
        let join_table = many_to_many
            .join_table
            .as_deref()
            .expect("join table is resolved by the schema builder");
        let join_foreign_key = many_to_many
            .join_foreign_key
            .as_deref()
            .expect("join foreign key is resolved by the schema builder");
        let join_target_key = many_to_many
            .join_target_key
            .as_deref()
            .expect("join target key is resolved by the schema builder");
        let source_key = many_to_many
            .source_key
            .as_deref()
            .unwrap_or(&root.primary_key);
        let target_key = many_to_many
            .target_key
            .as_deref()
            .unwrap_or(&target.primary_key);

        let mut select = Select::one(
            target,
            Expr::eq(
                Expr::column(join_table, join_foreign_key),
                Expr::column(&root.table_name, source_key),
            ),
        );
        select.join(
            join_table,
            Expr::eq(
                target.column(target_key),
                Expr::column(join_table, join_target_key),
            ),
        );

        Ok(vec![finish_candidate(
            select,
            target,
            many_to_many.scope.as_ref(),
            cx,
        )])
    }
}
