use super::{finish_candidate, Candidate, Compiler, Context};

use correlate_core::{
    schema::{BelongsTo, Model},
    stmt::{Expr, ExprColumn, Returning, Select, Value},
    Result,
};
use log::debug;

impl Compiler<'_> {
    /// Direct references: the owning table holds the foreign key.
    ///
    /// Non-polymorphic references produce exactly one candidate.
    /// Polymorphic references fan out to one candidate per target type
    /// actually present in the data, discovered by probing the
    /// discriminator column.
    pub(crate) fn belongs_to_candidates(
        &mut self,
        root: &Model,
        belongs_to: &BelongsTo,
        cx: &Context<'_>,
    ) -> Result<Vec<Candidate>> {
        let schema = self.schema;
        let foreign_key = belongs_to
            .foreign_key
            .as_deref()
            .expect("foreign key is resolved by the schema builder");

        if let Some(target) = belongs_to.target {
            let target = schema.model(target);
            let target_key = belongs_to
                .target_key
                .as_deref()
                .unwrap_or(&target.primary_key);

            let select = Select::one(
                target,
                Expr::eq(
                    target.column(target_key),
                    Expr::column(&root.table_name, foreign_key),
                ),
            );

            return Ok(vec![finish_candidate(
                select,
                target,
                belongs_to.scope.as_ref(),
                cx,
            )]);
        }

        let type_column = belongs_to
            .type_column
            .as_deref()
            .expect("polymorphic reference declares a discriminator column");

        let tags = self.distinct_type_tags(root, type_column, cx)?;

        let mut candidates = vec![];
        let mut seen = vec![];

        for tag in &tags {
            // A tag no model claims cannot point at a real row; it
            // contributes no candidate and the row counts as orphaned.
            let Some(target) = schema.model_by_type_tag(tag) else {
                debug!("discriminator tag resolves to no model; tag={tag}");
                continue;
            };

            // The type name and the table name may both occur in data; one
            // candidate per resolved model covers every spelling via IN.
            if seen.contains(&target.id) {
                continue;
            }
            seen.push(target.id);

            let target_key = belongs_to
                .target_key
                .as_deref()
                .unwrap_or(&target.primary_key);

            let mut select = Select::one(
                target,
                Expr::eq(
                    target.column(target_key),
                    Expr::column(&root.table_name, foreign_key),
                ),
            );
            select.and(Expr::in_list(
                Expr::column(&root.table_name, type_column),
                target.type_tags(),
            ));

            candidates.push(finish_candidate(
                select,
                target,
                belongs_to.scope.as_ref(),
                cx,
            ));
        }

        Ok(candidates)
    }

    /// Enumerates the discriminator values actually present, scoped to the
    /// caller's query when one is available.
    ///
    /// This is the single storage-touching operation during compilation. It
    /// runs synchronously and its failure aborts the compile unmodified.
    fn distinct_type_tags(
        &mut self,
        root: &Model,
        type_column: &str,
        cx: &Context<'_>,
    ) -> Result<Vec<String>> {
        let mut probe = match cx.root_query {
            Some(query) => query.clone(),
            None => Select::new(root.table_name.as_str(), true),
        };
        probe.returning = Returning::Columns(vec![ExprColumn::new(&root.table_name, type_column)]);
        probe.distinct = true;
        probe.and(Expr::is_not_null(Expr::column(&root.table_name, type_column)));

        let mut params = vec![];
        let sql = self.serializer.serialize(&probe, &mut params);
        debug!("discriminator probe; sql={sql}");

        let rows = self.connection.query(&sql, &params)?;

        Ok(rows
            .into_iter()
            .filter_map(|row| match row.into_iter().next() {
                Some(Value::String(tag)) => Some(tag),
                _ => None,
            })
            .collect())
    }
}
