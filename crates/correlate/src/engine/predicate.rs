use correlate_core::stmt::{Expr, Value};

/// A caller-supplied restriction on the related rows.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// Column equality pairs, matched against the candidate target's table.
    /// A `NULL` value becomes an `IS NULL` check.
    Fields(Vec<(String, Value)>),

    /// A raw conditional fragment with positional `?` parameters.
    Sql(String, Vec<Value>),
}

impl Predicate {
    pub fn field(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Fields(vec![(column.into(), value.into())])
    }

    pub fn fields<C, V>(fields: impl IntoIterator<Item = (C, V)>) -> Self
    where
        C: Into<String>,
        V: Into<Value>,
    {
        Self::Fields(
            fields
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        )
    }

    pub fn sql<V>(fragment: impl Into<String>, params: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<Value>,
    {
        Self::Sql(
            fragment.into(),
            params.into_iter().map(Into::into).collect(),
        )
    }

    /// Renders the predicate against the candidate target's table.
    pub(crate) fn to_expr(&self, table: &str) -> Expr {
        match self {
            Self::Fields(fields) => Expr::and_from_vec(
                fields
                    .iter()
                    .map(|(column, value)| Expr::eq(Expr::column(table, column), value.clone()))
                    .collect(),
            ),
            Self::Sql(fragment, params) => Expr::raw(fragment.clone(), params.iter().cloned()),
        }
    }
}
