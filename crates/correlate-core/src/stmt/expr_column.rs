use super::*;

/// A column reference, always qualified by its table.
///
/// Correlation conditions reference the outer query's table by name, so the
/// qualification is what ties a subquery back to the enclosing row.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprColumn {
    pub table: String,
    pub column: String,
}

impl Expr {
    pub fn column(table: impl Into<String>, column: impl Into<String>) -> Self {
        ExprColumn {
            table: table.into(),
            column: column.into(),
        }
        .into()
    }
}

impl ExprColumn {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        ExprColumn {
            table: table.into(),
            column: column.into(),
        }
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}
