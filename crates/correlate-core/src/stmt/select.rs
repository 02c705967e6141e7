use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// The projection part of the query.
    pub returning: Returning,

    /// The `FROM` part of the query.
    pub source: Source,

    /// Inner joins applied to the source.
    pub joins: Vec<Join>,

    /// True when the projection is de-duplicated.
    pub distinct: bool,

    /// Query filter
    pub filter: Expr,
}

impl Select {
    pub fn new(source: impl Into<Source>, filter: impl Into<Expr>) -> Self {
        Self {
            returning: Returning::Star,
            source: source.into(),
            joins: vec![],
            distinct: false,
            filter: filter.into(),
        }
    }

    /// An existence probe: projects the constant `1` rather than any real
    /// column.
    pub fn one(source: impl Into<Source>, filter: impl Into<Expr>) -> Self {
        Self {
            returning: Returning::One,
            ..Self::new(source, filter)
        }
    }

    pub fn and(&mut self, expr: impl Into<Expr>) {
        self.filter = Expr::and(self.filter.take(), expr);
    }

    pub fn join(&mut self, table: impl Into<String>, on: impl Into<Expr>) {
        self.joins.push(Join {
            table: table.into(),
            on: on.into(),
        });
    }

    pub fn returning(mut self, returning: Returning) -> Self {
        self.returning = returning;
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }
}
