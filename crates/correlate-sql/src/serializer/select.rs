use super::{Comma, Ident, Params, ToSql};

use correlate_core::stmt;

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, "SELECT ");

        if self.distinct {
            fmt!(f, "DISTINCT ");
        }

        match &self.returning {
            stmt::Returning::Star => fmt!(f, "*"),
            stmt::Returning::One => fmt!(f, "1"),
            stmt::Returning::Columns(columns) => fmt!(f, Comma(columns)),
        }

        fmt!(f, " FROM " Ident(&self.source.table));

        for join in &self.joins {
            fmt!(f, " INNER JOIN " Ident(&join.table) " ON " join.on);
        }

        if !self.filter.is_true() {
            fmt!(f, " WHERE " self.filter);
        }
    }
}
