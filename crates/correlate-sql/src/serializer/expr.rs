use super::{Comma, Ident, Params, ToSql};

use correlate_core::stmt;

impl ToSql for &stmt::Expr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        use stmt::Expr::*;

        match self {
            And(expr) => {
                let mut s = "";
                for operand in &expr.operands {
                    fmt!(f, s);
                    // OR binds looser than AND; parenthesize to preserve the
                    // tree's grouping.
                    if matches!(operand, Or(_)) {
                        fmt!(f, "(" operand ")");
                    } else {
                        fmt!(f, operand);
                    }
                    s = " AND ";
                }
            }
            BinaryOp(expr) => {
                fmt!(f, expr.lhs " " expr.op " " expr.rhs);
            }
            Column(expr) => {
                expr.to_sql(f);
            }
            Exists(expr) => {
                if expr.negated {
                    fmt!(f, "NOT EXISTS (" expr.subquery ")");
                } else {
                    fmt!(f, "EXISTS (" expr.subquery ")");
                }
            }
            InList(expr) => {
                fmt!(f, expr.expr " IN (" Comma(&expr.list) ")");
            }
            IsNull(expr) => {
                if expr.negate {
                    fmt!(f, expr.expr " IS NOT NULL");
                } else {
                    fmt!(f, expr.expr " IS NULL");
                }
            }
            Not(expr) => {
                fmt!(f, "NOT (" expr.operand ")");
            }
            Or(expr) => {
                let mut s = "";
                for operand in &expr.operands {
                    fmt!(f, s);
                    if matches!(operand, And(_)) {
                        fmt!(f, "(" operand ")");
                    } else {
                        fmt!(f, operand);
                    }
                    s = " OR ";
                }
            }
            Raw(expr) => {
                // The fragment is caller-written SQL; parenthesize so it
                // composes as one boolean operand. Each `?` consumes the next
                // positional parameter.
                let mut params = expr.params.iter();
                let null = stmt::Value::Null;

                f.dst.push('(');
                for ch in expr.fragment.chars() {
                    if ch == '?' {
                        let value = params.next().unwrap_or(&null);
                        let placeholder = f.params.push(value);
                        fmt!(f, placeholder);
                    } else {
                        f.dst.push(ch);
                    }
                }
                f.dst.push(')');
            }
            Value(expr) => expr.to_sql(f),
        }
    }
}

impl ToSql for &stmt::ExprColumn {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, Ident(&self.table) "." Ident(&self.column));
    }
}

impl ToSql for &stmt::BinaryOp {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        f.dst.push_str(match self {
            stmt::BinaryOp::Eq => "=",
            stmt::BinaryOp::Gt => ">",
            stmt::BinaryOp::Ge => ">=",
            stmt::BinaryOp::Lt => "<",
            stmt::BinaryOp::Le => "<=",
            stmt::BinaryOp::Ne => "<>",
        })
    }
}
