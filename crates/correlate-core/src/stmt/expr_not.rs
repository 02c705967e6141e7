use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprNot {
    pub operand: Box<Expr>,
}

impl Expr {
    pub fn not(operand: impl Into<Self>) -> Self {
        let operand = operand.into();

        match operand {
            Self::Value(Value::Bool(value)) => (!value).into(),
            Self::Not(not) => *not.operand,
            operand => ExprNot {
                operand: Box::new(operand),
            }
            .into(),
        }
    }
}

impl From<ExprNot> for Expr {
    fn from(value: ExprNot) -> Self {
        Self::Not(value)
    }
}
