use super::*;

/// A caller-supplied SQL fragment.
///
/// Each `?` in the fragment consumes the next value from `params` when the
/// statement is serialized. The fragment is rendered inside parentheses so it
/// composes as a single boolean operand.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprRaw {
    pub fragment: String,
    pub params: Vec<Value>,
}

impl Expr {
    pub fn raw<T>(fragment: impl Into<String>, params: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<Value>,
    {
        ExprRaw {
            fragment: fragment.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
        .into()
    }
}

impl From<ExprRaw> for Expr {
    fn from(value: ExprRaw) -> Self {
        Self::Raw(value)
    }
}
