use super::RelationKind;
use crate::schema::ModelId;

/// A singular reverse reference.
///
/// Representable in metadata so schemas can declare it, but the existence
/// compiler does not build subqueries for it.
#[derive(Debug, Clone)]
pub struct HasOne {
    /// Associated model
    pub target: ModelId,

    /// The column on the target table pointing back at the owner.
    pub foreign_key: Option<String>,
}

impl HasOne {
    pub fn new(target: ModelId) -> Self {
        Self {
            target,
            foreign_key: None,
        }
    }

    pub fn foreign_key(mut self, column: impl Into<String>) -> Self {
        self.foreign_key = Some(column.into());
        self
    }
}

impl From<HasOne> for RelationKind {
    fn from(value: HasOne) -> Self {
        Self::HasOne(value)
    }
}
