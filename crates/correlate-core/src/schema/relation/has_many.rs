use super::RelationKind;
use crate::schema::{ModelId, Scope};

/// A reverse reference: the target model's table holds a foreign key
/// pointing back at the owning model.
#[derive(Debug, Clone)]
pub struct HasMany {
    /// Associated model
    pub target: ModelId,

    /// The column on the target table pointing back at the owner. Defaulted
    /// by the schema builder when left unset.
    pub foreign_key: Option<String>,

    /// The column on the owning table the foreign key points at. Defaults to
    /// the owner's primary key.
    pub source_key: Option<String>,

    /// The discriminator column on the target table when the owner is
    /// referenced polymorphically (`as`-style typing). The child row must
    /// carry one of the owner's type tags in this column.
    pub as_type: Option<String>,

    /// Default filter applied to every subquery built from this relation.
    pub scope: Option<Scope>,
}

impl HasMany {
    pub fn new(target: ModelId) -> Self {
        Self {
            target,
            foreign_key: None,
            source_key: None,
            as_type: None,
            scope: None,
        }
    }

    pub fn foreign_key(mut self, column: impl Into<String>) -> Self {
        self.foreign_key = Some(column.into());
        self
    }

    pub fn source_key(mut self, column: impl Into<String>) -> Self {
        self.source_key = Some(column.into());
        self
    }

    pub fn as_type(mut self, column: impl Into<String>) -> Self {
        self.as_type = Some(column.into());
        self
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }
}

impl From<HasMany> for RelationKind {
    fn from(value: HasMany) -> Self {
        Self::HasMany(value)
    }
}
