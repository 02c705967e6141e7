use super::RelationKind;
use crate::schema::{ModelId, Scope};

/// A direct reference: the owning model's table holds the foreign key.
#[derive(Debug, Clone)]
pub struct BelongsTo {
    /// The referenced model. `None` when the reference is polymorphic, in
    /// which case the discriminator column decides the target per row.
    pub target: Option<ModelId>,

    /// The column on the owning table carrying the correlation value.
    /// Defaulted by the schema builder when left unset.
    pub foreign_key: Option<String>,

    /// The column on the target table the foreign key references. Defaults
    /// to the target's primary key.
    pub target_key: Option<String>,

    /// The discriminator column on the owning table, present iff the
    /// reference is polymorphic.
    pub type_column: Option<String>,

    /// Default filter applied to every subquery built from this relation.
    pub scope: Option<Scope>,
}

impl BelongsTo {
    pub fn new(target: ModelId) -> Self {
        Self {
            target: Some(target),
            foreign_key: None,
            target_key: None,
            type_column: None,
            scope: None,
        }
    }

    /// A polymorphic reference named `reference`: the foreign key and
    /// discriminator columns follow the `<reference>_id` / `<reference>_type`
    /// convention.
    pub fn polymorphic(reference: &str) -> Self {
        Self {
            target: None,
            foreign_key: Some(format!("{reference}_id")),
            target_key: None,
            type_column: Some(format!("{reference}_type")),
            scope: None,
        }
    }

    pub fn foreign_key(mut self, column: impl Into<String>) -> Self {
        self.foreign_key = Some(column.into());
        self
    }

    pub fn target_key(mut self, column: impl Into<String>) -> Self {
        self.target_key = Some(column.into());
        self
    }

    pub fn type_column(mut self, column: impl Into<String>) -> Self {
        self.type_column = Some(column.into());
        self
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn is_polymorphic(&self) -> bool {
        self.type_column.is_some()
    }
}

impl From<BelongsTo> for RelationKind {
    fn from(value: BelongsTo) -> Self {
        Self::BelongsTo(value)
    }
}
