use super::RelationKind;
use crate::schema::{ModelId, Scope};

/// A many-to-many relationship traversed through an intermediate join table.
#[derive(Debug, Clone)]
pub struct ManyToMany {
    /// Associated model
    pub target: ModelId,

    /// The join table. Defaults to the two table names, sorted and joined
    /// with an underscore.
    pub join_table: Option<String>,

    /// The join table column referencing the owning model.
    pub join_foreign_key: Option<String>,

    /// The join table column referencing the target model.
    pub join_target_key: Option<String>,

    /// The column on the owning table the join table references. Defaults to
    /// the owner's primary key.
    pub source_key: Option<String>,

    /// The column on the target table the join table references. Defaults to
    /// the target's primary key.
    pub target_key: Option<String>,

    /// Default filter applied to every subquery built from this relation.
    pub scope: Option<Scope>,
}

impl ManyToMany {
    pub fn new(target: ModelId) -> Self {
        Self {
            target,
            join_table: None,
            join_foreign_key: None,
            join_target_key: None,
            source_key: None,
            target_key: None,
            scope: None,
        }
    }

    pub fn join_table(mut self, table: impl Into<String>) -> Self {
        self.join_table = Some(table.into());
        self
    }

    pub fn join_foreign_key(mut self, column: impl Into<String>) -> Self {
        self.join_foreign_key = Some(column.into());
        self
    }

    pub fn join_target_key(mut self, column: impl Into<String>) -> Self {
        self.join_target_key = Some(column.into());
        self
    }

    pub fn source_key(mut self, column: impl Into<String>) -> Self {
        self.source_key = Some(column.into());
        self
    }

    pub fn target_key(mut self, column: impl Into<String>) -> Self {
        self.target_key = Some(column.into());
        self
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }
}

impl From<ManyToMany> for RelationKind {
    fn from(value: ManyToMany) -> Self {
        Self::ManyToMany(value)
    }
}
