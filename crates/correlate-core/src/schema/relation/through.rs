use super::RelationKind;
use crate::schema::Scope;

/// An indirect relationship, reached by composing an intermediate
/// relationship with a terminal one declared on the intermediate's target.
#[derive(Debug, Clone)]
pub struct Through {
    /// The intermediate relationship, declared on the owning model. May
    /// itself be a chain; chains nest to arbitrary depth.
    pub through: String,

    /// The terminal relationship, declared on the intermediate's target
    /// model. Defaults to the chain's own relation name.
    pub source: Option<String>,

    /// Default filter applied to the terminal hop's subqueries.
    pub scope: Option<Scope>,
}

impl Through {
    pub fn new(through: impl Into<String>) -> Self {
        Self {
            through: through.into(),
            source: None,
            scope: None,
        }
    }

    pub fn source(mut self, relation: impl Into<String>) -> Self {
        self.source = Some(relation.into());
        self
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }
}

impl From<Through> for RelationKind {
    fn from(value: Through) -> Self {
        Self::Through(value)
    }
}
