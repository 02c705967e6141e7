use super::Error;

/// Error when a relationship name is not declared on the model.
#[derive(Debug)]
pub(super) struct RelationshipNotFoundError {
    pub(super) model: Box<str>,
    pub(super) relation: Box<str>,
}

impl std::error::Error for RelationshipNotFoundError {}

impl core::fmt::Display for RelationshipNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "relationship `{}` not found on model `{}`",
            self.relation, self.model
        )
    }
}

impl Error {
    /// Creates an error for a relationship name that the model does not
    /// declare.
    pub fn relationship_not_found(model: impl Into<Box<str>>, relation: impl Into<Box<str>>) -> Error {
        Error::from(super::ErrorKind::RelationshipNotFound(
            RelationshipNotFoundError {
                model: model.into(),
                relation: relation.into(),
            },
        ))
    }

    /// Returns `true` if this error is a relationship lookup failure.
    pub fn is_relationship_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RelationshipNotFound(_))
    }
}
