use super::Error;

/// Error when a relationship resolves to a kind the compiler does not build
/// subqueries for.
#[derive(Debug)]
pub(super) struct UnsupportedRelationshipError {
    pub(super) model: Box<str>,
    pub(super) relation: Box<str>,
    pub(super) kind: Box<str>,
}

impl std::error::Error for UnsupportedRelationshipError {}

impl core::fmt::Display for UnsupportedRelationshipError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "relationship `{}::{}` has unsupported kind `{}`",
            self.model, self.relation, self.kind
        )
    }
}

impl Error {
    /// Creates an error for a relationship kind with no subquery resolver.
    pub fn unsupported_relationship(
        model: impl Into<Box<str>>,
        relation: impl Into<Box<str>>,
        kind: impl Into<Box<str>>,
    ) -> Error {
        Error::from(super::ErrorKind::UnsupportedRelationship(
            UnsupportedRelationshipError {
                model: model.into(),
                relation: relation.into(),
                kind: kind.into(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported relationship kind.
    pub fn is_unsupported_relationship(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedRelationship(_))
    }
}
