mod belongs_to;
pub use belongs_to::BelongsTo;

mod has_many;
pub use has_many::HasMany;

mod has_one;
pub use has_one::HasOne;

mod many_to_many;
pub use many_to_many::ManyToMany;

mod through;
pub use through::Through;

/// A named relationship declared on a model.
#[derive(Debug, Clone)]
pub struct Relation {
    /// The relationship name, unique within the owning model
    pub name: String,

    /// Direct reference, reverse reference, join table, or chain
    pub kind: RelationKind,
}

/// The closed set of relationship shapes.
///
/// Every relationship resolves to exactly one of these; the compiler matches
/// exhaustively so an unhandled kind is rejected at the match site rather
/// than falling through.
#[derive(Debug, Clone)]
pub enum RelationKind {
    BelongsTo(BelongsTo),
    HasMany(HasMany),
    HasOne(HasOne),
    ManyToMany(ManyToMany),
    Through(Through),
}

impl RelationKind {
    /// The conventional name of the kind, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::BelongsTo(..) => "belongs_to",
            Self::HasMany(..) => "has_many",
            Self::HasOne(..) => "has_one",
            Self::ManyToMany(..) => "many_to_many",
            Self::Through(..) => "through",
        }
    }
}
