mod builder;
pub use builder::Builder;

mod model;
pub use model::{Model, ModelId};

mod name;
pub use name::Name;

mod relation;
pub use relation::{BelongsTo, HasMany, HasOne, ManyToMany, Relation, RelationKind, Through};

mod scope;
pub use scope::Scope;

use crate::Result;
use indexmap::IndexMap;

/// The relationship metadata registry.
///
/// Holds every model the compiler may be asked about. Relationship
/// descriptors are read from here fresh on each compile call; nothing is
/// cached across calls.
#[derive(Debug, Default)]
pub struct Schema {
    pub models: IndexMap<ModelId, Model>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Get a model by ID
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        self.models.get(&id.into()).expect("invalid model ID")
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Resolve a relationship declared on `model` by name.
    pub fn relation(&self, model: impl Into<ModelId>, name: &str) -> Result<&Relation> {
        let model = self.model(model);
        model.relation(name).ok_or_else(|| {
            crate::Error::relationship_not_found(model.name.upper_camel_case(), name)
        })
    }

    /// Resolve a discriminator tag to a model.
    ///
    /// The tag may be stored as the model's type name, its table name, or any
    /// declared historical alias. Returns `None` when no model claims the
    /// tag.
    pub fn model_by_type_tag(&self, tag: &str) -> Option<&Model> {
        self.models()
            .find(|model| model.type_tags().iter().any(|t| t == tag))
    }
}
