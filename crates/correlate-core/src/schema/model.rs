use super::{Name, Relation};
use crate::stmt;
use indexmap::IndexMap;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model within the schema
    pub id: ModelId,

    /// Name of the model
    pub name: Name,

    /// The table backing the model
    pub table_name: String,

    /// The primary key column
    pub primary_key: String,

    /// Additional spellings under which this model's type tag may be stored
    /// in a discriminator column.
    pub type_aliases: Vec<String>,

    /// Relationships declared on the model, by name
    pub relations: IndexMap<String, Relation>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelId(pub usize);

impl Model {
    pub fn relation(&self, name: &str) -> Option<&Relation> {
        self.relations.get(name)
    }

    /// Every spelling this model's type tag is accepted under: the type name,
    /// the table name, and any declared historical alias.
    pub fn type_tags(&self) -> Vec<String> {
        let mut tags = vec![self.name.upper_camel_case(), self.table_name.clone()];
        for alias in &self.type_aliases {
            if !tags.contains(alias) {
                tags.push(alias.clone());
            }
        }
        tags
    }

    /// A qualified reference to one of this model's columns.
    pub fn column(&self, column: impl Into<String>) -> stmt::Expr {
        stmt::Expr::column(&self.table_name, column)
    }

    /// A qualified reference to this model's primary key column.
    pub fn primary_key_column(&self) -> stmt::Expr {
        self.column(&self.primary_key)
    }
}

impl From<&Model> for ModelId {
    fn from(value: &Model) -> Self {
        value.id
    }
}

impl From<&Model> for stmt::Source {
    fn from(value: &Model) -> Self {
        stmt::Source::table(&value.table_name)
    }
}

impl From<&Self> for ModelId {
    fn from(src: &Self) -> Self {
        *src
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
