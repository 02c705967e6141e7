use super::{Model, ModelId, Name, Relation, RelationKind, Schema};
use crate::{err, Error, Result};
use indexmap::IndexMap;

/// Assembles a [`Schema`].
///
/// Models are registered first so relationships can reference each other's
/// ids; `build` fills in every convention-derived default (foreign keys,
/// join table names) so the compiler only ever reads concrete metadata.
#[derive(Default)]
pub struct Builder {
    models: IndexMap<ModelId, Model>,
    errors: Vec<Error>,
}

impl Builder {
    /// Registers a model. The table name defaults to the pluralized
    /// snake-case model name, the primary key to `id`.
    pub fn model(&mut self, name: &str) -> ModelId {
        let id = ModelId(self.models.len());
        let name = Name::new(name);
        let table_name = name.table_case();

        self.models.insert(
            id,
            Model {
                id,
                name,
                table_name,
                primary_key: "id".to_string(),
                type_aliases: vec![],
                relations: IndexMap::new(),
            },
        );

        id
    }

    pub fn table(&mut self, model: ModelId, table: impl Into<String>) -> &mut Self {
        self.model_mut(model).table_name = table.into();
        self
    }

    pub fn primary_key(&mut self, model: ModelId, column: impl Into<String>) -> &mut Self {
        self.model_mut(model).primary_key = column.into();
        self
    }

    /// Declares an additional historical spelling of the model's type tag.
    pub fn type_alias(&mut self, model: ModelId, alias: impl Into<String>) -> &mut Self {
        self.model_mut(model).type_aliases.push(alias.into());
        self
    }

    /// Declares a relationship on `model`.
    pub fn relation(
        &mut self,
        model: ModelId,
        name: impl Into<String>,
        kind: impl Into<RelationKind>,
    ) -> &mut Self {
        let name = name.into();
        let relation = Relation {
            name: name.clone(),
            kind: kind.into(),
        };

        let owner = self.model_mut(model);
        if owner.relations.insert(name.clone(), relation).is_some() {
            let owner = owner.name.upper_camel_case();
            self.errors
                .push(err!("relationship `{owner}::{name}` declared twice"));
        }

        self
    }

    pub fn build(mut self) -> Result<Schema> {
        if let Some(error) = self.errors.into_iter().next() {
            return Err(error);
        }

        // Snapshot per-model naming before mutating relations; defaults
        // reference both sides of a relationship.
        let info: Vec<ModelInfo> = self
            .models
            .values()
            .map(|model| ModelInfo {
                snake_name: model.name.snake_case(),
                table_name: model.table_name.clone(),
                primary_key: model.primary_key.clone(),
            })
            .collect();

        for model in self.models.values_mut() {
            let owner = &info[model.id.0];

            for relation in model.relations.values_mut() {
                match &mut relation.kind {
                    RelationKind::BelongsTo(belongs_to) => {
                        let Some(target) = belongs_to.target else {
                            if !belongs_to.is_polymorphic() {
                                return Err(err!(
                                    "belongs_to relationship `{}` must name a target or be polymorphic",
                                    relation.name
                                ));
                            }
                            continue;
                        };

                        let target = &info[target.0];
                        belongs_to
                            .foreign_key
                            .get_or_insert_with(|| format!("{}_id", target.snake_name));
                        belongs_to
                            .target_key
                            .get_or_insert_with(|| target.primary_key.clone());
                    }
                    RelationKind::HasMany(has_many) => {
                        has_many
                            .foreign_key
                            .get_or_insert_with(|| format!("{}_id", owner.snake_name));
                        has_many
                            .source_key
                            .get_or_insert_with(|| owner.primary_key.clone());
                    }
                    RelationKind::HasOne(has_one) => {
                        has_one
                            .foreign_key
                            .get_or_insert_with(|| format!("{}_id", owner.snake_name));
                    }
                    RelationKind::ManyToMany(many_to_many) => {
                        let target = &info[many_to_many.target.0];

                        many_to_many.join_table.get_or_insert_with(|| {
                            let mut tables = [owner.table_name.as_str(), target.table_name.as_str()];
                            tables.sort();
                            tables.join("_")
                        });
                        many_to_many
                            .join_foreign_key
                            .get_or_insert_with(|| foreign_key_for(&owner.table_name));
                        many_to_many
                            .join_target_key
                            .get_or_insert_with(|| foreign_key_for(&target.table_name));
                        many_to_many
                            .source_key
                            .get_or_insert_with(|| owner.primary_key.clone());
                        many_to_many
                            .target_key
                            .get_or_insert_with(|| target.primary_key.clone());
                    }
                    // Terminal hops are resolved by name on every compile
                    // call; there is nothing to default here.
                    RelationKind::Through(..) => {}
                }
            }
        }

        Ok(Schema {
            models: self.models,
        })
    }

    fn model_mut(&mut self, id: ModelId) -> &mut Model {
        self.models.get_mut(&id).expect("invalid model ID")
    }
}

struct ModelInfo {
    snake_name: String,
    table_name: String,
    primary_key: String,
}

/// `<singular table name>_id`, the conventional join table column.
fn foreign_key_for(table: &str) -> String {
    format!("{}_id", pluralizer::pluralize(table, 1, false))
}
