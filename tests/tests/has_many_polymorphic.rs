//! Reverse references where the parent is the target of a polymorphic
//! reference: the child's discriminator must carry one of the parent's type
//! tags. This is a filter on the child rows, never a fan-out.

use tests::*;
use tests::assert_eq;

fn setup() -> (Db, ModelId, ModelId) {
    let mut builder = Schema::builder();
    let first = builder.model("FirstEntity");
    let second = builder.model("SecondEntity");
    let child = builder.model("Child");
    for entity in [first, second] {
        builder.relation(
            entity,
            "children",
            HasMany::new(child)
                .foreign_key("entity_id")
                .as_type("entity_type"),
        );
    }

    let mut db = db(builder.build().unwrap());
    batch(
        &mut db,
        &[
            "CREATE TABLE first_entities (id INTEGER PRIMARY KEY)",
            "CREATE TABLE second_entities (id INTEGER PRIMARY KEY)",
            "CREATE TABLE children (id INTEGER PRIMARY KEY, entity_id INTEGER, entity_type TEXT, name TEXT)",
        ],
    );

    (db, first, second)
}

#[test]
fn children_must_carry_the_owners_type_tag() {
    let (mut db, first, second) = setup();
    batch(
        &mut db,
        &[
            "INSERT INTO first_entities (id) VALUES (1)",
            "INSERT INTO second_entities (id) VALUES (1)",
            // Same foreign key value, different discriminators.
            "INSERT INTO children (id, entity_id, entity_type) VALUES (10, 1, 'FirstEntity')",
        ],
    );

    let result = db
        .filter_by_existence(first, select_ids("first_entities"), "children", None, None)
        .unwrap();
    assert_eq!(vec![1], ids(&mut db, &result));

    let result = db
        .filter_by_existence(second, select_ids("second_entities"), "children", None, None)
        .unwrap();
    assert_eq!(Vec::<i64>::new(), ids(&mut db, &result));
}

#[test]
fn table_name_spelling_of_the_tag_is_accepted() {
    let (mut db, first, _second) = setup();
    batch(
        &mut db,
        &[
            "INSERT INTO first_entities (id) VALUES (1)",
            "INSERT INTO first_entities (id) VALUES (2)",
            "INSERT INTO children (id, entity_id, entity_type) VALUES (10, 1, 'first_entities')",
        ],
    );

    let result = db
        .filter_by_existence(first, select_ids("first_entities"), "children", None, None)
        .unwrap();
    assert_eq!(vec![1], ids(&mut db, &result));

    let result = db
        .filter_by_nonexistence(first, select_ids("first_entities"), "children", None, None)
        .unwrap();
    assert_eq!(vec![2], ids(&mut db, &result));
}

#[test]
fn predicate_composes_with_the_type_filter() {
    let (mut db, first, _second) = setup();
    batch(
        &mut db,
        &[
            "INSERT INTO first_entities (id) VALUES (1)",
            "INSERT INTO first_entities (id) VALUES (2)",
            "INSERT INTO children (id, entity_id, entity_type, name) VALUES (10, 1, 'FirstEntity', 'right')",
            "INSERT INTO children (id, entity_id, entity_type, name) VALUES (11, 2, 'FirstEntity', 'wrong')",
        ],
    );

    let result = db
        .filter_by_existence(
            first,
            select_ids("first_entities"),
            "children",
            Some(Predicate::field("name", "right")),
            None,
        )
        .unwrap();
    assert_eq!(vec![1], ids(&mut db, &result));
}
