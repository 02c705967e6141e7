//! Direct references: the child table holds the foreign key.

use tests::*;
use tests::assert_eq;

fn setup() -> (Db, ModelId) {
    let mut builder = Schema::builder();
    let parent = builder.model("Parent");
    let child = builder.model("Child");
    builder.relation(child, "parent", BelongsTo::new(parent));

    let mut db = db(builder.build().unwrap());
    batch(
        &mut db,
        &[
            "CREATE TABLE parents (id INTEGER PRIMARY KEY, name TEXT)",
            "CREATE TABLE children (id INTEGER PRIMARY KEY, parent_id INTEGER, name TEXT)",
        ],
    );

    (db, child)
}

#[test]
fn splits_children_by_whether_the_parent_row_exists() {
    let (mut db, child) = setup();
    batch(
        &mut db,
        &[
            "INSERT INTO parents (id) VALUES (1)",
            "INSERT INTO children (id, parent_id) VALUES (10, 1)",
            "INSERT INTO children (id, parent_id) VALUES (11, 999)",
            "INSERT INTO children (id, parent_id) VALUES (12, NULL)",
        ],
    );

    let result = db
        .filter_by_existence(child, select_ids("children"), "parent", None, None)
        .unwrap();
    assert_eq!(vec![10], ids(&mut db, &result));

    let result = db
        .filter_by_nonexistence(child, select_ids("children"), "parent", None, None)
        .unwrap();
    assert_eq!(vec![11, 12], ids(&mut db, &result));
}

#[test]
fn existence_and_nonexistence_partition_the_row_set() {
    let (mut db, child) = setup();
    batch(
        &mut db,
        &[
            "INSERT INTO parents (id) VALUES (1)",
            "INSERT INTO parents (id) VALUES (2)",
            "INSERT INTO children (id, parent_id) VALUES (10, 1)",
            "INSERT INTO children (id, parent_id) VALUES (11, 2)",
            "INSERT INTO children (id, parent_id) VALUES (12, 3)",
            "INSERT INTO children (id, parent_id) VALUES (13, NULL)",
        ],
    );

    let all = ids(&mut db, &select_ids("children"));

    let existing = db
        .filter_by_existence(child, select_ids("children"), "parent", None, None)
        .unwrap();
    let missing = db
        .filter_by_nonexistence(child, select_ids("children"), "parent", None, None)
        .unwrap();

    let mut combined = ids(&mut db, &existing);
    combined.extend(ids(&mut db, &missing));
    combined.sort();

    assert_eq!(all, combined);
}

#[test]
fn predicate_restricts_the_referenced_row() {
    let (mut db, child) = setup();
    batch(
        &mut db,
        &[
            "INSERT INTO parents (id, name) VALUES (1, 'right')",
            "INSERT INTO parents (id, name) VALUES (2, 'wrong')",
            "INSERT INTO children (id, parent_id) VALUES (10, 1)",
            "INSERT INTO children (id, parent_id) VALUES (11, 2)",
        ],
    );

    let result = db
        .filter_by_existence(
            child,
            select_ids("children"),
            "parent",
            Some(Predicate::field("name", "right")),
            None,
        )
        .unwrap();
    assert_eq!(vec![10], ids(&mut db, &result));
}

#[test]
fn correlates_through_an_overridden_target_key() {
    let mut builder = Schema::builder();
    let parent = builder.model("Parent");
    let child = builder.model("Child");
    builder.relation(
        child,
        "parent",
        BelongsTo::new(parent)
            .foreign_key("parent_code")
            .target_key("code"),
    );

    let mut db = db(builder.build().unwrap());
    batch(
        &mut db,
        &[
            "CREATE TABLE parents (id INTEGER PRIMARY KEY, code TEXT)",
            "CREATE TABLE children (id INTEGER PRIMARY KEY, parent_code TEXT)",
            "INSERT INTO parents (id, code) VALUES (1, 'abc')",
            "INSERT INTO children (id, parent_code) VALUES (10, 'abc')",
            "INSERT INTO children (id, parent_code) VALUES (11, 'nope')",
        ],
    );

    let result = db
        .filter_by_existence(child, select_ids("children"), "parent", None, None)
        .unwrap();
    assert_eq!(vec![10], ids(&mut db, &result));
}
