//! Many-to-many relationships traversed through a join table.

use tests::*;
use tests::assert_eq;

fn setup() -> (Db, ModelId, ModelId) {
    let mut builder = Schema::builder();
    let task = builder.model("Task");
    let invoice = builder.model("Invoice");
    builder.relation(invoice, "tasks", ManyToMany::new(task));
    builder.relation(task, "invoices", ManyToMany::new(invoice));

    let mut db = db(builder.build().unwrap());
    batch(
        &mut db,
        &[
            "CREATE TABLE tasks (id INTEGER PRIMARY KEY, name TEXT)",
            "CREATE TABLE invoices (id INTEGER PRIMARY KEY, name TEXT)",
            "CREATE TABLE invoices_tasks (invoice_id INTEGER, task_id INTEGER)",
        ],
    );

    (db, task, invoice)
}

#[test]
fn matches_rows_linked_through_the_join_table() {
    let (mut db, _task, invoice) = setup();
    batch(
        &mut db,
        &[
            "INSERT INTO tasks (id, name) VALUES (1, 'task')",
            "INSERT INTO invoices (id, name) VALUES (7, 'invoice')",
            "INSERT INTO invoices (id, name) VALUES (8, 'empty invoice')",
            "INSERT INTO invoices_tasks (invoice_id, task_id) VALUES (7, 1)",
        ],
    );

    let result = db
        .filter_by_existence(
            invoice,
            select_ids("invoices"),
            "tasks",
            Some(Predicate::field("name", "task")),
            None,
        )
        .unwrap();
    assert_eq!(vec![7], ids(&mut db, &result));

    let result = db
        .filter_by_nonexistence(invoice, select_ids("invoices"), "tasks", None, None)
        .unwrap();
    assert_eq!(vec![8], ids(&mut db, &result));
}

#[test]
fn the_link_works_from_both_sides() {
    let (mut db, task, _invoice) = setup();
    batch(
        &mut db,
        &[
            "INSERT INTO tasks (id) VALUES (1)",
            "INSERT INTO tasks (id) VALUES (2)",
            "INSERT INTO invoices (id) VALUES (7)",
            "INSERT INTO invoices_tasks (invoice_id, task_id) VALUES (7, 1)",
        ],
    );

    let result = db
        .filter_by_existence(task, select_ids("tasks"), "invoices", None, None)
        .unwrap();
    assert_eq!(vec![1], ids(&mut db, &result));

    let result = db
        .filter_by_nonexistence(task, select_ids("tasks"), "invoices", None, None)
        .unwrap();
    assert_eq!(vec![2], ids(&mut db, &result));
}

#[test]
fn explicit_join_table_naming_overrides_the_convention() {
    let mut builder = Schema::builder();
    let task = builder.model("Task");
    let invoice = builder.model("Invoice");
    builder.relation(
        invoice,
        "tasks",
        ManyToMany::new(task)
            .join_table("billing_links")
            .join_foreign_key("bill_id")
            .join_target_key("work_id"),
    );

    let mut db = db(builder.build().unwrap());
    batch(
        &mut db,
        &[
            "CREATE TABLE tasks (id INTEGER PRIMARY KEY)",
            "CREATE TABLE invoices (id INTEGER PRIMARY KEY)",
            "CREATE TABLE billing_links (bill_id INTEGER, work_id INTEGER)",
            "INSERT INTO tasks (id) VALUES (1)",
            "INSERT INTO invoices (id) VALUES (7)",
            "INSERT INTO invoices (id) VALUES (8)",
            "INSERT INTO billing_links (bill_id, work_id) VALUES (7, 1)",
        ],
    );

    let result = db
        .filter_by_existence(invoice, select_ids("invoices"), "tasks", None, None)
        .unwrap();
    assert_eq!(vec![7], ids(&mut db, &result));
}
