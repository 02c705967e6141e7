//! Error surfaces: every failure aborts the compile before the caller's
//! query is touched.

use tests::*;
use tests::assert_eq;

fn setup() -> (Db, ModelId, ModelId) {
    let mut builder = Schema::builder();
    let supplier = builder.model("Supplier");
    let account = builder.model("Account");
    let project = builder.model("Project");
    let task = builder.model("Task");

    builder.relation(supplier, "account", HasOne::new(account));
    builder.relation(project, "tasks", HasMany::new(task));
    builder.relation(project, "widgets", Through::new("tasks"));
    builder.relation(project, "invoices", Through::new("billing"));

    (db(builder.build().unwrap()), supplier, project)
}

#[test]
fn unknown_relationship_names_the_model_and_the_attempt() {
    let (mut db, supplier, _project) = setup();

    let err = db
        .filter_by_existence(supplier, select_ids("suppliers"), "acount", None, None)
        .unwrap_err();

    assert!(err.is_relationship_not_found());
    assert_eq!(
        err.to_string(),
        "relationship `acount` not found on model `Supplier`"
    );
}

#[test]
fn has_one_is_rejected_as_unsupported() {
    let (mut db, supplier, _project) = setup();

    let err = db
        .filter_by_existence(supplier, select_ids("suppliers"), "account", None, None)
        .unwrap_err();

    assert!(err.is_unsupported_relationship());
    assert_eq!(
        err.to_string(),
        "relationship `Supplier::account` has unsupported kind `has_one`"
    );
}

#[test]
fn chain_without_a_resolvable_terminal_hop_is_malformed() {
    let (mut db, _supplier, project) = setup();

    let err = db
        .filter_by_existence(project, select_ids("projects"), "widgets", None, None)
        .unwrap_err();

    assert!(err.is_malformed_chain());
    assert_eq!(
        err.to_string(),
        "chained relationship `Project::widgets` cannot resolve its terminal hop `widgets`"
    );
}

#[test]
fn chain_with_an_unknown_intermediate_fails_the_lookup() {
    let (mut db, _supplier, project) = setup();

    let err = db
        .filter_by_existence(project, select_ids("projects"), "invoices", None, None)
        .unwrap_err();

    assert!(err.is_relationship_not_found());
}
