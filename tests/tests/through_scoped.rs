//! A chain whose declaration carries its own scope. The scope restricts the
//! terminal hop, and negated existence means "no related row satisfies the
//! scope and the predicate together" — the two sides partition the row set.

use tests::*;
use tests::assert_eq;

fn setup() -> (Db, ModelId) {
    let mut builder = Schema::builder();
    let post = builder.model("Post");
    let comment = builder.model("Comment");
    let commentator = builder.model("Commentator");

    builder.relation(post, "comments", HasMany::new(comment));
    builder.relation(commentator, "comments", HasMany::new(comment));
    builder.relation(comment, "post", BelongsTo::new(post));
    builder.relation(comment, "commentator", BelongsTo::new(commentator));
    builder.relation(
        commentator,
        "posts",
        Through::new("comments")
            .source("post")
            .scope(Scope::new(|mut subquery| {
                subquery.and(Expr::eq(Expr::column("posts", "archived"), 0_i64));
                subquery
            })),
    );

    let mut db = db(builder.build().unwrap());
    batch(
        &mut db,
        &[
            "CREATE TABLE posts (id INTEGER PRIMARY KEY, archived INTEGER NOT NULL DEFAULT 0)",
            "CREATE TABLE comments (id INTEGER PRIMARY KEY, post_id INTEGER, commentator_id INTEGER)",
            "CREATE TABLE commentators (id INTEGER PRIMARY KEY)",
        ],
    );

    (db, commentator)
}

#[test]
fn scoped_chain_partitions_under_negation() {
    let (mut db, commentator) = setup();
    batch(
        &mut db,
        &[
            "INSERT INTO posts (id, archived) VALUES (1, 0)",
            "INSERT INTO posts (id, archived) VALUES (2, 1)",
            "INSERT INTO commentators (id) VALUES (1)",
            "INSERT INTO commentators (id) VALUES (2)",
            "INSERT INTO commentators (id) VALUES (3)",
            "INSERT INTO comments (id, post_id, commentator_id) VALUES (10, 1, 1)",
            "INSERT INTO comments (id, post_id, commentator_id) VALUES (11, 2, 2)",
        ],
    );

    // Commentator 2 only reaches an archived post, which the scope filters
    // out on both sides of the partition.
    let result = db
        .filter_by_existence(commentator, select_ids("commentators"), "posts", None, None)
        .unwrap();
    assert_eq!(vec![1], ids(&mut db, &result));

    let result = db
        .filter_by_nonexistence(commentator, select_ids("commentators"), "posts", None, None)
        .unwrap();
    assert_eq!(vec![2, 3], ids(&mut db, &result));
}

#[test]
fn scope_composes_with_a_caller_predicate() {
    let (mut db, commentator) = setup();
    batch(
        &mut db,
        &[
            "INSERT INTO posts (id, archived) VALUES (1, 0)",
            "INSERT INTO posts (id, archived) VALUES (2, 0)",
            "INSERT INTO commentators (id) VALUES (1)",
            "INSERT INTO commentators (id) VALUES (2)",
            "INSERT INTO comments (id, post_id, commentator_id) VALUES (10, 1, 1)",
            "INSERT INTO comments (id, post_id, commentator_id) VALUES (11, 2, 2)",
        ],
    );

    let result = db
        .filter_by_existence(
            commentator,
            select_ids("commentators"),
            "posts",
            Some(Predicate::field("id", 1_i64)),
            None,
        )
        .unwrap();
    assert_eq!(vec![1], ids(&mut db, &result));
}
