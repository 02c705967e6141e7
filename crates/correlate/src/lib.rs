//! Relationship existence filters for a SQL query builder.
//!
//! Given a root model, a named relationship, and an optional predicate, the
//! compiler restricts the root's rows with a correlated `EXISTS` (or
//! `NOT EXISTS`) subquery derived from the relationship metadata. Five
//! relationship shapes are covered: direct references (belongs-to), reverse
//! references (has-many), join tables (many-to-many), polymorphic references
//! on either side, and chained (`through`) relationships of arbitrary depth.

mod db;
pub use db::Db;

mod engine;
pub use engine::{Predicate, Refine};

pub use correlate_core::{driver, schema, stmt, Connection, Error, Result};
