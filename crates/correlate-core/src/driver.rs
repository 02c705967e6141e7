use crate::{stmt, Result};

/// A row returned by a driver, one [`stmt::Value`] per selected column.
pub type Row = Vec<stmt::Value>;

/// A synchronous connection to a database.
///
/// The compiler itself never opens connections; it is handed one and uses it
/// for exactly one thing: enumerating the discriminator values of a
/// polymorphic reference. Fixtures and callers additionally use it to run the
/// statements the compiler produces.
pub trait Connection {
    /// Executes a statement that returns no rows, returning the number of
    /// rows affected.
    fn execute(&mut self, sql: &str, params: &[stmt::Value]) -> Result<usize>;

    /// Executes a query and materializes all result rows.
    fn query(&mut self, sql: &str, params: &[stmt::Value]) -> Result<Vec<Row>>;
}
