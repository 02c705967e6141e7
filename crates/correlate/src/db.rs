use crate::engine::{self, Predicate, Refine};

use correlate_core::{
    driver::Row,
    schema::{ModelId, Schema},
    stmt, Connection, Result,
};
use correlate_sql::Serializer;
use log::debug;

/// A schema paired with a live connection.
///
/// Owns no global state: any model participates by being registered with the
/// schema handed in here. The connection is used for the polymorphic
/// discriminator probe during compilation and for whatever statements the
/// caller chooses to run.
pub struct Db {
    schema: Schema,
    connection: Box<dyn Connection>,
    serializer: Serializer,
}

impl Db {
    pub fn new(schema: Schema, connection: Box<dyn Connection>) -> Db {
        Db {
            schema,
            connection,
            serializer: Serializer::sqlite(),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Restrict `query` to rows for which the named relationship has at
    /// least one matching related row.
    pub fn filter_by_existence(
        &mut self,
        model: impl Into<ModelId>,
        query: stmt::Select,
        relation: &str,
        predicate: Option<Predicate>,
        refine: Option<&Refine>,
    ) -> Result<stmt::Select> {
        self.filter(model.into(), query, relation, false, predicate, refine)
    }

    /// Restrict `query` to rows for which the named relationship has no
    /// matching related row.
    pub fn filter_by_nonexistence(
        &mut self,
        model: impl Into<ModelId>,
        query: stmt::Select,
        relation: &str,
        predicate: Option<Predicate>,
        refine: Option<&Refine>,
    ) -> Result<stmt::Select> {
        self.filter(model.into(), query, relation, true, predicate, refine)
    }

    fn filter(
        &mut self,
        model: ModelId,
        query: stmt::Select,
        relation: &str,
        negated: bool,
        predicate: Option<Predicate>,
        refine: Option<&Refine>,
    ) -> Result<stmt::Select> {
        let mut compiler = engine::Compiler {
            schema: &self.schema,
            connection: &mut *self.connection,
            serializer: &self.serializer,
        };

        compiler.compile(model, query, relation, negated, predicate.as_ref(), refine)
    }

    /// Render and run a query, materializing all result rows.
    pub fn query(&mut self, stmt: &stmt::Select) -> Result<Vec<Row>> {
        let mut params = vec![];
        let sql = self.serializer.serialize(stmt, &mut params);
        debug!("query; sql={sql}");
        self.connection.query(&sql, &params)
    }

    /// Run a raw query, materializing all result rows.
    pub fn query_sql(&mut self, sql: &str, params: &[stmt::Value]) -> Result<Vec<Row>> {
        self.connection.query(sql, params)
    }

    /// Run a raw statement. Fixtures and migrations go through here.
    pub fn execute_sql(&mut self, sql: &str, params: &[stmt::Value]) -> Result<usize> {
        self.connection.execute(sql, params)
    }
}
