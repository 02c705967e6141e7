mod value;
pub(crate) use value::Value;

use correlate_core::{stmt, Error, Result};
use log::trace;
use rusqlite::Connection as RusqliteConnection;
use std::path::{Path, PathBuf};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver)?;

        if url.scheme() != "sqlite" {
            return Err(correlate_core::err!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            ));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    pub fn connect(&self) -> Result<Connection> {
        match self {
            Self::File(path) => Connection::open(path),
            Self::InMemory => Ok(Connection::in_memory()),
        }
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Self {
        let connection = RusqliteConnection::open_in_memory().unwrap();

        Self { connection }
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver)?;
        Ok(Self { connection })
    }

    fn bind_params(params: &[stmt::Value]) -> Vec<Value> {
        params.iter().cloned().map(Value::from).collect()
    }
}

impl correlate_core::Connection for Connection {
    fn execute(&mut self, sql: &str, params: &[stmt::Value]) -> Result<usize> {
        trace!("execute; sql={sql}");

        let mut stmt = self.connection.prepare_cached(sql).map_err(Error::driver)?;

        stmt.execute(rusqlite::params_from_iter(Self::bind_params(params)))
            .map_err(Error::driver)
    }

    fn query(&mut self, sql: &str, params: &[stmt::Value]) -> Result<Vec<correlate_core::driver::Row>> {
        trace!("query; sql={sql}");

        let mut stmt = self.connection.prepare_cached(sql).map_err(Error::driver)?;
        let width = stmt.column_count();

        let rows = stmt
            .query_map(rusqlite::params_from_iter(Self::bind_params(params)), |row| {
                let mut values = Vec::with_capacity(width);
                for index in 0..width {
                    values.push(Value::from_sql(row, index)?.into_inner());
                }
                Ok(values)
            })
            .map_err(Error::driver)?;

        let mut ret = vec![];
        for row in rows {
            ret.push(row.map_err(Error::driver)?);
        }
        Ok(ret)
    }
}
