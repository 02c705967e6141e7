/// The table a select statement draws rows from.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    pub table: String,
}

impl Source {
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }
}

impl From<&str> for Source {
    fn from(value: &str) -> Self {
        Self::table(value)
    }
}

impl From<String> for Source {
    fn from(value: String) -> Self {
        Self::table(value)
    }
}
