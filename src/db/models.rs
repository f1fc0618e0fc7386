use serde::{Serialize, Serializer};
use std::fmt;

/// One column value of a fetched row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Null,
    Text(String),
    /// Bytes that are not valid UTF-8 (BLOB / BINARY columns).
    Binary(Vec<u8>),
}

impl Cell {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(s) => Cell::Text(s),
            Err(e) => Cell::Binary(e.into_bytes()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => f.write_str("NULL"),
            Cell::Text(s) => f.write_str(s),
            Cell::Binary(bytes) => {
                f.write_str("0x")?;
                bytes.iter().try_for_each(|b| write!(f, "{b:02x}"))
            }
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Null => serializer.serialize_none(),
            Cell::Text(s) => serializer.serialize_str(s),
            Cell::Binary(_) => serializer.collect_str(self),
        }
    }
}

/// A row of a query result, in column order.
pub type Record = Vec<Cell>;

/// Rows of a query result together with the column names from the result metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordSet {
    pub columns: Vec<String>,
    pub rows: Vec<Record>,
}

impl RecordSet {
    pub fn new(columns: Vec<String>, rows: Vec<Record>) -> Self {
        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_utf8_bytes_render_as_hex() {
        let cell = Cell::from_bytes(vec![0xff, 0x00, 0x1a]);
        assert_eq!(cell, Cell::Binary(vec![0xff, 0x00, 0x1a]));
        assert_eq!(cell.to_string(), "0xff001a");
    }

    #[test]
    fn record_set_serializes_nulls_as_json_null() {
        let set = RecordSet::new(
            vec!["id".into(), "name".into()],
            vec![vec!["1".into(), Cell::Null]],
        );
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"columns": ["id", "name"], "rows": [["1", null]]})
        );
    }
}
