use std::fmt::Display;

use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// A single cell as returned by the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DataValue {
    Null,
    Int(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl DataValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DataValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DataValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for DataValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataValue::Null => f.write_str("NULL"),
            DataValue::Int(i) => write!(f, "{}", i),
            DataValue::Real(r) => write!(f, "{}", r),
            DataValue::Text(s) => f.write_str(s),
            DataValue::Blob(b) => write!(f, "<{} bytes>", b.len()),
        }
    }
}

/// Materialized query output. Column and row order are whatever the engine produced.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<DataValue>>,
}

impl ResultSet {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Looks up a cell by row position and column name.
    pub fn value(&self, row: usize, column: &str) -> Option<&DataValue> {
        let idx = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(idx))
    }

    pub fn column_values<'a>(&'a self, column: &str) -> Vec<&'a DataValue> {
        match self.column_index(column) {
            Some(idx) => self.rows.iter().filter_map(|r| r.get(idx)).collect(),
            None => Vec::new(),
        }
    }
}

impl Display for ResultSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut table = Table::new();
        table.set_titles(Row::new(self.columns.iter().map(|c| Cell::new(c)).collect()));

        for row in &self.rows {
            table.add_row(Row::new(
                row.iter().map(|v| Cell::new(&v.to_string())).collect(),
            ));
        }

        write!(f, "\n{}\n", table)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub declared_type: String,
    pub not_null: bool,
    pub primary_key: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<ColumnInfo>,
}

impl Display for TableSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut table = Table::new();
        table.set_titles(Row::new(vec![Cell::new("name"), Cell::new("type")]));

        for col in &self.columns {
            table.add_row(Row::new(vec![
                Cell::new(&col.name),
                Cell::new(&col.declared_type),
            ]));
        }

        write!(f, "{}\n{}", self.name, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_lookup_by_column_name() {
        let rs = ResultSet {
            columns: vec!["city".into(), "total".into()],
            rows: vec![
                vec![DataValue::Text("Goa".into()), DataValue::Int(1)],
                vec![DataValue::Text("Pune".into()), DataValue::Int(2)],
            ],
        };

        assert_eq!(rs.row_count(), 2);
        assert_eq!(rs.value(1, "total"), Some(&DataValue::Int(2)));
        assert_eq!(rs.value(0, "missing"), None);
        assert_eq!(rs.column_values("city").len(), 2);
    }

    #[test]
    fn test_result_set_renders_headers_and_cells() {
        let rs = ResultSet {
            columns: vec!["name".into(), "email".into()],
            rows: vec![vec![DataValue::Text("Amit".into()), DataValue::Null]],
        };
        let rendered = rs.to_string();
        assert!(rendered.contains("name"));
        assert!(rendered.contains("Amit"));
        assert!(rendered.contains("NULL"));
    }
}
