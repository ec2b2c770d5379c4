//! Columnar container for list-shaped JSON responses.

use serde_json::{Map, Value};

/// In-memory columnar table built from JSON records.
///
/// Columns are the union of record keys in first-seen order; cells missing
/// from a record hold JSON null.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl DataTable {
    /// Build a table from a slice of JSON records.
    #[must_use]
    pub fn from_records(records: &[Map<String, Value>]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in records {
            for key in record.keys() {
                if !columns.iter().any(|column| column == key) {
                    columns.push(key.clone());
                }
            }
        }

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| record.get(column).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    /// Column names, in table order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` when the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows, each in column order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Cell value by row index and column name.
    #[must_use]
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(index)
    }

    /// All values of one column, in row order.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let index = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().filter_map(|row| row.get(index)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(raw: &str) -> Vec<Map<String, Value>> {
        serde_json::from_str(raw).expect("valid records")
    }

    #[test]
    fn table_from_records() {
        let table = DataTable::from_records(&records(
            r#"[{"id":1,"name":"Alice"},{"id":2,"name":"Bob"}]"#,
        ));

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.columns(), ["id", "name"]);
        assert_eq!(table.get(0, "name"), Some(&Value::from("Alice")));
        assert_eq!(table.get(1, "id"), Some(&Value::from(2)));
    }

    #[test]
    fn table_union_of_keys() {
        let table = DataTable::from_records(&records(r#"[{"id":1},{"id":2,"extra":true}]"#));

        assert_eq!(table.column_count(), 2);
        assert_eq!(table.get(0, "extra"), Some(&Value::Null));
        assert_eq!(table.get(1, "extra"), Some(&Value::from(true)));
    }

    #[test]
    fn table_column_access() {
        let table = DataTable::from_records(&records(r#"[{"id":1},{"id":2}]"#));

        let ids = table.column("id").expect("column exists");
        assert_eq!(ids, [&Value::from(1), &Value::from(2)]);
        assert!(table.column("missing").is_none());
    }

    #[test]
    fn table_empty_records() {
        let table = DataTable::from_records(&[]);
        assert!(table.is_empty());
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn table_out_of_range() {
        let table = DataTable::from_records(&records(r#"[{"id":1}]"#));
        assert!(table.get(5, "id").is_none());
        assert!(table.get(0, "missing").is_none());
    }
}
