//! Interactive rendering of responses and tables.
//!
//! Nothing here runs inside a verb call; rendering happens only when the
//! caller asks for it.

use std::fmt;

use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use restbook_core::Response;
use serde_json::Value;

use crate::table::DataTable;

/// Render a response as human-readable text: status line, headers, body.
///
/// The body is pretty-printed when it decodes as JSON and shown raw
/// otherwise.
#[must_use]
pub fn render(response: &Response) -> String {
    let mut out = format!("HTTP {}\n", response.status());

    let mut names: Vec<&String> = response.headers().keys().collect();
    names.sort();
    for name in names {
        if let Some(value) = response.header(name) {
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push('\n');
        }
    }
    out.push('\n');

    match response.json_value() {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(pretty) => out.push_str(&pretty),
            Err(_) => out.push_str(&value.to_string()),
        },
        Err(_) => out.push_str(&String::from_utf8_lossy(response.body())),
    }
    out.push('\n');

    out
}

impl fmt::Display for DataTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(
            self.columns()
                .iter()
                .map(|column| Cell::new(column).add_attribute(Attribute::Bold)),
        );

        for row in self.rows() {
            table.add_row(row.iter().map(cell_text));
        }

        write!(f, "{table}")
    }
}

/// Scalars render bare, null renders empty, nested values as compact JSON.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use bytes::Bytes;
    use serde_json::Map;

    use super::*;

    #[test]
    fn render_json_response() {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        let response = Response::new(200, headers, Bytes::from(r#"{"id":1}"#));

        let rendered = render(&response);
        assert!(rendered.starts_with("HTTP 200\n"));
        assert!(rendered.contains("content-type: application/json"));
        assert!(rendered.contains("\"id\": 1"));
    }

    #[test]
    fn render_non_json_response() {
        let response = Response::new(500, HashMap::new(), Bytes::from("boom"));

        let rendered = render(&response);
        assert!(rendered.starts_with("HTTP 500\n"));
        assert!(rendered.contains("boom"));
    }

    #[test]
    fn table_display_contains_headers_and_cells() {
        let records: Vec<Map<String, Value>> =
            serde_json::from_str(r#"[{"id":1,"name":"Alice"},{"id":2,"name":null}]"#)
                .expect("valid records");
        let table = DataTable::from_records(&records);

        let rendered = table.to_string();
        assert!(rendered.contains("id"));
        assert!(rendered.contains("name"));
        assert!(rendered.contains("Alice"));
        assert!(rendered.contains('2'));
    }
}
