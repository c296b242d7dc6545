//! Cell values and the row abstraction the table reads from.

use serde_json::Value;

/// A single field value pulled out of a row.
///
/// Missing fields and JSON `null` are represented by `None` at the call
/// site, never by a variant here.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    List(Vec<CellValue>),
    /// Nested record. Rendered as compact JSON, never searched.
    Object(Value),
}

impl CellValue {
    /// Converts a JSON value; `null` yields `None`.
    pub fn from_json(value: &Value) -> Option<CellValue> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(CellValue::Bool(*b)),
            Value::Number(n) => Some(match n.as_i64() {
                Some(i) => CellValue::Integer(i),
                None => CellValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            }),
            Value::String(s) => Some(CellValue::Text(s.clone())),
            Value::Array(items) => Some(CellValue::List(
                items.iter().filter_map(CellValue::from_json).collect(),
            )),
            Value::Object(_) => Some(CellValue::Object(value.clone())),
        }
    }

    /// String form used for search matching.
    ///
    /// Objects have none, so they never match a non-empty term.
    pub fn search_text(&self) -> Option<String> {
        match self {
            // nested records stay unsearchable on purpose
            CellValue::Object(_) => None,
            other => Some(other.display_text()),
        }
    }

    /// Text shown for an untyped cell.
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Integer(i) => i.to_string(),
            CellValue::Float(f) => format_float(*f),
            CellValue::Bool(b) => b.to_string(),
            CellValue::List(items) => items
                .iter()
                .map(CellValue::display_text)
                .collect::<Vec<_>>()
                .join(","),
            CellValue::Object(v) => v.to_string(),
        }
    }

    /// Numeric view of the value; numeric strings are parsed.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Integer(i) => Some(*i as f64),
            CellValue::Float(f) => Some(*f),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }
}

/// Shortest decimal form: `3.0` -> `"3"`, `2.5` -> `"2.5"`.
fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<&[String]> for CellValue {
    fn from(value: &[String]) -> Self {
        CellValue::List(value.iter().cloned().map(CellValue::Text).collect())
    }
}

/// Stable key of a rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    Id(String),
    /// Position in the filtered set; only valid for the current render.
    Index(usize),
}

/// Anything the table can render as one row.
pub trait TableRow {
    /// Value of `field`, or `None` if the field is missing or null.
    fn field(&self, name: &str) -> Option<CellValue>;

    /// Identity of the row, read from its `id` field by default.
    fn row_id(&self) -> Option<String> {
        self.field("id")
            .and_then(|v| v.search_text())
            .filter(|id| !id.is_empty())
    }
}

impl TableRow for serde_json::Map<String, Value> {
    fn field(&self, name: &str) -> Option<CellValue> {
        self.get(name).and_then(CellValue::from_json)
    }
}

impl TableRow for Value {
    fn field(&self, name: &str) -> Option<CellValue> {
        self.as_object().and_then(|map| map.field(name))
    }

    fn row_id(&self) -> Option<String> {
        // Backend documents use `_id`.
        ["id", "_id"].iter().find_map(|key| {
            self.field(key)
                .and_then(|v| v.search_text())
                .filter(|id| !id.is_empty())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json() {
        assert_eq!(CellValue::from_json(&json!(null)), None);
        assert_eq!(CellValue::from_json(&json!(7)), Some(CellValue::Integer(7)));
        assert_eq!(
            CellValue::from_json(&json!(2.5)),
            Some(CellValue::Float(2.5))
        );
        assert_eq!(
            CellValue::from_json(&json!(["a", null, 1])),
            Some(CellValue::List(vec![
                CellValue::Text("a".into()),
                CellValue::Integer(1)
            ]))
        );
    }

    #[test]
    fn test_search_text() {
        assert_eq!(CellValue::Float(3.0).search_text().as_deref(), Some("3"));
        assert_eq!(CellValue::Float(1234.5).search_text().as_deref(), Some("1234.5"));
        assert_eq!(CellValue::Bool(false).search_text().as_deref(), Some("false"));
        assert_eq!(
            CellValue::from(&["IT".to_string(), "HR".to_string()][..])
                .search_text()
                .as_deref(),
            Some("IT,HR")
        );
        assert_eq!(CellValue::Object(json!({ "name": "x" })).search_text(), None);
    }

    #[test]
    fn test_json_row_lookup() {
        let row = json!({ "_id": "abc", "name": "Widget", "note": null });
        assert_eq!(row.field("name"), Some(CellValue::Text("Widget".into())));
        assert_eq!(row.field("note"), None);
        assert_eq!(row.field("missing"), None);
        assert_eq!(row.row_id().as_deref(), Some("abc"));
        assert_eq!(json!("not an object").field("name"), None);
    }

    #[test]
    fn test_numeric_id() {
        let row = json!({ "id": 1, "name": "Widget" });
        assert_eq!(row.row_id().as_deref(), Some("1"));
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(CellValue::Text(" 12.5 ".into()).as_f64(), Some(12.5));
        assert_eq!(CellValue::Text("abc".into()).as_f64(), None);
        assert_eq!(CellValue::Bool(true).as_f64(), None);
    }
}
