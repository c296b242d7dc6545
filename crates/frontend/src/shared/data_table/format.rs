//! Cell formatting: one `match` over the column kind.

use super::cell::{CellValue, TableRow};
use super::column::{CellContent, Column, ColumnKind};
use crate::shared::date_utils::{
    format_date, format_datetime, format_naive_date, format_naive_datetime,
    from_timestamp_millis,
};
use crate::shared::number_format::format_usd;

/// Content of the cell at `column` for `row`.
///
/// Missing values render empty, except under a custom renderer, which gets
/// to decide for itself.
pub fn format_cell<R: TableRow>(row: &R, column: &Column<R>) -> CellContent {
    let value = row.field(&column.field);

    if let ColumnKind::Custom(render) = &column.kind {
        return render(value.as_ref(), row);
    }

    let Some(value) = value else {
        return CellContent::Empty;
    };

    match &column.kind {
        ColumnKind::Custom(_) => CellContent::Empty,
        ColumnKind::Plain => CellContent::Text(value.display_text()),
        ColumnKind::Chip(color) => CellContent::Chip {
            label: value.display_text(),
            tone: color.resolve(Some(&value)),
        },
        ColumnKind::Currency => match value.as_f64() {
            Some(amount) => CellContent::Text(format_usd(amount)),
            None => CellContent::Text(value.display_text()),
        },
        ColumnKind::Date => CellContent::Text(format_temporal(&value, false)),
        ColumnKind::DateTime => CellContent::Text(format_temporal(&value, true)),
    }
}

/// Strings are parsed as ISO dates, integers as epoch milliseconds.
fn format_temporal(value: &CellValue, with_time: bool) -> String {
    match value {
        CellValue::Text(s) if with_time => format_datetime(s),
        CellValue::Text(s) => format_date(s),
        CellValue::Integer(millis) => match from_timestamp_millis(*millis) {
            Some(dt) if with_time => format_naive_datetime(&dt),
            Some(dt) => format_naive_date(&dt),
            None => value.display_text(),
        },
        other => other.display_text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::column::ChipTone;
    use serde_json::{json, Value};

    #[test]
    fn test_currency() {
        let row = json!({ "price": 1234.5, "cost": "12", "bad": "n/a" });
        let col = Column::<Value>::new("price", "Price").currency();
        assert_eq!(format_cell(&row, &col), CellContent::text("$1,234.50"));
        let col = Column::<Value>::new("cost", "Cost").currency();
        assert_eq!(format_cell(&row, &col), CellContent::text("$12.00"));
        let col = Column::<Value>::new("bad", "Bad").currency();
        assert_eq!(format_cell(&row, &col), CellContent::text("n/a"));
    }

    #[test]
    fn test_chip_resolves_tone_from_value() {
        let col = Column::<Value>::new("role", "Role").chip_by(|v| {
            match v.and_then(CellValue::search_text).as_deref() {
                Some("admin") => ChipTone::Error,
                _ => ChipTone::Default,
            }
        });
        assert_eq!(
            format_cell(&json!({ "role": "admin" }), &col),
            CellContent::chip("admin", ChipTone::Error)
        );
        assert_eq!(
            format_cell(&json!({ "role": "employee" }), &col),
            CellContent::chip("employee", ChipTone::Default)
        );
    }

    #[test]
    fn test_static_chip() {
        let col = Column::<Value>::new("department", "Department").chip(ChipTone::Info);
        assert_eq!(
            format_cell(&json!({ "department": "IT" }), &col),
            CellContent::chip("IT", ChipTone::Info)
        );
    }

    #[test]
    fn test_dates() {
        let row = json!({ "createdAt": "2024-03-15T14:02:26" });
        let col = Column::<Value>::new("createdAt", "Created").date();
        assert_eq!(format_cell(&row, &col), CellContent::text("3/15/2024"));
        let col = Column::<Value>::new("createdAt", "Created").datetime();
        assert_eq!(format_cell(&row, &col), CellContent::text("3/15/2024, 2:02:26 PM"));
    }

    #[test]
    fn test_plain_passes_value_through() {
        let row = json!({ "qty": 3, "name": "Widget", "tags": ["a", "b"] });
        assert_eq!(
            format_cell(&row, &Column::<Value>::new("qty", "Qty")),
            CellContent::text("3")
        );
        assert_eq!(
            format_cell(&row, &Column::<Value>::new("name", "Name")),
            CellContent::text("Widget")
        );
        assert_eq!(
            format_cell(&row, &Column::<Value>::new("tags", "Tags")),
            CellContent::text("a,b")
        );
    }

    #[test]
    fn test_missing_field_renders_empty() {
        let row = json!({ "name": "Widget" });
        for col in [
            Column::<Value>::new("nope", "Nope"),
            Column::<Value>::new("nope", "Nope").currency(),
            Column::<Value>::new("nope", "Nope").chip(ChipTone::Primary),
            Column::<Value>::new("nope", "Nope").date(),
        ] {
            assert_eq!(format_cell(&row, &col), CellContent::Empty);
        }
    }

    #[test]
    fn test_custom_render_overrides_type() {
        let col = Column::<Value>::new("role", "Role")
            .chip(ChipTone::Error)
            .render(|v, row| {
                let label = v.map(CellValue::display_text).unwrap_or_default();
                CellContent::text(format!("{} <{}>", label, row["email"].as_str().unwrap_or("")))
            });
        let row = json!({ "role": "admin", "email": "a@b.c" });
        assert_eq!(format_cell(&row, &col), CellContent::text("admin <a@b.c>"));
    }

    #[test]
    fn test_custom_render_sees_missing_values() {
        let col = Column::<Value>::new("lastLogin", "Last Login").render(|v, _| match v {
            Some(v) => CellContent::text(v.display_text()),
            None => CellContent::text("Never"),
        });
        assert_eq!(format_cell(&json!({}), &col), CellContent::text("Never"));
    }
}
