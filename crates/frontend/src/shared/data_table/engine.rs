//! Filtering and pagination of table rows.
//!
//! Everything here is a pure function of the rows, the columns and the
//! [`ViewState`]; the rows are borrowed and never modified.

use super::cell::{RowKey, TableRow};
use super::column::Column;
use super::view_state::ViewState;

/// A visible row together with its render key.
#[derive(Debug)]
pub struct PageRow<'a, R> {
    pub key: RowKey,
    pub row: &'a R,
}

/// Result of [`evaluate`].
#[derive(Debug)]
pub struct PaginatedSlice<'a, R> {
    /// Rows matching the search term, in input order.
    pub filtered: Vec<&'a R>,
    /// Rows of the current page.
    pub rows: Vec<PageRow<'a, R>>,
    pub page: usize,
    pub rows_per_page: usize,
    pub paginated: bool,
}

impl<'a, R> PaginatedSlice<'a, R> {
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_pages(&self) -> usize {
        if self.paginated {
            total_pages(self.filtered.len(), self.rows_per_page)
        } else {
            1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Owned copy of the visible rows, for handing to the view layer.
    pub fn to_snapshot(&self) -> PageSnapshot<R>
    where
        R: Clone,
    {
        PageSnapshot {
            rows: self
                .rows
                .iter()
                .map(|r| (r.key.clone(), r.row.clone()))
                .collect(),
            filtered_count: self.filtered_count(),
            total_pages: self.total_pages(),
        }
    }
}

/// Owned visible page.
#[derive(Debug, Clone)]
pub struct PageSnapshot<R> {
    pub rows: Vec<(RowKey, R)>,
    pub filtered_count: usize,
    pub total_pages: usize,
}

impl<R> Default for PageSnapshot<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            filtered_count: 0,
            total_pages: 1,
        }
    }
}

/// True if any column value contains `term_lower` case-insensitively.
///
/// `term_lower` must already be lowercased.
pub fn matches_search<R: TableRow>(row: &R, columns: &[Column<R>], term_lower: &str) -> bool {
    columns.iter().any(|column| {
        row.field(&column.field)
            .and_then(|value| value.search_text())
            .is_some_and(|text| text.to_lowercase().contains(term_lower))
    })
}

/// Rows retained by `term`; an empty term keeps everything.
pub fn filter_rows<'a, R: TableRow>(
    rows: &'a [R],
    columns: &[Column<R>],
    term: &str,
) -> Vec<&'a R> {
    if term.is_empty() {
        return rows.iter().collect();
    }
    let term_lower = term.to_lowercase();
    rows.iter()
        .filter(|row| matches_search(*row, columns, &term_lower))
        .collect()
}

/// Filters, then slices out the current page.
///
/// With `paginate == false` the whole filtered set is returned. A page past
/// the end yields no rows.
pub fn evaluate<'a, R: TableRow>(
    rows: &'a [R],
    columns: &[Column<R>],
    state: &ViewState,
    paginate: bool,
) -> PaginatedSlice<'a, R> {
    let filtered = filter_rows(rows, columns, state.search_term());

    let (start, end) = if paginate {
        let start = state
            .page()
            .saturating_mul(state.rows_per_page())
            .min(filtered.len());
        let end = start
            .saturating_add(state.rows_per_page())
            .min(filtered.len());
        (start, end)
    } else {
        (0, filtered.len())
    };

    let page_rows = filtered[start..end]
        .iter()
        .enumerate()
        .map(|(offset, row)| PageRow {
            key: row
                .row_id()
                .map(RowKey::Id)
                .unwrap_or(RowKey::Index(start + offset)),
            row: *row,
        })
        .collect();

    PaginatedSlice {
        filtered,
        rows: page_rows,
        page: state.page(),
        rows_per_page: state.rows_per_page(),
        paginated: paginate,
    }
}

/// Page count for `count` rows; never less than one.
pub fn total_pages(count: usize, rows_per_page: usize) -> usize {
    if count == 0 || rows_per_page == 0 {
        1
    } else {
        count.div_ceil(rows_per_page)
    }
}

/// Caption like `"11–20 of 25"`.
pub fn displayed_rows_label(page: usize, rows_per_page: usize, count: usize) -> String {
    if count == 0 {
        return "0–0 of 0".to_string();
    }
    let from = page * rows_per_page + 1;
    let to = ((page + 1) * rows_per_page).min(count);
    format!("{}–{} of {}", from, to, count)
}

/// What the table body shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyState {
    Loading,
    Empty,
    Rows,
}

/// Loading wins over everything else.
pub fn body_state(loading: bool, visible_rows: usize) -> BodyState {
    if loading {
        BodyState::Loading
    } else if visible_rows == 0 {
        BodyState::Empty
    } else {
        BodyState::Rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::column::Column;
    use serde_json::{json, Value};

    fn columns() -> Vec<Column<Value>> {
        vec![
            Column::new("name", "Name"),
            Column::new("price", "Price").currency(),
        ]
    }

    fn numbered(count: usize) -> Vec<Value> {
        (0..count)
            .map(|i| json!({ "id": i, "name": format!("Item {}", i), "price": i }))
            .collect()
    }

    fn state(term: &str, page: usize, rows_per_page: usize) -> ViewState {
        let mut s = ViewState::new(rows_per_page);
        s.set_search_term(term);
        s.set_page(page);
        s
    }

    #[test]
    fn test_empty_term_keeps_all_rows_in_order() {
        let rows = numbered(7);
        let slice = evaluate(&rows, &columns(), &state("", 0, 10), true);
        let filtered: Vec<Value> = slice.filtered.iter().map(|r| (*r).clone()).collect();
        assert_eq!(filtered, rows);
    }

    #[test]
    fn test_search_scenario() {
        let rows = vec![
            json!({ "id": 1, "name": "Widget" }),
            json!({ "id": 2, "name": "Gadget" }),
        ];
        let cols = vec![Column::new("name", "Name")];
        let slice = evaluate(&rows, &cols, &state("wid", 0, 10), true);
        assert_eq!(slice.filtered.len(), 1);
        assert_eq!(slice.filtered[0]["id"], json!(1));
    }

    #[test]
    fn test_search_is_case_insensitive_and_partitions_rows() {
        let rows = vec![
            json!({ "name": "Blue WIDGET" }),
            json!({ "name": "gadget", "price": 12 }),
            json!({ "name": null, "price": null }),
            json!({ "other": "widget" }),
        ];
        let cols = columns();
        let slice = evaluate(&rows, &cols, &state("Widget", 0, 10), true);
        assert_eq!(slice.filtered.len(), 1);
        for row in &rows {
            let kept = slice.filtered.iter().any(|r| std::ptr::eq(*r, row));
            assert_eq!(kept, matches_search(row, &cols, "widget"));
        }
    }

    #[test]
    fn test_numbers_are_searched_as_text() {
        let rows = vec![json!({ "name": "a", "price": 1234.5 }), json!({ "name": "b", "price": 99 })];
        let slice = evaluate(&rows, &columns(), &state("34.5", 0, 10), true);
        assert_eq!(slice.filtered.len(), 1);
    }

    #[test]
    fn test_only_listed_columns_are_searched() {
        let rows = vec![json!({ "name": "a", "sku": "needle" })];
        let slice = evaluate(&rows, &columns(), &state("needle", 0, 10), true);
        assert!(slice.filtered.is_empty());
    }

    #[test]
    fn test_null_never_matches() {
        let rows = vec![json!({ "name": null })];
        let slice = evaluate(&rows, &columns(), &state("null", 0, 10), true);
        assert!(slice.filtered.is_empty());
    }

    #[test]
    fn test_pagination_boundaries() {
        let rows = numbered(25);
        let cols = columns();
        assert_eq!(evaluate(&rows, &cols, &state("", 0, 10), true).rows.len(), 10);
        assert_eq!(evaluate(&rows, &cols, &state("", 2, 10), true).rows.len(), 5);
        let past_end = evaluate(&rows, &cols, &state("", 3, 10), true);
        assert!(past_end.is_empty());
        assert_eq!(past_end.filtered_count(), 25);
        assert_eq!(past_end.total_pages(), 3);
    }

    #[test]
    fn test_pagination_disabled_returns_everything() {
        let rows = numbered(25);
        let slice = evaluate(&rows, &columns(), &state("", 2, 5), false);
        assert_eq!(slice.rows.len(), 25);
        assert_eq!(slice.total_pages(), 1);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let rows = numbered(30);
        let cols = columns();
        let s = state("1", 1, 5);
        let a = evaluate(&rows, &cols, &s, true);
        let b = evaluate(&rows, &cols, &s, true);
        let keys_a: Vec<_> = a.rows.iter().map(|r| r.key.clone()).collect();
        let keys_b: Vec<_> = b.rows.iter().map(|r| r.key.clone()).collect();
        assert_eq!(keys_a, keys_b);
        assert_eq!(a.filtered, b.filtered);
    }

    #[test]
    fn test_row_keys_fall_back_to_filtered_index() {
        let rows = vec![json!({ "name": "a" }), json!({ "name": "b" }), json!({ "id": "x", "name": "c" })];
        let slice = evaluate(&rows, &columns(), &state("", 1, 2), true);
        let keys: Vec<_> = slice.rows.iter().map(|r| r.key.clone()).collect();
        assert_eq!(keys, vec![RowKey::Id("x".into())]);
        let slice = evaluate(&rows, &columns(), &state("", 0, 2), true);
        assert_eq!(slice.rows[1].key, RowKey::Index(1));
    }

    // Narrowing the search does not move the page back; the view can end up
    // on an empty page until the user navigates.
    #[test]
    fn test_search_does_not_reset_page() {
        let rows = numbered(25);
        let cols = columns();
        let mut s = state("", 2, 10);
        assert_eq!(evaluate(&rows, &cols, &s, true).rows.len(), 5);
        s.set_search_term("Item 1");
        let slice = evaluate(&rows, &cols, &s, true);
        assert_eq!(slice.page, 2);
        assert_eq!(slice.filtered_count(), 11);
        assert!(slice.is_empty());
    }

    // A page stranded past the end keeps the raw range in its caption.
    #[test]
    fn test_stranded_page_caption() {
        assert_eq!(displayed_rows_label(2, 10, 11), "21–11 of 11");
        assert_eq!(displayed_rows_label(1, 10, 11), "11–11 of 11");
    }

    #[test]
    fn test_snapshot_copies_visible_rows() {
        let rows = numbered(12);
        let snapshot = evaluate(&rows, &columns(), &state("", 1, 10), true).to_snapshot();
        assert_eq!(snapshot.rows.len(), 2);
        assert_eq!(snapshot.rows[0].0, RowKey::Id("10".into()));
        assert_eq!(snapshot.filtered_count, 12);
        assert_eq!(snapshot.total_pages, 2);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn test_displayed_rows_label() {
        assert_eq!(displayed_rows_label(0, 10, 0), "0–0 of 0");
        assert_eq!(displayed_rows_label(0, 10, 25), "1–10 of 25");
        assert_eq!(displayed_rows_label(2, 10, 25), "21–25 of 25");
    }

    #[test]
    fn test_body_state() {
        assert_eq!(body_state(true, 5), BodyState::Loading);
        assert_eq!(body_state(false, 0), BodyState::Empty);
        assert_eq!(body_state(false, 3), BodyState::Rows);
    }
}
