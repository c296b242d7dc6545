use super::view_state::DEFAULT_ROWS_PER_PAGE;

/// Feature switches and texts of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    pub searchable: bool,
    pub filterable: bool,
    pub pagination: bool,
    /// Shows the per-row actions column.
    pub actions: bool,
    pub search_placeholder: String,
    pub empty_message: String,
    pub rows_per_page_options: Vec<usize>,
    pub default_rows_per_page: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            searchable: true,
            filterable: true,
            pagination: true,
            actions: true,
            search_placeholder: "Search...".to_string(),
            empty_message: "No data available".to_string(),
            rows_per_page_options: vec![5, 10, 25, 50],
            default_rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl TableOptions {
    pub fn with_search_placeholder(mut self, text: impl Into<String>) -> Self {
        self.search_placeholder = text.into();
        self
    }

    pub fn with_empty_message(mut self, text: impl Into<String>) -> Self {
        self.empty_message = text.into();
        self
    }

    /// Number of header cells, counting the actions column.
    pub fn column_span(&self, columns: usize) -> usize {
        columns + usize::from(self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TableOptions::default();
        assert!(options.searchable && options.filterable && options.pagination && options.actions);
        assert_eq!(options.rows_per_page_options, vec![5, 10, 25, 50]);
        assert_eq!(options.default_rows_per_page, 10);
        assert_eq!(options.empty_message, "No data available");
    }

    #[test]
    fn test_column_span() {
        let mut options = TableOptions::default();
        assert_eq!(options.column_span(4), 5);
        options.actions = false;
        assert_eq!(options.column_span(4), 4);
    }
}
