//! Search and pagination state owned by one table instance.

pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    search_term: String,
    page: usize,
    rows_per_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS_PER_PAGE)
    }
}

impl ViewState {
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            search_term: String::new(),
            page: 0,
            rows_per_page: if rows_per_page == 0 {
                DEFAULT_ROWS_PER_PAGE
            } else {
                rows_per_page
            },
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    /// Leaves `page` untouched, so a narrower search can land on an empty page.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Always returns to the first page. Zero is ignored.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        if rows_per_page == 0 {
            return;
        }
        self.rows_per_page = rows_per_page;
        self.page = 0;
    }

    /// Clears the search and goes back to the first page.
    pub fn reset(&mut self) {
        self.search_term.clear();
        self.page = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_per_page_change_resets_page() {
        let mut state = ViewState::new(10);
        state.set_page(2);
        state.set_rows_per_page(25);
        assert_eq!(state.page(), 0);
        assert_eq!(state.rows_per_page(), 25);
    }

    #[test]
    fn test_zero_rows_per_page_ignored() {
        let mut state = ViewState::new(0);
        assert_eq!(state.rows_per_page(), DEFAULT_ROWS_PER_PAGE);
        state.set_page(1);
        state.set_rows_per_page(0);
        assert_eq!(state.page(), 1);
        assert_eq!(state.rows_per_page(), DEFAULT_ROWS_PER_PAGE);
    }

    #[test]
    fn test_search_keeps_page() {
        let mut state = ViewState::default();
        state.set_page(3);
        state.set_search_term("wid");
        assert_eq!(state.page(), 3);
        assert_eq!(state.search_term(), "wid");
    }

    #[test]
    fn test_reset_keeps_rows_per_page() {
        let mut state = ViewState::new(50);
        state.set_search_term("x");
        state.set_page(4);
        state.reset();
        assert_eq!(state, ViewState::new(50));
    }
}
