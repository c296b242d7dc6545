//! Load / error bookkeeping shared by the list screens.

use crate::shared::data_table::{TableRow, ViewState};

#[derive(Clone, Debug)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub is_loaded: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            is_loaded: false,
        }
    }
}

impl<T: TableRow> ListState<T> {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// On failure the previous rows stay visible under the error.
    pub fn finish_load(&mut self, result: Result<Vec<T>, String>, what: &str) {
        self.loading = false;
        self.is_loaded = true;
        match result {
            Ok(items) => self.items = items,
            Err(e) => self.error = Some(format!("Failed to load {}: {}", what, e)),
        }
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn update_item(&mut self, id: &str, f: impl FnOnce(&mut T)) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.row_id().as_deref() == Some(id))
        {
            f(item);
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|item| item.row_id().as_deref() != Some(id));
    }
}

/// Create / edit dialog open over a list screen.
#[derive(Clone, Debug)]
pub enum EditDialog<T> {
    Closed,
    Create,
    Edit(T),
}

impl<T> Default for EditDialog<T> {
    fn default() -> Self {
        EditDialog::Closed
    }
}

impl<T> EditDialog<T> {
    pub fn open_create(&mut self) {
        *self = EditDialog::Create;
    }

    pub fn open_edit(&mut self, item: T) {
        *self = EditDialog::Edit(item);
    }

    pub fn close(&mut self) {
        *self = EditDialog::Closed;
    }

    /// Closes the dialog after a successful save. A newly created record
    /// clears the table's search and paging so it is not filtered out.
    pub fn finish_save(&mut self, view: &mut ViewState) {
        if matches!(self, EditDialog::Create) {
            view.reset();
        }
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::*;
    use serde_json::{json, Value};

    fn rows() -> Vec<Value> {
        vec![json!({ "id": "a", "n": 1 }), json!({ "_id": "b", "n": 2 })]
    }

    #[test]
    fn test_failed_reload_keeps_rows() {
        let mut state = ListState::<Value>::default();
        state.begin_load();
        assert!(state.loading);
        state.finish_load(Ok(rows()), "products");
        state.begin_load();
        state.finish_load(Err("Failed to fetch products: 500".into()), "products");
        assert_eq!(state.items.len(), 2);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to load products: Failed to fetch products: 500")
        );
        assert!(!state.loading);
    }

    #[test]
    fn test_update_and_remove_by_row_id() {
        let mut state = ListState::<Value>::default();
        state.finish_load(Ok(rows()), "rows");
        state.update_item("b", |row| row["n"] = json!(20));
        assert_eq!(state.items[1]["n"], 20);
        state.remove("a");
        assert_eq!(state.items.len(), 1);
        state.remove("missing");
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_create_save_resets_view() {
        let mut view = ViewState::new(25);
        view.set_search_term("cable");
        view.set_page(3);
        let mut dialog = EditDialog::<Value>::default();
        dialog.open_create();
        dialog.finish_save(&mut view);
        assert!(matches!(dialog, EditDialog::Closed));
        assert_eq!(view, ViewState::new(25));
    }

    #[test]
    fn test_edit_save_keeps_view() {
        let mut view = ViewState::default();
        view.set_search_term("cable");
        view.set_page(1);
        let mut dialog = EditDialog::default();
        dialog.open_edit(json!({ "id": "a" }));
        dialog.finish_save(&mut view);
        assert!(matches!(dialog, EditDialog::Closed));
        assert_eq!(view.search_term(), "cable");
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn test_caller_owned_view_state_resets_through_signal() {
        let owner = Owner::new();
        owner.set();
        let view = RwSignal::new(ViewState::default());
        view.update(|v| {
            v.set_search_term("zzz");
            v.set_page(2);
        });
        let mut dialog = EditDialog::<Value>::Create;
        view.update(|v| dialog.finish_save(v));
        assert_eq!(view.get_untracked(), ViewState::default());
    }
}
