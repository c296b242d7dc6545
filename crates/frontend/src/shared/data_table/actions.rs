//! Row-level actions surfaced to the hosting page.

use std::sync::Arc;

type RowHandler<R> = Arc<dyn Fn(&R) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

impl RowAction {
    pub const ALL: [RowAction; 3] = [RowAction::View, RowAction::Edit, RowAction::Delete];

    pub fn label(&self) -> &'static str {
        match self {
            RowAction::View => "View",
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RowAction::View => "eye",
            RowAction::Edit => "edit",
            RowAction::Delete => "delete",
        }
    }
}

/// Optional handler per action. An empty slot hides the action and makes
/// dispatching it a no-op.
pub struct RowActions<R> {
    on_view: Option<RowHandler<R>>,
    on_edit: Option<RowHandler<R>>,
    on_delete: Option<RowHandler<R>>,
}

impl<R> Default for RowActions<R> {
    fn default() -> Self {
        Self {
            on_view: None,
            on_edit: None,
            on_delete: None,
        }
    }
}

impl<R> Clone for RowActions<R> {
    fn clone(&self) -> Self {
        Self {
            on_view: self.on_view.clone(),
            on_edit: self.on_edit.clone(),
            on_delete: self.on_delete.clone(),
        }
    }
}

impl<R> RowActions<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, action: RowAction, handler: impl Fn(&R) + Send + Sync + 'static) -> Self {
        let handler: RowHandler<R> = Arc::new(handler);
        match action {
            RowAction::View => self.on_view = Some(handler),
            RowAction::Edit => self.on_edit = Some(handler),
            RowAction::Delete => self.on_delete = Some(handler),
        }
        self
    }

    fn slot(&self, action: RowAction) -> Option<&RowHandler<R>> {
        match action {
            RowAction::View => self.on_view.as_ref(),
            RowAction::Edit => self.on_edit.as_ref(),
            RowAction::Delete => self.on_delete.as_ref(),
        }
    }

    pub fn has(&self, action: RowAction) -> bool {
        self.slot(action).is_some()
    }

    /// Actions with a handler, in menu order.
    pub fn available(&self) -> Vec<RowAction> {
        RowAction::ALL
            .into_iter()
            .filter(|a| self.has(*a))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.available().is_empty()
    }

    /// Calls the handler for `action`. Returns false when there is none.
    pub fn dispatch(&self, action: RowAction, row: &R) -> bool {
        match self.slot(action) {
            Some(handler) => {
                handler(row);
                true
            }
            None => {
                log::debug!("data table: no handler for {:?}", action);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_dispatch_reaches_handler() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let actions = RowActions::<u32>::new()
            .on(RowAction::Edit, move |row| sink.lock().unwrap().push(*row));

        assert!(actions.dispatch(RowAction::Edit, &7));
        assert_eq!(*seen.lock().unwrap(), vec![7]);
    }

    #[test]
    fn test_missing_handler_is_silent_noop() {
        let actions = RowActions::<u32>::new().on(RowAction::View, |_| {});
        assert!(!actions.dispatch(RowAction::Delete, &1));
        assert!(actions.has(RowAction::View));
        assert!(!actions.has(RowAction::Edit));
    }

    #[test]
    fn test_available_keeps_menu_order() {
        let actions = RowActions::<u32>::new()
            .on(RowAction::Delete, |_| {})
            .on(RowAction::View, |_| {});
        assert_eq!(actions.available(), vec![RowAction::View, RowAction::Delete]);
        assert!(RowActions::<u32>::new().is_empty());
    }
}
