use contracts::system::users::User;
use leptos::prelude::*;

use crate::shared::list_state::{EditDialog, ListState};

#[derive(Clone, Debug, Default)]
pub struct UsersListState {
    pub list: ListState<User>,
    pub dialog: EditDialog<User>,
}

impl UsersListState {
    pub fn open_create(&mut self) {
        self.dialog.open_create();
    }

    pub fn open_edit(&mut self, user: User) {
        self.dialog.open_edit(user);
    }

    pub fn close_dialog(&mut self) {
        self.dialog.close();
    }

    pub fn set_active(&mut self, id: &str, active: bool) {
        self.list.update_item(id, |user| user.is_active = active);
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::users::UserRole;

    fn user(id: &str) -> User {
        User {
            id: id.into(),
            name: format!("User {}", id),
            email: format!("{}@example.com", id),
            role: UserRole::Employee,
            department: "IT".into(),
            is_active: true,
            last_login: None,
            created_at: String::new(),
        }
    }

    #[test]
    fn test_set_active() {
        let mut state = UsersListState::default();
        state.list.finish_load(Ok(vec![user("1"), user("2")]), "users");
        state.set_active("2", false);
        assert!(state.list.items[0].is_active);
        assert!(!state.list.items[1].is_active);
    }

    #[test]
    fn test_dialog_reset() {
        let mut state = UsersListState::default();
        state.open_edit(user("1"));
        assert!(matches!(state.dialog, EditDialog::Edit(ref u) if u.id == "1"));
        state.close_dialog();
        assert!(matches!(state.dialog, EditDialog::Closed));
        state.open_create();
        assert!(matches!(state.dialog, EditDialog::Create));
    }
}
