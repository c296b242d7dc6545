mod state;

use contracts::system::users::{UpdateUserDto, User, UserRole};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{ErrorAlert, StatusBadge};
use crate::shared::data_table::{
    CellContent, CellValue, ChipTone, Column, DataTable, TableOptions, TableRow, ViewState,
};
use crate::shared::date_utils::format_datetime;
use crate::shared::dialogs;
use crate::shared::icons::icon;
use crate::system::users::api;
use crate::system::users::ui::details::UserForm;
use crate::shared::list_state::EditDialog;
use state::create_state;

impl TableRow for User {
    fn field(&self, name: &str) -> Option<CellValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "role" => Some(self.role.as_str().into()),
            "department" => Some(self.department.as_str().into()),
            "isActive" => Some(self.is_active.into()),
            "lastLogin" => self.last_login.as_deref().map(CellValue::from),
            "createdAt" => Some(self.created_at.as_str().into()),
            _ => None,
        }
    }

    fn row_id(&self) -> Option<String> {
        Some(self.id.clone())
    }
}

fn role_tone(role: UserRole) -> ChipTone {
    match role {
        UserRole::Admin => ChipTone::Error,
        UserRole::Manager => ChipTone::Warning,
        UserRole::Employee => ChipTone::Default,
    }
}

fn user_summary(user: &User) -> String {
    format!(
        "User Details:\nName: {}\nEmail: {}\nRole: {}\nDepartment: {}\nStatus: {}",
        user.name,
        user.email,
        user.role.label(),
        user.department,
        if user.is_active { "Active" } else { "Inactive" }
    )
}

fn columns(on_toggle: Callback<User>) -> Vec<Column<User>> {
    vec![
        Column::new("name", "Name").render(|_, user: &User| {
            let name = user.name.clone();
            let email = user.email.clone();
            CellContent::view(move || {
                view! {
                    <div class="cell-stack">
                        <span class="cell-stack__primary">{name.clone()}</span>
                        <span class="cell-stack__secondary">{email.clone()}</span>
                    </div>
                }
                .into_any()
            })
        }),
        Column::new("role", "Role")
            .render(|_, user: &User| CellContent::chip(user.role.label(), role_tone(user.role))),
        Column::new("department", "Department").chip(ChipTone::Info),
        Column::new("isActive", "Status").render(move |_, user: &User| {
            let user = user.clone();
            CellContent::view(move || {
                let user = user.clone();
                let active = user.is_active;
                view! {
                    <label class="status-toggle">
                        <input
                            type="checkbox"
                            prop:checked=active
                            on:change=move |_| on_toggle.run(user.clone())
                        />
                        <StatusBadge active=active on_label="Active" off_label="Inactive" />
                    </label>
                }
                .into_any()
            })
        }),
        Column::new("lastLogin", "Last Login").render(|v, _| match v {
            Some(CellValue::Text(s)) if !s.is_empty() => CellContent::text(format_datetime(s)),
            _ => CellContent::text("Never"),
        }),
        Column::new("createdAt", "Created").date(),
    ]
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    let state = create_state();
    let view_state = RwSignal::new(ViewState::default());

    let load_data = move || {
        state.update(|s| s.list.begin_load());
        spawn_local(async move {
            let result = api::fetch_users().await;
            if let Err(e) = &result {
                log::error!("users: {}", e);
            }
            state.update(|s| s.list.finish_load(result, "users"));
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.list.is_loaded) {
            load_data();
        }
    });

    let on_toggle = Callback::new(move |user: User| {
        let next = !user.is_active;
        spawn_local(async move {
            match api::update_user(&user.id, &UpdateUserDto::toggle_active(&user)).await {
                Ok(()) => state.update(|s| s.set_active(&user.id, next)),
                Err(e) => {
                    log::error!("users: toggle failed: {}", e);
                    state.update(|s| s.list.fail(format!("Failed to update user: {}", e)));
                }
            }
        });
    });

    let on_delete = Callback::new(move |user: User| {
        if !dialogs::confirm(&format!("Are you sure you want to delete {}?", user.name)) {
            return;
        }
        spawn_local(async move {
            match api::delete_user(&user.id).await {
                Ok(()) => state.update(|s| s.list.remove(&user.id)),
                Err(e) => {
                    log::error!("users: delete failed: {}", e);
                    state.update(|s| s.list.fail(format!("Failed to delete user: {}", e)));
                }
            }
        });
    });

    let on_view = Callback::new(move |user: User| dialogs::alert(&user_summary(&user)));
    let on_edit = Callback::new(move |user: User| state.update(|s| s.open_edit(user)));

    let close_dialog = Callback::new(move |_| state.update(|s| s.close_dialog()));
    let on_saved = Callback::new(move |_| {
        view_state.update(|v| state.update(|s| s.dialog.finish_save(v)));
        load_data();
    });

    let options = TableOptions::default()
        .with_search_placeholder("Search users by name or email...")
        .with_empty_message("No users found");

    view! {
        <div class="page">
            <PageHeader title="User Management" subtitle="Manage system users and their permissions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| state.update(|s| s.open_create())
                >
                    {icon("plus")}
                    " Add User"
                </Button>
            </PageHeader>

            <ErrorAlert
                message=Signal::derive(move || state.with(|s| s.list.error.clone()))
                on_dismiss=Callback::new(move |_| state.update(|s| s.list.dismiss_error()))
            />

            <DataTable
                data=Signal::derive(move || state.with(|s| s.list.items.clone()))
                columns=columns(on_toggle)
                title="Users"
                loading=Signal::derive(move || state.with(|s| s.list.loading))
                options=options
                view_state=view_state
                on_view=on_view
                on_edit=on_edit
                on_delete=on_delete
                on_refresh=Callback::new(move |_| load_data())
            />

            {move || match state.with(|s| s.dialog.clone()) {
                EditDialog::Closed => None,
                EditDialog::Create => Some(view! {
                    <UserForm on_close=close_dialog on_saved=on_saved />
                }.into_any()),
                EditDialog::Edit(user) => Some(view! {
                    <UserForm user=user on_close=close_dialog on_saved=on_saved />
                }.into_any()),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::{evaluate, format_cell, ViewState};

    fn test_columns() -> Vec<Column<User>> {
        let owner = Owner::new();
        owner.set();
        columns(Callback::new(|_| {}))
    }

    fn user(name: &str, role: UserRole) -> User {
        User {
            id: name.to_lowercase(),
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            role,
            department: "Sales".into(),
            is_active: true,
            last_login: None,
            created_at: "2024-03-15T14:02:26".into(),
        }
    }

    #[test]
    fn test_role_chip_uses_capitalized_label() {
        let cols = test_columns();
        let admin = user("Ann", UserRole::Admin);
        assert_eq!(format_cell(&admin, &cols[1]), CellContent::chip("Admin", ChipTone::Error));
        let employee = user("Bob", UserRole::Employee);
        assert_eq!(
            format_cell(&employee, &cols[1]),
            CellContent::chip("Employee", ChipTone::Default)
        );
    }

    #[test]
    fn test_last_login_never() {
        let cols = test_columns();
        assert_eq!(format_cell(&user("Ann", UserRole::Admin), &cols[4]), CellContent::text("Never"));
        assert_eq!(
            format_cell(&user("Ann", UserRole::Admin), &cols[5]),
            CellContent::text("3/15/2024")
        );
    }

    #[test]
    fn test_search_covers_column_fields_only() {
        let cols = test_columns();
        let rows = vec![user("Ann", UserRole::Admin), user("Bob", UserRole::Manager)];
        let mut state = ViewState::default();
        state.set_search_term("BOB");
        let slice = evaluate(&rows, &cols, &state, true);
        assert_eq!(slice.filtered_count(), 1);
        assert_eq!(slice.rows[0].row.name, "Bob");

        state.set_search_term("sales");
        assert_eq!(evaluate(&rows, &cols, &state, true).filtered_count(), 2);

        // email is shown under the name but is not a column field
        state.set_search_term("bob@");
        assert_eq!(evaluate(&rows, &cols, &state, true).filtered_count(), 0);
    }

    #[test]
    fn test_summary() {
        let text = user_summary(&user("Ann", UserRole::Manager));
        assert!(text.contains("Role: Manager"));
        assert!(text.ends_with("Status: Active"));
    }
}
