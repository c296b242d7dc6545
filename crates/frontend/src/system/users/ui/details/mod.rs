use contracts::system::users::{CreateUserDto, UpdateUserDto, User, UserRole, DEPARTMENTS};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::icons::icon;
use crate::system::users::api;

/// Values of the create / edit dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFormData {
    pub name: String,
    pub email: String,
    /// Blank on edit means "keep the current password".
    pub password: String,
    pub role: UserRole,
    pub department: String,
    pub is_active: bool,
}

impl Default for UserFormData {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role: UserRole::Employee,
            department: DEPARTMENTS[0].to_string(),
            is_active: true,
        }
    }
}

impl UserFormData {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            password: String::new(),
            role: user.role,
            department: user.department.clone(),
            is_active: user.is_active,
        }
    }

    pub fn validate(&self, editing: bool) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Full name is required".to_string());
        }
        if !self.email.contains('@') {
            return Err("A valid email is required".to_string());
        }
        if !editing && self.password.is_empty() {
            return Err("Password is required".to_string());
        }
        Ok(())
    }

    pub fn to_create_dto(&self) -> CreateUserDto {
        CreateUserDto {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: self.role,
            department: self.department.clone(),
            is_active: self.is_active,
        }
    }

    pub fn to_update_dto(&self) -> UpdateUserDto {
        UpdateUserDto {
            name: Some(self.name.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            password: (!self.password.is_empty()).then(|| self.password.clone()),
            role: Some(self.role),
            department: Some(self.department.clone()),
            is_active: Some(self.is_active),
        }
    }
}

/// Create dialog when `user` is `None`, edit dialog otherwise.
#[component]
pub fn UserForm(
    #[prop(optional)]
    user: Option<User>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let initial = user.as_ref().map(UserFormData::from_user).unwrap_or_default();
    let editing_id = user.as_ref().map(|u| u.id.clone());
    let editing = editing_id.is_some();

    let name = RwSignal::new(initial.name);
    let email = RwSignal::new(initial.email);
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(initial.role);
    let department = RwSignal::new(initial.department);
    let is_active = RwSignal::new(initial.is_active);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let data = UserFormData {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            role: role.get_untracked(),
            department: department.get_untracked(),
            is_active: is_active.get_untracked(),
        };
        if let Err(e) = data.validate(editing) {
            set_error.set(Some(e));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        let editing_id = editing_id.clone();

        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_user(&id, &data.to_update_dto()).await,
                None => api::create_user(&data.to_create_dto()).await.map(|_| ()),
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("users: save failed: {}", e);
                    set_error.set(Some(if editing {
                        format!("Failed to update user: {}", e)
                    } else {
                        format!("Failed to create user: {}", e)
                    }));
                    set_saving.set(false);
                }
            }
        });
    };

    let password_label = if editing {
        "New Password (leave blank to keep current)"
    } else {
        "Password"
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{if editing { "Edit User" } else { "Add New User" }}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <Label>"Full Name"</Label>
                        <Input value=name disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input
                            value=email
                            input_type=InputType::Email
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>{password_label}</Label>
                        <Input
                            value=password
                            input_type=InputType::Password
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Role"</Label>
                        <select
                            class="form__select"
                            prop:value=move || role.get().as_str()
                            on:change=move |ev| {
                                if let Some(r) = UserRole::from_str_opt(&event_target_value(&ev)) {
                                    role.set(r);
                                }
                            }
                        >
                            {UserRole::ALL.iter().map(|r| view! {
                                <option value=r.as_str() selected=move || role.get() == *r>{r.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form__group">
                        <Label>"Department"</Label>
                        <select
                            class="form__select"
                            prop:value=move || department.get()
                            on:change=move |ev| department.set(event_target_value(&ev))
                        >
                            {DEPARTMENTS.iter().map(|d| view! {
                                <option value=*d selected=move || department.get() == *d>{*d}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form__group">
                        <Checkbox checked=is_active label="Active Account" />
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                        disabled=Signal::derive(move || saving.get())
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || match (saving.get(), editing) {
                            (true, _) => "Saving...",
                            (false, true) => "Update User",
                            (false, false) => "Create User",
                        }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> UserFormData {
        UserFormData {
            name: " Ann Lee ".into(),
            email: "ann@example.com".into(),
            password: String::new(),
            ..UserFormData::default()
        }
    }

    #[test]
    fn test_password_required_only_when_creating() {
        let data = filled();
        assert!(data.validate(true).is_ok());
        assert_eq!(data.validate(false), Err("Password is required".to_string()));
    }

    #[test]
    fn test_blank_password_is_not_sent_on_update() {
        let dto = filled().to_update_dto();
        assert!(dto.password.is_none());
        assert_eq!(dto.name.as_deref(), Some("Ann Lee"));

        let mut data = filled();
        data.password = "s3cret".into();
        assert_eq!(data.to_update_dto().password.as_deref(), Some("s3cret"));
    }

    #[test]
    fn test_defaults_match_new_user_dialog() {
        let data = UserFormData::default();
        assert_eq!(data.role, UserRole::Employee);
        assert_eq!(data.department, "IT");
        assert!(data.is_active);
    }

    #[test]
    fn test_invalid_email() {
        let mut data = filled();
        data.email = "nope".into();
        assert!(data.validate(true).is_err());
    }
}
