use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        token: storage::get_token(),
        user_info: None,
    });

    // Validate a token left over from a previous visit
    Effect::new(move |_| {
        if auth_state.with_untracked(|s| s.token.is_none()) {
            return;
        }
        spawn_local(async move {
            match api::fetch_profile().await {
                Ok(user_info) => {
                    log::info!("auth: session restored for {}", user_info.email);
                    set_auth_state.update(|s| s.user_info = Some(user_info));
                }
                Err(e) => {
                    log::warn!("auth: stored session rejected: {}", e);
                    storage::clear_token();
                    set_auth_state.set(AuthState::default());
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Store a fresh login and switch the app to the main layout
pub fn sign_in(set_auth_state: WriteSignal<AuthState>, token: String, user_info: UserInfo) {
    storage::save_token(&token);
    set_auth_state.set(AuthState {
        token: Some(token),
        user_info: Some(user_info),
    });
}

pub fn sign_out(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_token();
    set_auth_state.set(AuthState::default());
}
