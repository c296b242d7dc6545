use contracts::config::APP_NAME;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{sign_out, use_auth};

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let user_name = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.name)
            .unwrap_or_else(|| "User".to_string())
    };
    let user_role = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.role.label().to_string())
            .unwrap_or_default()
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if ctx.left_open.get() { icon("chevron-left") } else { icon("chevron-right") }}
                </button>
                <span class="top-header__title">{APP_NAME}</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span class="top-header__user-name">{user_name}</span>
                    <span class="top-header__user-role">{user_role}</span>
                </div>
                <button
                    class="top-header__icon-btn"
                    title="Logout"
                    on:click=move |_| {
                        log::info!("auth: logout");
                        sign_out(set_auth_state);
                    }
                >
                    {icon("logout")}
                </button>
            </div>
        </header>
    }
}
