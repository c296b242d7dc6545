use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    ctx.init_router_integration();

    view! { <Shell /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.token.is_some())
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
