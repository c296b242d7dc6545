use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
