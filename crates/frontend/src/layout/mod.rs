pub mod global_context;
pub mod header;
pub mod sidebar;

use leptos::prelude::*;

use global_context::{AppGlobalContext, Section};
use header::TopHeader;
use sidebar::Sidebar;

use crate::domain::a001_product::ui::list::ProductsListPage;
use crate::domain::a002_order::ui::list::OrdersListPage;
use crate::domain::a003_supplier::ui::list::SuppliersListPage;
use crate::system::users::ui::list::UsersListPage;

/// Application frame once signed in:
///
/// ```text
/// +----------------------------------+
/// |            TopHeader             |
/// +----------------------------------+
/// |  Sidebar  |   active section     |
/// +----------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <Sidebar />
                <main class="app-main">
                    {move || match ctx.active.get() {
                        Section::Users => view! { <UsersListPage /> }.into_any(),
                        Section::Products => view! { <ProductsListPage /> }.into_any(),
                        Section::Orders => view! { <OrdersListPage /> }.into_any(),
                        Section::Suppliers => view! { <SuppliersListPage /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
