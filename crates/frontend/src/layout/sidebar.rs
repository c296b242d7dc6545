use leptos::prelude::*;

use crate::layout::global_context::{AppGlobalContext, Section};
use crate::shared::icons::icon;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <nav class="app-sidebar" class:app-sidebar--collapsed=move || !ctx.left_open.get()>
            {Section::ALL
                .into_iter()
                .map(|section| {
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || ctx.active.get() == section
                            title=section.title()
                            on:click=move |_| ctx.open(section)
                        >
                            {icon(section.icon())}
                            <span class="app-sidebar__label">{section.title()}</span>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
