use leptos::prelude::*;

use crate::shared::data_table::ChipTone;

/// Outlined badge, used for chip cells and status labels.
#[component]
pub fn Badge(
    #[prop(optional)]
    tone: ChipTone,
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let tone_class = format!("badge--{}", tone.as_str());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", tone_class, additional_class())>
            {children()}
        </span>
    }
}

/// Badge that follows a boolean, e.g. active / inactive.
#[component]
pub fn StatusBadge(
    #[prop(into)]
    active: Signal<bool>,
    #[prop(into)]
    on_label: String,
    #[prop(into)]
    off_label: String,
) -> impl IntoView {
    view! {
        <span class=move || {
            if active.get() { "badge badge--success" } else { "badge badge--default" }
        }>
            {move || if active.get() { on_label.clone() } else { off_label.clone() }}
        </span>
    }
}
