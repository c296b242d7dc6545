use leptos::prelude::*;

use crate::shared::icons::icon;

/// Error banner above a list; hidden while `message` is `None`.
#[component]
pub fn ErrorAlert(
    #[prop(into)]
    message: Signal<Option<String>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="alert alert--error">
                    <span>{text}</span>
                    <button class="alert__close" on:click=move |_| on_dismiss.run(())>
                        {icon("x")}
                    </button>
                </div>
            }
        })
    }
}
