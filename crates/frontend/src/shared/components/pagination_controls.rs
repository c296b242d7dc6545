use crate::shared::data_table::displayed_rows_label;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Rows-per-page select, range caption and previous / next buttons.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Number of rows across all pages
    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)]
    rows_per_page: Signal<usize>,

    on_page_change: Callback<usize>,

    on_rows_per_page_change: Callback<usize>,

    rows_per_page_options: Vec<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <span class="pagination-label">"Rows per page:"</span>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_rows_per_page_change.run(size);
                    }
                }
                prop:value=move || rows_per_page.get().to_string()
            >
                {rows_per_page_options.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || rows_per_page.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
            <span class="pagination-info">
                {move || displayed_rows_label(current_page.get(), rows_per_page.get(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() == 0
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page + 1 < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() + 1 >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
