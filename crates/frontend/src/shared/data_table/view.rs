use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use super::actions::{RowAction, RowActions};
use super::cell::RowKey;
use super::column::{CellContent, Column};
use super::engine::{body_state, evaluate, BodyState, PageSnapshot};
use super::format::format_cell;
use super::options::TableOptions;
use super::view_state::ViewState;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;

/// Searchable, paginated table over any [`super::TableRow`] type.
///
/// Search and pagination state survive `data` refreshes. The table owns
/// them unless the caller passes `view_state`, in which case the caller can
/// reset them with [`ViewState::reset`]. Each `on_*` callback that is
/// supplied adds the matching control; absent callbacks hide it.
#[component]
pub fn DataTable<R>(
    /// Rows to show; owned by the caller.
    #[prop(into)]
    data: Signal<Vec<R>>,
    columns: Vec<Column<R>>,
    #[prop(optional, into)]
    title: String,
    /// While true the body shows a loading row instead of data.
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    #[prop(optional)]
    options: Option<TableOptions>,
    #[prop(optional)]
    view_state: Option<RwSignal<ViewState>>,
    #[prop(optional)]
    on_view: Option<Callback<R>>,
    #[prop(optional)]
    on_edit: Option<Callback<R>>,
    #[prop(optional)]
    on_delete: Option<Callback<R>>,
    #[prop(optional)]
    on_refresh: Option<Callback<()>>,
    #[prop(optional)]
    on_filters: Option<Callback<()>>,
) -> impl IntoView
where
    R: super::cell::TableRow + Clone + Send + Sync + 'static,
{
    let options = options.unwrap_or_default();
    let state = view_state
        .unwrap_or_else(|| RwSignal::new(ViewState::new(options.default_rows_per_page)));
    let menu_for: RwSignal<Option<RowKey>> = RwSignal::new(None);
    let is_loading = move || loading.get().unwrap_or(false);

    let mut row_actions = RowActions::<R>::new();
    for (action, callback) in [
        (RowAction::View, on_view),
        (RowAction::Edit, on_edit),
        (RowAction::Delete, on_delete),
    ] {
        if let Some(cb) = callback {
            row_actions = row_actions.on(action, move |row: &R| cb.run(row.clone()));
        }
    }
    let show_actions = options.actions;
    let span = options.column_span(columns.len());
    let paginate = options.pagination;
    let empty_message = options.empty_message.clone();

    let columns = StoredValue::new(columns);
    let row_actions = StoredValue::new(row_actions);

    let snapshot: Signal<PageSnapshot<R>> = Signal::derive(move || {
        data.with(|rows| {
            columns.with_value(|cols| {
                state.with(|s| evaluate(rows, cols, s, paginate).to_snapshot())
            })
        })
    });

    let header_cells = columns.with_value(|cols| {
        cols.iter()
            .map(|col| {
                let header = col.header.clone();
                view! {
                    <TableHeaderCell class="data-table__header-cell">{header}</TableHeaderCell>
                }
            })
            .collect_view()
    });

    let render_row = move |key: RowKey, row: R| {
        let cells = columns.with_value(|cols| {
            cols.iter()
                .map(|col| {
                    let content = format_cell(&row, col);
                    view! {
                        <TableCell>
                            <TableCellLayout>{render_content(content)}</TableCellLayout>
                        </TableCell>
                    }
                })
                .collect_view()
        });
        let actions_cell = show_actions.then(|| {
            view! {
                <TableCell class="data-table__actions-cell">
                    <RowActionsMenu row=row row_key=key menu_for=menu_for actions=row_actions />
                </TableCell>
            }
        });
        view! {
            <TableRow class="data-table__row">
                {cells}
                {actions_cell}
            </TableRow>
        }
    };

    let body = move || {
        let page = snapshot.get();
        match body_state(is_loading(), page.rows.len()) {
            BodyState::Loading => view! {
                <TableRow>
                    <TableCell attr:colspan=span>
                        <div class="data-table__message">"Loading..."</div>
                    </TableCell>
                </TableRow>
            }
            .into_any(),
            BodyState::Empty => {
                let message = empty_message.clone();
                view! {
                    <TableRow>
                        <TableCell attr:colspan=span>
                            <div class="data-table__message data-table__message--muted">{message}</div>
                        </TableCell>
                    </TableRow>
                }
                .into_any()
            }
            BodyState::Rows => page
                .rows
                .into_iter()
                .map(|(key, row)| render_row(key, row))
                .collect_view()
                .into_any(),
        }
    };

    let search_placeholder = options.search_placeholder.clone();
    let rows_per_page_options = options.rows_per_page_options.clone();

    view! {
        <div class="data-table">
            <div class="data-table__toolbar">
                <div class="data-table__title-row">
                    <h2 class="data-table__title">{title}</h2>
                    {on_refresh.map(|cb| view! {
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| cb.run(())
                            disabled=Signal::derive(is_loading)
                            attr:title="Refresh"
                        >
                            {icon("refresh")}
                        </Button>
                    })}
                </div>
                <div class="data-table__filters">
                    {options.searchable.then(|| view! {
                        <div class="data-table__search">
                            {icon("search")}
                            <input
                                type="text"
                                placeholder=search_placeholder
                                prop:value=move || state.with(|s| s.search_term().to_string())
                                on:input=move |ev| {
                                    let term = event_target_value(&ev);
                                    state.update(|s| s.set_search_term(term));
                                }
                            />
                        </div>
                    })}
                    {options.filterable.then(|| view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| {
                                if let Some(cb) = on_filters {
                                    cb.run(());
                                }
                            }
                        >
                            {icon("filter")}
                            " Filters"
                        </Button>
                    })}
                </div>
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {header_cells}
                            {show_actions.then(|| view! {
                                <TableHeaderCell class="data-table__header-cell data-table__actions-cell">
                                    "Actions"
                                </TableHeaderCell>
                            })}
                        </TableRow>
                    </TableHeader>
                    <TableBody>{body}</TableBody>
                </Table>
            </div>

            {paginate.then(|| view! {
                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page()))
                    total_pages=Signal::derive(move || snapshot.with(|p| p.total_pages))
                    total_count=Signal::derive(move || snapshot.with(|p| p.filtered_count))
                    rows_per_page=Signal::derive(move || state.with(|s| s.rows_per_page()))
                    on_page_change=Callback::new(move |page: usize| state.update(|s| s.set_page(page)))
                    on_rows_per_page_change=Callback::new(move |size: usize| {
                        state.update(|s| s.set_rows_per_page(size))
                    })
                    rows_per_page_options=rows_per_page_options
                />
            })}
        </div>
    }
}

fn render_content(content: CellContent) -> AnyView {
    match content {
        CellContent::Empty => view! { <></> }.into_any(),
        CellContent::Text(text) => view! { <span>{text}</span> }.into_any(),
        CellContent::Chip { label, tone } => view! { <Badge tone=tone>{label}</Badge> }.into_any(),
        CellContent::View(f) => f.run(),
    }
}

/// The "more" button of one row and its dropdown.
#[component]
fn RowActionsMenu<R>(
    row: R,
    row_key: RowKey,
    menu_for: RwSignal<Option<RowKey>>,
    actions: StoredValue<RowActions<R>>,
) -> impl IntoView
where
    R: Clone + Send + Sync + 'static,
{
    let toggle_key = row_key.clone();
    let is_open = move || menu_for.with(|open| open.as_ref() == Some(&row_key));
    let available = actions.with_value(|a| a.available());

    let items = available
        .into_iter()
        .map(|action| {
            let row = row.clone();
            let class = if action == RowAction::Delete {
                "data-table__menu-item data-table__menu-item--danger"
            } else {
                "data-table__menu-item"
            };
            view! {
                <button
                    class=class
                    on:click=move |_| {
                        actions.with_value(|a| a.dispatch(action, &row));
                        menu_for.set(None);
                    }
                >
                    {icon(action.icon())}
                    <span>{action.label()}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="data-table__menu-anchor">
            <button
                class="data-table__menu-toggle"
                title="Actions"
                on:click=move |_| {
                    let key = toggle_key.clone();
                    menu_for.update(|open| {
                        *open = if open.as_ref() == Some(&key) { None } else { Some(key) };
                    });
                }
            >
                {icon("more")}
            </button>
            <div
                class="data-table__menu"
                style:display=move || if is_open() { "flex" } else { "none" }
                on:mouseleave=move |_| menu_for.set(None)
            >
                {items}
            </div>
        </div>
    }
}
