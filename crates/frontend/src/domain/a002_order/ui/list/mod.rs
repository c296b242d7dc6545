use contracts::domain::a002_order::aggregate::{Order, OrderStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::domain::a002_order::api;
use crate::domain::a002_order::ui::details::OrderForm;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, ErrorAlert};
use crate::shared::data_table::{
    CellContent, CellValue, ChipTone, Column, DataTable, TableOptions, TableRow, ViewState,
};
use crate::shared::date_utils::format_datetime;
use crate::shared::dialogs;
use crate::shared::icons::icon;
use crate::shared::list_state::{EditDialog, ListState};
use crate::shared::number_format::format_usd;

impl TableRow for Order {
    fn field(&self, name: &str) -> Option<CellValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "orderNumber" => Some(self.order_number.as_str().into()),
            "customer" => serde_json::to_value(&self.customer)
                .ok()
                .and_then(|v| CellValue::from_json(&v)),
            "items" => serde_json::to_value(&self.items)
                .ok()
                .and_then(|v| CellValue::from_json(&v)),
            "status" => Some(self.status.as_str().into()),
            "subtotal" => Some(self.subtotal.into()),
            "tax" => Some(self.tax.into()),
            "shipping" => Some(self.shipping.into()),
            "total" => Some(self.total.into()),
            "paymentMethod" => Some(self.payment_method.as_str().into()),
            "notes" => Some(self.notes.as_str().into()),
            "createdAt" => Some(self.created_at.as_str().into()),
            _ => None,
        }
    }

    fn row_id(&self) -> Option<String> {
        Some(self.id.clone())
    }
}

fn status_tone(status: OrderStatus) -> ChipTone {
    match status {
        OrderStatus::Completed => ChipTone::Success,
        OrderStatus::Pending => ChipTone::Warning,
        OrderStatus::Cancelled => ChipTone::Error,
        OrderStatus::Processing => ChipTone::Info,
    }
}

fn items_label(count: usize) -> String {
    format!("{} item{}", count, if count == 1 { "" } else { "s" })
}

/// `credit_card` -> `Credit Card`. Only the first underscore becomes a
/// space; words are capitalized at each word boundary.
fn payment_label(method: &str) -> String {
    let spaced = method.replacen('_', " ", 1);
    let mut out = String::with_capacity(spaced.len());
    let mut prev_is_word = false;
    for c in spaced.chars() {
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word && !prev_is_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = is_word;
    }
    out
}

fn columns() -> Vec<Column<Order>> {
    vec![
        Column::new("orderNumber", "Order").render(|_, order: &Order| {
            let number = format!("#{}", order.order_number);
            let customer = order.customer.name.clone();
            CellContent::view(move || {
                view! {
                    <div class="cell-stack">
                        <span class="cell-stack__primary">{number.clone()}</span>
                        <span class="cell-stack__secondary">{customer.clone()}</span>
                    </div>
                }
                .into_any()
            })
        }),
        Column::new("status", "Status").render(|_, order: &Order| {
            CellContent::chip(order.status.label(), status_tone(order.status))
        }),
        Column::new("total", "Total").currency(),
        Column::new("items", "Items").render(|_, order: &Order| {
            CellContent::text(items_label(order.items.len()))
        }),
        Column::new("paymentMethod", "Payment").render(|_, order: &Order| {
            CellContent::text(payment_label(&order.payment_method))
        }),
        Column::new("createdAt", "Date").datetime(),
    ]
}

#[component]
pub fn OrdersListPage() -> impl IntoView {
    let state = RwSignal::new(ListState::<Order>::default());
    let viewing: RwSignal<Option<Order>> = RwSignal::new(None);
    let dialog = RwSignal::new(EditDialog::<Order>::default());
    let view_state = RwSignal::new(ViewState::default());

    let load_data = move || {
        state.update(|s| s.begin_load());
        spawn_local(async move {
            let result = api::fetch_orders().await;
            if let Err(e) = &result {
                log::error!("orders: {}", e);
            }
            state.update(|s| s.finish_load(result, "orders"));
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let on_delete = Callback::new(move |order: Order| {
        if !dialogs::confirm(&format!(
            "Are you sure you want to delete order #{}?",
            order.order_number
        )) {
            return;
        }
        spawn_local(async move {
            match api::delete_order(&order.id).await {
                Ok(()) => state.update(|s| s.remove(&order.id)),
                Err(e) => {
                    log::error!("orders: delete failed: {}", e);
                    state.update(|s| s.fail(format!("Failed to delete order: {}", e)));
                }
            }
        });
    });

    let advance_status = Callback::new(move |order: Order| {
        let Some(next) = order.status.next() else {
            return;
        };
        spawn_local(async move {
            match api::update_order_status(&order.id, next).await {
                Ok(()) => {
                    log::info!("orders: #{} -> {}", order.order_number, next.as_str());
                    state.update(|s| s.update_item(&order.id, |o| o.status = next));
                    viewing.set(None);
                }
                Err(e) => {
                    log::error!("orders: status update failed: {}", e);
                    state.update(|s| s.fail("Failed to update order status"));
                }
            }
        });
    });

    let close_dialog = Callback::new(move |_| dialog.update(|d| d.close()));
    let on_saved = Callback::new(move |_| {
        view_state.update(|v| dialog.update(|d| d.finish_save(v)));
        load_data();
    });

    let options = TableOptions::default()
        .with_search_placeholder("Search orders by number, status or payment...")
        .with_empty_message("No orders found");

    view! {
        <div class="page">
            <PageHeader title="Order Management" subtitle="Track and manage customer orders">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| dialog.update(|d| d.open_create())
                >
                    {icon("plus")}
                    " Create Order"
                </Button>
            </PageHeader>

            <ErrorAlert
                message=Signal::derive(move || state.with(|s| s.error.clone()))
                on_dismiss=Callback::new(move |_| state.update(|s| s.dismiss_error()))
            />

            <DataTable
                data=Signal::derive(move || state.with(|s| s.items.clone()))
                columns=columns()
                title="Orders"
                loading=Signal::derive(move || state.with(|s| s.loading))
                options=options
                view_state=view_state
                on_view=Callback::new(move |order: Order| viewing.set(Some(order)))
                on_edit=Callback::new(move |order: Order| dialog.update(|d| d.open_edit(order)))
                on_delete=on_delete
                on_refresh=Callback::new(move |_| load_data())
            />

            {move || viewing.get().map(|order| view! {
                <OrderDetails
                    order=order
                    on_close=Callback::new(move |_| viewing.set(None))
                    on_process=advance_status
                />
            })}

            {move || match dialog.get() {
                EditDialog::Closed => None,
                EditDialog::Create => Some(view! {
                    <OrderForm on_close=close_dialog on_saved=on_saved />
                }.into_any()),
                EditDialog::Edit(order) => Some(view! {
                    <OrderForm order=order on_close=close_dialog on_saved=on_saved />
                }.into_any()),
            }}
        </div>
    }
}

#[component]
fn OrderDetails(order: Order, on_close: Callback<()>, on_process: Callback<Order>) -> impl IntoView {
    let can_process = order.status.next().is_some();
    let tone = status_tone(order.status);
    let items = order
        .items
        .iter()
        .map(|item| {
            let line = format!(
                "Quantity: {} | Price: {} | Total: {}",
                item.quantity,
                format_usd(item.price),
                format_usd(item.price * item.quantity as f64)
            );
            view! {
                <li class="order-items__row">
                    <span class="cell-stack__primary">{item.product_name()}</span>
                    <span class="cell-stack__secondary">{line}</span>
                </li>
            }
        })
        .collect_view();
    let notes = (!order.notes.is_empty()).then(|| {
        let notes = order.notes.clone();
        view! {
            <section class="details__section">
                <h3>"Notes"</h3>
                <p>{notes}</p>
            </section>
        }
    });
    let process_order = order.clone();

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal modal--wide" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{format!("Order Details - #{}", order.order_number)}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body details">
                    <section class="details__section">
                        <h3>"Customer Information"</h3>
                        <p><strong>"Name: "</strong>{order.customer.name.clone()}</p>
                        <p><strong>"Email: "</strong>{order.customer.email.clone()}</p>
                        <p><strong>"Phone: "</strong>{order.customer.phone.clone()}</p>
                    </section>

                    <section class="details__section">
                        <h3>"Order Information"</h3>
                        <p>
                            <strong>"Status: "</strong>
                            <Badge tone=tone>{order.status.label()}</Badge>
                        </p>
                        <p><strong>"Payment: "</strong>{payment_label(&order.payment_method)}</p>
                        <p><strong>"Date: "</strong>{format_datetime(&order.created_at)}</p>
                    </section>

                    <section class="details__section">
                        <h3>"Order Items"</h3>
                        <ul class="order-items">{items}</ul>
                        <div class="order-totals">
                            <span>{format!("Subtotal: {}", format_usd(order.subtotal))}</span>
                            <span>{format!("Tax: {}", format_usd(order.tax))}</span>
                            <span>{format!("Shipping: {}", format_usd(order.shipping))}</span>
                            <strong>{format!("Total: {}", format_usd(order.total))}</strong>
                        </div>
                    </section>

                    {notes}
                </div>

                <div class="modal-footer">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Close"
                    </Button>
                    {can_process.then(|| view! {
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_process.run(process_order.clone())
                        >
                            "Process Order"
                        </Button>
                    })}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::format_cell;
    use contracts::domain::a002_order::aggregate::{Customer, OrderItem};
    use serde_json::json;

    fn order(status: OrderStatus, items: usize) -> Order {
        Order {
            id: "o1".into(),
            order_number: "ORD-0001".into(),
            customer: Customer {
                name: "Budi".into(),
                ..Customer::default()
            },
            items: (0..items)
                .map(|_| OrderItem {
                    product: json!({ "_id": "p1", "name": "Cable" }),
                    quantity: 2,
                    price: 5.0,
                })
                .collect(),
            status,
            subtotal: 10.0,
            tax: 1.0,
            shipping: 0.0,
            total: 11.0,
            payment_method: "bank_transfer".into(),
            notes: String::new(),
            created_at: "2024-03-15T14:02:26".into(),
        }
    }

    #[test]
    fn test_payment_label() {
        assert_eq!(payment_label("credit_card"), "Credit Card");
        assert_eq!(payment_label("cash"), "Cash");
        assert_eq!(payment_label("cash_on_delivery"), "Cash On_delivery");
        assert_eq!(payment_label(""), "");
    }

    #[test]
    fn test_items_label() {
        assert_eq!(items_label(0), "0 items");
        assert_eq!(items_label(1), "1 item");
        assert_eq!(items_label(3), "3 items");
    }

    #[test]
    fn test_columns() {
        let cols = columns();
        let o = order(OrderStatus::Cancelled, 2);
        assert_eq!(format_cell(&o, &cols[1]), CellContent::chip("Cancelled", ChipTone::Error));
        assert_eq!(format_cell(&o, &cols[2]), CellContent::text("$11.00"));
        assert_eq!(format_cell(&o, &cols[3]), CellContent::text("2 items"));
        assert_eq!(format_cell(&o, &cols[4]), CellContent::text("Bank Transfer"));
        assert_eq!(format_cell(&o, &cols[5]), CellContent::text("3/15/2024, 2:02:26 PM"));
    }

    #[test]
    fn test_status_tones() {
        assert_eq!(status_tone(OrderStatus::Completed), ChipTone::Success);
        assert_eq!(status_tone(OrderStatus::Pending), ChipTone::Warning);
        assert_eq!(status_tone(OrderStatus::Processing), ChipTone::Info);
    }
}
