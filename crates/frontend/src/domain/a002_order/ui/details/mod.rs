use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_order::aggregate::{
    Customer, Order, OrderDto, OrderLineDto, PAYMENT_METHODS,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_product::api as product_api;
use crate::domain::a002_order::api;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_usd, parse_amount};

/// One product line of the dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub product: String,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

impl OrderLine {
    pub fn total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Adds `quantity` of `product`, merging into an existing line for the same
/// product. Stock is checked against the requested quantity only.
pub fn add_line(lines: &mut Vec<OrderLine>, product: &Product, quantity: i64) -> Result<(), String> {
    if quantity <= 0 {
        return Err("Please select a product and enter a valid quantity".to_string());
    }
    if product.stock_quantity < quantity {
        return Err(format!(
            "Insufficient stock. Available: {}",
            product.stock_quantity
        ));
    }
    match lines.iter_mut().find(|line| line.product == product.id) {
        Some(line) => line.quantity += quantity,
        None => lines.push(OrderLine {
            product: product.id.clone(),
            name: product.name.clone(),
            quantity,
            price: product.price,
        }),
    }
    Ok(())
}

pub fn subtotal(lines: &[OrderLine]) -> f64 {
    lines.iter().map(OrderLine::total).sum()
}

/// Values of the create / edit dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFormData {
    pub customer: Customer,
    pub items: Vec<OrderLine>,
    pub tax: String,
    pub shipping: String,
    pub payment_method: String,
    pub notes: String,
}

impl Default for OrderFormData {
    fn default() -> Self {
        Self {
            customer: Customer::default(),
            items: Vec::new(),
            tax: "0".to_string(),
            shipping: "0".to_string(),
            payment_method: "credit_card".to_string(),
            notes: String::new(),
        }
    }
}

impl OrderFormData {
    pub fn from_order(order: &Order) -> Self {
        Self {
            customer: order.customer.clone(),
            items: order
                .items
                .iter()
                .map(|item| OrderLine {
                    product: item.product_id().unwrap_or_default(),
                    name: item.product_name(),
                    quantity: item.quantity,
                    price: item.price,
                })
                .collect(),
            tax: order.tax.to_string(),
            shipping: order.shipping.to_string(),
            payment_method: order.payment_method.clone(),
            notes: order.notes.clone(),
        }
    }

    pub fn to_dto(&self) -> Result<OrderDto, String> {
        if self.items.is_empty() {
            return Err("Please add at least one item to the order".to_string());
        }
        let customer = Customer {
            name: self.customer.name.trim().to_string(),
            email: self.customer.email.trim().to_string(),
            phone: self.customer.phone.trim().to_string(),
        };
        if customer.name.is_empty() || customer.email.is_empty() || customer.phone.is_empty() {
            return Err("Please fill in all customer information".to_string());
        }
        Ok(OrderDto {
            customer,
            items: self
                .items
                .iter()
                .map(|line| OrderLineDto {
                    product: line.product.clone(),
                    quantity: line.quantity,
                })
                .collect(),
            tax: parse_amount(&self.tax, "Tax")?,
            shipping: parse_amount(&self.shipping, "Shipping")?,
            payment_method: self.payment_method.clone(),
            notes: self.notes.trim().to_string(),
        })
    }
}

/// Create dialog when `order` is `None`, edit dialog otherwise.
#[component]
pub fn OrderForm(
    #[prop(optional)]
    order: Option<Order>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let initial = order.as_ref().map(OrderFormData::from_order).unwrap_or_default();
    let editing_id = order.as_ref().map(|o| o.id.clone());
    let editing = editing_id.is_some();

    let customer_name = RwSignal::new(initial.customer.name);
    let customer_email = RwSignal::new(initial.customer.email);
    let customer_phone = RwSignal::new(initial.customer.phone);
    let items = RwSignal::new(initial.items);
    let tax = RwSignal::new(initial.tax);
    let shipping = RwSignal::new(initial.shipping);
    let payment_method = RwSignal::new(initial.payment_method);
    let notes = RwSignal::new(initial.notes);
    let new_product = RwSignal::new(String::new());
    let new_quantity = RwSignal::new("1".to_string());
    let products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    spawn_local(async move {
        match product_api::fetch_products().await {
            Ok(list) => products.set(list),
            Err(e) => log::warn!("orders: product list unavailable: {}", e),
        }
    });

    let on_add_item = move |_| {
        let id = new_product.get_untracked();
        let quantity = new_quantity.get_untracked().trim().parse::<i64>().unwrap_or(1);
        if id.is_empty() {
            set_error.set(Some(
                "Please select a product and enter a valid quantity".to_string(),
            ));
            return;
        }
        let Some(product) = products.with_untracked(|list| list.iter().find(|p| p.id == id).cloned())
        else {
            set_error.set(Some("Product not found".to_string()));
            return;
        };
        let mut result = Ok(());
        items.update(|lines| result = add_line(lines, &product, quantity));
        match result {
            Ok(()) => {
                new_product.set(String::new());
                new_quantity.set("1".to_string());
                set_error.set(None);
            }
            Err(e) => set_error.set(Some(e)),
        }
    };

    let on_save = move |_| {
        let data = OrderFormData {
            customer: Customer {
                name: customer_name.get_untracked(),
                email: customer_email.get_untracked(),
                phone: customer_phone.get_untracked(),
            },
            items: items.get_untracked(),
            tax: tax.get_untracked(),
            shipping: shipping.get_untracked(),
            payment_method: payment_method.get_untracked(),
            notes: notes.get_untracked(),
        };
        let dto = match data.to_dto() {
            Ok(dto) => dto,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };

        set_saving.set(true);
        set_error.set(None);
        let editing_id = editing_id.clone();

        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_order(&id, &dto).await,
                None => api::create_order(&dto).await.map(|_| ()),
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("orders: save failed: {}", e);
                    set_error.set(Some(if editing {
                        format!("Failed to update order: {}", e)
                    } else {
                        format!("Failed to create order: {}", e)
                    }));
                    set_saving.set(false);
                }
            }
        });
    };

    let disabled = Signal::derive(move || saving.get());
    let charge = move |field: RwSignal<String>| field.with(|v| parse_amount(v, "").unwrap_or(0.0));

    let lines = move || {
        items.with(|lines| {
            lines
                .iter()
                .cloned()
                .enumerate()
                .map(|(index, line)| {
                    let total = format_usd(line.total());
                    view! {
                        <tr>
                            <td>{line.name}</td>
                            <td>{line.quantity}</td>
                            <td>{format_usd(line.price)}</td>
                            <td>{total}</td>
                            <td>
                                <button
                                    class="data-table__menu-toggle"
                                    title="Remove"
                                    on:click=move |_| items.update(|l| {
                                        if index < l.len() {
                                            l.remove(index);
                                        }
                                    })
                                >
                                    {icon("delete")}
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal modal--wide" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{if editing { "Edit Order" } else { "Create New Order" }}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body form-grid">
                    {move || error.get().map(|e| view! { <div class="alert alert--error form-grid__full">{e}</div> })}

                    <h3 class="form__section-title">"Customer Information"</h3>
                    <div class="form__group">
                        <Label>"Customer Name"</Label>
                        <Input value=customer_name disabled=disabled />
                    </div>
                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input value=customer_email input_type=InputType::Email disabled=disabled />
                    </div>
                    <div class="form__group">
                        <Label>"Phone"</Label>
                        <Input value=customer_phone disabled=disabled />
                    </div>
                    <div class="form__group">
                        <Label>"Payment Method"</Label>
                        <select
                            class="form__select"
                            prop:value=move || payment_method.get()
                            on:change=move |ev| payment_method.set(event_target_value(&ev))
                        >
                            {PAYMENT_METHODS.iter().copied().map(|(value, label)| view! {
                                <option value=value selected=move || payment_method.get() == value>{label}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form__group">
                        <Label>"Tax ($)"</Label>
                        <Input value=tax input_type=InputType::Number disabled=disabled />
                    </div>
                    <div class="form__group">
                        <Label>"Shipping ($)"</Label>
                        <Input value=shipping input_type=InputType::Number disabled=disabled />
                    </div>

                    <h3 class="form__section-title">"Order Items"</h3>
                    <div class="form__inline form-grid__full">
                        <div class="form__group">
                            <Label>"Product"</Label>
                            <select
                                class="form__select"
                                prop:value=move || new_product.get()
                                on:change=move |ev| new_product.set(event_target_value(&ev))
                            >
                                <option value="" selected=move || new_product.get().is_empty()>"Select a product"</option>
                                {move || products.get().into_iter().map(|p| {
                                    let label = format!(
                                        "{} - {} (Stock: {})",
                                        p.name,
                                        format_usd(p.price),
                                        p.stock_quantity
                                    );
                                    let id = p.id.clone();
                                    view! {
                                        <option value=p.id selected=move || new_product.get() == id>{label}</option>
                                    }
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form__group">
                            <Label>"Quantity"</Label>
                            <Input value=new_quantity input_type=InputType::Number disabled=disabled />
                        </div>
                        <Button appearance=ButtonAppearance::Secondary on_click=on_add_item disabled=disabled>
                            {icon("plus")}
                            " Add Item"
                        </Button>
                    </div>

                    <div class="form-grid__full">
                        <Show when=move || items.with(|l| !l.is_empty())>
                            <table class="order-lines">
                                <thead>
                                    <tr>
                                        <th>"Product"</th>
                                        <th>"Quantity"</th>
                                        <th>"Price"</th>
                                        <th>"Total"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>{lines}</tbody>
                            </table>
                            <div class="order-totals">
                                <span>{move || format!("Subtotal: {}", items.with(|l| format_usd(subtotal(l))))}</span>
                                <span>{move || format!("Tax: {}", format_usd(charge(tax)))}</span>
                                <span>{move || format!("Shipping: {}", format_usd(charge(shipping)))}</span>
                                <strong>
                                    {move || format!(
                                        "Total: {}",
                                        format_usd(items.with(|l| subtotal(l)) + charge(tax) + charge(shipping))
                                    )}
                                </strong>
                            </div>
                        </Show>
                    </div>

                    <div class="form__group form-grid__full">
                        <Label>"Notes"</Label>
                        <textarea
                            class="form__textarea"
                            prop:value=move || notes.get()
                            on:input=move |ev| notes.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                        disabled=disabled
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get() || items.with(|l| l.is_empty()))
                    >
                        {move || match (saving.get(), editing) {
                            (true, _) => "Saving...",
                            (false, true) => "Update Order",
                            (false, false) => "Create Order",
                        }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_order::aggregate::{OrderItem, OrderStatus};
    use serde_json::json;

    fn product(id: &str, price: f64, stock: i64) -> Product {
        Product {
            id: id.into(),
            name: format!("Product {}", id),
            description: String::new(),
            sku: id.to_uppercase(),
            category: "Electronics".into(),
            price,
            cost: 0.0,
            stock_quantity: stock,
            min_stock_level: 1,
            supplier: None,
            unit: "pcs".into(),
            tags: vec![],
            created_at: String::new(),
        }
    }

    fn customer() -> Customer {
        Customer {
            name: "Budi".into(),
            email: "budi@example.com".into(),
            phone: "0812".into(),
        }
    }

    #[test]
    fn test_add_line_merges_same_product() {
        let mut lines = Vec::new();
        add_line(&mut lines, &product("p1", 5.0, 10), 2).unwrap();
        add_line(&mut lines, &product("p2", 1.5, 10), 1).unwrap();
        add_line(&mut lines, &product("p1", 5.0, 10), 3).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].quantity, 5);
        assert_eq!(subtotal(&lines), 26.5);
    }

    #[test]
    fn test_add_line_checks_stock_and_quantity() {
        let mut lines = Vec::new();
        assert_eq!(
            add_line(&mut lines, &product("p1", 5.0, 3), 4),
            Err("Insufficient stock. Available: 3".to_string())
        );
        assert!(add_line(&mut lines, &product("p1", 5.0, 3), 0).is_err());
        assert!(lines.is_empty());
    }

    #[test]
    fn test_dto_requires_items_and_customer() {
        let mut data = OrderFormData::default();
        assert_eq!(
            data.to_dto(),
            Err("Please add at least one item to the order".to_string())
        );
        add_line(&mut data.items, &product("p1", 5.0, 10), 1).unwrap();
        assert_eq!(
            data.to_dto(),
            Err("Please fill in all customer information".to_string())
        );
        data.customer = customer();
        data.shipping = "7.5".into();
        let dto = data.to_dto().unwrap();
        assert_eq!(
            dto.items,
            vec![OrderLineDto {
                product: "p1".into(),
                quantity: 1
            }]
        );
        assert_eq!(dto.shipping, 7.5);
        assert_eq!(dto.payment_method, "credit_card");
    }

    #[test]
    fn test_edit_uses_product_ids() {
        let order = Order {
            id: "o1".into(),
            order_number: "ORD-0001".into(),
            customer: customer(),
            items: vec![OrderItem {
                product: json!({ "_id": "p1", "name": "Cable" }),
                quantity: 2,
                price: 5.0,
            }],
            status: OrderStatus::Pending,
            subtotal: 10.0,
            tax: 1.0,
            shipping: 0.0,
            total: 11.0,
            payment_method: "cash".into(),
            notes: "leave at door".into(),
            created_at: String::new(),
        };
        let data = OrderFormData::from_order(&order);
        assert_eq!(data.items[0].name, "Cable");
        assert_eq!(data.tax, "1");
        let dto = data.to_dto().unwrap();
        assert_eq!(dto.items[0].product, "p1");
        assert_eq!(dto.notes, "leave at door");
    }
}
