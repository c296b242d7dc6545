use contracts::domain::a001_product::aggregate::{Product, StockStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::domain::a001_product::api;
use crate::domain::a001_product::ui::details::ProductForm;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, ErrorAlert};
use crate::shared::data_table::{
    CellContent, CellValue, ChipTone, Column, DataTable, TableOptions, TableRow, ViewState,
};
use crate::shared::dialogs;
use crate::shared::icons::icon;
use crate::shared::list_state::{EditDialog, ListState};
use crate::shared::number_format::format_usd;

impl TableRow for Product {
    fn field(&self, name: &str) -> Option<CellValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "sku" => Some(self.sku.as_str().into()),
            "description" => Some(self.description.as_str().into()),
            "category" => Some(self.category.as_str().into()),
            "price" => Some(self.price.into()),
            "cost" => Some(self.cost.into()),
            "stockQuantity" => Some(self.stock_quantity.into()),
            "minStockLevel" => Some(self.min_stock_level.into()),
            "supplier" => self
                .supplier
                .as_ref()
                .and_then(|s| serde_json::to_value(s).ok())
                .and_then(|v| CellValue::from_json(&v)),
            "unit" => Some(self.unit.as_str().into()),
            "tags" => Some(self.tags.as_slice().into()),
            "createdAt" => Some(self.created_at.as_str().into()),
            _ => None,
        }
    }

    fn row_id(&self) -> Option<String> {
        Some(self.id.clone())
    }
}

fn stock_tone(status: StockStatus) -> ChipTone {
    match status {
        StockStatus::OutOfStock => ChipTone::Error,
        StockStatus::Low => ChipTone::Warning,
        StockStatus::InStock => ChipTone::Success,
        StockStatus::Overstocked => ChipTone::Info,
    }
}

fn product_summary(product: &Product) -> String {
    format!(
        "Product Details:\nName: {}\nSKU: {}\nCategory: {}\nPrice: {}\nStock: {} {}\nStatus: {}",
        product.name,
        product.sku,
        product.category,
        format_usd(product.price),
        product.stock_quantity,
        product.unit,
        product.stock_status().label()
    )
}

fn columns() -> Vec<Column<Product>> {
    vec![
        Column::new("name", "Product").render(|_, product: &Product| {
            let name = product.name.clone();
            let sku = format!("SKU: {}", product.sku);
            CellContent::view(move || {
                view! {
                    <div class="cell-stack">
                        <span class="cell-stack__primary">{name.clone()}</span>
                        <span class="cell-stack__secondary">{sku.clone()}</span>
                    </div>
                }
                .into_any()
            })
        }),
        Column::new("category", "Category").chip(ChipTone::Primary),
        Column::new("price", "Price").currency(),
        Column::new("stockQuantity", "Stock Level").render(|_, product: &Product| {
            let status = product.stock_status();
            let quantity = product.stock_quantity;
            let percentage = product.stock_percentage();
            CellContent::view(move || {
                view! {
                    <div class="stock-level">
                        <div class="stock-level__row">
                            <span>{quantity}</span>
                            <Badge tone=stock_tone(status)>{status.label()}</Badge>
                        </div>
                        <div class="stock-level__bar">
                            <div
                                class=format!("stock-level__fill stock-level__fill--{}", stock_tone(status).as_str())
                                style:width=format!("{}%", percentage)
                            ></div>
                        </div>
                    </div>
                }
                .into_any()
            })
        }),
        Column::new("supplier", "Supplier").render(|_, product: &Product| {
            CellContent::text(
                product
                    .supplier
                    .as_ref()
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|| "N/A".to_string()),
            )
        }),
        Column::new("cost", "Cost").currency(),
        Column::new("createdAt", "Added").date(),
    ]
}

#[component]
pub fn ProductsListPage() -> impl IntoView {
    let state = RwSignal::new(ListState::<Product>::default());
    let dialog = RwSignal::new(EditDialog::<Product>::default());
    let view_state = RwSignal::new(ViewState::default());

    let load_data = move || {
        state.update(|s| s.begin_load());
        spawn_local(async move {
            let result = api::fetch_products().await;
            if let Err(e) = &result {
                log::error!("products: {}", e);
            }
            state.update(|s| s.finish_load(result, "products"));
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let on_delete = Callback::new(move |product: Product| {
        if !dialogs::confirm(&format!("Are you sure you want to delete {}?", product.name)) {
            return;
        }
        spawn_local(async move {
            match api::delete_product(&product.id).await {
                Ok(()) => state.update(|s| s.remove(&product.id)),
                Err(e) => {
                    log::error!("products: delete failed: {}", e);
                    state.update(|s| s.fail(format!("Failed to delete product: {}", e)));
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
        .with_search_placeholder("Search products by name, SKU or category...")
        .with_empty_message("No products found");

    view! {
        <div class="page">
            <PageHeader title="Product Management" subtitle="Manage your product inventory">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| dialog.update(|d| d.open_create())
                >
                    {icon("plus")}
                    " Add Product"
                </Button>
            </PageHeader>

            <ErrorAlert
                message=Signal::derive(move || state.with(|s| s.error.clone()))
                on_dismiss=Callback::new(move |_| state.update(|s| s.dismiss_error()))
            />

            <DataTable
                data=Signal::derive(move || state.with(|s| s.items.clone()))
                columns=columns()
                title="Products"
                loading=Signal::derive(move || state.with(|s| s.loading))
                options=options
                view_state=view_state
                on_view=Callback::new(move |product: Product| {
                    dialogs::alert(&product_summary(&product))
                })
                on_edit=Callback::new(move |product: Product| dialog.update(|d| d.open_edit(product)))
                on_delete=on_delete
                on_refresh=Callback::new(move |_| load_data())
            />

            {move || match dialog.get() {
                EditDialog::Closed => None,
                EditDialog::Create => Some(view! {
                    <ProductForm on_close=close_dialog on_saved=on_saved />
                }.into_any()),
                EditDialog::Edit(product) => Some(view! {
                    <ProductForm product=product on_close=close_dialog on_saved=on_saved />
                }.into_any()),
            }}
        </div>
    }
}
