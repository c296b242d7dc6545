use contracts::domain::a001_product::aggregate::{Product, ProductDto, CATEGORIES, UNITS};
use contracts::domain::a003_supplier::aggregate::Supplier;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_product::api;
use crate::domain::a003_supplier::api as supplier_api;
use crate::shared::icons::icon;
use crate::shared::number_format::{parse_amount, parse_count};

/// Values of the create / edit dialog. Numbers are kept as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFormData {
    pub name: String,
    pub description: String,
    pub sku: String,
    pub category: String,
    pub price: String,
    pub cost: String,
    pub stock_quantity: String,
    pub min_stock_level: String,
    /// Supplier id, empty for none.
    pub supplier: String,
    pub unit: String,
    pub tags: Vec<String>,
}

impl Default for ProductFormData {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            sku: String::new(),
            category: CATEGORIES[0].to_string(),
            price: String::new(),
            cost: String::new(),
            stock_quantity: String::new(),
            min_stock_level: String::new(),
            supplier: String::new(),
            unit: UNITS[0].0.to_string(),
            tags: Vec::new(),
        }
    }
}

impl ProductFormData {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            sku: product.sku.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            cost: product.cost.to_string(),
            stock_quantity: product.stock_quantity.to_string(),
            min_stock_level: product.min_stock_level.to_string(),
            supplier: product
                .supplier
                .as_ref()
                .map(|s| s.id.clone())
                .unwrap_or_default(),
            unit: product.unit.clone(),
            tags: product.tags.clone(),
        }
    }

    pub fn to_dto(&self) -> Result<ProductDto, String> {
        if self.name.trim().is_empty() {
            return Err("Product name is required".to_string());
        }
        if self.sku.trim().is_empty() {
            return Err("SKU is required".to_string());
        }
        Ok(ProductDto {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            sku: self.sku.trim().to_string(),
            category: self.category.clone(),
            price: parse_amount(&self.price, "Price")?,
            cost: parse_amount(&self.cost, "Cost")?,
            stock_quantity: parse_count(&self.stock_quantity, "Stock quantity")?,
            min_stock_level: parse_count(&self.min_stock_level, "Minimum stock level")?,
            supplier: (!self.supplier.is_empty()).then(|| self.supplier.clone()),
            unit: self.unit.clone(),
            tags: self.tags.clone(),
        })
    }
}

/// Create dialog when `product` is `None`, edit dialog otherwise.
#[component]
pub fn ProductForm(
    #[prop(optional)]
    product: Option<Product>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let initial = product
        .as_ref()
        .map(ProductFormData::from_product)
        .unwrap_or_default();
    let editing_id = product.as_ref().map(|p| p.id.clone());
    let editing = editing_id.is_some();
    let tags = initial.tags.clone();

    let name = RwSignal::new(initial.name);
    let description = RwSignal::new(initial.description);
    let sku = RwSignal::new(initial.sku);
    let category = RwSignal::new(initial.category);
    let price = RwSignal::new(initial.price);
    let cost = RwSignal::new(initial.cost);
    let stock_quantity = RwSignal::new(initial.stock_quantity);
    let min_stock_level = RwSignal::new(initial.min_stock_level);
    let supplier = RwSignal::new(initial.supplier);
    let unit = RwSignal::new(initial.unit);
    let suppliers: RwSignal<Vec<Supplier>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    spawn_local(async move {
        match supplier_api::fetch_suppliers().await {
            Ok(list) => suppliers.set(list),
            Err(e) => log::warn!("products: supplier list unavailable: {}", e),
        }
    });

    let on_save = move |_| {
        let data = ProductFormData {
            name: name.get_untracked(),
            description: description.get_untracked(),
            sku: sku.get_untracked(),
            category: category.get_untracked(),
            price: price.get_untracked(),
            cost: cost.get_untracked(),
            stock_quantity: stock_quantity.get_untracked(),
            min_stock_level: min_stock_level.get_untracked(),
            supplier: supplier.get_untracked(),
            unit: unit.get_untracked(),
            tags: tags.clone(),
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
                Some(id) => api::update_product(&id, &dto).await,
                None => api::create_product(&dto).await.map(|_| ()),
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("products: save failed: {}", e);
                    set_error.set(Some(if editing {
                        format!("Failed to update product: {}", e)
                    } else {
                        format!("Failed to create product: {}", e)
                    }));
                    set_saving.set(false);
                }
            }
        });
    };

    let disabled = Signal::derive(move || saving.get());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal modal--wide" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{if editing { "Edit Product" } else { "Add New Product" }}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body form-grid">
                    {move || error.get().map(|e| view! { <div class="alert alert--error form-grid__full">{e}</div> })}

                    <div class="form__group">
                        <Label>"Product Name"</Label>
                        <Input value=name disabled=disabled />
                    </div>

                    <div class="form__group">
                        <Label>"SKU"</Label>
                        <Input value=sku disabled=disabled />
                    </div>

                    <div class="form__group form-grid__full">
                        <Label>"Description"</Label>
                        <Input value=description disabled=disabled />
                    </div>

                    <div class="form__group">
                        <Label>"Category"</Label>
                        <select
                            class="form__select"
                            prop:value=move || category.get()
                            on:change=move |ev| category.set(event_target_value(&ev))
                        >
                            {CATEGORIES.iter().copied().map(|c| view! {
                                <option value=c selected=move || category.get() == c>{c}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form__group">
                        <Label>"Supplier"</Label>
                        <select
                            class="form__select"
                            prop:value=move || supplier.get()
                            on:change=move |ev| supplier.set(event_target_value(&ev))
                        >
                            <option value="" selected=move || supplier.get().is_empty()>"None"</option>
                            {move || suppliers.get().into_iter().map(|s| {
                                let id = s.id.clone();
                                let selected = move || supplier.get() == id;
                                view! { <option value=s.id selected=selected>{s.name}</option> }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form__group">
                        <Label>"Price ($)"</Label>
                        <Input value=price input_type=InputType::Number disabled=disabled />
                    </div>

                    <div class="form__group">
                        <Label>"Cost ($)"</Label>
                        <Input value=cost input_type=InputType::Number disabled=disabled />
                    </div>

                    <div class="form__group">
                        <Label>"Unit"</Label>
                        <select
                            class="form__select"
                            prop:value=move || unit.get()
                            on:change=move |ev| unit.set(event_target_value(&ev))
                        >
                            {UNITS.iter().copied().map(|(value, label)| view! {
                                <option value=value selected=move || unit.get() == value>{label}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form__group">
                        <Label>"Stock Quantity"</Label>
                        <Input value=stock_quantity input_type=InputType::Number disabled=disabled />
                    </div>

                    <div class="form__group">
                        <Label>"Minimum Stock Level"</Label>
                        <Input value=min_stock_level input_type=InputType::Number disabled=disabled />
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
                    <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=disabled>
                        {move || match (saving.get(), editing) {
                            (true, _) => "Saving...",
                            (false, true) => "Update Product",
                            (false, false) => "Create Product",
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
    use contracts::domain::a001_product::aggregate::SupplierRef;

    fn filled() -> ProductFormData {
        ProductFormData {
            name: " USB Cable ".into(),
            sku: "CAB-1".into(),
            price: "2.5".into(),
            cost: "1".into(),
            stock_quantity: "40".into(),
            min_stock_level: "10".into(),
            ..ProductFormData::default()
        }
    }

    #[test]
    fn test_defaults_match_new_product_dialog() {
        let data = ProductFormData::default();
        assert_eq!(data.category, "Electronics");
        assert_eq!(data.unit, "pcs");
        assert!(data.supplier.is_empty());
    }

    #[test]
    fn test_numbers_are_parsed_for_the_dto() {
        let dto = filled().to_dto().unwrap();
        assert_eq!(dto.name, "USB Cable");
        assert_eq!(dto.price, 2.5);
        assert_eq!(dto.stock_quantity, 40);
        assert_eq!(dto.supplier, None);
    }

    #[test]
    fn test_invalid_fields_are_reported() {
        let mut data = filled();
        data.sku = "  ".into();
        assert_eq!(data.to_dto(), Err("SKU is required".to_string()));

        let mut data = filled();
        data.price = "abc".into();
        assert_eq!(data.to_dto(), Err("Price must be a number".to_string()));

        let mut data = filled();
        data.min_stock_level = "-2".into();
        assert_eq!(
            data.to_dto(),
            Err("Minimum stock level cannot be negative".to_string())
        );
    }

    #[test]
    fn test_edit_keeps_supplier_id_and_tags() {
        let product = Product {
            id: "p1".into(),
            name: "Cable".into(),
            description: String::new(),
            sku: "C-1".into(),
            category: "Electronics".into(),
            price: 1299.0,
            cost: 800.5,
            stock_quantity: 25,
            min_stock_level: 10,
            supplier: Some(SupplierRef {
                id: "s1".into(),
                name: "Acme".into(),
            }),
            unit: "box".into(),
            tags: vec!["new".into()],
            created_at: String::new(),
        };
        let data = ProductFormData::from_product(&product);
        assert_eq!(data.price, "1299");
        let dto = data.to_dto().unwrap();
        assert_eq!(dto.supplier.as_deref(), Some("s1"));
        assert_eq!(dto.cost, 800.5);
        assert_eq!(dto.tags, vec!["new".to_string()]);
        assert_eq!(dto.unit, "box");
    }
}
