use contracts::domain::a001_product::aggregate::CATEGORIES;
use contracts::domain::a003_supplier::aggregate::{
    Address, BusinessInfo, ContactPerson, Supplier, SupplierDto, PAYMENT_TERMS,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_supplier::api;
use crate::shared::icons::icon;
use crate::shared::number_format::parse_amount;

/// Adds `category` if absent, removes it otherwise.
pub fn toggle_category(categories: &mut Vec<String>, category: &str) {
    match categories.iter().position(|c| c == category) {
        Some(index) => {
            categories.remove(index);
        }
        None => categories.push(category.to_string()),
    }
}

fn rating_label(stars: u8) -> String {
    format!("{} Star{}", stars, if stars == 1 { "" } else { "s" })
}

/// Values of the create / edit dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct SupplierFormData {
    pub name: String,
    pub code: String,
    pub contact_person: ContactPerson,
    pub address: Address,
    pub business_info: BusinessInfo,
    pub payment_terms: String,
    pub credit_limit: String,
    pub categories: Vec<String>,
    pub rating: u8,
    pub is_active: bool,
    pub notes: String,
}

impl Default for SupplierFormData {
    fn default() -> Self {
        Self {
            name: String::new(),
            code: String::new(),
            contact_person: ContactPerson::default(),
            address: Address {
                country: "Indonesia".to_string(),
                ..Address::default()
            },
            business_info: BusinessInfo::default(),
            payment_terms: "net_30".to_string(),
            credit_limit: "0".to_string(),
            categories: vec![CATEGORIES[0].to_string()],
            rating: 3,
            is_active: true,
            notes: String::new(),
        }
    }
}

impl SupplierFormData {
    pub fn from_supplier(supplier: &Supplier) -> Self {
        Self {
            name: supplier.name.clone(),
            code: supplier.code.clone(),
            contact_person: supplier.contact_person.clone().unwrap_or_default(),
            address: supplier.address.clone(),
            business_info: supplier.business_info.clone(),
            payment_terms: supplier
                .payment_terms
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "net_30".to_string()),
            credit_limit: supplier.credit_limit.to_string(),
            categories: supplier.categories.clone(),
            rating: supplier.rating,
            is_active: supplier.is_active,
            notes: supplier.notes.clone(),
        }
    }

    pub fn to_dto(&self) -> Result<SupplierDto, String> {
        if self.name.trim().is_empty() {
            return Err("Company name is required".to_string());
        }
        if self.code.trim().is_empty() {
            return Err("Supplier code is required".to_string());
        }
        Ok(SupplierDto {
            name: self.name.trim().to_string(),
            code: self.code.trim().to_string(),
            contact_person: self.contact_person.clone(),
            address: self.address.clone(),
            business_info: self.business_info.clone(),
            payment_terms: self.payment_terms.clone(),
            credit_limit: parse_amount(&self.credit_limit, "Credit limit")?,
            categories: self.categories.clone(),
            rating: self.rating.clamp(1, 5),
            is_active: self.is_active,
            notes: self.notes.trim().to_string(),
        })
    }
}

/// Create dialog when `supplier` is `None`, edit dialog otherwise.
#[component]
pub fn SupplierForm(
    #[prop(optional)]
    supplier: Option<Supplier>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let initial = supplier
        .as_ref()
        .map(SupplierFormData::from_supplier)
        .unwrap_or_default();
    let editing_id = supplier.as_ref().map(|s| s.id.clone());
    let editing = editing_id.is_some();

    let name = RwSignal::new(initial.name);
    let code = RwSignal::new(initial.code);
    let contact_name = RwSignal::new(initial.contact_person.name);
    let contact_position = RwSignal::new(initial.contact_person.position);
    let contact_email = RwSignal::new(initial.contact_person.email);
    let contact_phone = RwSignal::new(initial.contact_person.phone);
    let street = RwSignal::new(initial.address.street);
    let city = RwSignal::new(initial.address.city);
    let state = RwSignal::new(initial.address.state);
    let zip_code = RwSignal::new(initial.address.zip_code);
    let country = RwSignal::new(initial.address.country);
    let tax_id = RwSignal::new(initial.business_info.tax_id);
    let registration_number = RwSignal::new(initial.business_info.registration_number);
    let website = RwSignal::new(initial.business_info.website);
    let payment_terms = RwSignal::new(initial.payment_terms);
    let credit_limit = RwSignal::new(initial.credit_limit);
    let categories = RwSignal::new(initial.categories);
    let rating = RwSignal::new(initial.rating);
    let is_active = RwSignal::new(initial.is_active);
    let notes = RwSignal::new(initial.notes);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let data = SupplierFormData {
            name: name.get_untracked(),
            code: code.get_untracked(),
            contact_person: ContactPerson {
                name: contact_name.get_untracked(),
                email: contact_email.get_untracked(),
                phone: contact_phone.get_untracked(),
                position: contact_position.get_untracked(),
            },
            address: Address {
                street: street.get_untracked(),
                city: city.get_untracked(),
                state: state.get_untracked(),
                zip_code: zip_code.get_untracked(),
                country: country.get_untracked(),
            },
            business_info: BusinessInfo {
                tax_id: tax_id.get_untracked(),
                registration_number: registration_number.get_untracked(),
                website: website.get_untracked(),
            },
            payment_terms: payment_terms.get_untracked(),
            credit_limit: credit_limit.get_untracked(),
            categories: categories.get_untracked(),
            rating: rating.get_untracked(),
            is_active: is_active.get_untracked(),
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
                Some(id) => api::update_supplier(&id, &dto).await,
                None => api::create_supplier(&dto).await.map(|_| ()),
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("suppliers: save failed: {}", e);
                    set_error.set(Some(if editing {
                        format!("Failed to update supplier: {}", e)
                    } else {
                        format!("Failed to create supplier: {}", e)
                    }));
                    set_saving.set(false);
                }
            }
        });
    };

    let disabled = Signal::derive(move || saving.get());
    let text_field = move |label: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form__group">
                <Label>{label}</Label>
                <Input value=value disabled=disabled />
            </div>
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal modal--wide" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{if editing { "Edit Supplier" } else { "Add New Supplier" }}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body form-grid">
                    {move || error.get().map(|e| view! { <div class="alert alert--error form-grid__full">{e}</div> })}

                    <h3 class="form__section-title">"Basic Information"</h3>
                    {text_field("Company Name", name)}
                    {text_field("Supplier Code", code)}

                    <h3 class="form__section-title">"Contact Person"</h3>
                    {text_field("Contact Person Name", contact_name)}
                    {text_field("Position", contact_position)}
                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input value=contact_email input_type=InputType::Email disabled=disabled />
                    </div>
                    {text_field("Phone", contact_phone)}

                    <h3 class="form__section-title">"Address"</h3>
                    <div class="form-grid__full">{text_field("Street Address", street)}</div>
                    {text_field("City", city)}
                    {text_field("State/Province", state)}
                    {text_field("ZIP Code", zip_code)}
                    {text_field("Country", country)}

                    <h3 class="form__section-title">"Business Information"</h3>
                    {text_field("Tax ID", tax_id)}
                    {text_field("Registration Number", registration_number)}
                    <div class="form-grid__full">{text_field("Website", website)}</div>

                    <h3 class="form__section-title">"Terms & Categories"</h3>
                    <div class="form__group">
                        <Label>"Payment Terms"</Label>
                        <select
                            class="form__select"
                            prop:value=move || payment_terms.get()
                            on:change=move |ev| payment_terms.set(event_target_value(&ev))
                        >
                            {PAYMENT_TERMS.iter().copied().map(|(value, label)| view! {
                                <option value=value selected=move || payment_terms.get() == value>{label}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form__group">
                        <Label>"Credit Limit"</Label>
                        <Input value=credit_limit input_type=InputType::Number disabled=disabled />
                    </div>
                    <div class="form__group">
                        <Label>"Categories"</Label>
                        <div class="form__checks">
                            {CATEGORIES.iter().copied().map(|c| view! {
                                <label class="status-toggle">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || categories.with(|list| list.iter().any(|x| x == c))
                                        on:change=move |_| categories.update(|list| toggle_category(list, c))
                                    />
                                    {c}
                                </label>
                            }).collect_view()}
                        </div>
                    </div>
                    <div class="form__group">
                        <Label>"Rating"</Label>
                        <select
                            class="form__select"
                            prop:value=move || rating.get().to_string()
                            on:change=move |ev| {
                                if let Ok(stars) = event_target_value(&ev).parse::<u8>() {
                                    rating.set(stars);
                                }
                            }
                        >
                            {(1..=5u8).map(|stars| view! {
                                <option value=stars.to_string() selected=move || rating.get() == stars>
                                    {rating_label(stars)}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form__group form-grid__full">
                        <Label>"Notes"</Label>
                        <textarea
                            class="form__textarea"
                            prop:value=move || notes.get()
                            on:input=move |ev| notes.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    <div class="form__group form-grid__full">
                        <Checkbox checked=is_active label="Active Supplier" />
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
                            (false, true) => "Update Supplier",
                            (false, false) => "Create Supplier",
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

    fn filled() -> SupplierFormData {
        SupplierFormData {
            name: " Acme Trading ".into(),
            code: "ACM".into(),
            credit_limit: "5000".into(),
            ..SupplierFormData::default()
        }
    }

    #[test]
    fn test_defaults_match_new_supplier_dialog() {
        let data = SupplierFormData::default();
        assert_eq!(data.address.country, "Indonesia");
        assert_eq!(data.payment_terms, "net_30");
        assert_eq!(data.categories, vec!["Electronics".to_string()]);
        assert_eq!(data.rating, 3);
        assert!(data.is_active);
    }

    #[test]
    fn test_toggle_category() {
        let mut list = vec!["Electronics".to_string()];
        toggle_category(&mut list, "Books");
        toggle_category(&mut list, "Electronics");
        assert_eq!(list, vec!["Books".to_string()]);
    }

    #[test]
    fn test_dto_validation() {
        let dto = filled().to_dto().unwrap();
        assert_eq!(dto.name, "Acme Trading");
        assert_eq!(dto.credit_limit, 5000.0);

        let mut data = filled();
        data.code.clear();
        assert_eq!(data.to_dto(), Err("Supplier code is required".to_string()));

        let mut data = filled();
        data.credit_limit = "lots".into();
        assert_eq!(data.to_dto(), Err("Credit limit must be a number".to_string()));
    }

    #[test]
    fn test_edit_fills_missing_parts() {
        let json = r#"{ "_id": "s1", "name": "Acme", "code": "ACM", "rating": 0 }"#;
        let supplier: Supplier = serde_json::from_str(json).unwrap();
        let data = SupplierFormData::from_supplier(&supplier);
        assert_eq!(data.contact_person, ContactPerson::default());
        assert_eq!(data.payment_terms, "net_30");
        assert!(data.categories.is_empty());
        assert_eq!(data.to_dto().unwrap().rating, 1);
    }

    #[test]
    fn test_rating_label() {
        assert_eq!(rating_label(1), "1 Star");
        assert_eq!(rating_label(4), "4 Stars");
    }
}
