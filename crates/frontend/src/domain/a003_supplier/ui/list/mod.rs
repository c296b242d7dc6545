use contracts::domain::a003_supplier::aggregate::Supplier;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::domain::a003_supplier::api;
use crate::domain::a003_supplier::ui::details::SupplierForm;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, ErrorAlert, StatusBadge};
use crate::shared::data_table::{
    CellContent, CellValue, ChipTone, Column, DataTable, TableOptions, TableRow, ViewState,
};
use crate::shared::dialogs;
use crate::shared::icons::icon;
use crate::shared::list_state::{EditDialog, ListState};
use crate::shared::number_format::format_usd;

impl TableRow for Supplier {
    fn field(&self, name: &str) -> Option<CellValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "code" => Some(self.code.as_str().into()),
            "contactPerson" => self
                .contact_person
                .as_ref()
                .and_then(|c| serde_json::to_value(c).ok())
                .and_then(|v| CellValue::from_json(&v)),
            "categories" => Some(self.categories.as_slice().into()),
            "paymentTerms" => self.payment_terms.as_deref().map(CellValue::from),
            "creditLimit" => Some(self.credit_limit.into()),
            "rating" => Some(i64::from(self.rating).into()),
            "isActive" => Some(self.is_active.into()),
            "createdAt" => Some(self.created_at.as_str().into()),
            _ => None,
        }
    }

    fn row_id(&self) -> Option<String> {
        Some(self.id.clone())
    }
}

fn contact_lines(supplier: &Supplier) -> (String, String) {
    let pick = |value: Option<&String>| {
        value
            .filter(|v| !v.is_empty())
            .cloned()
            .unwrap_or_else(|| "N/A".to_string())
    };
    let contact = supplier.contact_person.as_ref();
    (
        pick(contact.map(|c| &c.name)),
        pick(contact.map(|c| &c.email)),
    )
}

fn supplier_summary(supplier: &Supplier) -> String {
    let (contact, email) = contact_lines(supplier);
    let address = &supplier.address;
    format!(
        "Supplier Details:\nName: {} ({})\nContact: {} <{}>\nAddress: {}, {}, {}\nPayment Terms: {}\nCredit Limit: {}\nRating: {}/5",
        supplier.name,
        supplier.code,
        contact,
        email,
        address.street,
        address.city,
        address.country,
        supplier.payment_terms_label(),
        format_usd(supplier.credit_limit),
        supplier.rating
    )
}

fn columns(on_toggle: Callback<Supplier>) -> Vec<Column<Supplier>> {
    vec![
        Column::new("name", "Supplier").render(|_, supplier: &Supplier| {
            let name = supplier.name.clone();
            let code = format!("Code: {}", supplier.code);
            CellContent::view(move || {
                view! {
                    <div class="cell-stack">
                        <span class="cell-stack__primary">{name.clone()}</span>
                        <span class="cell-stack__secondary">{code.clone()}</span>
                    </div>
                }
                .into_any()
            })
        }),
        Column::new("contactPerson", "Contact").render(|_, supplier: &Supplier| {
            let (name, email) = contact_lines(supplier);
            CellContent::view(move || {
                view! {
                    <div class="cell-stack">
                        <span class="cell-stack__primary">{name.clone()}</span>
                        <span class="cell-stack__secondary">{email.clone()}</span>
                    </div>
                }
                .into_any()
            })
        }),
        Column::new("categories", "Categories").render(|_, supplier: &Supplier| {
            if supplier.categories.is_empty() {
                return CellContent::chip("N/A", ChipTone::Default);
            }
            let categories = supplier.categories.clone();
            CellContent::view(move || {
                let chips = categories
                    .clone()
                    .into_iter()
                    .map(|c| view! { <Badge tone=ChipTone::Primary>{c}</Badge> })
                    .collect_view();
                view! { <div class="chip-list">{chips}</div> }.into_any()
            })
        }),
        Column::new("paymentTerms", "Payment Terms").render(|_, supplier: &Supplier| {
            CellContent::chip(supplier.payment_terms_label(), ChipTone::Info)
        }),
        Column::new("isActive", "Status").render(move |_, supplier: &Supplier| {
            let supplier = supplier.clone();
            CellContent::view(move || {
                let supplier = supplier.clone();
                let active = supplier.is_active;
                view! {
                    <label class="status-toggle">
                        <input
                            type="checkbox"
                            prop:checked=active
                            on:change=move |_| on_toggle.run(supplier.clone())
                        />
                        <StatusBadge active=active on_label="Active" off_label="Inactive" />
                    </label>
                }
                .into_any()
            })
        }),
        Column::new("createdAt", "Added").date(),
    ]
}

#[component]
pub fn SuppliersListPage() -> impl IntoView {
    let state = RwSignal::new(ListState::<Supplier>::default());
    let dialog = RwSignal::new(EditDialog::<Supplier>::default());
    let view_state = RwSignal::new(ViewState::default());

    let load_data = move || {
        state.update(|s| s.begin_load());
        spawn_local(async move {
            let result = api::fetch_suppliers().await;
            if let Err(e) = &result {
                log::error!("suppliers: {}", e);
            }
            state.update(|s| s.finish_load(result, "suppliers"));
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let on_toggle = Callback::new(move |supplier: Supplier| {
        let next = !supplier.is_active;
        spawn_local(async move {
            match api::set_supplier_active(&supplier.id, next).await {
                Ok(()) => state.update(|s| s.update_item(&supplier.id, |x| x.is_active = next)),
                Err(e) => {
                    log::error!("suppliers: toggle failed: {}", e);
                    state.update(|s| s.fail("Failed to update supplier status"));
                }
            }
        });
    });

    let on_delete = Callback::new(move |supplier: Supplier| {
        if !dialogs::confirm(&format!("Are you sure you want to delete {}?", supplier.name)) {
            return;
        }
        spawn_local(async move {
            match api::delete_supplier(&supplier.id).await {
                Ok(()) => state.update(|s| s.remove(&supplier.id)),
                Err(e) => {
                    log::error!("suppliers: delete failed: {}", e);
                    state.update(|s| s.fail(format!("Failed to delete supplier: {}", e)));
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
        .with_search_placeholder("Search suppliers by name or code...")
        .with_empty_message("No suppliers found");

    view! {
        <div class="page">
            <PageHeader
                title="Supplier Management"
                subtitle="Manage supplier relationships, contracts, and performance"
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| dialog.update(|d| d.open_create())
                >
                    {icon("plus")}
                    " Add Supplier"
                </Button>
            </PageHeader>

            <ErrorAlert
                message=Signal::derive(move || state.with(|s| s.error.clone()))
                on_dismiss=Callback::new(move |_| state.update(|s| s.dismiss_error()))
            />

            <DataTable
                data=Signal::derive(move || state.with(|s| s.items.clone()))
                columns=columns(on_toggle)
                title="Suppliers"
                loading=Signal::derive(move || state.with(|s| s.loading))
                options=options
                view_state=view_state
                on_view=Callback::new(move |supplier: Supplier| {
                    dialogs::alert(&supplier_summary(&supplier))
                })
                on_edit=Callback::new(move |supplier: Supplier| {
                    dialog.update(|d| d.open_edit(supplier))
                })
                on_delete=on_delete
                on_refresh=Callback::new(move |_| load_data())
            />

            {move || match dialog.get() {
                EditDialog::Closed => None,
                EditDialog::Create => Some(view! {
                    <SupplierForm on_close=close_dialog on_saved=on_saved />
                }.into_any()),
                EditDialog::Edit(supplier) => Some(view! {
                    <SupplierForm supplier=supplier on_close=close_dialog on_saved=on_saved />
                }.into_any()),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::{evaluate, format_cell, ViewState};
    use contracts::domain::a003_supplier::aggregate::{Address, BusinessInfo, ContactPerson};

    fn supplier(name: &str, code: &str, contact: Option<&str>) -> Supplier {
        Supplier {
            id: code.to_lowercase(),
            name: name.into(),
            code: code.into(),
            contact_person: contact.map(|n| ContactPerson {
                name: n.into(),
                ..ContactPerson::default()
            }),
            address: Address::default(),
            business_info: BusinessInfo::default(),
            payment_terms: Some("net_60".into()),
            credit_limit: 5000.0,
            categories: vec!["Electronics".into(), "Cables".into()],
            rating: 4,
            is_active: true,
            notes: String::new(),
            created_at: "2023-11-30T08:00:00".into(),
        }
    }

    fn test_columns() -> Vec<Column<Supplier>> {
        let owner = Owner::new();
        owner.set();
        columns(Callback::new(|_| {}))
    }

    #[test]
    fn test_contact_falls_back_to_na() {
        assert_eq!(
            contact_lines(&supplier("Acme", "ACM", Some("Rina"))),
            ("Rina".to_string(), "N/A".to_string())
        );
        assert_eq!(
            contact_lines(&supplier("Acme", "ACM", None)),
            ("N/A".to_string(), "N/A".to_string())
        );
    }

    #[test]
    fn test_payment_terms_chip() {
        let cols = test_columns();
        let s = supplier("Acme", "ACM", None);
        assert_eq!(format_cell(&s, &cols[3]), CellContent::chip("NET 60", ChipTone::Info));
        assert_eq!(format_cell(&s, &cols[5]), CellContent::text("11/30/2023"));
    }

    #[test]
    fn test_categories_render_as_chip_list() {
        let cols = test_columns();
        let s = supplier("Acme", "ACM", None);
        assert!(matches!(format_cell(&s, &cols[2]), CellContent::View(_)));
    }

    #[test]
    fn test_empty_categories() {
        let cols = test_columns();
        let mut s = supplier("Acme", "ACM", None);
        s.categories.clear();
        assert_eq!(format_cell(&s, &cols[2]), CellContent::chip("N/A", ChipTone::Default));
    }

    #[test]
    fn test_search_by_name_and_category() {
        let cols = test_columns();
        let rows = vec![
            supplier("Acme", "ACM", Some("Rina")),
            supplier("Globex", "GLX", Some("Hank")),
        ];
        let mut state = ViewState::default();
        state.set_search_term("globex");
        assert_eq!(evaluate(&rows, &cols, &state, true).filtered_count(), 1);
        // the code is rendered under the name but is not a column field
        state.set_search_term("glx");
        assert_eq!(evaluate(&rows, &cols, &state, true).filtered_count(), 0);
        state.set_search_term("cables");
        assert_eq!(evaluate(&rows, &cols, &state, true).filtered_count(), 2);
        // contact person is a nested record
        state.set_search_term("rina");
        assert_eq!(evaluate(&rows, &cols, &state, true).filtered_count(), 0);
    }
}
