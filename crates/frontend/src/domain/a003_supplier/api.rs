use contracts::config::endpoints;
use contracts::domain::a003_supplier::aggregate::{SetSupplierActiveDto, Supplier, SupplierDto};

use crate::shared::api_client;

pub async fn fetch_suppliers() -> Result<Vec<Supplier>, String> {
    api_client::get_json(endpoints::SUPPLIERS, "fetch suppliers").await
}

pub async fn create_supplier(dto: &SupplierDto) -> Result<Supplier, String> {
    api_client::post_json(endpoints::SUPPLIERS, dto, "create supplier").await
}

pub async fn update_supplier(id: &str, dto: &SupplierDto) -> Result<(), String> {
    api_client::put_json(&endpoints::item(endpoints::SUPPLIERS, id), dto, "update supplier").await
}

pub async fn set_supplier_active(id: &str, is_active: bool) -> Result<(), String> {
    api_client::put_json(
        &endpoints::item(endpoints::SUPPLIERS, id),
        &SetSupplierActiveDto { is_active },
        "update supplier",
    )
    .await
}

pub async fn delete_supplier(id: &str) -> Result<(), String> {
    api_client::delete(&endpoints::item(endpoints::SUPPLIERS, id), "delete supplier").await
}
