use contracts::config::endpoints;
use contracts::domain::a001_product::aggregate::{Product, ProductDto};

use crate::shared::api_client;

pub async fn fetch_products() -> Result<Vec<Product>, String> {
    api_client::get_json(endpoints::PRODUCTS, "fetch products").await
}

pub async fn create_product(dto: &ProductDto) -> Result<Product, String> {
    api_client::post_json(endpoints::PRODUCTS, dto, "create product").await
}

pub async fn update_product(id: &str, dto: &ProductDto) -> Result<(), String> {
    api_client::put_json(&endpoints::item(endpoints::PRODUCTS, id), dto, "update product").await
}

pub async fn delete_product(id: &str) -> Result<(), String> {
    api_client::delete(&endpoints::item(endpoints::PRODUCTS, id), "delete product").await
}
