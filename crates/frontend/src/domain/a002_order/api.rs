use contracts::config::endpoints;
use contracts::domain::a002_order::aggregate::{
    Order, OrderDto, OrderStatus, UpdateOrderStatusDto,
};

use crate::shared::api_client;

pub async fn fetch_orders() -> Result<Vec<Order>, String> {
    api_client::get_json(endpoints::ORDERS, "fetch orders").await
}

/// The backend assigns the order number and computes the totals.
pub async fn create_order(dto: &OrderDto) -> Result<Order, String> {
    api_client::post_json(endpoints::ORDERS, dto, "create order").await
}

pub async fn update_order(id: &str, dto: &OrderDto) -> Result<(), String> {
    api_client::put_json(&endpoints::item(endpoints::ORDERS, id), dto, "update order").await
}

/// `PUT /api/orders/{id}/status`
pub async fn update_order_status(id: &str, status: OrderStatus) -> Result<(), String> {
    let path = format!("{}/status", endpoints::item(endpoints::ORDERS, id));
    api_client::put_json(&path, &UpdateOrderStatusDto { status }, "update order status").await
}

pub async fn delete_order(id: &str) -> Result<(), String> {
    api_client::delete(&endpoints::item(endpoints::ORDERS, id), "delete order").await
}
