use serde::{Deserialize, Serialize};

// ============================================================================
// Status
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Only pending orders can be moved forward from the list screen.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Processing),
            _ => None,
        }
    }
}

// ============================================================================
// Order
// ============================================================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product id, or the populated product name when the backend expands it.
    #[serde(default)]
    pub product: serde_json::Value,
    pub quantity: i64,
    #[serde(default)]
    pub price: f64,
}

impl OrderItem {
    /// Id of the ordered product, whether or not the backend populated it.
    pub fn product_id(&self) -> Option<String> {
        match &self.product {
            serde_json::Value::String(id) => Some(id.clone()),
            serde_json::Value::Object(map) => map
                .get("_id")
                .and_then(|v| v.as_str())
                .map(str::to_string),
            _ => None,
        }
    }

    /// Populated product name; a bare id is shown as is.
    pub fn product_name(&self) -> String {
        match &self.product {
            serde_json::Value::Object(map) => map
                .get("name")
                .and_then(|n| n.as_str())
                .unwrap_or("Unknown product")
                .to_string(),
            serde_json::Value::String(id) => id.clone(),
            _ => "Unknown product".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub order_number: String,
    #[serde(default)]
    pub customer: Customer,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub shipping: f64,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderStatusDto {
    pub status: OrderStatus,
}

/// Payment methods as `(value, label)`.
pub const PAYMENT_METHODS: [(&str, &str); 4] = [
    ("cash", "Cash"),
    ("credit_card", "Credit Card"),
    ("bank_transfer", "Bank Transfer"),
    ("online_payment", "Online Payment"),
];

/// One line of an order being created or edited. The backend prices it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineDto {
    pub product: String,
    pub quantity: i64,
}

/// Body of `POST /api/orders` and `PUT /api/orders/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub customer: Customer,
    pub items: Vec<OrderLineDto>,
    pub tax: f64,
    pub shipping: f64,
    pub payment_method: String,
    pub notes: String,
}
