use serde::{Deserialize, Serialize};

// ============================================================================
// Supplier reference (populated by the backend)
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

// ============================================================================
// Product
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub sku: String,
    #[serde(default)]
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub stock_quantity: i64,
    #[serde(default)]
    pub min_stock_level: i64,
    pub supplier: Option<SupplierRef>,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: String,
}

/// Categories offered by the product and supplier dialogs.
pub const CATEGORIES: [&str; 6] = [
    "Electronics",
    "Clothing",
    "Books",
    "Home & Garden",
    "Sports",
    "Other",
];

/// Units of measure as `(value, label)`.
pub const UNITS: [(&str, &str); 6] = [
    ("pcs", "Pieces"),
    ("kg", "Kilograms"),
    ("liter", "Liters"),
    ("box", "Box"),
    ("pair", "Pair"),
    ("set", "Set"),
];

/// Body of `POST /api/products` and `PUT /api/products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub name: String,
    pub description: String,
    pub sku: String,
    pub category: String,
    pub price: f64,
    pub cost: f64,
    pub stock_quantity: i64,
    pub min_stock_level: i64,
    /// Supplier id; omitted when none is chosen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    pub unit: String,
    pub tags: Vec<String>,
}

/// Stock classification relative to the product's minimum level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    OutOfStock,
    Low,
    InStock,
    Overstocked,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::Low => "Low Stock",
            StockStatus::InStock => "In Stock",
            StockStatus::Overstocked => "Overstocked",
        }
    }
}

impl Product {
    /// Overstocked means more than twice the minimum level.
    pub fn stock_status(&self) -> StockStatus {
        if self.stock_quantity <= 0 {
            return StockStatus::OutOfStock;
        }
        if self.stock_quantity <= self.min_stock_level {
            return StockStatus::Low;
        }
        if self.min_stock_level > 0 && self.stock_quantity > self.min_stock_level * 2 {
            return StockStatus::Overstocked;
        }
        StockStatus::InStock
    }

    /// Fill level for the stock bar, 0..=100.
    pub fn stock_percentage(&self) -> u8 {
        match self.stock_status() {
            StockStatus::OutOfStock => 0,
            StockStatus::Low => {
                if self.min_stock_level <= 0 {
                    100
                } else {
                    (self.stock_quantity * 100 / self.min_stock_level).clamp(0, 100) as u8
                }
            }
            StockStatus::InStock | StockStatus::Overstocked => 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: i64, min: i64) -> Product {
        Product {
            id: "p1".into(),
            name: "Widget".into(),
            description: String::new(),
            sku: "W-1".into(),
            category: "Electronics".into(),
            price: 10.0,
            cost: 4.0,
            stock_quantity: stock,
            min_stock_level: min,
            supplier: None,
            unit: "pcs".into(),
            tags: vec![],
            created_at: String::new(),
        }
    }

    #[test]
    fn test_stock_status() {
        assert_eq!(product(0, 10).stock_status(), StockStatus::OutOfStock);
        assert_eq!(product(10, 10).stock_status(), StockStatus::Low);
        assert_eq!(product(15, 10).stock_status(), StockStatus::InStock);
        assert_eq!(product(21, 10).stock_status(), StockStatus::Overstocked);
    }

    #[test]
    fn test_stock_percentage() {
        assert_eq!(product(5, 10).stock_percentage(), 50);
        assert_eq!(product(0, 10).stock_percentage(), 0);
        assert_eq!(product(50, 10).stock_percentage(), 100);
    }

    #[test]
    fn test_dto_omits_missing_supplier() {
        let dto = ProductDto {
            name: "Cable".into(),
            description: String::new(),
            sku: "C-9".into(),
            category: CATEGORIES[0].into(),
            price: 2.5,
            cost: 1.0,
            stock_quantity: 40,
            min_stock_level: 10,
            supplier: None,
            unit: "pcs".into(),
            tags: vec![],
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["stockQuantity"], 40);
        assert!(json.get("supplier").is_none());
    }

    #[test]
    fn test_product_with_populated_supplier() {
        let json = r#"{
            "_id": "p9", "name": "Cable", "sku": "C-9", "price": 2.5,
            "stockQuantity": 40, "minStockLevel": 10,
            "supplier": { "_id": "s1", "name": "Acme" }
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.supplier.map(|s| s.name), Some("Acme".to_string()));
        assert_eq!(p.stock_quantity, 40);
        assert!(p.tags.is_empty());
    }
}
