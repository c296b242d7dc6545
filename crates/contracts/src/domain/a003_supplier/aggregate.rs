use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactPerson {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub position: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInfo {
    #[serde(default)]
    pub tax_id: String,
    #[serde(default)]
    pub registration_number: String,
    #[serde(default)]
    pub website: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: String,
    pub contact_person: Option<ContactPerson>,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub business_info: BusinessInfo,
    #[serde(default)]
    pub payment_terms: Option<String>,
    #[serde(default)]
    pub credit_limit: f64,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub created_at: String,
}

impl Supplier {
    /// `net_30` -> `NET 30`
    pub fn payment_terms_label(&self) -> String {
        match &self.payment_terms {
            Some(terms) if !terms.is_empty() => terms.replacen('_', " ", 1).to_uppercase(),
            _ => "N/A".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSupplierActiveDto {
    pub is_active: bool,
}

/// Payment terms as `(value, label)`.
pub const PAYMENT_TERMS: [(&str, &str); 5] = [
    ("immediate", "Immediate"),
    ("net_15", "Net 15"),
    ("net_30", "Net 30"),
    ("net_60", "Net 60"),
    ("net_90", "Net 90"),
];

/// Body of `POST /api/suppliers` and `PUT /api/suppliers/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDto {
    pub name: String,
    pub code: String,
    pub contact_person: ContactPerson,
    pub address: Address,
    pub business_info: BusinessInfo,
    pub payment_terms: String,
    pub credit_limit: f64,
    pub categories: Vec<String>,
    pub rating: u8,
    pub is_active: bool,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_terms_label() {
        let json = r#"{ "_id": "s1", "name": "Acme", "paymentTerms": "net_30" }"#;
        let mut supplier: Supplier = serde_json::from_str(json).unwrap();
        assert_eq!(supplier.payment_terms_label(), "NET 30");
        supplier.payment_terms = None;
        assert_eq!(supplier.payment_terms_label(), "N/A");
        assert!(supplier.contact_person.is_none());
    }
}
