//! Static configuration shared by the front end and the REST backend.

/// Port the REST backend listens on.
pub const API_PORT: u16 = 5000;

/// Request timeout applied by the HTTP client, in milliseconds.
pub const API_TIMEOUT_MS: u32 = 10_000;

pub const APP_NAME: &str = "ERP System";
pub const APP_VERSION: &str = "1.0.0";
pub const APP_DESCRIPTION: &str = "Enterprise Resource Planning System";

/// REST endpoint paths, relative to the API base URL.
pub mod endpoints {
    pub const AUTH_LOGIN: &str = "/api/auth/login";
    pub const AUTH_PROFILE: &str = "/api/auth/profile";
    pub const USERS: &str = "/api/users";
    pub const PRODUCTS: &str = "/api/products";
    pub const ORDERS: &str = "/api/orders";
    pub const SUPPLIERS: &str = "/api/suppliers";

    /// `/api/users/{id}` style path for a single document.
    pub fn item(collection: &str, id: &str) -> String {
        format!("{}/{}", collection, id)
    }
}

#[cfg(test)]
mod tests {
    use super::endpoints;

    #[test]
    fn test_item_path() {
        assert_eq!(endpoints::item(endpoints::USERS, "42"), "/api/users/42");
        assert_eq!(
            endpoints::item(endpoints::ORDERS, "o-1"),
            "/api/orders/o-1"
        );
    }
}
