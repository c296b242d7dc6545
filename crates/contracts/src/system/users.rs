use serde::{Deserialize, Serialize};

// ============================================================================
// Role
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    #[default]
    Employee,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Admin, UserRole::Manager, UserRole::Employee];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::Employee => "employee",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Manager => "Manager",
            UserRole::Employee => "Employee",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }
}

pub const DEPARTMENTS: [&str; 5] = ["IT", "Sales", "Inventory", "Finance", "HR"];

// ============================================================================
// User
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub department: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub last_login: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub department: String,
    pub is_active: bool,
}

/// Partial update; `None` fields are left out of the request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UpdateUserDto {
    pub fn toggle_active(user: &User) -> Self {
        Self {
            is_active: Some(!user.is_active),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_backend_json() {
        let json = r#"{
            "_id": "65f0c1",
            "name": "Ann Lee",
            "email": "ann@example.com",
            "role": "manager",
            "department": "Sales",
            "isActive": false,
            "lastLogin": null,
            "createdAt": "2024-03-15T14:02:26.123Z"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "65f0c1");
        assert_eq!(user.role, UserRole::Manager);
        assert!(!user.is_active);
        assert!(user.last_login.is_none());
    }

    #[test]
    fn test_update_skips_unset_fields() {
        let user = User {
            id: "1".into(),
            name: "A".into(),
            email: "a@b.c".into(),
            role: UserRole::Admin,
            department: "IT".into(),
            is_active: true,
            last_login: None,
            created_at: String::new(),
        };
        let body = serde_json::to_value(UpdateUserDto::toggle_active(&user)).unwrap();
        assert_eq!(body, serde_json::json!({ "isActive": false }));
    }

    #[test]
    fn test_role_round_trip_names() {
        assert_eq!(UserRole::from_str_opt("admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::from_str_opt("root"), None);
        assert_eq!(UserRole::Employee.label(), "Employee");
    }
}
