use serde::{Deserialize, Serialize};

use super::users::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub department: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_accepts_mongo_id() {
        let json = r#"{
            "token": "abc.def.ghi",
            "user": { "_id": "u1", "name": "Admin", "email": "admin@erp.local", "role": "admin" }
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.user.id, "u1");
        assert_eq!(response.user.role, UserRole::Admin);
        assert!(response.user.department.is_none());
    }
}
