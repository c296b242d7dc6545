use contracts::config::endpoints;
use contracts::system::users::{CreateUserDto, UpdateUserDto, User};

use crate::shared::api_client;

/// Fetch all users
pub async fn fetch_users() -> Result<Vec<User>, String> {
    api_client::get_json(endpoints::USERS, "fetch users").await
}

/// Create new user
pub async fn create_user(dto: &CreateUserDto) -> Result<User, String> {
    api_client::post_json(endpoints::USERS, dto, "create user").await
}

/// Update user; only the fields set in `dto` are sent
pub async fn update_user(id: &str, dto: &UpdateUserDto) -> Result<(), String> {
    api_client::put_json(&endpoints::item(endpoints::USERS, id), dto, "update user").await
}

/// Delete user
pub async fn delete_user(id: &str) -> Result<(), String> {
    api_client::delete(&endpoints::item(endpoints::USERS, id), "delete user").await
}
