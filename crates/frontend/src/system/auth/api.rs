use contracts::config::endpoints;
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::shared::api_client;

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { email, password };
    api_client::post_json(endpoints::AUTH_LOGIN, &request, "sign in").await
}

/// Current user for the stored token
pub async fn fetch_profile() -> Result<UserInfo, String> {
    api_client::get_json(endpoints::AUTH_PROFILE, "load profile").await
}
