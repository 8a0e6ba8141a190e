use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::shared::api_utils::{get_json, post_json, post_public};

pub async fn login(email: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { email, password };
    post_public("/api/auth/login", &request).await
}

/// Validates the stored token
pub async fn get_current_user() -> Result<UserInfo, String> {
    get_json("/api/auth/me").await
}

pub async fn logout() -> Result<(), String> {
    post_json::<_, serde_json::Value>("/api/auth/logout", &serde_json::json!({}))
        .await
        .map(|_| ())
}
