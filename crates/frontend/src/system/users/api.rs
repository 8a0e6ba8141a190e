use contracts::system::users::{CreateUserDto, UpdateUserDto, User};

use crate::shared::api_utils::{delete, get_json, post_json, put_json, seg};

pub async fn fetch_users() -> Result<Vec<User>, String> {
    get_json("/api/users").await
}

pub async fn create_user(dto: &CreateUserDto) -> Result<User, String> {
    post_json("/api/users", dto).await
}

pub async fn update_user(id: &str, dto: &UpdateUserDto) -> Result<User, String> {
    put_json(&format!("/api/users/{}", seg(id)), dto).await
}

pub async fn delete_user(id: &str) -> Result<(), String> {
    delete(&format!("/api/users/{}", seg(id))).await
}
