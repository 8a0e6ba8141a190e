use contracts::domain::a002_blackout_date::aggregate::{BlackoutDate, BlackoutDateDto};

use crate::shared::api_utils::{delete, get_json, post_json, seg};

pub async fn fetch_blackout_dates() -> Result<Vec<BlackoutDate>, String> {
    get_json("/api/blackout-dates").await
}

pub async fn create_blackout_date(dto: &BlackoutDateDto) -> Result<BlackoutDate, String> {
    post_json("/api/blackout-dates", dto).await
}

pub async fn delete_blackout_date(id: &str) -> Result<(), String> {
    delete(&format!("/api/blackout-dates/{}", seg(id))).await
}
