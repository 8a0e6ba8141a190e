use contracts::domain::a001_capacity_rule::aggregate::{CapacityRule, CapacityRuleDto};

use crate::shared::api_utils::{delete, get_json, post_json, put_json, seg};

const BASE: &str = "/api/calendar-capacity";

pub async fn fetch_rules() -> Result<Vec<CapacityRule>, String> {
    get_json(BASE).await
}

/// Creates or updates depending on `dto.id`
pub async fn save_rule(dto: &CapacityRuleDto) -> Result<CapacityRule, String> {
    match &dto.id {
        Some(id) => put_json(&format!("{}/{}", BASE, seg(id)), dto).await,
        None => post_json(BASE, dto).await,
    }
}

pub async fn delete_rule(id: &str) -> Result<(), String> {
    delete(&format!("{}/{}", BASE, seg(id))).await
}
