use contracts::domain::a006_consumption_rule::aggregate::{ConsumptionRule, ConsumptionRuleDto};

use crate::shared::api_utils::{delete, get_json, post_json, put_json, seg};

const BASE: &str = "/api/consumption-rules";

pub async fn fetch_rules() -> Result<Vec<ConsumptionRule>, String> {
    get_json(BASE).await
}

pub async fn save_rule(dto: &ConsumptionRuleDto) -> Result<ConsumptionRule, String> {
    match &dto.id {
        Some(id) => put_json(&format!("{}/{}", BASE, seg(id)), dto).await,
        None => post_json(BASE, dto).await,
    }
}

pub async fn delete_rule(id: &str) -> Result<(), String> {
    delete(&format!("{}/{}", BASE, seg(id))).await
}
