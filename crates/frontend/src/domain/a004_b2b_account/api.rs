use contracts::domain::a004_b2b_account::aggregate::{
    B2bAccount, B2bAccountDto, B2bLocation, B2bLocationDto, ContractPrice, ContractPricingDto,
};

use crate::shared::api_utils::{delete, get_json, post_json, put_json, seg};

const BASE: &str = "/api/b2b-accounts";

fn account_path(id: &str) -> String {
    format!("{}/{}", BASE, seg(id))
}

pub async fn fetch_accounts() -> Result<Vec<B2bAccount>, String> {
    get_json(BASE).await
}

pub async fn fetch_account(id: &str) -> Result<B2bAccount, String> {
    get_json(&account_path(id)).await
}

/// Creates or updates depending on `dto.id`
pub async fn save_account(dto: &B2bAccountDto) -> Result<B2bAccount, String> {
    match &dto.id {
        Some(id) => put_json(&account_path(id), dto).await,
        None => post_json(BASE, dto).await,
    }
}

pub async fn delete_account(id: &str) -> Result<(), String> {
    delete(&account_path(id)).await
}

// ── Locations ────────────────────────────────────────────────────────────

pub async fn fetch_locations(account_id: &str) -> Result<Vec<B2bLocation>, String> {
    get_json(&format!("{}/locations", account_path(account_id))).await
}

pub async fn create_location(account_id: &str, dto: &B2bLocationDto) -> Result<B2bLocation, String> {
    post_json(&format!("{}/locations", account_path(account_id)), dto).await
}

pub async fn delete_location(account_id: &str, location_id: &str) -> Result<(), String> {
    delete(&format!("{}/locations/{}", account_path(account_id), seg(location_id))).await
}

// ── Contract pricing ─────────────────────────────────────────────────────

pub async fn fetch_contract_pricing(account_id: &str) -> Result<Vec<ContractPrice>, String> {
    get_json(&format!("{}/contract-pricing", account_path(account_id))).await
}

/// Replaces the whole price list
pub async fn save_contract_pricing(
    account_id: &str,
    dto: &ContractPricingDto,
) -> Result<Vec<ContractPrice>, String> {
    put_json(&format!("{}/contract-pricing", account_path(account_id)), dto).await
}
