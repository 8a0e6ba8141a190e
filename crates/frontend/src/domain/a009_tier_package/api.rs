use contracts::domain::a009_tier_package::aggregate::{TierPackage, TierPackageDto};

use crate::shared::api_utils::{delete, get_json, get_public, post_json, put_json, seg};

const BASE: &str = "/api/tier-packages";

pub async fn fetch_packages() -> Result<Vec<TierPackage>, String> {
    get_json(BASE).await
}

/// Same list, without the session token, for the public site
pub async fn fetch_public_packages() -> Result<Vec<TierPackage>, String> {
    get_public(BASE).await
}

pub async fn save_package(dto: &TierPackageDto) -> Result<TierPackage, String> {
    match &dto.id {
        Some(id) => put_json(&format!("{}/{}", BASE, seg(id)), dto).await,
        None => post_json(BASE, dto).await,
    }
}

pub async fn delete_package(id: &str) -> Result<(), String> {
    delete(&format!("{}/{}", BASE, seg(id))).await
}
