use contracts::domain::a008_service_catalog::aggregate::{
    Service, ServiceCategory, ServiceCategoryDto, ServiceDto,
};
use contracts::domain::a008_service_catalog::grouping::ServiceGroup;

use crate::shared::api_utils::{delete, get_json, get_public, post_json, put_json, seg};

pub async fn fetch_categories() -> Result<Vec<ServiceCategory>, String> {
    get_json("/api/service-categories").await
}

pub async fn save_category(dto: &ServiceCategoryDto) -> Result<ServiceCategory, String> {
    match &dto.id {
        Some(id) => put_json(&format!("/api/service-categories/{}", seg(id)), dto).await,
        None => post_json("/api/service-categories", dto).await,
    }
}

pub async fn delete_category(id: &str) -> Result<(), String> {
    delete(&format!("/api/service-categories/{}", seg(id))).await
}

pub async fn fetch_services() -> Result<Vec<Service>, String> {
    get_json("/api/services").await
}

pub async fn save_service(dto: &ServiceDto) -> Result<Service, String> {
    match &dto.id {
        Some(id) => put_json(&format!("/api/services/{}", seg(id)), dto).await,
        None => post_json("/api/services", dto).await,
    }
}

pub async fn delete_service(id: &str) -> Result<(), String> {
    delete(&format!("/api/services/{}", seg(id))).await
}

/// Public, unauthenticated
pub async fn fetch_grouped_services() -> Result<Vec<ServiceGroup>, String> {
    get_public("/api/services/grouped").await
}
