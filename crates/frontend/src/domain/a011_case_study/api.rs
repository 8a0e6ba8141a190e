use contracts::domain::a011_case_study::aggregate::{CaseStudy, CaseStudyDto};

use crate::shared::api_utils::{delete, get_json, get_public, post_json, put_json, seg};

const BASE: &str = "/api/case-studies";

pub async fn fetch_case_studies() -> Result<Vec<CaseStudy>, String> {
    get_json(BASE).await
}

pub async fn fetch_public_case_studies() -> Result<Vec<CaseStudy>, String> {
    get_public(BASE).await
}

pub async fn save_case_study(dto: &CaseStudyDto) -> Result<CaseStudy, String> {
    match &dto.id {
        Some(id) => put_json(&format!("{}/{}", BASE, seg(id)), dto).await,
        None => post_json(BASE, dto).await,
    }
}

pub async fn delete_case_study(id: &str) -> Result<(), String> {
    delete(&format!("{}/{}", BASE, seg(id))).await
}
