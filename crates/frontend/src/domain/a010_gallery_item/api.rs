use contracts::domain::a010_gallery_item::aggregate::{GalleryItem, GalleryItemDto};

use crate::shared::api_utils::{delete, get_json, get_public, post_json, put_json, seg};

const BASE: &str = "/api/gallery-items";

pub async fn fetch_items() -> Result<Vec<GalleryItem>, String> {
    get_json(BASE).await
}

pub async fn fetch_public_items() -> Result<Vec<GalleryItem>, String> {
    get_public(BASE).await
}

pub async fn save_item(dto: &GalleryItemDto) -> Result<GalleryItem, String> {
    match &dto.id {
        Some(id) => put_json(&format!("{}/{}", BASE, seg(id)), dto).await,
        None => post_json(BASE, dto).await,
    }
}

pub async fn delete_item(id: &str) -> Result<(), String> {
    delete(&format!("{}/{}", BASE, seg(id))).await
}
