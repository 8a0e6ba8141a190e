use contracts::domain::a005_inventory_item::aggregate::{InventoryItem, InventoryItemDto, StockAdjustmentDto};

use crate::shared::api_utils::{delete, get_json, post_json, put_json, seg};

const BASE: &str = "/api/inventory-items";

pub async fn fetch_items() -> Result<Vec<InventoryItem>, String> {
    get_json(BASE).await
}

pub async fn save_item(dto: &InventoryItemDto) -> Result<InventoryItem, String> {
    match &dto.id {
        Some(id) => put_json(&format!("{}/{}", BASE, seg(id)), dto).await,
        None => post_json(BASE, dto).await,
    }
}

pub async fn delete_item(id: &str) -> Result<(), String> {
    delete(&format!("{}/{}", BASE, seg(id))).await
}

/// Returns the item with its new quantity
pub async fn adjust_stock(id: &str, dto: &StockAdjustmentDto) -> Result<InventoryItem, String> {
    post_json(&format!("{}/{}/adjust", BASE, seg(id)), dto).await
}
