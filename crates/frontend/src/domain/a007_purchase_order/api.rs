use contracts::domain::a007_purchase_order::aggregate::{
    PurchaseOrder, PurchaseOrderDto, PurchaseOrderStatus, ReceivePurchaseOrderDto,
};

use crate::shared::api_utils::{delete, get_json, post_json, put_json, request, seg, Auth, Method};

const BASE: &str = "/api/purchase-orders";

pub const RECEIVE_UNAVAILABLE: &str = "Receiving purchase orders is not available yet.";

pub async fn fetch_orders() -> Result<Vec<PurchaseOrder>, String> {
    get_json(BASE).await
}

pub async fn save_order(dto: &PurchaseOrderDto) -> Result<PurchaseOrder, String> {
    match &dto.id {
        Some(id) => put_json(&format!("{}/{}", BASE, seg(id)), dto).await,
        None => post_json(BASE, dto).await,
    }
}

/// Submit and cancel are plain updates with a new status
pub async fn set_status(order: &PurchaseOrder, status: PurchaseOrderStatus) -> Result<PurchaseOrder, String> {
    let mut dto = PurchaseOrderDto::from_order(order);
    dto.status = status;
    save_order(&dto).await
}

pub async fn delete_order(id: &str) -> Result<(), String> {
    delete(&format!("{}/{}", BASE, seg(id))).await
}

pub async fn receive_order(id: &str, dto: &ReceivePurchaseOrderDto) -> Result<PurchaseOrder, String> {
    request(Method::Post, &format!("{}/{}/receive", BASE, seg(id)), Some(dto), Auth::Bearer)
        .await
        .map_err(|f| f.or_unavailable(RECEIVE_UNAVAILABLE))
}
