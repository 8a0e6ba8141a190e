//! Tab content registry: the one place that maps a tab key to its view.
//!
//! Keys opened from a shared link go through the same role guards as the
//! sidebar, so a pasted URL cannot reach a view the user could not open.

use contracts::system::users::UserRole;
use leptos::logging::log;
use leptos::prelude::*;

use super::tab_labels::B2B_DETAIL_PREFIX;
use crate::domain::a001_capacity_rule::ui::board::CapacityBoard;
use crate::domain::a002_blackout_date::ui::list::BlackoutDateList;
use crate::domain::a003_emergency_settings::ui::EmergencySettingsPage;
use crate::domain::a004_b2b_account::ui::details::B2bAccountDetails;
use crate::domain::a004_b2b_account::ui::list::B2bAccountList;
use crate::domain::a005_inventory_item::ui::list::InventoryList;
use crate::domain::a006_consumption_rule::ui::list::ConsumptionRuleList;
use crate::domain::a007_purchase_order::ui::list::PurchaseOrderList;
use crate::domain::a008_service_catalog::ui::catalog::ServiceCatalogPage;
use crate::domain::a009_tier_package::ui::list::TierPackageList;
use crate::domain::a010_gallery_item::ui::grid::GalleryGrid;
use crate::domain::a011_case_study::ui::list::CaseStudyList;
use crate::domain::a012_inquiry_form::ui::list::InquiryFormList;
use crate::domain::a012_inquiry_form::ui::submissions::InquirySubmissionList;
use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::guard::{RequireAdmin, RequireRole};
use crate::system::notification_prefs::ui::NotificationPrefsPage;
use crate::system::users::ui::list::UsersListPage;

/// Detail id from a detail tab key; `new` opens an empty form.
fn detail_id(key: &str, prefix: &str) -> Option<Option<String>> {
    let raw = key.strip_prefix(prefix)?;
    if raw.is_empty() {
        return None;
    }
    Some((raw != "new").then(|| raw.to_string()))
}

/// Renders the content of the tab `key`.
///
/// `tabs_store` lets detail views close their own tab.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        // Scheduling
        "a001_capacity_rule" => view! { <CapacityBoard /> }.into_any(),
        "a002_blackout_date" => view! { <BlackoutDateList /> }.into_any(),
        "a003_emergency_settings" => view! { <EmergencySettingsPage /> }.into_any(),

        // Customers
        "a004_b2b_account" => view! { <B2bAccountList /> }.into_any(),
        k if detail_id(k, B2B_DETAIL_PREFIX).is_some() => {
            let id = detail_id(k, B2B_DETAIL_PREFIX).flatten();
            log!("Opening B2B account detail: {:?}", id);
            view! {
                <B2bAccountDetails
                    id=id
                    tab_key=key_for_close.clone()
                    on_close=Callback::new({
                        let key_for_close = key_for_close.clone();
                        move |_| {
                            tabs_store.close_tab(&key_for_close);
                        }
                    })
                />
            }
            .into_any()
        }
        "a012_inquiry_submission" => view! { <InquirySubmissionList /> }.into_any(),

        // Stock
        "a005_inventory_item" => view! { <InventoryList /> }.into_any(),
        "a006_consumption_rule" => view! { <ConsumptionRuleList /> }.into_any(),
        "a007_purchase_order" => view! { <PurchaseOrderList /> }.into_any(),

        // Catalog & website
        "a008_service_catalog" => view! {
            <RequireRole role=UserRole::Manager>
                <ServiceCatalogPage />
            </RequireRole>
        }
        .into_any(),
        "a009_tier_package" => view! {
            <RequireRole role=UserRole::Manager>
                <TierPackageList />
            </RequireRole>
        }
        .into_any(),
        "a010_gallery_item" => view! {
            <RequireRole role=UserRole::Manager>
                <GalleryGrid />
            </RequireRole>
        }
        .into_any(),
        "a011_case_study" => view! {
            <RequireRole role=UserRole::Manager>
                <CaseStudyList />
            </RequireRole>
        }
        .into_any(),
        "a012_inquiry_form" => view! {
            <RequireRole role=UserRole::Manager>
                <InquiryFormList />
            </RequireRole>
        }
        .into_any(),

        // System
        "sys_users" => view! {
            <RequireAdmin>
                <UsersListPage />
            </RequireAdmin>
        }
        .into_any(),
        "sys_notification_prefs" => view! { <NotificationPrefsPage /> }.into_any(),

        _ => {
            log!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_id() {
        assert_eq!(
            detail_id("a004_b2b_account_detail_42", B2B_DETAIL_PREFIX),
            Some(Some("42".to_string()))
        );
        assert_eq!(detail_id("a004_b2b_account_detail_new", B2B_DETAIL_PREFIX), Some(None));
        assert_eq!(detail_id("a004_b2b_account_detail_", B2B_DETAIL_PREFIX), None);
        assert_eq!(detail_id("a004_b2b_account", B2B_DETAIL_PREFIX), None);
    }
}
