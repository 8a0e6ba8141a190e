//! Tab titles for every dashboard view, keyed by tab key.

pub const B2B_DETAIL_PREFIX: &str = "a004_b2b_account_detail_";

/// Readable tab title for `key`. Detail tabs get their real title once the
/// record is loaded; until then the entity label is used.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Scheduling ───────────────────────────────────────────────────
        "a001_capacity_rule" => "Capacity rules",
        "a002_blackout_date" => "Blackout dates",
        "a003_emergency_settings" => "Emergency bookings",

        // ── Customers ────────────────────────────────────────────────────
        "a004_b2b_account" => "B2B accounts",
        k if k.starts_with(B2B_DETAIL_PREFIX) => "B2B account",
        "a012_inquiry_submission" => "Inquiries",

        // ── Stock ────────────────────────────────────────────────────────
        "a005_inventory_item" => "Inventory",
        "a006_consumption_rule" => "Consumption rules",
        "a007_purchase_order" => "Purchase orders",

        // ── Catalog & website ────────────────────────────────────────────
        "a008_service_catalog" => "Service catalog",
        "a009_tier_package" => "Tier packages",
        "a010_gallery_item" => "Gallery",
        "a011_case_study" => "Case studies",
        "a012_inquiry_form" => "Inquiry forms",

        // ── System ───────────────────────────────────────────────────────
        "sys_users" => "Users",
        "sys_notification_prefs" => "Notifications",

        _ => "",
    }
}

/// Title of a detail tab: «<entity> · <identifier>».
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("a007_purchase_order"), "Purchase orders");
        assert_eq!(tab_label_for_key("a004_b2b_account_detail_42"), "B2B account");
        assert_eq!(tab_label_for_key("nope"), "");
        assert_eq!(detail_tab_label("B2B account", "Acme"), "B2B account · Acme");
    }
}
