pub mod a001_capacity_rule;
pub mod a002_blackout_date;
pub mod a003_emergency_settings;
pub mod a004_b2b_account;
pub mod a005_inventory_item;
pub mod a006_consumption_rule;
pub mod a007_purchase_order;
pub mod a008_service_catalog;
pub mod a009_tier_package;
pub mod a010_gallery_item;
pub mod a011_case_study;
pub mod a012_inquiry_form;
