//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares an HTML `id` of the form
//! `{entity}--{category}` (e.g. `"a005_inventory_item--list"`) and a
//! `data-page-category` with one of the constants below. The `--` separator
//! lets the id copied from the DOM inspector lead straight to the module.

/// Table with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Board or grid layout (weekly capacity, gallery).
pub const PAGE_CAT_BOARD: &str = "board";

/// Singleton settings form.
pub const PAGE_CAT_SETTINGS: &str = "settings";

/// User and account administration.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_BOARD,
    PAGE_CAT_SETTINGS,
    PAGE_CAT_SYSTEM,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && is_known_category(category),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id() {
        assert!(is_valid_page_id("a005_inventory_item--list"));
        assert!(is_valid_page_id("sys_users--system"));
        assert!(!is_valid_page_id("a005_inventory_item"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a005--unknown"));
    }
}
