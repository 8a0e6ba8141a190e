//! Filters persisted in the page query string.
//!
//! Dashboard URLs look like `?active=a005_inventory_item&category=vinyl&low_stock=true`.
//! A view only adopts filters from the URL when `active` names its own tab.

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use web_sys::window;

use crate::layout::global_context::AppGlobalContext;

#[derive(Debug, Default, Deserialize)]
struct ActiveParam {
    #[serde(default)]
    active: Option<String>,
}

/// `active` tab key of a raw query string (without the leading `?`).
pub fn active_key(query: &str) -> Option<String> {
    serde_qs::from_str::<ActiveParam>(query.trim_start_matches('?'))
        .ok()
        .and_then(|p| p.active)
        .filter(|k| !k.is_empty())
}

/// Filters from `query` when it is scoped to `tab_key`.
pub fn parse_scoped<T: DeserializeOwned>(query: &str, tab_key: &str) -> Option<T> {
    let query = query.trim_start_matches('?');
    if active_key(query).as_deref() != Some(tab_key) {
        return None;
    }
    match serde_qs::from_str::<T>(query) {
        Ok(filters) => Some(filters),
        Err(e) => {
            log::warn!("Ignoring malformed filters for {}: {}", tab_key, e);
            None
        }
    }
}

/// `active=<tab_key>` followed by the non-empty filter fields.
pub fn build_scoped<T: Serialize>(tab_key: &str, filters: &T) -> String {
    let mut out = format!("active={}", urlencoding::encode(tab_key));
    match serde_qs::to_string(filters) {
        Ok(qs) => {
            for pair in qs.split('&').filter(|p| !p.is_empty() && !p.ends_with('=')) {
                out.push('&');
                out.push_str(pair);
            }
        }
        Err(e) => log::warn!("Could not serialize filters for {}: {}", tab_key, e),
    }
    out
}

pub fn current_query() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
        .trim_start_matches('?')
        .to_string()
}

pub fn replace_query(query: &str) {
    let new_url = format!("?{}", query);
    let Some(w) = window() else { return };
    let current = w.location().search().unwrap_or_default();
    if current == new_url {
        return;
    }
    if let Ok(history) = w.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
    }
}

/// Initial filters for a view: the URL's when scoped to this tab, otherwise the default.
pub fn read_for<T: DeserializeOwned + Default>(tab_key: &str) -> T {
    parse_scoped(&current_query(), tab_key).unwrap_or_default()
}

pub fn write_for<T: Serialize>(tab_key: &str, filters: &T) {
    replace_query(&build_scoped(tab_key, filters));
}

/// Keeps the URL in step with `filters` while `tab_key` is the active tab.
pub fn sync_filters<T>(tab_key: &'static str, filters: RwSignal<T>)
where
    T: Serialize + Clone + Send + Sync + 'static,
{
    let Some(ctx) = use_context::<AppGlobalContext>() else {
        return;
    };
    Effect::new(move |_| {
        let current = filters.get();
        if ctx.active.get().as_deref() == Some(tab_key) {
            write_for(tab_key, &current);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_blackout_date::aggregate::{BlackoutFilter, BlackoutScope};
    use contracts::domain::a005_inventory_item::aggregate::InventoryFilter;

    #[test]
    fn test_active_key() {
        assert_eq!(active_key("?active=sys_users&search=x").as_deref(), Some("sys_users"));
        assert_eq!(active_key("search=x"), None);
        assert_eq!(active_key("active="), None);
    }

    #[test]
    fn test_round_trip() {
        let filters = InventoryFilter {
            search: "vinyl roll".into(),
            category: Some("Media".into()),
            low_stock: true,
        };
        let qs = build_scoped("a005_inventory_item", &filters);
        assert!(qs.starts_with("active=a005_inventory_item&"));
        let back: InventoryFilter = parse_scoped(&qs, "a005_inventory_item").unwrap();
        assert_eq!(back, filters);
    }

    #[test]
    fn test_empty_fields_omitted() {
        let qs = build_scoped("a002_blackout_date", &BlackoutFilter::default());
        assert!(!qs.contains("search="));
        let back: BlackoutFilter = parse_scoped(&qs, "a002_blackout_date").unwrap();
        assert_eq!(back.scope, BlackoutScope::default());
    }

    #[test]
    fn test_scoped_to_other_tab() {
        let qs = "active=a007_purchase_order&search=vinyl";
        assert!(parse_scoped::<InventoryFilter>(qs, "a005_inventory_item").is_none());
        assert!(parse_scoped::<InventoryFilter>("", "a005_inventory_item").is_none());
    }
}
