//! Sidebar with collapsible menu groups, filtered by the signed-in role.

use contracts::system::users::UserRole;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (tab key, label, icon)
    min_role: UserRole,
}

fn item(key: &'static str, icon: &'static str) -> (&'static str, &'static str, &'static str) {
    (key, tab_label_for_key(key), icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "scheduling",
            label: "Scheduling",
            icon: "calendar",
            items: vec![
                item("a001_capacity_rule", "calendar"),
                item("a002_blackout_date", "calendar-off"),
                item("a003_emergency_settings", "zap"),
            ],
            min_role: UserRole::Staff,
        },
        MenuGroup {
            id: "customers",
            label: "Customers",
            icon: "building",
            items: vec![
                item("a004_b2b_account", "building"),
                item("a012_inquiry_submission", "inbox"),
            ],
            min_role: UserRole::Staff,
        },
        MenuGroup {
            id: "stock",
            label: "Stock",
            icon: "package",
            items: vec![
                item("a005_inventory_item", "package"),
                item("a006_consumption_rule", "layers"),
                item("a007_purchase_order", "shopping-cart"),
            ],
            min_role: UserRole::Staff,
        },
        MenuGroup {
            id: "catalog",
            label: "Catalog & website",
            icon: "tag",
            items: vec![
                item("a008_service_catalog", "tag"),
                item("a009_tier_package", "star"),
                item("a010_gallery_item", "image"),
                item("a011_case_study", "briefcase"),
                item("a012_inquiry_form", "file-text"),
            ],
            min_role: UserRole::Manager,
        },
        MenuGroup {
            id: "administration",
            label: "Administration",
            icon: "settings",
            items: vec![item("sys_users", "users")],
            min_role: UserRole::Admin,
        },
        MenuGroup {
            id: "account",
            label: "My account",
            icon: "user",
            items: vec![item("sys_notification_prefs", "bell")],
            min_role: UserRole::Staff,
        },
    ]
}

fn visible_groups(role: Option<UserRole>) -> Vec<MenuGroup> {
    let Some(role) = role else {
        return Vec::new();
    };
    get_menu_groups()
        .into_iter()
        .filter(|g| role.satisfies(g.min_role))
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let expanded_groups = RwSignal::new(vec!["scheduling".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {move || visible_groups(auth_state.with(|s| s.role())).into_iter().map(|group| {
                let group_id = group.id.to_string();
                let gid_click = group_id.clone();
                let gid_chevron = group_id.clone();
                let gid_show = group_id;
                let items = StoredValue::new(group.items);

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = gid_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.with(|g| g.contains(&gid_chevron))
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|g| g.contains(&gid_show))>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|(id, label, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.with(|a| a.as_deref() == Some(id))
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(id, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(role: Option<UserRole>) -> Vec<&'static str> {
        visible_groups(role).into_iter().map(|g| g.id).collect()
    }

    #[test]
    fn test_groups_follow_role() {
        assert!(ids(None).is_empty());

        let staff = ids(Some(UserRole::Staff));
        assert!(staff.contains(&"scheduling"));
        assert!(!staff.contains(&"catalog"));
        assert!(!staff.contains(&"administration"));

        let manager = ids(Some(UserRole::Manager));
        assert!(manager.contains(&"catalog"));
        assert!(!manager.contains(&"administration"));

        assert_eq!(ids(Some(UserRole::Admin)).len(), get_menu_groups().len());
    }

    #[test]
    fn test_every_item_has_a_label() {
        for group in get_menu_groups() {
            for (key, label, _) in group.items {
                assert!(!label.is_empty(), "missing label for {}", key);
            }
        }
    }
}
