use contracts::domain::a008_service_catalog::grouping::{flatten_groups, FlatService, ServiceGroup};
use contracts::domain::a009_tier_package::aggregate::TierPackage;
use contracts::domain::a009_tier_package::comparison::packages_for_service;
use contracts::shared::money::format_currency;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use super::{category_href, page_errors};
use super::layout::{PublicLayout, SectionTitle};
use crate::domain::a008_service_catalog::api as catalog_api;
use crate::domain::a009_tier_package::api as tier_api;
use crate::domain::a009_tier_package::ui::comparison::TierComparison;
use crate::shared::mutation::load_into;

/// `(name, slug)` of categories that still list an active service.
fn category_links(groups: &[ServiceGroup]) -> Vec<(String, String)> {
    groups
        .iter()
        .filter(|g| g.services.iter().any(|s| s.is_active))
        .filter_map(|g| g.category.as_ref().map(|c| (c.name.clone(), c.slug.clone())))
        .collect()
}

fn services_in(groups: &[ServiceGroup], category: &str) -> Vec<FlatService> {
    flatten_groups(groups)
        .into_iter()
        .filter(|f| category.is_empty() || f.category_slug.as_deref() == Some(category))
        .collect()
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    let query = use_query_map();
    let category = Memo::new(move |_| query.with(|q| q.get("category").unwrap_or_default()));

    let groups = RwSignal::new(Vec::<ServiceGroup>::new());
    let packages = RwSignal::new(Vec::<TierPackage>::new());
    let loading = RwSignal::new(false);
    let packages_loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let packages_error = RwSignal::new(None::<String>);

    load_into(loading, error, catalog_api::fetch_grouped_services(), groups);
    load_into(packages_loading, packages_error, tier_api::fetch_public_packages(), packages);

    let links = Memo::new(move |_| groups.with(|g| category_links(g)));
    let visible = Memo::new(move |_| {
        let current = category.get();
        groups.with(|g| services_in(g, &current))
    });

    view! {
        <PublicLayout>
            <SectionTitle title="Services" lead="Pick a service to see what each package includes." />

            <nav class="chip-bar">
                <a class="chip" class:chip--active=move || category.with(|c| c.is_empty()) href="/services">
                    "All"
                </a>
                <For
                    each=move || links.get()
                    key=|(_, slug)| slug.clone()
                    children=move |(name, slug)| {
                        let href = category_href("/services", &slug);
                        view! {
                            <a class="chip" class:chip--active=move || category.with(|c| *c == slug) href=href>
                                {name}
                            </a>
                        }
                    }
                />
            </nav>

            {move || {
                page_errors(&[error.get(), packages_error.get()])
                    .into_iter()
                    .map(|e| view! { <div class="alert alert--error">{e}</div> })
                    .collect_view()
            }}
            <Show when=move || loading.get()>
                <p class="text-muted">"Loading..."</p>
            </Show>
            <Show when=move || !loading.get() && visible.with(|v| v.is_empty()) && error.with(|e| e.is_none())>
                <p class="text-muted">"No services in this category yet."</p>
            </Show>

            <For
                each=move || visible.get()
                key=|f| f.service.id.clone()
                children=move |flat| {
                    let service = flat.service.clone();
                    let service_id = service.id.clone();
                    let tiers = Memo::new(move |_| packages.with(|all| packages_for_service(all, &service_id)));
                    view! {
                        <article class="service-card" id=service.slug.clone()>
                            <div class="service-card__header">
                                <div>
                                    <div class="card__eyebrow">{flat.category_name.clone()}</div>
                                    <h3>{service.name.clone()}</h3>
                                </div>
                                <div class="card__price">{service.price_label()}</div>
                            </div>
                            {service.description.clone().or(service.short_description.clone()).map(|d| view! {
                                <p class="service-card__description">{d}</p>
                            })}
                            {(!service.options.is_empty()).then(|| view! {
                                <ul class="service-card__options">
                                    {service.options.iter().map(|o| {
                                        let delta = if o.price_delta.abs() < f64::EPSILON {
                                            String::new()
                                        } else {
                                            let sign = if o.price_delta > 0.0 { "+" } else { "" };
                                            format!(" ({}{})", sign, format_currency(o.price_delta))
                                        };
                                        view! { <li>{format!("{}{}", o.name, delta)}</li> }
                                    }).collect_view()}
                                </ul>
                            })}
                            <Show when=move || tiers.with(|t| !t.is_empty())>
                                {move || view! { <TierComparison packages=tiers.get() /> }}
                            </Show>
                        </article>
                    }
                }
            />
        </PublicLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups() -> Vec<ServiceGroup> {
        serde_json::from_value(serde_json::json!([
            {
                "category": {"id": "c1", "name": "Banners", "slug": "banners"},
                "services": [{"id": "s1", "name": "Vinyl banner", "slug": "vinyl-banner", "base_price": 40.0}]
            },
            {
                "category": {"id": "c2", "name": "Decals", "slug": "decals"},
                "services": [{"id": "s2", "name": "Window decal", "slug": "window-decal", "base_price": 15.0, "is_active": false}]
            },
            {
                "category": null,
                "services": [{"id": "s3", "name": "Design hour", "slug": "design-hour", "base_price": 75.0}]
            }
        ]))
        .unwrap()
    }

    #[test]
    fn test_category_links_skip_empty_categories() {
        assert_eq!(category_links(&groups()), vec![("Banners".to_string(), "banners".to_string())]);
    }

    #[test]
    fn test_services_in_category() {
        let all: Vec<String> = services_in(&groups(), "").into_iter().map(|f| f.service.id).collect();
        assert_eq!(all, vec!["s1", "s3"]);
        let banners: Vec<String> = services_in(&groups(), "banners").into_iter().map(|f| f.service.id).collect();
        assert_eq!(banners, vec!["s1"]);
        assert!(services_in(&groups(), "decals").is_empty());
    }
}
