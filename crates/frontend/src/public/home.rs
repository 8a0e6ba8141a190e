use contracts::domain::a008_service_catalog::grouping::{flatten_groups, FlatService, ServiceGroup};
use contracts::domain::a010_gallery_item::aggregate::{filter_gallery, GalleryItem};
use leptos::prelude::*;
use leptos_router::components::A;

use super::{category_href, page_errors};
use super::layout::{PublicLayout, SectionTitle};
use crate::domain::a008_service_catalog::api as catalog_api;
use crate::domain::a010_gallery_item::api as gallery_api;
use crate::shared::mutation::load_into;

const FEATURED_GALLERY_LIMIT: usize = 6;

fn featured_services(groups: &[ServiceGroup]) -> Vec<FlatService> {
    flatten_groups(groups)
        .into_iter()
        .filter(|f| f.service.is_featured)
        .collect()
}

fn featured_gallery(items: &[GalleryItem]) -> Vec<GalleryItem> {
    filter_gallery(items, "", true)
        .into_iter()
        .filter(|i| i.is_featured)
        .take(FEATURED_GALLERY_LIMIT)
        .collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let groups = RwSignal::new(Vec::<ServiceGroup>::new());
    let gallery = RwSignal::new(Vec::<GalleryItem>::new());
    let loading = RwSignal::new(false);
    let gallery_loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let gallery_error = RwSignal::new(None::<String>);

    load_into(loading, error, catalog_api::fetch_grouped_services(), groups);
    load_into(gallery_loading, gallery_error, gallery_api::fetch_public_items(), gallery);

    let services = Memo::new(move |_| groups.with(|g| featured_services(g)));
    let work = Memo::new(move |_| gallery.with(|g| featured_gallery(g)));

    view! {
        <PublicLayout>
            <section class="site__hero">
                <h1>"Print and signage, done right and on time"</h1>
                <p>"Banners, vehicle graphics, storefront signs and everything in between."</p>
                <A href="/contact" attr:class="button button--primary">"Request a quote"</A>
            </section>

            {move || {
                page_errors(&[error.get(), gallery_error.get()])
                    .into_iter()
                    .map(|e| view! { <div class="alert alert--error">{e}</div> })
                    .collect_view()
            }}

            <section>
                <SectionTitle title="Featured services" />
                <Show when=move || loading.get()>
                    <p class="text-muted">"Loading..."</p>
                </Show>
                <div class="card-grid">
                    <For
                        each=move || services.get()
                        key=|f| f.service.id.clone()
                        children=move |flat| {
                            let href = category_href("/services", flat.category_slug.as_deref().unwrap_or(""));
                            view! {
                                <a class="card" href=href>
                                    <div class="card__eyebrow">{flat.category_name.clone()}</div>
                                    <h3 class="card__title">{flat.service.name.clone()}</h3>
                                    <p class="card__body">{flat.service.short_description.clone().unwrap_or_default()}</p>
                                    <div class="card__price">{flat.service.price_label()}</div>
                                </a>
                            }
                        }
                    />
                </div>
                <A href="/services">"All services"</A>
            </section>

            <Show when=move || work.with(|w| !w.is_empty())>
                <section>
                    <SectionTitle title="Recent work" />
                    <div class="gallery-grid">
                        <For
                            each=move || work.get()
                            key=|i| i.id.clone()
                            children=move |item| view! {
                                <figure class="gallery-grid__item">
                                    <img src=item.image_url.clone() alt=item.title.clone() loading="lazy" />
                                    <figcaption>{item.title.clone()}</figcaption>
                                </figure>
                            }
                        />
                    </div>
                    <A href="/gallery">"See the gallery"</A>
                </section>
            </Show>
        </PublicLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a008_service_catalog::aggregate::Service;

    fn service(id: &str, featured: bool, active: bool) -> Service {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": id,
            "slug": id,
            "base_price": 10.0,
            "is_featured": featured,
            "is_active": active,
        }))
        .unwrap()
    }

    #[test]
    fn test_featured_services_skip_inactive() {
        let groups = vec![ServiceGroup {
            category: None,
            services: vec![service("a", true, true), service("b", false, true), service("c", true, false)],
        }];
        let ids: Vec<String> = featured_services(&groups).into_iter().map(|f| f.service.id).collect();
        assert_eq!(ids, vec!["a"]);
    }

    #[test]
    fn test_featured_gallery_published_only() {
        let items: Vec<GalleryItem> = serde_json::from_value(serde_json::json!([
            {"id": "1", "title": "A", "image_url": "https://x/a.jpg", "is_featured": true, "is_published": true},
            {"id": "2", "title": "B", "image_url": "https://x/b.jpg", "is_featured": true, "is_published": false},
            {"id": "3", "title": "C", "image_url": "https://x/c.jpg", "is_featured": false, "is_published": true}
        ]))
        .unwrap();
        let ids: Vec<String> = featured_gallery(&items).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["1"]);
    }
}
