use contracts::domain::a010_gallery_item::aggregate::{filter_gallery, gallery_categories, GalleryItem};
use contracts::domain::a011_case_study::aggregate::{published, CaseStudy};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use super::{category_href, page_errors};
use super::layout::{PublicLayout, SectionTitle};
use crate::domain::a010_gallery_item::api as gallery_api;
use crate::domain::a011_case_study::api as case_api;
use crate::shared::mutation::load_into;

#[component]
pub fn GalleryPage() -> impl IntoView {
    let query = use_query_map();
    let category = Memo::new(move |_| query.with(|q| q.get("category").unwrap_or_default()));

    let items = RwSignal::new(Vec::<GalleryItem>::new());
    let cases = RwSignal::new(Vec::<CaseStudy>::new());
    let loading = RwSignal::new(false);
    let cases_loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let cases_error = RwSignal::new(None::<String>);

    load_into(loading, error, gallery_api::fetch_public_items(), items);
    load_into(cases_loading, cases_error, case_api::fetch_public_case_studies(), cases);

    let categories = Memo::new(move |_| items.with(|all| gallery_categories(&filter_gallery(all, "", true))));
    let visible = Memo::new(move |_| {
        let current = category.get();
        items.with(|all| filter_gallery(all, &current, true))
    });
    let case_studies = Memo::new(move |_| cases.with(|all| published(all)));

    view! {
        <PublicLayout>
            <SectionTitle title="Our work" lead="A selection of recent jobs." />

            <nav class="chip-bar">
                <a class="chip" class:chip--active=move || category.with(|c| c.is_empty()) href="/gallery">
                    "All"
                </a>
                <For
                    each=move || categories.get()
                    key=|c| c.clone()
                    children=move |name| {
                        let href = category_href("/gallery", &name);
                        let active_name = name.clone();
                        view! {
                            <a
                                class="chip"
                                class:chip--active=move || category.with(|c| c.eq_ignore_ascii_case(&active_name))
                                href=href
                            >
                                {name}
                            </a>
                        }
                    }
                />
            </nav>

            {move || {
                page_errors(&[error.get(), cases_error.get()])
                    .into_iter()
                    .map(|e| view! { <div class="alert alert--error">{e}</div> })
                    .collect_view()
            }}
            <Show when=move || !loading.get() && visible.with(|v| v.is_empty())>
                <p class="text-muted">"Nothing to show here yet."</p>
            </Show>

            <div class="gallery-grid">
                <For
                    each=move || visible.get()
                    key=|i| i.id.clone()
                    children=move |item| view! {
                        <figure class="gallery-grid__item">
                            <img src=item.image_url.clone() alt=item.title.clone() loading="lazy" />
                            <figcaption>
                                <strong>{item.title.clone()}</strong>
                                {item.description.clone().map(|d| view! { <span class="text-muted">{d}</span> })}
                            </figcaption>
                        </figure>
                    }
                />
            </div>

            <Show when=move || case_studies.with(|c| !c.is_empty())>
                <section>
                    <SectionTitle title="Case studies" />
                    <For
                        each=move || case_studies.get()
                        key=|c| c.id.clone()
                        children=move |case| {
                            let linked = case.clone();
                            let subtitle = [case.client_name.clone(), case.industry.clone()]
                                .into_iter()
                                .flatten()
                                .collect::<Vec<_>>()
                                .join(" · ");
                            view! {
                                <article class="case-study">
                                    {case.image_url.clone().map(|src| view! {
                                        <img class="case-study__cover" src=src alt=case.title.clone() />
                                    })}
                                    <h3>{case.title.clone()}</h3>
                                    <p class="text-muted">{subtitle}</p>
                                    <h4>"The challenge"</h4>
                                    <p>{case.challenge.clone()}</p>
                                    <h4>"What we did"</h4>
                                    <p>{case.solution.clone()}</p>
                                    <h4>"The result"</h4>
                                    <p>{case.outcome.clone()}</p>
                                    <div class="case-study__images">
                                        {move || items.with(|all| linked.linked_items(all)).into_iter().map(|img| view! {
                                            <img src=img.image_url alt=img.title loading="lazy" />
                                        }).collect_view()}
                                    </div>
                                </article>
                            }
                        }
                    />
                </section>
            </Show>
        </PublicLayout>
    }
}
