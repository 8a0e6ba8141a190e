use contracts::domain::a010_gallery_item::aggregate::{
    filter_gallery, gallery_categories, GalleryFilter, GalleryItem, GalleryItemDto,
};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a010_gallery_item::api;
use crate::domain::a010_gallery_item::ui::details::GalleryItemDetails;
use crate::layout::toast_service::use_toast;
use crate::shared::components::ConfirmDialog;
use crate::shared::icons::icon;
use crate::shared::mutation::{load_into, run_mutation};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query_state::{read_for, sync_filters};

pub const TAB_KEY: &str = "a010_gallery_item";

#[component]
pub fn GalleryGrid() -> impl IntoView {
    let toast = use_toast();
    let items = RwSignal::new(Vec::<GalleryItem>::new());
    let filters: RwSignal<GalleryFilter> = RwSignal::new(read_for(TAB_KEY));
    sync_filters(TAB_KEY, filters);

    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let editing = RwSignal::new(None::<GalleryItemDto>);
    let pending_delete = RwSignal::new(None::<GalleryItem>);
    let deleting = RwSignal::new(false);

    let load = move || load_into(loading, error, api::fetch_items(), items);
    load();

    let categories = Memo::new(move |_| items.with(|all| gallery_categories(all)));
    let visible = Memo::new(move |_| {
        let category = filters.with(|f| f.category.clone());
        items.with(|all| filter_gallery(all, &category, false))
    });

    let confirm_delete = move |_| {
        let Some(item) = pending_delete.get_untracked() else {
            return;
        };
        run_mutation(
            deleting,
            toast,
            "Gallery item deleted",
            async move { api::delete_item(&item.id).await },
            move |_| {
                pending_delete.set(None);
                load();
            },
        );
    };

    view! {
        <PageFrame page_id="a010_gallery_item--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Gallery"</h1>
                    <Badge>{move || visible.with(|v| v.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            let category = filters.with_untracked(|f| f.category.clone());
                            editing.set(Some(GalleryItemDto {
                                category: (!category.is_empty()).then_some(category),
                                is_published: true,
                                ..Default::default()
                            }));
                        }
                    >
                        {icon("plus")}
                        " Add image"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="segmented">
                    <button
                        class="segmented__item"
                        class:segmented__item--active=move || filters.with(|f| f.category.is_empty())
                        on:click=move |_| filters.update(|f| f.category.clear())
                    >
                        "All"
                    </button>
                    {move || categories.get().into_iter().map(|c| {
                        let value = c.clone();
                        let active = c.clone();
                        view! {
                            <button
                                class="segmented__item"
                                class:segmented__item--active=move || filters.with(|f| f.category.eq_ignore_ascii_case(&active))
                                on:click=move |_| filters.update(|f| f.category = value.clone())
                            >
                                {c}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <Show when=move || !loading.get() && visible.with(|v| v.is_empty())>
                    <div class="table__empty">"No images yet."</div>
                </Show>

                <div class="gallery-grid">
                    <For
                        each=move || visible.get()
                        key=|i| (i.id.clone(), i.title.clone(), i.image_url.clone(), i.is_published, i.is_featured, i.sort_order)
                        children=move |item| {
                            let to_edit = GalleryItemDto::from_item(&item);
                            let to_delete = item.clone();
                            view! {
                                <figure class="gallery-card" class:gallery-card--draft=!item.is_published>
                                    <img src=item.image_url.clone() alt=item.title.clone() loading="lazy" />
                                    <figcaption>
                                        <div class="gallery-card__title">{item.title.clone()}</div>
                                        <div class="gallery-card__meta">
                                            {item.category.clone().map(|c| view! { <span class="badge badge--neutral">{c}</span> })}
                                            {item.is_featured.then(|| view! { <span class="badge badge--primary">"Featured"</span> })}
                                            {(!item.is_published).then(|| view! { <span class="badge badge--warning">"Draft"</span> })}
                                        </div>
                                        <Flex gap=FlexGap::Small>
                                            <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| editing.set(Some(to_edit.clone()))>
                                                {icon("edit")}
                                            </Button>
                                            <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| pending_delete.set(Some(to_delete.clone()))>
                                                {icon("trash")}
                                            </Button>
                                        </Flex>
                                    </figcaption>
                                </figure>
                            }
                        }
                    />
                </div>
            </div>

            {move || editing.get().map(|dto| view! {
                <GalleryItemDetails
                    dto=dto
                    categories=categories.get_untracked()
                    on_close=Callback::new(move |_| editing.set(None))
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        load();
                    })
                />
            })}

            <Show when=move || pending_delete.with(|p| p.is_some())>
                <ConfirmDialog
                    title="Delete image"
                    message=pending_delete
                        .get_untracked()
                        .map(|i| format!("Delete \"{}\"? Case studies linking it will no longer show it.", i.title))
                        .unwrap_or_default()
                    busy=deleting
                    on_confirm=Callback::new(confirm_delete)
                    on_cancel=Callback::new(move |_| pending_delete.set(None))
                />
            </Show>
        </PageFrame>
    }
}
