use contracts::domain::a010_gallery_item::aggregate::GalleryItem;
use contracts::domain::a011_case_study::aggregate::{CaseStudy, CaseStudyDto};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a010_gallery_item::api as gallery_api;
use crate::domain::a011_case_study::api;
use crate::domain::a011_case_study::ui::details::CaseStudyDetails;
use crate::layout::toast_service::use_toast;
use crate::shared::components::ConfirmDialog;
use crate::shared::icons::icon;
use crate::shared::mutation::{load_into, run_mutation};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

pub const TAB_KEY: &str = "a011_case_study";

#[component]
pub fn CaseStudyList() -> impl IntoView {
    let toast = use_toast();
    let items = RwSignal::new(Vec::<CaseStudy>::new());
    let gallery = RwSignal::new(Vec::<GalleryItem>::new());
    let loading = RwSignal::new(false);
    let gallery_loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let editing = RwSignal::new(None::<CaseStudyDto>);
    let pending_delete = RwSignal::new(None::<CaseStudy>);
    let deleting = RwSignal::new(false);

    let load = move || load_into(loading, error, api::fetch_case_studies(), items);
    load();
    load_into(gallery_loading, error, gallery_api::fetch_items(), gallery);

    let confirm_delete = move |_| {
        let Some(case) = pending_delete.get_untracked() else {
            return;
        };
        run_mutation(
            deleting,
            toast,
            "Case study deleted",
            async move { api::delete_case_study(&case.id).await },
            move |_| {
                pending_delete.set(None);
                load();
            },
        );
    };

    view! {
        <PageFrame page_id="a011_case_study--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Case studies"</h1>
                    <Badge>{move || items.with(|v| v.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(CaseStudyDto::default()))
                    >
                        {icon("plus")}
                        " New case study"
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

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=240.0>"Title"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Client"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Industry"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Images"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|c| (c.id.clone(), c.title.clone(), c.is_published, c.gallery_item_ids.len())
                                children=move |case| {
                                    let to_edit = CaseStudyDto::from_case_study(&case);
                                    let to_delete = case.clone();
                                    let linked = case.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{case.title.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>{case.client_name.clone().unwrap_or_default()}</TableCell>
                                            <TableCell>{case.industry.clone().unwrap_or_default()}</TableCell>
                                            <TableCell>{move || gallery.with(|g| linked.linked_items(g).len())}</TableCell>
                                            <TableCell>
                                                {if case.is_published {
                                                    view! { <span class="badge badge--success">"Published"</span> }
                                                } else {
                                                    view! { <span class="badge badge--neutral">"Draft"</span> }
                                                }}
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| editing.set(Some(to_edit.clone()))>
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| pending_delete.set(Some(to_delete.clone()))>
                                                        {icon("trash")}
                                                    </Button>
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || !loading.get() && items.with(|v| v.is_empty())>
                        <div class="table__empty">"No case studies yet."</div>
                    </Show>
                </div>
            </div>

            {move || editing.get().map(|dto| view! {
                <CaseStudyDetails
                    dto=dto
                    gallery=gallery.get_untracked()
                    on_close=Callback::new(move |_| editing.set(None))
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        load();
                    })
                />
            })}

            <Show when=move || pending_delete.with(|p| p.is_some())>
                <ConfirmDialog
                    title="Delete case study"
                    message=pending_delete
                        .get_untracked()
                        .map(|c| format!("Delete \"{}\"?", c.title))
                        .unwrap_or_default()
                    busy=deleting
                    on_confirm=Callback::new(confirm_delete)
                    on_cancel=Callback::new(move |_| pending_delete.set(None))
                />
            </Show>
        </PageFrame>
    }
}
