use contracts::domain::a012_inquiry_form::aggregate::{InquiryForm, CONTACT_FORM_SLUG};
use leptos::prelude::*;
use thaw::*;

use super::builder::InquiryFormBuilder;
use crate::domain::a012_inquiry_form::api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::ConfirmDialog;
use crate::shared::icons::icon;
use crate::shared::mutation::{load_into, run_mutation};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

pub const TAB_KEY: &str = "a012_inquiry_form";

#[component]
pub fn InquiryFormList() -> impl IntoView {
    let toast = use_toast();
    let forms = RwSignal::new(Vec::<InquiryForm>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let editing = RwSignal::new(None::<InquiryForm>);
    let pending_delete = RwSignal::new(None::<InquiryForm>);
    let deleting = RwSignal::new(false);

    let load = move || load_into(loading, error, api::fetch_forms(), forms);
    load();

    let confirm_delete = move |_| {
        let Some(form) = pending_delete.get_untracked() else {
            return;
        };
        run_mutation(
            deleting,
            toast,
            "Form deleted",
            async move { api::delete_form(&form.id).await },
            move |_| {
                pending_delete.set(None);
                load();
            },
        );
    };

    view! {
        <PageFrame page_id="a012_inquiry_form--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Inquiry forms"</h1>
                    <Badge>{move || forms.with(|v| v.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(InquiryForm { is_active: true, ..Default::default() }))
                    >
                        {icon("plus")}
                        " New form"
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
                                <TableHeaderCell min_width=220.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Slug"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Fields"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || forms.get()
                                key=|f| (f.id.clone(), f.name.clone(), f.slug.clone(), f.is_active, f.fields.len())
                                children=move |form| {
                                    let to_edit = form.clone();
                                    let to_delete = form.clone();
                                    let is_contact = form.slug == CONTACT_FORM_SLUG;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{form.name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <code>{form.slug.clone()}</code>
                                                <Show when=move || is_contact>
                                                    " "
                                                    <span class="badge badge--primary" title="Shown on the public contact page">"Contact page"</span>
                                                </Show>
                                            </TableCell>
                                            <TableCell>{form.fields.len()}</TableCell>
                                            <TableCell>
                                                {if form.is_active {
                                                    view! { <span class="badge badge--success">"Active"</span> }
                                                } else {
                                                    view! { <span class="badge badge--neutral">"Inactive"</span> }
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
                    <Show when=move || !loading.get() && forms.with(|v| v.is_empty())>
                        <div class="table__empty">"No inquiry forms yet."</div>
                    </Show>
                </div>
            </div>

            {move || editing.get().map(|form| view! {
                <InquiryFormBuilder
                    form=form
                    on_close=Callback::new(move |_| editing.set(None))
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        load();
                    })
                />
            })}

            <Show when=move || pending_delete.with(|p| p.is_some())>
                <ConfirmDialog
                    title="Delete form"
                    message=pending_delete
                        .get_untracked()
                        .map(|f| format!("Delete \"{}\"? Existing submissions are kept.", f.name))
                        .unwrap_or_default()
                    busy=deleting
                    on_confirm=Callback::new(confirm_delete)
                    on_cancel=Callback::new(move |_| pending_delete.set(None))
                />
            </Show>
        </PageFrame>
    }
}
