use contracts::domain::a012_inquiry_form::aggregate::InquiryForm;
use contracts::domain::a012_inquiry_form::submission::{
    filter_submissions, InquirySubmission, SubmissionFilter, SubmissionStatus,
};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a012_inquiry_form::api;
use crate::layout::toast_service::use_toast;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::mutation::{load_into, run_mutation};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query_state::{read_for, sync_filters};

pub const TAB_KEY: &str = "a012_inquiry_submission";

fn status_badge(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::New => "badge badge--warning",
        SubmissionStatus::Contacted => "badge badge--primary",
        SubmissionStatus::Closed => "badge badge--neutral",
    }
}

/// Field labels in form order, then any keys the form no longer defines.
fn labelled_values(submission: &InquirySubmission, form: Option<&InquiryForm>) -> Vec<(String, String)> {
    let mut out = Vec::new();
    if let Some(form) = form {
        for field in &form.fields {
            if submission.values.contains_key(&field.key) {
                out.push((field.label.clone(), submission.value_text(&field.key)));
            }
        }
    }
    for key in submission.values.keys() {
        if form.map_or(true, |f| f.field(key).is_none()) {
            out.push((key.clone(), submission.value_text(key)));
        }
    }
    out
}

#[component]
pub fn InquirySubmissionList() -> impl IntoView {
    let toast = use_toast();
    let items = RwSignal::new(Vec::<InquirySubmission>::new());
    let forms = RwSignal::new(Vec::<InquiryForm>::new());
    let filters: RwSignal<SubmissionFilter> = RwSignal::new(read_for(TAB_KEY));
    sync_filters(TAB_KEY, filters);

    let loading = RwSignal::new(false);
    let forms_loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let expanded = RwSignal::new(None::<String>);
    let updating = RwSignal::new(false);

    let load = move || load_into(loading, error, api::fetch_submissions(), items);
    load();
    load_into(forms_loading, error, api::fetch_forms(), forms);

    let visible = Memo::new(move |_| {
        let f = filters.get();
        items.with(|all| filter_submissions(all, &f))
    });
    let new_count = Memo::new(move |_| {
        items.with(|all| all.iter().filter(|s| s.status == SubmissionStatus::New).count())
    });

    let change_status = move |id: String, status: SubmissionStatus| {
        run_mutation(
            updating,
            toast,
            format!("Marked as {}", status.label().to_lowercase()),
            async move { api::update_submission_status(&id, status).await },
            move |updated: InquirySubmission| {
                items.update(|all| {
                    if let Some(slot) = all.iter_mut().find(|s| s.id == updated.id) {
                        *slot = updated;
                    }
                });
            },
        );
    };

    let set_status_filter = move |status: Option<SubmissionStatus>| filters.update(|f| f.status = status);

    view! {
        <PageFrame page_id="a012_inquiry_submission--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Inquiries"</h1>
                    <Show when=move || { new_count.get() > 0 }>
                        <span class="badge badge--warning">{move || format!("{} new", new_count.get())}</span>
                    </Show>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                    </Button>
                </div>
            </div>

            <div class="filter-bar">
                <div class="segmented">
                    <button
                        class="segmented__item"
                        class:segmented__item--active=move || filters.with(|f| f.status.is_none())
                        on:click=move |_| set_status_filter(None)
                    >
                        "All"
                    </button>
                    {SubmissionStatus::all().into_iter().map(|status| view! {
                        <button
                            class="segmented__item"
                            class:segmented__item--active=move || filters.with(|f| f.status == Some(status))
                            on:click=move |_| set_status_filter(Some(status))
                        >
                            {status.label()}
                        </button>
                    }).collect_view()}
                </div>
                <select
                    class="form__select"
                    prop:value=move || filters.with(|f| f.form_id.clone().unwrap_or_default())
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        filters.update(|f| f.form_id = (!v.is_empty()).then_some(v));
                    }
                >
                    <option value="">"All forms"</option>
                    {move || forms.get().into_iter().map(|form| view! {
                        <option value=form.id.clone()>{form.name.clone()}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=32.0>""</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Received"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Form"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Contact"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|s| (s.id.clone(), s.status)
                                children=move |submission| {
                                    let id = submission.id.clone();
                                    let row_id = id.clone();
                                    let toggle_id = id.clone();
                                    let status = submission.status;
                                    let form_name = submission.form_name.clone().unwrap_or_else(|| {
                                        forms.with_untracked(|all| {
                                            all.iter()
                                                .find(|f| f.id == submission.form_id)
                                                .map(|f| f.name.clone())
                                                .unwrap_or_else(|| submission.form_id.clone())
                                        })
                                    });
                                    let details = submission.clone();
                                    let is_open = move || expanded.get().as_deref() == Some(row_id.as_str());
                                    let is_open_body = is_open.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| expanded.update(|e| {
                                                        *e = if e.as_deref() == Some(toggle_id.as_str()) { None } else { Some(toggle_id.clone()) };
                                                    })
                                                >
                                                    {move || if is_open() { icon("chevron-down") } else { icon("chevron-right") }}
                                                </Button>
                                            </TableCell>
                                            <TableCell>{format_datetime(&submission.created_at.to_rfc3339())}</TableCell>
                                            <TableCell>{form_name}</TableCell>
                                            <TableCell>
                                                {match submission.contact() {
                                                    Some(email) => view! {
                                                        <a href=format!("mailto:{}", email)>{email.clone()}</a>
                                                    }.into_any(),
                                                    None => view! { <span class="text-muted">"-"</span> }.into_any(),
                                                }}
                                            </TableCell>
                                            <TableCell>
                                                <span class=status_badge(status)>{status.label()}</span>
                                            </TableCell>
                                            <TableCell>
                                                <select
                                                    class="form__select"
                                                    prop:value=status.code()
                                                    disabled=move || updating.get()
                                                    on:change=move |ev| {
                                                        if let Some(next) = SubmissionStatus::from_code(&event_target_value(&ev)) {
                                                            if next != status {
                                                                change_status(id.clone(), next);
                                                            }
                                                        }
                                                    }
                                                >
                                                    {SubmissionStatus::all().into_iter().map(|s| view! {
                                                        <option value=s.code()>{s.label()}</option>
                                                    }).collect_view()}
                                                </select>
                                            </TableCell>
                                        </TableRow>
                                        <Show when=is_open_body>
                                            <TableRow attr:class="table__row--detail">
                                                <TableCell attr:colspan="6">
                                                    <dl class="detail-list">
                                                        {
                                                            let details = details.clone();
                                                            move || {
                                                                let rows = forms.with(|all| {
                                                                    let form = all.iter().find(|f| f.id == details.form_id);
                                                                    labelled_values(&details, form)
                                                                });
                                                                rows.into_iter().map(|(label, value)| view! {
                                                                    <dt>{label}</dt>
                                                                    <dd style="white-space: pre-wrap;">{value}</dd>
                                                                }).collect_view()
                                                            }
                                                        }
                                                    </dl>
                                                </TableCell>
                                            </TableRow>
                                        </Show>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || !loading.get() && visible.with(|v| v.is_empty())>
                        <div class="table__empty">"No inquiries match the filters."</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use contracts::domain::a012_inquiry_form::aggregate::{FieldKind, FormField};
    use std::collections::BTreeMap;

    fn submission() -> InquirySubmission {
        let mut values = BTreeMap::new();
        values.insert("email".to_string(), serde_json::json!("ann@example.com"));
        values.insert("qty".to_string(), serde_json::json!(250));
        values.insert("legacy".to_string(), serde_json::json!("old"));
        InquirySubmission {
            id: "s1".into(),
            form_id: "f1".into(),
            form_name: None,
            values,
            created_at: Utc::now(),
            status: SubmissionStatus::New,
        }
    }

    #[test]
    fn test_labelled_values_follow_form_order() {
        let form = InquiryForm {
            id: "f1".into(),
            fields: vec![
                FormField { key: "qty".into(), label: "Quantity".into(), kind: FieldKind::Number, ..Default::default() },
                FormField { key: "email".into(), label: "Email".into(), kind: FieldKind::Email, ..Default::default() },
            ],
            ..Default::default()
        };
        let rows = labelled_values(&submission(), Some(&form));
        assert_eq!(
            rows,
            vec![
                ("Quantity".to_string(), "250".to_string()),
                ("Email".to_string(), "ann@example.com".to_string()),
                ("legacy".to_string(), "old".to_string()),
            ]
        );
    }

    #[test]
    fn test_labelled_values_without_form() {
        let rows = labelled_values(&submission(), None);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].0, "email");
    }
}
