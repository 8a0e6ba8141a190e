use std::collections::BTreeMap;

use contracts::domain::a012_inquiry_form::aggregate::{FieldKind, FormField, InquiryForm};
use contracts::domain::a012_inquiry_form::submission::{validate_submission, SubmitInquiryDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a012_inquiry_form::api;

/// Renders an inquiry form from its definition and posts the answers.
///
/// With `preview` set the submit button only validates, nothing is sent.
#[component]
pub fn InquiryFormRenderer(form: InquiryForm, #[prop(optional)] preview: bool) -> impl IntoView {
    let values = RwSignal::new(BTreeMap::<String, String>::new());
    let field_errors = RwSignal::new(Vec::<(String, String)>::new());
    let submit_error = RwSignal::new(None::<String>);
    let sending = RwSignal::new(false);
    let sent = RwSignal::new(false);
    let success_text = form.success_text().to_string();
    let form = StoredValue::new(form);

    let error_for = move |key: &str| {
        field_errors.with(|errs| errs.iter().find(|(k, _)| k == key).map(|(_, m)| m.clone()))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let answers = values.get_untracked();
        if let Err(errors) = form.with_value(|f| validate_submission(f, &answers)) {
            field_errors.set(errors);
            return;
        }
        field_errors.set(Vec::new());
        if preview {
            sent.set(true);
            return;
        }
        submit_error.set(None);
        sending.set(true);
        let form_id = form.with_value(|f| f.id.clone());
        spawn_local(async move {
            let dto = SubmitInquiryDto { values: answers };
            match api::submit(&form_id, &dto).await {
                Ok(_) => sent.set(true),
                Err(e) => submit_error.set(Some(e)),
            }
            sending.set(false);
        });
    };

    let fields = form.with_value(|f| f.fields.clone());

    view! {
        <Show
            when=move || !sent.get()
            fallback=move || view! {
                <div class="inquiry-form__success">
                    <p>{success_text.clone()}</p>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            values.set(BTreeMap::new());
                            sent.set(false);
                        }
                    >
                        "Send another"
                    </Button>
                </div>
            }
        >
            <form class="inquiry-form" novalidate=true on:submit=on_submit>
                {form.with_value(|f| f.description.clone()).map(|d| view! { <p class="inquiry-form__intro">{d}</p> })}
                {move || submit_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {fields.clone().into_iter().map(|field| {
                    let key = field.key.clone();
                    view! {
                        <div class="form__group" class:form__group--invalid={
                            let key = key.clone();
                            move || error_for(&key).is_some()
                        }>
                            <label class="form__label" for=format!("inquiry-{}", field.key)>
                                {field.label.clone()}
                                {field.required.then(|| view! { <span class="form__required">" *"</span> })}
                            </label>
                            <FieldInput field=field.clone() values=values />
                            {move || error_for(&key).map(|m| view! { <span class="form__error">{m}</span> })}
                        </div>
                    }
                }).collect_view()}
                <button type="submit" class="button button--primary" disabled=move || sending.get()>
                    {move || if sending.get() { "Sending..." } else if preview { "Check answers" } else { "Send" }}
                </button>
            </form>
        </Show>
    }
}

#[component]
fn FieldInput(field: FormField, values: RwSignal<BTreeMap<String, String>>) -> impl IntoView {
    let id = format!("inquiry-{}", field.key);
    let key = StoredValue::new(field.key.clone());
    let current = move || key.with_value(|k| values.with(|v| v.get(k).cloned().unwrap_or_default()));
    let set = move |value: String| {
        let k = key.get_value();
        values.update(|v| {
            v.insert(k, value);
        });
    };
    let placeholder = field.placeholder.clone().unwrap_or_default();

    match field.kind {
        FieldKind::Textarea => view! {
            <textarea
                id=id
                class="form__textarea"
                rows="4"
                placeholder=placeholder
                prop:value=current
                on:input=move |ev| set(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Select => view! {
            <select
                id=id
                class="form__select"
                prop:value=current
                on:change=move |ev| set(event_target_value(&ev))
            >
                <option value="">{if placeholder.is_empty() { "Choose...".to_string() } else { placeholder }}</option>
                {field.options.into_iter().filter(|o| !o.trim().is_empty()).map(|o| {
                    let value = o.trim().to_string();
                    view! { <option value=value.clone()>{value}</option> }
                }).collect_view()}
            </select>
        }
        .into_any(),
        kind => view! {
            <input
                id=id
                type=kind.input_type()
                class="form__input"
                placeholder=placeholder
                prop:value=current
                on:input=move |ev| set(event_target_value(&ev))
            />
        }
        .into_any(),
    }
}
