use contracts::domain::a008_service_catalog::aggregate::slugify;
use contracts::domain::a012_inquiry_form::aggregate::{FieldKind, FormField, InquiryForm};
use leptos::prelude::*;
use thaw::*;

use super::renderer::InquiryFormRenderer;
use crate::domain::a012_inquiry_form::api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::FormError;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::mutation::run_mutation;

fn update_field(form: RwSignal<InquiryForm>, idx: usize, apply: impl FnOnce(&mut FormField)) {
    form.update(|f| {
        if let Some(field) = f.fields.get_mut(idx) {
            apply(field);
        }
    });
}

/// Options are edited as one comma-separated line
fn parse_options(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect()
}

#[component]
pub fn InquiryFormBuilder(form: InquiryForm, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let toast = use_toast();
    let is_edit = !form.is_new();
    let form = RwSignal::new(form);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let preview = RwSignal::new(false);
    let field_count = Memo::new(move |_| form.with(|f| f.fields.len()));

    let on_save = move |_| {
        let mut definition = form.get_untracked();
        for field in &mut definition.fields {
            if field.key.trim().is_empty() {
                field.key = field.suggested_key();
            }
        }
        if let Err(e) = definition.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        run_mutation(
            saving,
            toast,
            if is_edit { "Form saved" } else { "Form created" },
            async move { api::save_form(&definition).await },
            move |_| on_saved.run(()),
        );
    };

    view! {
        <ModalFrame on_close=on_close modal_style="width: 880px; max-width: 95vw;".to_string()>
            <div class="modal-header">
                <h2 class="modal-title">{if is_edit { "Edit inquiry form" } else { "New inquiry form" }}</h2>
                <div class="segmented">
                    <button class="segmented__item" class:segmented__item--active=move || !preview.get() on:click=move |_| preview.set(false)>
                        "Fields"
                    </button>
                    <button class="segmented__item" class:segmented__item--active=move || preview.get() on:click=move |_| preview.set(true)>
                        "Preview"
                    </button>
                </div>
            </div>

            <div class="modal-body">
                <FormError error=error />

                <Show
                    when=move || !preview.get()
                    fallback=move || view! { <InquiryFormRenderer form=form.get_untracked() preview=true /> }
                >
                    <div class="form__row">
                        <div class="form__group" style="flex: 2;">
                            <Label>"Name"</Label>
                            <input
                                type="text"
                                class="form__input"
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| {
                                    let v = event_target_value(&ev);
                                    form.update(|f| {
                                        if f.is_new() && (f.slug.is_empty() || f.slug == slugify(&f.name)) {
                                            f.slug = slugify(&v);
                                        }
                                        f.name = v;
                                    });
                                }
                            />
                        </div>
                        <div class="form__group">
                            <Label>"Slug"</Label>
                            <input
                                type="text"
                                class="form__input"
                                prop:value=move || form.with(|f| f.slug.clone())
                                on:input=move |ev| form.update(|f| f.slug = event_target_value(&ev))
                            />
                        </div>
                        <label class="form__checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.is_active)
                                on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                            />
                            " Active"
                        </label>
                    </div>
                    <div class="form__group">
                        <Label>"Introduction"</Label>
                        <textarea
                            class="form__textarea"
                            rows="2"
                            prop:value=move || form.with(|f| f.description.clone().unwrap_or_default())
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                form.update(|f| f.description = (!v.trim().is_empty()).then_some(v));
                            }
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Message after sending"</Label>
                        <input
                            type="text"
                            class="form__input"
                            placeholder="Thanks! We'll be in touch shortly."
                            prop:value=move || form.with(|f| f.success_message.clone().unwrap_or_default())
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                form.update(|f| f.success_message = (!v.trim().is_empty()).then_some(v));
                            }
                        />
                    </div>

                    <table class="line-table">
                        <thead>
                            <tr>
                                <th>"Label"</th>
                                <th>"Key"</th>
                                <th>"Type"</th>
                                <th>"Required"</th>
                                <th>"Placeholder / options"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || (0..field_count.get()).map(|idx| {
                                let field = move || form.with(|f| f.fields.get(idx).cloned().unwrap_or_default());
                                let is_select = Memo::new(move |_| {
                                    form.with(|f| f.fields.get(idx).is_some_and(|x| x.kind == FieldKind::Select))
                                });
                                view! {
                                    <tr>
                                        <td>
                                            <input
                                                type="text"
                                                class="form__input"
                                                prop:value=move || field().label
                                                on:input=move |ev| {
                                                    let v = event_target_value(&ev);
                                                    update_field(form, idx, move |f| f.label = v);
                                                }
                                            />
                                        </td>
                                        <td>
                                            <input
                                                type="text"
                                                class="form__input form__input--narrow"
                                                prop:placeholder=move || field().suggested_key()
                                                prop:value=move || field().key
                                                on:input=move |ev| {
                                                    let v = event_target_value(&ev);
                                                    update_field(form, idx, move |f| f.key = v);
                                                }
                                            />
                                        </td>
                                        <td>
                                            <select
                                                class="form__select"
                                                prop:value=move || field().kind.code()
                                                on:change=move |ev| {
                                                    if let Some(kind) = FieldKind::from_code(&event_target_value(&ev)) {
                                                        update_field(form, idx, move |f| f.kind = kind);
                                                    }
                                                }
                                            >
                                                {FieldKind::all().into_iter().map(|k| view! {
                                                    <option value=k.code()>{k.label()}</option>
                                                }).collect_view()}
                                            </select>
                                        </td>
                                        <td>
                                            <input
                                                type="checkbox"
                                                prop:checked=move || field().required
                                                on:change=move |ev| {
                                                    let v = event_target_checked(&ev);
                                                    update_field(form, idx, move |f| f.required = v);
                                                }
                                            />
                                        </td>
                                        <td>
                                            {move || if is_select.get() {
                                                view! {
                                                    <input
                                                        type="text"
                                                        class="form__input"
                                                        placeholder="Option A, Option B"
                                                        prop:value=move || field().options.join(", ")
                                                        on:change=move |ev| {
                                                            let options = parse_options(&event_target_value(&ev));
                                                            update_field(form, idx, move |f| f.options = options);
                                                        }
                                                    />
                                                }.into_any()
                                            } else {
                                                view! {
                                                    <input
                                                        type="text"
                                                        class="form__input"
                                                        prop:value=move || field().placeholder.unwrap_or_default()
                                                        on:input=move |ev| {
                                                            let v = event_target_value(&ev);
                                                            update_field(form, idx, move |f| {
                                                                f.placeholder = (!v.trim().is_empty()).then_some(v)
                                                            });
                                                        }
                                                    />
                                                }.into_any()
                                            }}
                                        </td>
                                        <td>
                                            <Flex gap=FlexGap::Small>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    disabled={idx == 0}
                                                    on_click=move |_| form.update(|f| f.move_field(idx, true))
                                                >
                                                    {icon("arrow-up")}
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    disabled=Signal::derive(move || idx + 1 >= field_count.get())
                                                    on_click=move |_| form.update(|f| f.move_field(idx, false))
                                                >
                                                    {icon("arrow-down")}
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| form.update(|f| {
                                                        if idx < f.fields.len() {
                                                            f.fields.remove(idx);
                                                        }
                                                    })
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </Flex>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| form.update(|f| f.fields.push(FormField::default()))
                    >
                        {icon("plus")}
                        " Add field"
                    </Button>
                </Show>
            </div>

            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=saving>
                    {icon("check")}
                    " Save"
                </Button>
            </div>
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options() {
        assert_eq!(parse_options(" Banner, Flyer ,,Poster "), vec!["Banner", "Flyer", "Poster"]);
        assert!(parse_options(" , ").is_empty());
    }
}
