use contracts::domain::a008_service_catalog::aggregate::{
    slugify, ServiceCategory, ServiceCategoryDto, ServiceDto, ServiceOption,
};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a008_service_catalog::api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::FormError;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::mutation::run_mutation;

fn optional(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

fn update_option(form: RwSignal<ServiceDto>, idx: usize, apply: impl FnOnce(&mut ServiceOption)) {
    form.update(|f| {
        if let Some(o) = f.options.get_mut(idx) {
            apply(o);
        }
    });
}

#[component]
pub fn CategoryDetails(
    dto: ServiceCategoryDto,
    existing: Vec<ServiceCategory>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let is_edit = dto.id.is_some();
    let form = RwSignal::new(dto);
    let existing = StoredValue::new(existing);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    // New categories follow the name until the slug is typed by hand
    let slug_touched = RwSignal::new(is_edit);

    let on_save = move |_| {
        let dto = form.get_untracked();
        if let Err(e) = existing.with_value(|all| dto.validate(all)) {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        run_mutation(
            saving,
            toast,
            if is_edit { "Category saved" } else { "Category created" },
            async move { api::save_category(&dto).await },
            move |_| on_saved.run(()),
        );
    };

    view! {
        <ModalFrame on_close=on_close>
            <div class="modal-header">
                <h2 class="modal-title">{if is_edit { "Edit category" } else { "New category" }}</h2>
            </div>
            <div class="modal-body">
                <FormError error=error />
                <div class="form__group">
                    <Label>"Name"</Label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            let follow = !slug_touched.get_untracked();
                            form.update(|f| {
                                if follow {
                                    f.slug = slugify(&v);
                                }
                                f.name = v;
                            });
                        }
                    />
                </div>
                <div class="form__row">
                    <div class="form__group">
                        <Label>"Slug"</Label>
                        <input
                            type="text"
                            class="form__input"
                            prop:value=move || form.with(|f| f.slug.clone())
                            on:input=move |ev| {
                                slug_touched.set(true);
                                form.update(|f| f.slug = event_target_value(&ev));
                            }
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Sort order"</Label>
                        <input
                            type="number"
                            step="1"
                            class="form__input"
                            prop:value=move || form.with(|f| f.sort_order.to_string())
                            on:input=move |ev| {
                                let v = event_target_value(&ev).parse().unwrap_or(0);
                                form.update(|f| f.sort_order = v);
                            }
                        />
                    </div>
                </div>
                <div class="form__group">
                    <Label>"Description"</Label>
                    <textarea
                        class="form__textarea"
                        rows="2"
                        prop:value=move || form.with(|f| f.description.clone().unwrap_or_default())
                        on:input=move |ev| form.update(|f| f.description = optional(event_target_value(&ev)))
                    />
                </div>
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

#[component]
pub fn ServiceDetails(
    dto: ServiceDto,
    categories: Vec<ServiceCategory>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let is_edit = dto.id.is_some();
    let form = RwSignal::new(dto);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let option_count = Memo::new(move |_| form.with(|f| f.options.len()));

    let on_save = move |_| {
        let mut dto = form.get_untracked();
        dto.slug = dto.effective_slug();
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        run_mutation(
            saving,
            toast,
            if is_edit { "Service saved" } else { "Service created" },
            async move { api::save_service(&dto).await },
            move |_| on_saved.run(()),
        );
    };

    view! {
        <ModalFrame on_close=on_close modal_style="width: 720px; max-width: 95vw;".to_string()>
            <div class="modal-header">
                <h2 class="modal-title">{if is_edit { "Edit service" } else { "New service" }}</h2>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    {icon("x")}
                </Button>
            </div>
            <div class="modal-body">
                <FormError error=error />

                <div class="form__row">
                    <div class="form__group" style="flex: 2;">
                        <Label>"Name"</Label>
                        <input
                            type="text"
                            class="form__input"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Category"</Label>
                        <select
                            class="form__select"
                            prop:value=move || form.with(|f| f.category_id.clone().unwrap_or_default())
                            on:change=move |ev| form.update(|f| f.category_id = optional(event_target_value(&ev)))
                        >
                            <option value="">"Select category..."</option>
                            {categories.into_iter().map(|c| view! { <option value=c.id>{c.name}</option> }).collect_view()}
                        </select>
                    </div>
                </div>

                <div class="form__row">
                    <div class="form__group">
                        <Label>"Slug"</Label>
                        <input
                            type="text"
                            class="form__input"
                            prop:placeholder=move || form.with(|f| slugify(&f.name))
                            prop:value=move || form.with(|f| f.slug.clone())
                            on:input=move |ev| form.update(|f| f.slug = event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Base price"</Label>
                        <input
                            type="number"
                            min="0"
                            step="0.01"
                            class="form__input"
                            prop:value=move || form.with(|f| f.base_price.to_string())
                            on:input=move |ev| {
                                let v = event_target_value(&ev).parse().unwrap_or(0.0);
                                form.update(|f| f.base_price = v);
                            }
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Price unit"</Label>
                        <input
                            type="text"
                            class="form__input"
                            placeholder="sq ft, piece..."
                            prop:value=move || form.with(|f| f.price_unit.clone().unwrap_or_default())
                            on:input=move |ev| form.update(|f| f.price_unit = optional(event_target_value(&ev)))
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Sort order"</Label>
                        <input
                            type="number"
                            step="1"
                            class="form__input"
                            prop:value=move || form.with(|f| f.sort_order.to_string())
                            on:input=move |ev| {
                                let v = event_target_value(&ev).parse().unwrap_or(0);
                                form.update(|f| f.sort_order = v);
                            }
                        />
                    </div>
                </div>

                <div class="form__group">
                    <Label>"Short description"</Label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || form.with(|f| f.short_description.clone().unwrap_or_default())
                        on:input=move |ev| form.update(|f| f.short_description = optional(event_target_value(&ev)))
                    />
                </div>
                <div class="form__group">
                    <Label>"Description"</Label>
                    <textarea
                        class="form__textarea"
                        rows="3"
                        prop:value=move || form.with(|f| f.description.clone().unwrap_or_default())
                        on:input=move |ev| form.update(|f| f.description = optional(event_target_value(&ev)))
                    />
                </div>

                <div class="form__row">
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.is_active)
                            on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                        />
                        " Active"
                    </label>
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.is_featured)
                            on:change=move |ev| form.update(|f| f.is_featured = event_target_checked(&ev))
                        />
                        " Featured on the home page"
                    </label>
                </div>

                <div class="settings-section">
                    <div class="settings-section__header">
                        <h3 class="settings-section__title">"Options"</h3>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| form.update(|f| f.options.push(ServiceOption::default()))
                        >
                            {icon("plus")}
                            " Add option"
                        </Button>
                    </div>
                    <Show when=move || option_count.get() == 0>
                        <p class="form__hint">"No options. Customers get the base price."</p>
                    </Show>
                    {move || (0..option_count.get()).map(|idx| {
                        let option = move || form.with(|f| f.options.get(idx).cloned().unwrap_or_default());
                        view! {
                            <div class="form__row form__row--compact">
                                <input
                                    type="text"
                                    class="form__input"
                                    placeholder="Option name"
                                    prop:value=move || option().name
                                    on:input=move |ev| {
                                        let v = event_target_value(&ev);
                                        update_option(form, idx, move |o| o.name = v);
                                    }
                                />
                                <input
                                    type="number"
                                    step="0.01"
                                    class="form__input form__input--narrow"
                                    attr:title="Price change"
                                    prop:value=move || option().price_delta.to_string()
                                    on:input=move |ev| {
                                        let v = event_target_value(&ev).parse().unwrap_or(0.0);
                                        update_option(form, idx, move |o| o.price_delta = v);
                                    }
                                />
                                <label class="form__checkbox">
                                    <input
                                        type="radio"
                                        name="default-option"
                                        prop:checked=move || option().is_default
                                        on:change=move |_| form.update(|f| {
                                            for (i, o) in f.options.iter_mut().enumerate() {
                                                o.is_default = i == idx;
                                            }
                                        })
                                    />
                                    " Default"
                                </label>
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| form.update(|f| {
                                        if idx < f.options.len() {
                                            f.options.remove(idx);
                                        }
                                    })
                                >
                                    {icon("trash")}
                                </Button>
                            </div>
                        }
                    }).collect_view()}
                </div>
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
