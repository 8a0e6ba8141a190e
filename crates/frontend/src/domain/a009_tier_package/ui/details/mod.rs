use contracts::domain::a008_service_catalog::aggregate::Service;
use contracts::domain::a009_tier_package::aggregate::{Tier, TierFeature, TierPackageDto};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a009_tier_package::api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::FormError;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::mutation::run_mutation;

#[component]
pub fn TierPackageDetails(
    dto: TierPackageDto,
    services: Vec<Service>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let is_edit = dto.id.is_some();
    let form = RwSignal::new(dto);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let feature_count = Memo::new(move |_| form.with(|f| f.features.len()));
    let deliverable_count = Memo::new(move |_| form.with(|f| f.deliverables.len()));

    let on_save = move |_| {
        let dto = form.get_untracked().normalized();
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        run_mutation(
            saving,
            toast,
            if is_edit { "Package saved" } else { "Package created" },
            async move { api::save_package(&dto).await },
            move |_| on_saved.run(()),
        );
    };

    view! {
        <ModalFrame on_close=on_close modal_style="width: 720px; max-width: 95vw;".to_string()>
            <div class="modal-header">
                <h2 class="modal-title">{if is_edit { "Edit package" } else { "New package" }}</h2>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    {icon("x")}
                </Button>
            </div>
            <div class="modal-body">
                <FormError error=error />

                <div class="form__row">
                    <div class="form__group" style="flex: 2;">
                        <Label>"Service"</Label>
                        <select
                            class="form__select"
                            prop:value=move || form.with(|f| f.service_id.clone())
                            on:change=move |ev| form.update(|f| f.service_id = event_target_value(&ev))
                        >
                            <option value="">"Select service..."</option>
                            {services.into_iter().map(|s| view! { <option value=s.id>{s.name}</option> }).collect_view()}
                        </select>
                    </div>
                    <div class="form__group">
                        <Label>"Tier"</Label>
                        <select
                            class="form__select"
                            prop:value=move || form.with(|f| f.tier.code())
                            on:change=move |ev| {
                                if let Some(t) = Tier::from_code(&event_target_value(&ev)) {
                                    form.update(|f| f.tier = t);
                                }
                            }
                        >
                            {Tier::all().into_iter().map(|t| view! { <option value=t.code()>{t.label()}</option> }).collect_view()}
                        </select>
                    </div>
                </div>

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
                        <Label>"Price"</Label>
                        <input
                            type="number"
                            min="0"
                            step="0.01"
                            class="form__input"
                            prop:value=move || form.with(|f| f.price.to_string())
                            on:input=move |ev| {
                                let v = event_target_value(&ev).parse().unwrap_or(0.0);
                                form.update(|f| f.price = v);
                            }
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Turnaround, days"</Label>
                        <input
                            type="number"
                            min="0"
                            step="1"
                            class="form__input"
                            prop:value=move || form.with(|f| f.turnaround_days.map(|d| d.to_string()).unwrap_or_default())
                            on:input=move |ev| {
                                let v = event_target_value(&ev).trim().parse().ok();
                                form.update(|f| f.turnaround_days = v);
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
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|f| f.description = (!v.trim().is_empty()).then_some(v));
                        }
                    />
                </div>

                <div class="form__row">
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.is_popular)
                            on:change=move |ev| form.update(|f| f.is_popular = event_target_checked(&ev))
                        />
                        " Highlight as most popular"
                    </label>
                    <div class="form__group">
                        <Label>"Sort order"</Label>
                        <input
                            type="number"
                            step="1"
                            class="form__input form__input--narrow"
                            prop:value=move || form.with(|f| f.sort_order.to_string())
                            on:input=move |ev| {
                                let v = event_target_value(&ev).parse().unwrap_or(0);
                                form.update(|f| f.sort_order = v);
                            }
                        />
                    </div>
                </div>

                <div class="settings-section">
                    <div class="settings-section__header">
                        <h3 class="settings-section__title">"Features"</h3>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| form.update(|f| f.features.push(TierFeature { label: String::new(), included: true }))
                        >
                            {icon("plus")}
                            " Add feature"
                        </Button>
                    </div>
                    {move || (0..feature_count.get()).map(|idx| {
                        let feature = move || form.with(|f| f.features.get(idx).cloned().unwrap_or_default());
                        view! {
                            <div class="form__row form__row--compact">
                                <input
                                    type="text"
                                    class="form__input"
                                    placeholder="Feature"
                                    prop:value=move || feature().label
                                    on:input=move |ev| {
                                        let v = event_target_value(&ev);
                                        form.update(|f| if let Some(x) = f.features.get_mut(idx) { x.label = v; });
                                    }
                                />
                                <label class="form__checkbox">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || feature().included
                                        on:change=move |ev| {
                                            let v = event_target_checked(&ev);
                                            form.update(|f| if let Some(x) = f.features.get_mut(idx) { x.included = v; });
                                        }
                                    />
                                    " Included"
                                </label>
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| form.update(|f| { if idx < f.features.len() { f.features.remove(idx); } })
                                >
                                    {icon("trash")}
                                </Button>
                            </div>
                        }
                    }).collect_view()}
                </div>

                <div class="settings-section">
                    <div class="settings-section__header">
                        <h3 class="settings-section__title">"Deliverables"</h3>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| form.update(|f| f.deliverables.push(String::new()))
                        >
                            {icon("plus")}
                            " Add deliverable"
                        </Button>
                    </div>
                    {move || (0..deliverable_count.get()).map(|idx| view! {
                        <div class="form__row form__row--compact">
                            <input
                                type="text"
                                class="form__input"
                                placeholder="Print-ready PDF, 2 revisions..."
                                prop:value=move || form.with(|f| f.deliverables.get(idx).cloned().unwrap_or_default())
                                on:input=move |ev| {
                                    let v = event_target_value(&ev);
                                    form.update(|f| if let Some(x) = f.deliverables.get_mut(idx) { *x = v; });
                                }
                            />
                            <Button
                                size=ButtonSize::Small
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| form.update(|f| { if idx < f.deliverables.len() { f.deliverables.remove(idx); } })
                            >
                                {icon("trash")}
                            </Button>
                        </div>
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
