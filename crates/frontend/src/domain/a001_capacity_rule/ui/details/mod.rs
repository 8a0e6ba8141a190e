use contracts::domain::a001_capacity_rule::aggregate::{CapacityRule, CapacityRuleDto, DayOfWeek};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_capacity_rule::api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::FormError;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::mutation::run_mutation;

/// Create/edit modal. `existing` is the full rule set, used for overlap checks.
#[component]
pub fn CapacityRuleDetails(
    dto: CapacityRuleDto,
    existing: Vec<CapacityRule>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let is_edit = dto.id.is_some();
    let form = RwSignal::new(dto);
    let existing = StoredValue::new(existing);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let on_save = move |_| {
        let current = form.get_untracked();
        if let Err(e) = existing.with_value(|rules| current.validate(rules)) {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        let message = if is_edit { "Capacity rule updated" } else { "Capacity rule added" };
        run_mutation(
            saving,
            toast,
            message,
            async move { api::save_rule(&current).await },
            move |_| on_saved.run(()),
        );
    };

    view! {
        <ModalFrame on_close=on_close modal_class="modal".to_string()>
            <div class="modal-header">
                <h2 class="modal-title">
                    {if is_edit { "Edit capacity rule" } else { "New capacity rule" }}
                </h2>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    {icon("x")}
                </Button>
            </div>

            <div class="modal-body">
                <FormError error=error />

                <div class="form__group">
                    <Label>"Day"</Label>
                    <select
                        class="form__select"
                        prop:value=move || form.with(|f| f.day_of_week.index().to_string())
                        on:change=move |ev| {
                            let day = event_target_value(&ev).parse::<u8>().ok().and_then(DayOfWeek::new);
                            if let Some(day) = day {
                                form.update(|f| f.day_of_week = day);
                            }
                        }
                    >
                        {DayOfWeek::ALL.into_iter().map(|d| view! {
                            <option value=d.index().to_string()>{d.name()}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form__row">
                    <div class="form__group">
                        <Label>"Start"</Label>
                        <input
                            type="time"
                            class="form__input"
                            prop:value=move || form.with(|f| f.start_time.clone())
                            on:input=move |ev| form.update(|f| f.start_time = event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <Label>"End"</Label>
                        <input
                            type="time"
                            class="form__input"
                            prop:value=move || form.with(|f| f.end_time.clone())
                            on:input=move |ev| form.update(|f| f.end_time = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form__row">
                    <div class="form__group">
                        <Label>"Standard slots"</Label>
                        <input
                            type="number"
                            min="0"
                            class="form__input"
                            prop:value=move || form.with(|f| f.max_standard_slots.to_string())
                            on:input=move |ev| {
                                let v = event_target_value(&ev).parse().unwrap_or(0);
                                form.update(|f| f.max_standard_slots = v);
                            }
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Emergency slots"</Label>
                        <input
                            type="number"
                            min="0"
                            class="form__input"
                            prop:value=move || form.with(|f| f.max_emergency_slots.to_string())
                            on:input=move |ev| {
                                let v = event_target_value(&ev).parse().unwrap_or(0);
                                form.update(|f| f.max_emergency_slots = v);
                            }
                        />
                    </div>
                </div>

                <div class="form__group">
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
                    <Label>"Notes"</Label>
                    <textarea
                        class="form__textarea"
                        rows="2"
                        prop:value=move || form.with(|f| f.notes.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.notes = (!value.trim().is_empty()).then_some(value));
                        }
                    />
                </div>
            </div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                    disabled=saving
                >
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=saving>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
            </div>
        </ModalFrame>
    }
}
