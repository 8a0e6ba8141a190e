use contracts::domain::a002_blackout_date::aggregate::{BlackoutDate, BlackoutDateDto};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_blackout_date::api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::FormError;
use crate::shared::date_utils::{format_date, parse_input_value, to_input_value, today};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::mutation::run_mutation;

#[component]
pub fn BlackoutDateDetails(
    existing: Vec<BlackoutDate>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let form = RwSignal::new(BlackoutDateDto::default());
    let existing = StoredValue::new(existing);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let min_date = to_input_value(Some(today()));

    let on_save = move |_| {
        let dto = form.get_untracked();
        if let Err(e) = existing.with_value(|items| dto.validate(today(), items)) {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        let message = dto
            .date
            .map(|d| format!("{} blocked", format_date(d)))
            .unwrap_or_else(|| "Blackout date added".to_string());
        run_mutation(
            saving,
            toast,
            message,
            async move { api::create_blackout_date(&dto).await },
            move |_| on_saved.run(()),
        );
    };

    view! {
        <ModalFrame on_close=on_close modal_class="modal".to_string()>
            <div class="modal-header">
                <h2 class="modal-title">"Add blackout date"</h2>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    {icon("x")}
                </Button>
            </div>

            <div class="modal-body">
                <FormError error=error />

                <div class="form__group">
                    <Label>"Date"</Label>
                    <input
                        type="date"
                        class="form__input"
                        min=min_date
                        prop:value=move || form.with(|f| to_input_value(f.date))
                        on:input=move |ev| form.update(|f| f.date = parse_input_value(&event_target_value(&ev)))
                    />
                </div>

                <div class="form__group">
                    <Label>"Reason"</Label>
                    <input
                        type="text"
                        class="form__input"
                        placeholder="Public holiday, equipment maintenance..."
                        prop:value=move || form.with(|f| f.reason.clone())
                        on:input=move |ev| form.update(|f| f.reason = event_target_value(&ev))
                    />
                </div>

                <div class="form__group">
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.all_day)
                            on:change=move |ev| form.update(|f| f.all_day = event_target_checked(&ev))
                        />
                        " All day"
                    </label>
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
                    {move || if saving.get() { "Saving..." } else { "Add" }}
                </Button>
            </div>
        </ModalFrame>
    }
}
