use contracts::domain::a003_emergency_settings::aggregate::{
    EmergencySettings, MAX_NOTICE_HOURS, MAX_SURCHARGE_PERCENT,
};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_emergency_settings::api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::FormError;
use crate::shared::icons::icon;
use crate::shared::mutation::run_mutation;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SETTINGS;
use contracts::shared::money::format_currency;

const SAMPLE_JOB_PRICE: f64 = 100.0;

#[component]
pub fn EmergencySettingsPage() -> impl IntoView {
    let toast = use_toast();
    let saved = RwSignal::new(EmergencySettings::default());
    let form = RwSignal::new(EmergencySettings::default());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);

    let load = move || {
        loading.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::fetch_settings().await {
                Ok(settings) => {
                    form.set(settings.clone());
                    saved.set(settings);
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };
    load();

    let is_dirty = Memo::new(move |_| form.with(|f| saved.with(|s| f != s)));

    let on_save = move |_| {
        let settings = form.get_untracked();
        if let Err(e) = settings.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        run_mutation(
            saving,
            toast,
            "Emergency booking settings saved",
            async move { api::save_settings(&settings).await },
            move |stored| {
                form.set(stored.clone());
                saved.set(stored);
            },
        );
    };

    let on_reset = move |_| {
        error.set(None);
        form.set(saved.get_untracked());
    };

    view! {
        <PageFrame page_id="a003_emergency_settings--settings" category=PAGE_CAT_SETTINGS>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Emergency bookings"</h1>
                    <Show when=move || is_dirty.get()>
                        <span class="badge badge--warning">"Unsaved changes"</span>
                    </Show>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=on_reset
                        disabled=Signal::derive(move || !is_dirty.get() || saving.get())
                    >
                        "Reset"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || !is_dirty.get() || saving.get() || loading.get())
                    >
                        {icon("check")}
                        {move || if saving.get() { " Saving..." } else { " Save" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <FormError error=error />

                <div class="settings-section">
                    <div class="form__group">
                        <label class="form__checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.enabled)
                                on:change=move |ev| form.update(|f| f.enabled = event_target_checked(&ev))
                            />
                            " Accept emergency bookings"
                        </label>
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <Label>{format!("Surcharge, % (0-{})", MAX_SURCHARGE_PERCENT)}</Label>
                            <input
                                type="number"
                                min="0"
                                step="0.5"
                                class="form__input"
                                prop:value=move || form.with(|f| f.surcharge_percent.to_string())
                                on:input=move |ev| {
                                    let v = event_target_value(&ev).parse().unwrap_or(0.0);
                                    form.update(|f| f.surcharge_percent = v);
                                }
                            />
                        </div>
                        <div class="form__group">
                            <Label>{format!("Minimum notice, hours (0-{})", MAX_NOTICE_HOURS)}</Label>
                            <input
                                type="number"
                                min="0"
                                class="form__input"
                                prop:value=move || form.with(|f| f.min_notice_hours.to_string())
                                on:input=move |ev| {
                                    let v = event_target_value(&ev).parse().unwrap_or(0);
                                    form.update(|f| f.min_notice_hours = v);
                                }
                            />
                        </div>
                        <div class="form__group">
                            <Label>"Max per day"</Label>
                            <input
                                type="number"
                                min="0"
                                class="form__input"
                                prop:value=move || form.with(|f| f.max_per_day.to_string())
                                on:input=move |ev| {
                                    let v = event_target_value(&ev).parse().unwrap_or(0);
                                    form.update(|f| f.max_per_day = v);
                                }
                            />
                        </div>
                    </div>

                    <div class="form__group">
                        <Label>"Emergency contact phone"</Label>
                        <input
                            type="tel"
                            class="form__input"
                            prop:value=move || form.with(|f| f.contact_phone.clone())
                            on:input=move |ev| form.update(|f| f.contact_phone = event_target_value(&ev))
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Notice shown to customers"</Label>
                        <textarea
                            class="form__textarea"
                            rows="3"
                            prop:value=move || form.with(|f| f.notice_message.clone())
                            on:input=move |ev| form.update(|f| f.notice_message = event_target_value(&ev))
                        />
                    </div>

                    <p class="form__hint">
                        {move || format!(
                            "A {} job costs {} as an emergency booking.",
                            format_currency(SAMPLE_JOB_PRICE),
                            format_currency(form.with(|f| f.apply_surcharge(SAMPLE_JOB_PRICE))),
                        )}
                    </p>
                </div>
            </div>
        </PageFrame>
    }
}
