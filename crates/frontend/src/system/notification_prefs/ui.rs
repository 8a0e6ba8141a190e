use contracts::system::notification_prefs::{DigestFrequency, NotificationPreferences};
use leptos::prelude::*;
use thaw::*;

use super::api;
use crate::layout::toast_service::use_toast;
use crate::shared::icons::icon;
use crate::shared::mutation::run_mutation;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SETTINGS;

/// One checkbox signal per preference flag.
#[derive(Clone, Copy)]
struct PrefsForm {
    email_new_booking: RwSignal<bool>,
    email_emergency_booking: RwSignal<bool>,
    email_low_stock: RwSignal<bool>,
    email_new_inquiry: RwSignal<bool>,
    sms_emergency_booking: RwSignal<bool>,
    digest: RwSignal<DigestFrequency>,
}

impl PrefsForm {
    fn new(p: &NotificationPreferences) -> Self {
        Self {
            email_new_booking: RwSignal::new(p.email_new_booking),
            email_emergency_booking: RwSignal::new(p.email_emergency_booking),
            email_low_stock: RwSignal::new(p.email_low_stock),
            email_new_inquiry: RwSignal::new(p.email_new_inquiry),
            sms_emergency_booking: RwSignal::new(p.sms_emergency_booking),
            digest: RwSignal::new(p.digest),
        }
    }

    fn load(&self, p: &NotificationPreferences) {
        self.email_new_booking.set(p.email_new_booking);
        self.email_emergency_booking.set(p.email_emergency_booking);
        self.email_low_stock.set(p.email_low_stock);
        self.email_new_inquiry.set(p.email_new_inquiry);
        self.sms_emergency_booking.set(p.sms_emergency_booking);
        self.digest.set(p.digest);
    }

    fn snapshot(&self) -> NotificationPreferences {
        NotificationPreferences {
            email_new_booking: self.email_new_booking.get(),
            email_emergency_booking: self.email_emergency_booking.get(),
            email_low_stock: self.email_low_stock.get(),
            email_new_inquiry: self.email_new_inquiry.get(),
            sms_emergency_booking: self.sms_emergency_booking.get(),
            digest: self.digest.get(),
        }
    }
}

#[component]
pub fn NotificationPrefsPage() -> impl IntoView {
    let toast = use_toast();
    let saved = RwSignal::new(NotificationPreferences::default());
    let form = PrefsForm::new(&NotificationPreferences::default());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);

    leptos::task::spawn_local(async move {
        match api::fetch_preferences().await {
            Ok(prefs) => {
                form.load(&prefs);
                saved.set(prefs);
            }
            Err(e) => error.set(Some(e)),
        }
        loading.set(false);
    });

    let is_dirty = Signal::derive(move || form.snapshot() != saved.get());

    let on_save = move |_| {
        let prefs = form.snapshot();
        run_mutation(
            saving,
            toast,
            "Notification preferences saved",
            async move { api::save_preferences(&prefs).await },
            move |stored| saved.set(stored),
        );
    };

    view! {
        <PageFrame page_id="sys_notification_prefs--settings" category=PAGE_CAT_SETTINGS>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Notifications"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| form.load(&saved.get_untracked())
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
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="settings-section">
                    <h3 class="settings-section__title">"Email"</h3>
                    <div class="form__group">
                        <Checkbox checked=form.email_new_booking label="New booking" />
                    </div>
                    <div class="form__group">
                        <Checkbox checked=form.email_emergency_booking label="Emergency booking" />
                    </div>
                    <div class="form__group">
                        <Checkbox checked=form.email_low_stock label="Low stock" />
                    </div>
                    <div class="form__group">
                        <Checkbox checked=form.email_new_inquiry label="New inquiry" />
                    </div>
                </div>

                <div class="settings-section">
                    <h3 class="settings-section__title">"SMS"</h3>
                    <div class="form__group">
                        <Checkbox checked=form.sms_emergency_booking label="Emergency booking" />
                    </div>
                </div>

                <div class="settings-section">
                    <h3 class="settings-section__title">"Digest"</h3>
                    <div class="form__group">
                        <select
                            class="form__select"
                            prop:value=move || form.digest.get().code()
                            on:change=move |ev| form.digest.set(DigestFrequency::from_code(&event_target_value(&ev)))
                        >
                            {DigestFrequency::all().into_iter().map(|d| view! {
                                <option value=d.code()>{d.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
