use contracts::domain::a004_b2b_account::aggregate::{B2bAccount, PaymentTerms};
use leptos::prelude::*;
use thaw::*;

use super::locations::B2bLocationsPanel;
use super::pricing::ContractPricingPanel;
use super::view_model::B2bAccountDetailsViewModel;
use crate::domain::a004_b2b_account::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::B2B_DETAIL_PREFIX;
use crate::layout::tabs::{detail_tab_label, tab_label_for_key};
use crate::layout::toast_service::use_toast;
use crate::shared::components::{ConfirmDialog, FormError};
use crate::shared::date_utils::{parse_input_value, to_input_value, today};
use crate::shared::icons::icon;
use crate::shared::mutation::run_mutation;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    General,
    Locations,
    Pricing,
}

impl Section {
    fn label(&self) -> &'static str {
        match self {
            Section::General => "General",
            Section::Locations => "Locations",
            Section::Pricing => "Contract pricing",
        }
    }
}

fn optional(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

#[component]
pub fn B2bAccountDetails(
    /// `None` for a new account
    id: Option<String>,
    tab_key: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = B2bAccountDetailsViewModel::new();
    let section = RwSignal::new(Section::General);
    let confirm_delete = RwSignal::new(false);
    let deleting = RwSignal::new(false);
    let tab_key = StoredValue::new(tab_key);
    let loaded = RwSignal::new(None::<B2bAccount>);

    let rename_tab = move |account: B2bAccount| {
        let key = tab_key.get_value();
        tabs_store.update_tab_title(
            &key,
            &detail_tab_label(tab_label_for_key(&key), &account.company_name),
        );
        loaded.set(Some(account));
    };
    vm.load_if_needed(id, Callback::new(rename_tab));

    let on_saved = Callback::new(move |account: B2bAccount| {
        let key = tab_key.get_value();
        if key.ends_with("_new") {
            // Swap the "new" tab for the real record's tab
            tabs_store.close_tab(&key);
            let new_key = format!("{}{}", B2B_DETAIL_PREFIX, account.id);
            tabs_store.open_tab(
                &new_key,
                &detail_tab_label(tab_label_for_key(&new_key), &account.company_name),
            );
        } else {
            rename_tab(account);
        }
    });

    let on_delete = move |_| {
        let Some(id) = vm.account_id() else {
            return;
        };
        run_mutation(
            deleting,
            toast,
            "Account deleted",
            async move { api::delete_account(&id).await },
            move |_| {
                confirm_delete.set(false);
                on_close.run(());
            },
        );
    };

    let account_id = Signal::derive(move || vm.account_id());

    view! {
        <PageFrame page_id="a004_b2b_account--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || {
                            let name = vm.saved.with(|s| s.company_name.clone());
                            if name.is_empty() { "New B2B account".to_string() } else { name }
                        }}
                    </h1>
                    {move || loaded.get().map(|account| {
                        let s = account.contract_status(today());
                        view! { <span class=format!("badge badge--{}", s.badge_variant())>{s.label()}</span> }
                    })}
                </div>
                <div class="page__header-right">
                    <Show when=move || vm.is_edit_mode()>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| confirm_delete.set(true)
                        >
                            {icon("trash")}
                            " Delete"
                        </Button>
                    </Show>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {icon("x")}
                        " Close"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="segmented">
                    {[Section::General, Section::Locations, Section::Pricing].into_iter().map(|s| view! {
                        <button
                            class="segmented__item"
                            class:segmented__item--active=move || section.get() == s
                            disabled=move || s != Section::General && account_id.with(|id| id.is_none())
                            on:click=move |_| section.set(s)
                        >
                            {s.label()}
                        </button>
                    }).collect_view()}
                </div>

                <Show when=move || vm.loading.get()>
                    <div class="page__loading">"Loading..."</div>
                </Show>

                <Show when=move || section.get() == Section::General>
                    <GeneralSection vm=vm on_saved=on_saved />
                </Show>

                {move || {
                    let id = account_id.get()?;
                    match section.get() {
                        Section::Locations => Some(view! { <B2bLocationsPanel account_id=id /> }.into_any()),
                        Section::Pricing => Some(view! {
                            <ContractPricingPanel
                                account_id=id
                                discount_percent=Signal::derive(move || vm.saved.with(|s| s.discount_percent))
                            />
                        }.into_any()),
                        Section::General => None,
                    }
                }}
            </div>

            <Show when=move || confirm_delete.get()>
                <ConfirmDialog
                    title="Delete account"
                    message="Delete this account with its locations and contract prices?"
                    busy=deleting
                    on_confirm=Callback::new(on_delete)
                    on_cancel=Callback::new(move |_| confirm_delete.set(false))
                />
            </Show>
        </PageFrame>
    }
}

#[component]
fn GeneralSection(vm: B2bAccountDetailsViewModel, on_saved: Callback<B2bAccount>) -> impl IntoView {
    let toast = use_toast();
    let form = vm.form;

    view! {
        <div class="details-form">
            <FormError error=vm.error />

            <div class="form__row">
                <div class="form__group">
                    <Label>"Company name"</Label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || form.with(|f| f.company_name.clone())
                        on:input=move |ev| form.update(|f| f.company_name = event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <Label>"Payment terms"</Label>
                    <select
                        class="form__select"
                        prop:value=move || form.with(|f| f.payment_terms.code())
                        on:change=move |ev| {
                            if let Some(t) = PaymentTerms::from_code(&event_target_value(&ev)) {
                                form.update(|f| f.payment_terms = t);
                            }
                        }
                    >
                        {PaymentTerms::all().into_iter().map(|t| view! {
                            <option value=t.code()>{t.label()}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <div class="form__row">
                <div class="form__group">
                    <Label>"Contact name"</Label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || form.with(|f| f.contact_name.clone())
                        on:input=move |ev| form.update(|f| f.contact_name = event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <Label>"Contact email"</Label>
                    <input
                        type="email"
                        class="form__input"
                        prop:value=move || form.with(|f| f.contact_email.clone())
                        on:input=move |ev| form.update(|f| f.contact_email = event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <Label>"Contact phone"</Label>
                    <input
                        type="tel"
                        class="form__input"
                        prop:value=move || form.with(|f| f.contact_phone.clone().unwrap_or_default())
                        on:input=move |ev| form.update(|f| f.contact_phone = optional(event_target_value(&ev)))
                    />
                </div>
            </div>

            <div class="form__row">
                <div class="form__group">
                    <Label>"Billing email"</Label>
                    <input
                        type="email"
                        class="form__input"
                        prop:value=move || form.with(|f| f.billing_email.clone().unwrap_or_default())
                        on:input=move |ev| form.update(|f| f.billing_email = optional(event_target_value(&ev)))
                    />
                </div>
                <div class="form__group">
                    <Label>"Billing address"</Label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || form.with(|f| f.billing_address.clone().unwrap_or_default())
                        on:input=move |ev| form.update(|f| f.billing_address = optional(event_target_value(&ev)))
                    />
                </div>
            </div>

            <div class="form__row">
                <div class="form__group">
                    <Label>"Discount, %"</Label>
                    <input
                        type="number"
                        min="0"
                        max="100"
                        step="0.5"
                        class="form__input"
                        prop:value=move || form.with(|f| f.discount_percent.to_string())
                        on:input=move |ev| {
                            let v = event_target_value(&ev).parse().unwrap_or(0.0);
                            form.update(|f| f.discount_percent = v);
                        }
                    />
                </div>
                <div class="form__group">
                    <Label>"Contract start"</Label>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || form.with(|f| to_input_value(f.contract_start))
                        on:input=move |ev| form.update(|f| f.contract_start = parse_input_value(&event_target_value(&ev)))
                    />
                </div>
                <div class="form__group">
                    <Label>"Contract end"</Label>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || form.with(|f| to_input_value(f.contract_end))
                        on:input=move |ev| form.update(|f| f.contract_end = parse_input_value(&event_target_value(&ev)))
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
                    rows="3"
                    prop:value=move || form.with(|f| f.notes.clone().unwrap_or_default())
                    on:input=move |ev| form.update(|f| f.notes = optional(event_target_value(&ev)))
                />
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.reset()
                    disabled=Signal::derive(move || !vm.is_dirty() || vm.saving.get())
                >
                    "Reset"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(toast, on_saved)
                    disabled=Signal::derive(move || !vm.is_dirty() || vm.saving.get())
                >
                    {icon("check")}
                    {move || if vm.is_edit_mode() { " Save" } else { " Create" }}
                </Button>
            </div>
        </div>
    }
}
