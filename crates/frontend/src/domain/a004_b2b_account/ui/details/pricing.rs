use contracts::domain::a004_b2b_account::aggregate::{savings_percent, ContractPrice, ContractPricingDto};
use contracts::domain::a008_service_catalog::aggregate::Service;
use contracts::shared::money::format_currency;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_b2b_account::api;
use crate::domain::a008_service_catalog::api as catalog_api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::FormError;
use crate::shared::icons::icon;
use crate::shared::mutation::{load_into, run_mutation};

fn blank_price() -> ContractPrice {
    ContractPrice {
        id: None,
        service_id: String::new(),
        service_name: String::new(),
        contract_price: 0.0,
        notes: None,
    }
}

/// Editable per-service price list of one account. Saved as a whole.
#[component]
pub fn ContractPricingPanel(
    account_id: String,
    #[prop(into)] discount_percent: Signal<f64>,
) -> impl IntoView {
    let toast = use_toast();
    let account_id = StoredValue::new(account_id);
    let rows = RwSignal::new(Vec::<ContractPrice>::new());
    let saved = RwSignal::new(Vec::<ContractPrice>::new());
    let services = RwSignal::new(Vec::<Service>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let form_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let services_loading = RwSignal::new(false);
    load_into(services_loading, error, catalog_api::fetch_services(), services);

    let id = account_id.get_value();
    load_into(loading, error, async move { api::fetch_contract_pricing(&id).await }, saved);
    Effect::new(move |_| rows.set(saved.get()));

    let is_dirty = Memo::new(move |_| rows.with(|r| saved.with(|s| r != s)));
    // Rows re-render only when one is added or removed, so inputs keep focus
    let row_count = Memo::new(move |_| rows.with(|r| r.len()));

    let list_price = move |service_id: &str| {
        services.with(|all| all.iter().find(|s| s.id == service_id).map(|s| s.base_price))
    };

    let save = move |_| {
        let mut prices = rows.get_untracked();
        services.with_untracked(|all| {
            for p in prices.iter_mut() {
                if let Some(s) = all.iter().find(|s| s.id == p.service_id) {
                    p.service_name = s.name.clone();
                }
            }
        });
        let dto = ContractPricingDto { prices };
        if let Err(e) = dto.validate() {
            form_error.set(Some(e.to_string()));
            return;
        }
        form_error.set(None);
        let account = account_id.get_value();
        run_mutation(
            saving,
            toast,
            "Contract pricing saved",
            async move { api::save_contract_pricing(&account, &dto).await },
            move |updated| saved.set(updated),
        );
    };

    view! {
        <div class="settings-section">
            <div class="settings-section__header">
                <h3 class="settings-section__title">"Contract pricing"</h3>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| rows.update(|r| r.push(blank_price()))>
                    {icon("plus")}
                    " Add price"
                </Button>
            </div>
            <p class="form__hint">
                {move || format!(
                    "Services without a contract price get the account discount of {}%.",
                    discount_percent.get()
                )}
            </p>

            <FormError error=error />
            <FormError error=form_error />

            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=220.0>"Service"</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>"List price"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Contract price"</TableHeaderCell>
                            <TableHeaderCell min_width=80.0>"Savings"</TableHeaderCell>
                            <TableHeaderCell min_width=200.0>"Notes"</TableHeaderCell>
                            <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <Show when=move || !loading.get() && rows.with(|r| r.is_empty())>
                            <TableRow>
                                <TableCell attr:colspan="6">
                                    <div class="table__empty">"No contract prices. List prices apply."</div>
                                </TableCell>
                            </TableRow>
                        </Show>
                        {move || (0..row_count.get()).map(|idx| {
                            let row = move || rows.with(|r| r.get(idx).cloned().unwrap_or_else(blank_price));
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <select
                                            class="form__select"
                                            prop:value=move || row().service_id
                                            on:change=move |ev| {
                                                let v = event_target_value(&ev);
                                                rows.update(|r| if let Some(p) = r.get_mut(idx) { p.service_id = v; });
                                            }
                                        >
                                            <option value="">"Select service..."</option>
                                            {move || services.get().into_iter().map(|s| view! {
                                                <option value=s.id.clone()>{s.name}</option>
                                            }).collect_view()}
                                        </select>
                                    </TableCell>
                                    <TableCell>
                                        {move || list_price(&row().service_id).map(format_currency).unwrap_or_else(|| "-".into())}
                                    </TableCell>
                                    <TableCell>
                                        <input
                                            type="number"
                                            min="0"
                                            step="0.01"
                                            class="form__input"
                                            prop:value=move || row().contract_price.to_string()
                                            on:input=move |ev| {
                                                let v = event_target_value(&ev).parse().unwrap_or(0.0);
                                                rows.update(|r| if let Some(p) = r.get_mut(idx) { p.contract_price = v; });
                                            }
                                        />
                                    </TableCell>
                                    <TableCell>
                                        {move || {
                                            let r = row();
                                            match list_price(&r.service_id) {
                                                Some(list) => {
                                                    let pct = savings_percent(list, r.contract_price);
                                                    let class = if pct < 0.0 { "badge badge--error" } else { "badge badge--success" };
                                                    view! { <span class=class>{format!("{:.1}%", pct)}</span> }.into_any()
                                                }
                                                None => view! { <span>"-"</span> }.into_any(),
                                            }
                                        }}
                                    </TableCell>
                                    <TableCell>
                                        <input
                                            type="text"
                                            class="form__input"
                                            prop:value=move || row().notes.unwrap_or_default()
                                            on:input=move |ev| {
                                                let v = event_target_value(&ev);
                                                rows.update(|r| if let Some(p) = r.get_mut(idx) {
                                                    p.notes = (!v.trim().is_empty()).then_some(v);
                                                });
                                            }
                                        />
                                    </TableCell>
                                    <TableCell>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            size=ButtonSize::Small
                                            on_click=move |_| rows.update(|r| { if idx < r.len() { r.remove(idx); } })
                                        >
                                            {icon("trash")}
                                        </Button>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        form_error.set(None);
                        rows.set(saved.get_untracked());
                    }
                    disabled=Signal::derive(move || !is_dirty.get() || saving.get())
                >
                    "Reset"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=save
                    disabled=Signal::derive(move || !is_dirty.get() || saving.get())
                >
                    {icon("check")}
                    " Save pricing"
                </Button>
            </div>
        </div>
    }
}
