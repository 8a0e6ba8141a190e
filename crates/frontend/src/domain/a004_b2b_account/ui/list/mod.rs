use contracts::domain::a004_b2b_account::aggregate::{B2bAccount, ContractStatus};
use contracts::domain::a004_b2b_account::filter::{filter_accounts, B2bFilter};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_b2b_account::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::B2B_DETAIL_PREFIX;
use crate::layout::tabs::{detail_tab_label, tab_label_for_key};
use crate::shared::components::table::number_format::format_percent;
use crate::shared::date_utils::{format_optional_date, today};
use crate::shared::icons::icon;
use crate::shared::mutation::load_into;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query_state::{read_for, sync_filters};

pub const TAB_KEY: &str = "a004_b2b_account";

fn status_from_code(code: &str) -> Option<ContractStatus> {
    ContractStatus::all().into_iter().find(|s| s.code() == code)
}

#[component]
pub fn B2bAccountList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let accounts: RwSignal<Vec<B2bAccount>> = RwSignal::new(Vec::new());
    let filters: RwSignal<B2bFilter> = RwSignal::new(read_for(TAB_KEY));
    sync_filters(TAB_KEY, filters);

    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(filters.get_untracked().search);

    let load = move || load_into(loading, error, api::fetch_accounts(), accounts);
    load();

    let visible = Memo::new(move |_| {
        let filter = filters.get();
        accounts.with(|all| filter_accounts(all, &filter, today()))
    });

    let open_details = move |id: &str, company: &str| {
        let key = format!("{}{}", B2B_DETAIL_PREFIX, id);
        tabs_store.open_tab(&key, &detail_tab_label(tab_label_for_key(&key), company));
    };

    view! {
        <PageFrame page_id="a004_b2b_account--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"B2B accounts"</h1>
                    <Badge>{move || visible.with(|v| v.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| open_details("new", "New")
                    >
                        {icon("plus")}
                        " New account"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Filters"</span>
                            <Show when=move || filters.with(|f| f.active_count() > 0)>
                                <span class="badge badge--neutral">
                                    {move || filters.with(|f| f.active_count()).to_string()}
                                </span>
                            </Show>
                        </div>
                    </div>
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;">
                                <Input value=search placeholder="Company, contact or email..." />
                            </div>
                            <select
                                class="form__select"
                                prop:value=move || filters.with(|f| f.status.map(|s| s.code()).unwrap_or(""))
                                on:change=move |ev| {
                                    let status = status_from_code(&event_target_value(&ev));
                                    filters.update(|f| f.status = status);
                                }
                            >
                                <option value="">"Any status"</option>
                                {ContractStatus::all().into_iter().map(|s| view! {
                                    <option value=s.code()>{s.label()}</option>
                                }).collect_view()}
                            </select>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| filters.update(|f| f.search = search.get_untracked())
                            >
                                "Search"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    search.set(String::new());
                                    filters.set(B2bFilter::default());
                                }
                            >
                                "Reset"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=200.0>"Company"</TableHeaderCell>
                                <TableHeaderCell min_width=150.0>"Contact"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Terms"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Discount"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Contract"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|a| (a.id.clone(), a.company_name.clone(), a.is_active, a.contract_end)
                                children=move |account| {
                                    let status = account.contract_status(today());
                                    let id = account.id.clone();
                                    let company = account.company_name.clone();
                                    view! {
                                        <TableRow
                                            attr:class="table__row--clickable"
                                            on:click=move |_| open_details(&id, &company)
                                        >
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{account.company_name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {format!("{} <{}>", account.contact_name, account.contact_email)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{account.payment_terms.label()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_percent(account.discount_percent)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format!(
                                                        "{} – {}",
                                                        format_optional_date(account.contract_start),
                                                        format_optional_date(account.contract_end),
                                                    )}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=format!("badge badge--{}", status.badge_variant())>
                                                        {status.label()}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || !loading.get() && visible.with(|v| v.is_empty())>
                        <div class="table__empty">"No accounts match the current filters."</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
