use contracts::domain::a002_blackout_date::aggregate::{
    apply_filter, days_until, BlackoutDate, BlackoutFilter, BlackoutScope,
};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_blackout_date::api;
use crate::domain::a002_blackout_date::ui::details::BlackoutDateDetails;
use crate::layout::toast_service::use_toast;
use crate::shared::components::ConfirmDialog;
use crate::shared::date_utils::{format_date, is_weekend, relative_days, today};
use crate::shared::icons::icon;
use crate::shared::mutation::{load_into, run_mutation};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query_state::{read_for, sync_filters};

pub const TAB_KEY: &str = "a002_blackout_date";

#[component]
pub fn BlackoutDateList() -> impl IntoView {
    let toast = use_toast();
    let items: RwSignal<Vec<BlackoutDate>> = RwSignal::new(Vec::new());
    let filters: RwSignal<BlackoutFilter> = RwSignal::new(read_for(TAB_KEY));
    sync_filters(TAB_KEY, filters);

    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let deleting = RwSignal::new(false);
    let show_add = RwSignal::new(false);
    let deleting_item: RwSignal<Option<BlackoutDate>> = RwSignal::new(None);
    let search = RwSignal::new(filters.get_untracked().search);

    let load = move || load_into(loading, error, api::fetch_blackout_dates(), items);
    load();

    let visible = Memo::new(move |_| {
        let filter = filters.get();
        items.with(|all| apply_filter(all, &filter, today()))
    });

    let confirm_delete = move |_| {
        let Some(item) = deleting_item.get_untracked() else {
            return;
        };
        run_mutation(
            deleting,
            toast,
            format!("{} unblocked", format_date(item.date)),
            async move { api::delete_blackout_date(&item.id).await },
            move |_| {
                deleting_item.set(None);
                load();
            },
        );
    };

    view! {
        <PageFrame page_id="a002_blackout_date--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Blackout dates"</h1>
                    <Badge>{move || visible.with(|v| v.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| show_add.set(true)>
                        {icon("plus")}
                        " Add date"
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
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div class="segmented">
                                {BlackoutScope::all().into_iter().map(|scope| view! {
                                    <button
                                        class="segmented__item"
                                        class:segmented__item--active=move || filters.with(|f| f.scope == scope)
                                        on:click=move |_| filters.update(|f| f.scope = scope)
                                    >
                                        {scope.label()}
                                    </button>
                                }).collect_view()}
                            </div>
                            <div style="flex: 1; max-width: 320px;">
                                <Input value=search placeholder="Search reason..." />
                            </div>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| filters.update(|f| f.search = search.get_untracked())
                            >
                                "Search"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=140.0>"Date"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"When"</TableHeaderCell>
                                <TableHeaderCell min_width=220.0>"Reason"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Duration"</TableHeaderCell>
                                <TableHeaderCell min_width=60.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|b| b.id.clone()
                                children=move |item| {
                                    let days = days_until(&item, today());
                                    let item_for_delete = item.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-weight: 500;">{format_date(item.date)}</span>
                                                    {is_weekend(item.date).then(|| view! {
                                                        <span class="badge badge--neutral">"Weekend"</span>
                                                    })}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{relative_days(days)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{item.reason.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if item.all_day { "All day" } else { "Partial" }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| deleting_item.set(Some(item_for_delete.clone()))
                                                    attr:title="Remove"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || !loading.get() && visible.with(|v| v.is_empty())>
                        <div class="table__empty">"No blackout dates in this view."</div>
                    </Show>
                </div>

                <Show when=move || show_add.get()>
                    <BlackoutDateDetails
                        existing=items.get_untracked()
                        on_close=Callback::new(move |_| show_add.set(false))
                        on_saved=Callback::new(move |_| {
                            show_add.set(false);
                            load();
                        })
                    />
                </Show>

                {move || deleting_item.get().map(|item| view! {
                    <ConfirmDialog
                        title="Remove blackout date"
                        message=format!("Reopen {} for bookings?", format_date(item.date))
                        confirm_label="Remove"
                        busy=deleting
                        on_confirm=Callback::new(confirm_delete)
                        on_cancel=Callback::new(move |_| deleting_item.set(None))
                    />
                })}
            </div>
        </PageFrame>
    }
}
