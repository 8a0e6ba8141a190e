use contracts::domain::a005_inventory_item::aggregate::InventoryItem;
use contracts::domain::a007_purchase_order::aggregate::{
    filter_orders, PurchaseOrder, PurchaseOrderDto, PurchaseOrderFilter, PurchaseOrderStatus,
};
use contracts::domain::a007_purchase_order::totals::sum_totals;
use contracts::shared::money::format_currency;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a005_inventory_item::api as inventory_api;
use crate::domain::a007_purchase_order::api;
use crate::domain::a007_purchase_order::ui::details::PurchaseOrderDetails;
use crate::domain::a007_purchase_order::ui::receive::ReceivePurchaseOrder;
use crate::layout::toast_service::use_toast;
use crate::shared::components::ConfirmDialog;
use crate::shared::date_utils::{format_date, format_optional_date, today};
use crate::shared::icons::icon;
use crate::shared::mutation::{load_into, run_mutation};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query_state::{read_for, sync_filters};

pub const TAB_KEY: &str = "a007_purchase_order";

#[derive(Clone)]
enum Modal {
    Edit(PurchaseOrderDto, Option<String>),
    Receive(PurchaseOrder),
    Cancel(PurchaseOrder),
    Delete(PurchaseOrder),
}

#[component]
pub fn PurchaseOrderList() -> impl IntoView {
    let toast = use_toast();
    let orders = RwSignal::new(Vec::<PurchaseOrder>::new());
    let items = RwSignal::new(Vec::<InventoryItem>::new());
    let filters: RwSignal<PurchaseOrderFilter> = RwSignal::new(read_for(TAB_KEY));
    sync_filters(TAB_KEY, filters);

    let loading = RwSignal::new(false);
    let items_loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(filters.get_untracked().search);
    let modal = RwSignal::new(None::<Modal>);
    let busy = RwSignal::new(false);

    let load = move || load_into(loading, error, api::fetch_orders(), orders);
    load();
    load_into(items_loading, error, inventory_api::fetch_items(), items);

    let visible = Memo::new(move |_| {
        let filter = filters.get();
        orders.with(|all| filter_orders(all, &filter))
    });
    let totals = Memo::new(move |_| visible.with(|v| sum_totals(v)));

    let close_modal = Callback::new(move |_| modal.set(None));
    let saved = Callback::new(move |_| {
        modal.set(None);
        load();
    });

    let submit = move |order: PurchaseOrder| {
        let number = order.po_number.clone();
        run_mutation(
            busy,
            toast,
            format!("{} submitted", number),
            async move { api::set_status(&order, PurchaseOrderStatus::Submitted).await },
            move |_| load(),
        );
    };

    let confirm = move |_| match modal.get_untracked() {
        Some(Modal::Cancel(order)) => {
            let number = order.po_number.clone();
            run_mutation(
                busy,
                toast,
                format!("{} cancelled", number),
                async move { api::set_status(&order, PurchaseOrderStatus::Cancelled).await },
                move |_| {
                    modal.set(None);
                    load();
                },
            );
        }
        Some(Modal::Delete(order)) => {
            let number = order.po_number.clone();
            run_mutation(
                busy,
                toast,
                format!("{} deleted", number),
                async move { api::delete_order(&order.id).await },
                move |_| {
                    modal.set(None);
                    load();
                },
            );
        }
        _ => {}
    };

    view! {
        <PageFrame page_id="a007_purchase_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Purchase orders"</h1>
                    <Badge>{move || visible.with(|v| v.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| modal.set(Some(Modal::Edit(PurchaseOrderDto::new(today()), None)))
                    >
                        {icon("plus")}
                        " New order"
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
                                <button
                                    class="segmented__item"
                                    class:segmented__item--active=move || filters.with(|f| f.status.is_none())
                                    on:click=move |_| filters.update(|f| f.status = None)
                                >
                                    "All"
                                </button>
                                {PurchaseOrderStatus::all().into_iter().map(|s| view! {
                                    <button
                                        class="segmented__item"
                                        class:segmented__item--active=move || filters.with(|f| f.status == Some(s))
                                        on:click=move |_| filters.update(|f| f.status = Some(s))
                                    >
                                        {s.label()}
                                    </button>
                                }).collect_view()}
                            </div>
                            <div style="flex: 1; max-width: 280px;">
                                <Input value=search placeholder="PO number or supplier..." />
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
                                <TableHeaderCell min_width=110.0>"PO number"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Supplier"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Ordered"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Expected"</TableHeaderCell>
                                <TableHeaderCell min_width=60.0>"Lines"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Total"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=150.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|o| (o.id.clone(), o.status, o.lines.len(), o.totals().total.to_bits())
                                children=move |order| {
                                    let overdue = order.is_overdue(today());
                                    let open = order.clone();
                                    let to_submit = order.clone();
                                    let to_receive = order.clone();
                                    let to_cancel = order.clone();
                                    let to_delete = order.clone();
                                    view! {
                                        <TableRow
                                            attr:class="table__row--clickable"
                                            on:click=move |_| modal.set(Some(Modal::Edit(
                                                PurchaseOrderDto::from_order(&open),
                                                Some(open.po_number.clone()),
                                            )))
                                        >
                                            <TableCell><TableCellLayout>{order.po_number.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{order.supplier.clone()}</TableCellLayout></TableCell>
                                            <TableCell>{format_date(order.order_date)}</TableCell>
                                            <TableCell>
                                                <span class:text-error=overdue>{format_optional_date(order.expected_date)}</span>
                                            </TableCell>
                                            <TableCell>{order.lines.len()}</TableCell>
                                            <TableCell class="table-cell--right">{format_currency(order.totals().total)}</TableCell>
                                            <TableCell>
                                                <span class=format!("badge badge--{}", order.status.badge_variant())>
                                                    {order.status.label()}
                                                </span>
                                                {overdue.then(|| view! { <span class="badge badge--warning">"Overdue"</span> })}
                                            </TableCell>
                                            <TableCell on:click=|ev| ev.stop_propagation()>
                                                <Flex gap=FlexGap::Small>
                                                    {order.can_submit().then(|| view! {
                                                        <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle attr:title="Submit" on_click=move |_| submit(to_submit.clone())>
                                                            {icon("send")}
                                                        </Button>
                                                    })}
                                                    {order.can_receive().then(|| view! {
                                                        <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle attr:title="Receive" on_click=move |_| modal.set(Some(Modal::Receive(to_receive.clone())))>
                                                            {icon("package-check")}
                                                        </Button>
                                                    })}
                                                    {order.can_cancel().then(|| view! {
                                                        <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle attr:title="Cancel order" on_click=move |_| modal.set(Some(Modal::Cancel(to_cancel.clone())))>
                                                            {icon("ban")}
                                                        </Button>
                                                    })}
                                                    {order.can_delete().then(|| view! {
                                                        <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle attr:title="Delete" on_click=move |_| modal.set(Some(Modal::Delete(to_delete.clone())))>
                                                            {icon("trash")}
                                                        </Button>
                                                    })}
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                            <Show when=move || visible.with(|v| !v.is_empty())>
                                <TableRow attr:class="table__totals-row">
                                    <TableCell attr:colspan="5">
                                        {move || {
                                            let t = totals.get();
                                            format!(
                                                "Subtotal {} · Tax {} · Shipping {}",
                                                format_currency(t.subtotal),
                                                format_currency(t.tax),
                                                format_currency(t.shipping),
                                            )
                                        }}
                                    </TableCell>
                                    <TableCell class="table-cell--right">
                                        <strong>{move || format_currency(totals.get().total)}</strong>
                                    </TableCell>
                                    <TableCell attr:colspan="2">""</TableCell>
                                </TableRow>
                            </Show>
                        </TableBody>
                    </Table>
                    <Show when=move || !loading.get() && visible.with(|v| v.is_empty())>
                        <div class="table__empty">"No purchase orders match the current filters."</div>
                    </Show>
                </div>
            </div>

            {move || match modal.get() {
                None => ().into_any(),
                Some(Modal::Edit(dto, po_number)) => view! {
                    <PurchaseOrderDetails
                        dto=dto
                        po_number=po_number
                        items=items.get_untracked()
                        on_close=close_modal
                        on_saved=saved
                    />
                }.into_any(),
                Some(Modal::Receive(order)) => view! {
                    <ReceivePurchaseOrder order=order on_close=close_modal on_saved=saved />
                }.into_any(),
                Some(Modal::Cancel(order)) => view! {
                    <ConfirmDialog
                        title="Cancel purchase order"
                        message=format!("Cancel {} from {}?", order.po_number, order.supplier)
                        confirm_label="Cancel order"
                        busy=busy
                        on_confirm=Callback::new(confirm)
                        on_cancel=close_modal
                    />
                }.into_any(),
                Some(Modal::Delete(order)) => view! {
                    <ConfirmDialog
                        title="Delete purchase order"
                        message=format!("Delete draft {}?", order.po_number)
                        busy=busy
                        on_confirm=Callback::new(confirm)
                        on_cancel=close_modal
                    />
                }.into_any(),
            }}
        </PageFrame>
    }
}
