use contracts::domain::a005_inventory_item::aggregate::{
    categories, filter_items, total_stock_value, InventoryFilter, InventoryItem,
};
use contracts::shared::money::format_currency;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a005_inventory_item::api;
use crate::domain::a005_inventory_item::ui::details::{InventoryItemDetails, StockAdjustmentForm};
use crate::layout::toast_service::use_toast;
use crate::shared::components::table::number_format::format_quantity;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ConfirmDialog;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_f64, cmp_text, sort_list, Sortable};
use crate::shared::mutation::{load_into, run_mutation};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query_state::{read_for, sync_filters};

pub const TAB_KEY: &str = "a005_inventory_item";

impl Sortable for InventoryItem {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "sku" => cmp_text(Some(&self.sku), Some(&other.sku)),
            "category" => cmp_text(Some(&self.category), Some(&other.category)),
            "quantity_on_hand" => cmp_f64(self.quantity_on_hand, other.quantity_on_hand),
            "unit_cost" => cmp_f64(self.unit_cost, other.unit_cost),
            "stock_value" => cmp_f64(self.stock_value(), other.stock_value()),
            _ => cmp_text(Some(&self.name), Some(&other.name)),
        }
    }
}

#[derive(Clone)]
enum Modal {
    Create,
    Edit(InventoryItem),
    Adjust(InventoryItem),
    Delete(InventoryItem),
}

#[component]
pub fn InventoryList() -> impl IntoView {
    let toast = use_toast();
    let items: RwSignal<Vec<InventoryItem>> = RwSignal::new(Vec::new());
    let filters: RwSignal<InventoryFilter> = RwSignal::new(read_for(TAB_KEY));
    sync_filters(TAB_KEY, filters);

    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(filters.get_untracked().search);
    let low_stock = RwSignal::new(filters.get_untracked().low_stock);
    let sort_field = RwSignal::new("name".to_string());
    let sort_ascending = RwSignal::new(true);
    let modal = RwSignal::new(None::<Modal>);
    let deleting = RwSignal::new(false);

    let load = move || load_into(loading, error, api::fetch_items(), items);
    load();

    Effect::new(move |_| {
        let checked = low_stock.get();
        if filters.with_untracked(|f| f.low_stock != checked) {
            filters.update(|f| f.low_stock = checked);
        }
    });

    let all_categories = Memo::new(move |_| items.with(|all| categories(all)));
    let low_count = Memo::new(move |_| items.with(|all| all.iter().filter(|i| i.is_low_stock()).count()));

    let visible = Memo::new(move |_| {
        let filter = filters.get();
        let mut out = items.with(|all| filter_items(all, &filter));
        sort_list(&mut out, &sort_field.get(), sort_ascending.get());
        out
    });
    let visible_value = Memo::new(move |_| visible.with(|v| total_stock_value(v)));

    let toggle_sort = move |field: String| {
        if sort_field.get_untracked() == field {
            sort_ascending.update(|a| *a = !*a);
        } else {
            sort_field.set(field);
            sort_ascending.set(true);
        }
    };
    let current_sort = Signal::derive(move || sort_field.get());
    let ascending = Signal::derive(move || sort_ascending.get());

    let close_modal = Callback::new(move |_| modal.set(None));
    let saved = Callback::new(move |_| {
        modal.set(None);
        load();
    });

    let confirm_delete = move |_| {
        let Some(Modal::Delete(item)) = modal.get_untracked() else {
            return;
        };
        run_mutation(
            deleting,
            toast,
            format!("{} deleted", item.name),
            async move { api::delete_item(&item.id).await },
            move |_| {
                modal.set(None);
                load();
            },
        );
    };

    view! {
        <PageFrame page_id="a005_inventory_item--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Inventory"</h1>
                    <Badge>{move || visible.with(|v| v.len()).to_string()}</Badge>
                    <Show when=move || low_count.get() > 0>
                        <span class="badge badge--warning">
                            {move || format!("{} low on stock", low_count.get())}
                        </span>
                    </Show>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| modal.set(Some(Modal::Create))>
                        {icon("plus")}
                        " New item"
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
                            <div style="flex: 1; max-width: 320px;">
                                <Input value=search placeholder="Name, SKU or supplier..." />
                            </div>
                            <select
                                class="form__select"
                                prop:value=move || filters.with(|f| f.category.clone().unwrap_or_default())
                                on:change=move |ev| {
                                    let v = event_target_value(&ev);
                                    filters.update(|f| f.category = (!v.is_empty()).then_some(v));
                                }
                            >
                                <option value="">"All categories"</option>
                                {move || all_categories.get().into_iter().map(|c| view! {
                                    <option value=c.clone()>{c.clone()}</option>
                                }).collect_view()}
                            </select>
                            <Checkbox checked=low_stock label="Low stock only" />
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
                                    low_stock.set(false);
                                    filters.set(InventoryFilter::default());
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
                                <SortableHeaderCell label="SKU" sort_field="sku" current_sort_field=current_sort sort_ascending=ascending on_sort=Callback::new(toggle_sort) min_width=90.0 />
                                <SortableHeaderCell label="Name" sort_field="name" current_sort_field=current_sort sort_ascending=ascending on_sort=Callback::new(toggle_sort) min_width=200.0 />
                                <SortableHeaderCell label="Category" sort_field="category" current_sort_field=current_sort sort_ascending=ascending on_sort=Callback::new(toggle_sort) min_width=110.0 />
                                <SortableHeaderCell label="On hand" sort_field="quantity_on_hand" current_sort_field=current_sort sort_ascending=ascending on_sort=Callback::new(toggle_sort) min_width=100.0 align="right" />
                                <TableHeaderCell min_width=90.0>"Reorder at"</TableHeaderCell>
                                <SortableHeaderCell label="Unit cost" sort_field="unit_cost" current_sort_field=current_sort sort_ascending=ascending on_sort=Callback::new(toggle_sort) min_width=90.0 align="right" />
                                <SortableHeaderCell label="Value" sort_field="stock_value" current_sort_field=current_sort sort_ascending=ascending on_sort=Callback::new(toggle_sort) min_width=100.0 align="right" />
                                <TableHeaderCell min_width=130.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|i| (i.id.clone(), i.name.clone(), i.quantity_on_hand.to_bits(), i.unit_cost.to_bits(), i.reorder_level.to_bits())
                                children=move |item| {
                                    let edit_item = item.clone();
                                    let adjust_item = item.clone();
                                    let delete_item = item.clone();
                                    view! {
                                        <TableRow attr:class=if item.is_active { "" } else { "table__row--muted" }>
                                            <TableCell><TableCellLayout>{item.sku.clone()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{item.name.clone()}</span>
                                                    {item.supplier.clone().map(|s| view! { <span class="text-muted">{format!(" · {}", s)}</span> })}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{item.category.clone()}</TableCellLayout></TableCell>
                                            <TableCell class="table-cell--right">
                                                {format!("{} {}", format_quantity(item.quantity_on_hand), item.unit)}
                                                {item.is_low_stock().then(|| view! { <span class="badge badge--warning">" Low"</span> })}
                                            </TableCell>
                                            <TableCell>{format_quantity(item.reorder_level)}</TableCell>
                                            <TableCell class="table-cell--right">{format_currency(item.unit_cost)}</TableCell>
                                            <TableCell class="table-cell--right">{format_currency(item.stock_value())}</TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle attr:title="Adjust stock" on_click=move |_| modal.set(Some(Modal::Adjust(adjust_item.clone())))>
                                                        {icon("sliders")}
                                                    </Button>
                                                    <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle attr:title="Edit" on_click=move |_| modal.set(Some(Modal::Edit(edit_item.clone())))>
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle attr:title="Delete" on_click=move |_| modal.set(Some(Modal::Delete(delete_item.clone())))>
                                                        {icon("trash")}
                                                    </Button>
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                            <Show when=move || visible.with(|v| !v.is_empty())>
                                <TableRow attr:class="table__totals-row">
                                    <TableCell attr:colspan="6">"Total stock value"</TableCell>
                                    <TableCell class="table-cell--right">
                                        <strong>{move || format_currency(visible_value.get())}</strong>
                                    </TableCell>
                                    <TableCell>""</TableCell>
                                </TableRow>
                            </Show>
                        </TableBody>
                    </Table>
                    <Show when=move || !loading.get() && visible.with(|v| v.is_empty())>
                        <div class="table__empty">"No items match the current filters."</div>
                    </Show>
                </div>
            </div>

            {move || match modal.get() {
                None => ().into_any(),
                Some(Modal::Create) => view! {
                    <InventoryItemDetails
                        item=None
                        existing=items.get_untracked()
                        categories=all_categories.get_untracked()
                        on_close=close_modal
                        on_saved=saved
                    />
                }.into_any(),
                Some(Modal::Edit(item)) => view! {
                    <InventoryItemDetails
                        item=Some(item)
                        existing=items.get_untracked()
                        categories=all_categories.get_untracked()
                        on_close=close_modal
                        on_saved=saved
                    />
                }.into_any(),
                Some(Modal::Adjust(item)) => view! {
                    <StockAdjustmentForm item=item on_close=close_modal on_saved=saved />
                }.into_any(),
                Some(Modal::Delete(item)) => view! {
                    <ConfirmDialog
                        title="Delete item"
                        message=format!("Delete {} ({})? Consumption rules using it stop working.", item.name, item.sku)
                        busy=deleting
                        on_confirm=Callback::new(confirm_delete)
                        on_cancel=close_modal
                    />
                }.into_any(),
            }}
        </PageFrame>
    }
}
