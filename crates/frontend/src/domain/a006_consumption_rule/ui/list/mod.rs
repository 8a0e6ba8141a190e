use contracts::domain::a005_inventory_item::aggregate::InventoryItem;
use contracts::domain::a006_consumption_rule::aggregate::{
    group_by_service, ConsumptionRule, ConsumptionRuleDto,
};
use contracts::domain::a008_service_catalog::aggregate::Service;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a005_inventory_item::api as inventory_api;
use crate::domain::a006_consumption_rule::api;
use crate::domain::a006_consumption_rule::ui::details::ConsumptionRuleDetails;
use crate::domain::a008_service_catalog::api as catalog_api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::table::number_format::format_quantity;
use crate::shared::components::ConfirmDialog;
use crate::shared::icons::icon;
use crate::shared::mutation::{load_into, run_mutation};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

pub const TAB_KEY: &str = "a006_consumption_rule";

#[component]
pub fn ConsumptionRuleList() -> impl IntoView {
    let toast = use_toast();
    let rules = RwSignal::new(Vec::<ConsumptionRule>::new());
    let services = RwSignal::new(Vec::<Service>::new());
    let items = RwSignal::new(Vec::<InventoryItem>::new());
    let loading = RwSignal::new(false);
    let refs_loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let editing = RwSignal::new(None::<ConsumptionRuleDto>);
    let pending_delete = RwSignal::new(None::<ConsumptionRule>);
    let deleting = RwSignal::new(false);

    let load = move || load_into(loading, error, api::fetch_rules(), rules);
    load();
    load_into(refs_loading, error, catalog_api::fetch_services(), services);
    load_into(refs_loading, error, inventory_api::fetch_items(), items);

    let groups = Memo::new(move |_| rules.with(|r| group_by_service(r)));

    let unit_of = move |item_id: &str| {
        items.with(|all| {
            all.iter()
                .find(|i| i.id == item_id)
                .map(|i| i.unit.clone())
                .unwrap_or_default()
        })
    };

    let new_rule = move |service_id: Option<String>| {
        editing.set(Some(ConsumptionRuleDto {
            service_id: service_id.unwrap_or_default(),
            quantity_per_unit: 1.0,
            ..Default::default()
        }));
    };

    let confirm_delete = move |_| {
        let Some(rule) = pending_delete.get_untracked() else {
            return;
        };
        run_mutation(
            deleting,
            toast,
            "Rule deleted",
            async move { api::delete_rule(&rule.id).await },
            move |_| {
                pending_delete.set(None);
                load();
            },
        );
    };

    view! {
        <PageFrame page_id="a006_consumption_rule--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Consumption rules"</h1>
                    <Badge>{move || rules.with(|r| r.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| new_rule(None)>
                        {icon("plus")}
                        " New rule"
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
                <p class="page__subtitle">
                    "Stock deducted from inventory for each unit of a service sold."
                </p>
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Show when=move || !loading.get() && groups.with(|g| g.is_empty())>
                    <div class="table__empty">"No consumption rules yet."</div>
                </Show>

                <For
                    each=move || groups.get()
                    key=|g| (g.service_id.clone(), g.rules.iter().map(|r| (r.id.clone(), r.quantity_per_unit.to_bits())).collect::<Vec<_>>())
                    children=move |group| {
                        let service_id = group.service_id.clone();
                        view! {
                            <div class="settings-section">
                                <div class="settings-section__header">
                                    <h3 class="settings-section__title">{group.service_name.clone()}</h3>
                                    <Button
                                        size=ButtonSize::Small
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| new_rule(Some(service_id.clone()))
                                    >
                                        {icon("plus")}
                                        " Add item"
                                    </Button>
                                </div>
                                <Table attr:style="width: 100%;">
                                    <TableBody>
                                        {group.rules.into_iter().map(|rule| {
                                            let edit = ConsumptionRuleDto::from_rule(&rule);
                                            let target = rule.clone();
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{rule.inventory_item_name.clone()}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell class="table-cell--right">
                                                        {
                                                            let qty = format_quantity(rule.quantity_per_unit);
                                                            let item_id = rule.inventory_item_id.clone();
                                                            move || format!("{} {} per unit", qty, unit_of(&item_id))
                                                        }
                                                    </TableCell>
                                                    <TableCell attr:style="width: 90px;">
                                                        <Flex gap=FlexGap::Small>
                                                            <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| editing.set(Some(edit.clone()))>
                                                                {icon("edit")}
                                                            </Button>
                                                            <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| pending_delete.set(Some(target.clone()))>
                                                                {icon("trash")}
                                                            </Button>
                                                        </Flex>
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        }).collect_view()}
                                    </TableBody>
                                </Table>
                            </div>
                        }
                    }
                />
            </div>

            {move || editing.get().map(|dto| view! {
                <ConsumptionRuleDetails
                    dto=dto
                    existing=rules.get_untracked()
                    services=services.get_untracked()
                    items=items.get_untracked()
                    on_close=Callback::new(move |_| editing.set(None))
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        load();
                    })
                />
            })}

            <Show when=move || pending_delete.with(|p| p.is_some())>
                <ConfirmDialog
                    title="Delete rule"
                    message=pending_delete
                        .get_untracked()
                        .map(|r| format!("Stop deducting {} for {}?", r.inventory_item_name, r.service_name))
                        .unwrap_or_default()
                    busy=deleting
                    on_confirm=Callback::new(confirm_delete)
                    on_cancel=Callback::new(move |_| pending_delete.set(None))
                />
            </Show>
        </PageFrame>
    }
}
