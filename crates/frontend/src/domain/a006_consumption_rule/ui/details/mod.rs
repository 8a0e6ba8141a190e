use contracts::domain::a005_inventory_item::aggregate::InventoryItem;
use contracts::domain::a006_consumption_rule::aggregate::{ConsumptionRule, ConsumptionRuleDto};
use contracts::domain::a008_service_catalog::aggregate::Service;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a006_consumption_rule::api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::FormError;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::mutation::run_mutation;

#[component]
pub fn ConsumptionRuleDetails(
    dto: ConsumptionRuleDto,
    existing: Vec<ConsumptionRule>,
    services: Vec<Service>,
    items: Vec<InventoryItem>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let is_edit = dto.id.is_some();
    let form = RwSignal::new(dto);
    let existing = StoredValue::new(existing);
    let items = StoredValue::new(items);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let unit = move || {
        let item_id = form.with(|f| f.inventory_item_id.clone());
        items.with_value(|all| {
            all.iter()
                .find(|i| i.id == item_id)
                .map(|i| i.unit.clone())
                .unwrap_or_default()
        })
    };

    let on_save = move |_| {
        let dto = form.get_untracked();
        if let Err(e) = existing.with_value(|rules| dto.validate(rules)) {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        run_mutation(
            saving,
            toast,
            if is_edit { "Rule saved" } else { "Rule added" },
            async move { api::save_rule(&dto).await },
            move |_| on_saved.run(()),
        );
    };

    view! {
        <ModalFrame on_close=on_close>
            <div class="modal-header">
                <h2 class="modal-title">{if is_edit { "Edit consumption rule" } else { "New consumption rule" }}</h2>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    {icon("x")}
                </Button>
            </div>

            <div class="modal-body">
                <FormError error=error />

                <div class="form__group">
                    <Label>"Service"</Label>
                    <select
                        class="form__select"
                        prop:value=move || form.with(|f| f.service_id.clone())
                        on:change=move |ev| form.update(|f| f.service_id = event_target_value(&ev))
                    >
                        <option value="">"Select service..."</option>
                        {services.into_iter().map(|s| view! { <option value=s.id>{s.name}</option> }).collect_view()}
                    </select>
                </div>

                <div class="form__group">
                    <Label>"Inventory item"</Label>
                    <select
                        class="form__select"
                        prop:value=move || form.with(|f| f.inventory_item_id.clone())
                        on:change=move |ev| form.update(|f| f.inventory_item_id = event_target_value(&ev))
                    >
                        <option value="">"Select item..."</option>
                        {items.get_value().into_iter().map(|i| view! {
                            <option value=i.id>{format!("{} ({})", i.name, i.sku)}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form__group">
                    <Label>"Quantity per unit sold"</Label>
                    <div class="form__input-group">
                        <input
                            type="number"
                            min="0"
                            step="any"
                            class="form__input"
                            prop:value=move || form.with(|f| f.quantity_per_unit.to_string())
                            on:input=move |ev| {
                                let v = event_target_value(&ev).parse().unwrap_or(0.0);
                                form.update(|f| f.quantity_per_unit = v);
                            }
                        />
                        <span class="form__suffix">{unit}</span>
                    </div>
                </div>
            </div>

            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=saving>
                    {icon("check")}
                    " Save"
                </Button>
            </div>
        </ModalFrame>
    }
}
