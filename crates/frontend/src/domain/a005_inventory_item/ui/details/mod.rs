use contracts::domain::a005_inventory_item::aggregate::{InventoryItem, InventoryItemDto, StockAdjustmentDto};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a005_inventory_item::api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::table::number_format::format_quantity;
use crate::shared::components::FormError;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::mutation::run_mutation;

fn parse_number(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}

/// Create/edit modal. `item` is `None` for a new one.
#[component]
pub fn InventoryItemDetails(
    item: Option<InventoryItem>,
    existing: Vec<InventoryItem>,
    /// Known categories for the datalist
    categories: Vec<String>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let is_edit = item.is_some();
    let form = RwSignal::new(item.as_ref().map(InventoryItemDto::from_item).unwrap_or_else(InventoryItemDto::new));
    let existing = StoredValue::new(existing);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let on_save = move |_| {
        let dto = form.get_untracked();
        if let Err(e) = existing.with_value(|items| dto.validate(items)) {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        let message = if is_edit { "Item saved" } else { "Item created" };
        run_mutation(
            saving,
            toast,
            message,
            async move { api::save_item(&dto).await },
            move |_| on_saved.run(()),
        );
    };

    view! {
        <ModalFrame on_close=on_close modal_style="width: 640px;".to_string()>
            <div class="modal-header">
                <h2 class="modal-title">{if is_edit { "Edit item" } else { "New inventory item" }}</h2>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    {icon("x")}
                </Button>
            </div>

            <div class="modal-body">
                <FormError error=error />

                <div class="form__row">
                    <div class="form__group">
                        <Label>"SKU"</Label>
                        <input
                            type="text"
                            class="form__input"
                            prop:value=move || form.with(|f| f.sku.clone())
                            on:input=move |ev| form.update(|f| f.sku = event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group" style="flex: 2;">
                        <Label>"Name"</Label>
                        <input
                            type="text"
                            class="form__input"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form__row">
                    <div class="form__group">
                        <Label>"Category"</Label>
                        <input
                            type="text"
                            class="form__input"
                            list="inventory-categories"
                            prop:value=move || form.with(|f| f.category.clone())
                            on:input=move |ev| form.update(|f| f.category = event_target_value(&ev))
                        />
                        <datalist id="inventory-categories">
                            {categories.into_iter().map(|c| view! { <option value=c /> }).collect_view()}
                        </datalist>
                    </div>
                    <div class="form__group">
                        <Label>"Unit"</Label>
                        <input
                            type="text"
                            class="form__input"
                            placeholder="roll, sheet, litre..."
                            prop:value=move || form.with(|f| f.unit.clone())
                            on:input=move |ev| form.update(|f| f.unit = event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Supplier"</Label>
                        <input
                            type="text"
                            class="form__input"
                            prop:value=move || form.with(|f| f.supplier.clone().unwrap_or_default())
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                form.update(|f| f.supplier = (!v.trim().is_empty()).then_some(v));
                            }
                        />
                    </div>
                </div>

                <div class="form__row">
                    <div class="form__group">
                        <Label>"On hand"</Label>
                        <input
                            type="number"
                            min="0"
                            step="any"
                            class="form__input"
                            disabled=is_edit
                            prop:value=move || form.with(|f| f.quantity_on_hand.to_string())
                            on:input=move |ev| form.update(|f| f.quantity_on_hand = parse_number(&event_target_value(&ev)))
                        />
                        <Show when=move || is_edit>
                            <span class="form__hint">"Use Adjust stock to change quantity."</span>
                        </Show>
                    </div>
                    <div class="form__group">
                        <Label>"Reorder level"</Label>
                        <input
                            type="number"
                            min="0"
                            step="any"
                            class="form__input"
                            prop:value=move || form.with(|f| f.reorder_level.to_string())
                            on:input=move |ev| form.update(|f| f.reorder_level = parse_number(&event_target_value(&ev)))
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Unit cost"</Label>
                        <input
                            type="number"
                            min="0"
                            step="0.01"
                            class="form__input"
                            prop:value=move || form.with(|f| f.unit_cost.to_string())
                            on:input=move |ev| form.update(|f| f.unit_cost = parse_number(&event_target_value(&ev)))
                        />
                    </div>
                </div>

                <label class="form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.is_active)
                        on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                    />
                    " Active"
                </label>
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

/// Stock adjustment modal: signed delta plus a reason
#[component]
pub fn StockAdjustmentForm(item: InventoryItem, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let toast = use_toast();
    let form = RwSignal::new(StockAdjustmentDto::default());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let item = StoredValue::new(item);

    let resulting = move || item.with_value(|i| i.quantity_on_hand) + form.with(|f| f.delta);

    let on_save = move |_| {
        let dto = form.get_untracked();
        if let Err(e) = item.with_value(|i| dto.validate(i)) {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        let id = item.with_value(|i| i.id.clone());
        run_mutation(
            saving,
            toast,
            "Stock adjusted",
            async move { api::adjust_stock(&id, &dto).await },
            move |_| on_saved.run(()),
        );
    };

    view! {
        <ModalFrame on_close=on_close>
            <div class="modal-header">
                <h2 class="modal-title">{item.with_value(|i| format!("Adjust stock: {}", i.name))}</h2>
            </div>
            <div class="modal-body">
                <FormError error=error />
                <p class="form__hint">
                    {item.with_value(|i| format!("On hand: {} {}", format_quantity(i.quantity_on_hand), i.unit))}
                </p>
                <div class="form__row">
                    <div class="form__group">
                        <Label>"Change"</Label>
                        <input
                            type="number"
                            step="any"
                            class="form__input"
                            placeholder="-2 or 10"
                            on:input=move |ev| form.update(|f| f.delta = parse_number(&event_target_value(&ev)))
                        />
                    </div>
                    <div class="form__group">
                        <Label>"After adjustment"</Label>
                        <div class="form__static" class:text-error=move || resulting() < 0.0>
                            {move || format_quantity(resulting())}
                        </div>
                    </div>
                </div>
                <div class="form__group">
                    <Label>"Reason"</Label>
                    <input
                        type="text"
                        class="form__input"
                        placeholder="Recount, damaged, used on job..."
                        prop:value=move || form.with(|f| f.reason.clone())
                        on:input=move |ev| form.update(|f| f.reason = event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=saving>
                    "Apply"
                </Button>
            </div>
        </ModalFrame>
    }
}
