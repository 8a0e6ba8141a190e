use contracts::domain::a005_inventory_item::aggregate::InventoryItem;
use contracts::domain::a007_purchase_order::aggregate::{
    PurchaseOrderDto, PurchaseOrderLine, PurchaseOrderStatus,
};
use contracts::shared::money::format_currency;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a007_purchase_order::api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::FormError;
use crate::shared::date_utils::{parse_input_value, to_input_value};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::mutation::run_mutation;

fn parse_number(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}

fn update_line(form: RwSignal<PurchaseOrderDto>, idx: usize, apply: impl FnOnce(&mut PurchaseOrderLine)) {
    form.update(|f| {
        if let Some(line) = f.lines.get_mut(idx) {
            apply(line);
        }
    });
}

/// Purchase order editor. Orders past draft open read-only.
#[component]
pub fn PurchaseOrderDetails(
    dto: PurchaseOrderDto,
    po_number: Option<String>,
    items: Vec<InventoryItem>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let read_only = dto.status != PurchaseOrderStatus::Draft;
    let is_edit = dto.id.is_some();
    let form = RwSignal::new(dto);
    let items = StoredValue::new(items);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let totals = Memo::new(move |_| form.with(|f| f.totals()));
    let line_count = Memo::new(move |_| form.with(|f| f.lines.len()));

    let pick_item = move |idx: usize, item_id: String| {
        let picked = items.with_value(|all| all.iter().find(|i| i.id == item_id).cloned());
        update_line(form, idx, move |line| {
            line.inventory_item_id = item_id;
            if let Some(item) = picked {
                line.description = item.name;
                if line.unit_cost == 0.0 {
                    line.unit_cost = item.unit_cost;
                }
            }
        });
    };

    let save = move |status: PurchaseOrderStatus| {
        let mut dto = form.get_untracked();
        dto.status = status;
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        let message = match (status, is_edit) {
            (PurchaseOrderStatus::Submitted, _) => "Purchase order submitted",
            (_, true) => "Purchase order saved",
            _ => "Purchase order created",
        };
        run_mutation(
            saving,
            toast,
            message,
            async move { api::save_order(&dto).await },
            move |_| on_saved.run(()),
        );
    };

    let title = match (&po_number, is_edit) {
        (Some(number), _) => format!("Purchase order {}", number),
        (None, true) => "Purchase order".to_string(),
        (None, false) => "New purchase order".to_string(),
    };

    view! {
        <ModalFrame on_close=on_close modal_style="width: 860px; max-width: 95vw;".to_string()>
            <div class="modal-header">
                <h2 class="modal-title">{title}</h2>
                {move || {
                    let status = form.with(|f| f.status);
                    view! { <span class=format!("badge badge--{}", status.badge_variant())>{status.label()}</span> }
                }}
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    {icon("x")}
                </Button>
            </div>

            <div class="modal-body">
                <FormError error=error />

                <fieldset class="form__fieldset" disabled=read_only>
                    <div class="form__row">
                        <div class="form__group" style="flex: 2;">
                            <Label>"Supplier"</Label>
                            <input
                                type="text"
                                class="form__input"
                                prop:value=move || form.with(|f| f.supplier.clone())
                                on:input=move |ev| form.update(|f| f.supplier = event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <Label>"Order date"</Label>
                            <input
                                type="date"
                                class="form__input"
                                prop:value=move || form.with(|f| to_input_value(Some(f.order_date)))
                                on:input=move |ev| {
                                    if let Some(d) = parse_input_value(&event_target_value(&ev)) {
                                        form.update(|f| f.order_date = d);
                                    }
                                }
                            />
                        </div>
                        <div class="form__group">
                            <Label>"Expected"</Label>
                            <input
                                type="date"
                                class="form__input"
                                prop:value=move || form.with(|f| to_input_value(f.expected_date))
                                on:input=move |ev| form.update(|f| f.expected_date = parse_input_value(&event_target_value(&ev)))
                            />
                        </div>
                    </div>

                    <table class="line-table">
                        <thead>
                            <tr>
                                <th style="min-width: 220px;">"Item"</th>
                                <th>"Description"</th>
                                <th class="num">"Qty"</th>
                                <th class="num">"Unit cost"</th>
                                <th class="num">"Line total"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || (0..line_count.get()).map(|idx| {
                                let line = move || form.with(|f| f.lines.get(idx).cloned().unwrap_or_default());
                                view! {
                                    <tr>
                                        <td>
                                            <select
                                                class="form__select"
                                                prop:value=move || line().inventory_item_id
                                                on:change=move |ev| pick_item(idx, event_target_value(&ev))
                                            >
                                                <option value="">"Select item..."</option>
                                                {items.get_value().into_iter().map(|i| view! {
                                                    <option value=i.id>{format!("{} ({})", i.name, i.sku)}</option>
                                                }).collect_view()}
                                            </select>
                                        </td>
                                        <td>
                                            <input
                                                type="text"
                                                class="form__input"
                                                prop:value=move || line().description
                                                on:input=move |ev| {
                                                    let v = event_target_value(&ev);
                                                    update_line(form, idx, move |l| l.description = v);
                                                }
                                            />
                                        </td>
                                        <td class="num">
                                            <input
                                                type="number"
                                                min="0"
                                                step="any"
                                                class="form__input form__input--narrow"
                                                prop:value=move || line().quantity.to_string()
                                                on:input=move |ev| {
                                                    let v = parse_number(&event_target_value(&ev));
                                                    update_line(form, idx, move |l| l.quantity = v);
                                                }
                                            />
                                        </td>
                                        <td class="num">
                                            <input
                                                type="number"
                                                min="0"
                                                step="0.01"
                                                class="form__input form__input--narrow"
                                                prop:value=move || line().unit_cost.to_string()
                                                on:input=move |ev| {
                                                    let v = parse_number(&event_target_value(&ev));
                                                    update_line(form, idx, move |l| l.unit_cost = v);
                                                }
                                            />
                                        </td>
                                        <td class="num">{move || format_currency(line().line_total())}</td>
                                        <td>
                                            <Show when=move || !read_only>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| form.update(|f| {
                                                        if idx < f.lines.len() {
                                                            f.lines.remove(idx);
                                                        }
                                                    })
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </Show>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                    <Show when=move || !read_only>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| form.update(|f| f.lines.push(PurchaseOrderLine::default()))
                        >
                            {icon("plus")}
                            " Add line"
                        </Button>
                    </Show>

                    <div class="form__row">
                        <div class="form__group">
                            <Label>"Tax rate, %"</Label>
                            <input
                                type="number"
                                min="0"
                                max="100"
                                step="0.01"
                                class="form__input"
                                prop:value=move || form.with(|f| f.tax_rate_percent.to_string())
                                on:input=move |ev| {
                                    let v = parse_number(&event_target_value(&ev));
                                    form.update(|f| f.tax_rate_percent = v);
                                }
                            />
                        </div>
                        <div class="form__group">
                            <Label>"Shipping"</Label>
                            <input
                                type="number"
                                min="0"
                                step="0.01"
                                class="form__input"
                                prop:value=move || form.with(|f| f.shipping_cost.to_string())
                                on:input=move |ev| {
                                    let v = parse_number(&event_target_value(&ev));
                                    form.update(|f| f.shipping_cost = v);
                                }
                            />
                        </div>
                        <dl class="totals">
                            <dt>"Subtotal"</dt>
                            <dd>{move || format_currency(totals.get().subtotal)}</dd>
                            <dt>"Tax"</dt>
                            <dd>{move || format_currency(totals.get().tax)}</dd>
                            <dt>"Shipping"</dt>
                            <dd>{move || format_currency(totals.get().shipping)}</dd>
                            <dt class="totals__grand">"Total"</dt>
                            <dd class="totals__grand">{move || format_currency(totals.get().total)}</dd>
                        </dl>
                    </div>

                    <div class="form__group">
                        <Label>"Notes"</Label>
                        <textarea
                            class="form__textarea"
                            rows="2"
                            prop:value=move || form.with(|f| f.notes.clone().unwrap_or_default())
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                form.update(|f| f.notes = (!v.trim().is_empty()).then_some(v));
                            }
                        />
                    </div>
                </fieldset>
            </div>

            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    {if read_only { "Close" } else { "Cancel" }}
                </Button>
                <Show when=move || !read_only>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| save(PurchaseOrderStatus::Draft)
                        disabled=saving
                    >
                        "Save draft"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| save(PurchaseOrderStatus::Submitted)
                        disabled=Signal::derive(move || saving.get() || line_count.get() == 0)
                    >
                        {icon("send")}
                        " Submit"
                    </Button>
                </Show>
            </div>
        </ModalFrame>
    }
}
