use contracts::domain::a007_purchase_order::aggregate::{PurchaseOrder, ReceivePurchaseOrderDto};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a007_purchase_order::api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::table::number_format::format_quantity;
use crate::shared::components::FormError;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::mutation::run_mutation;

/// Records delivered quantities; pre-filled with everything ordered.
#[component]
pub fn ReceivePurchaseOrder(order: PurchaseOrder, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let toast = use_toast();
    let form = RwSignal::new(ReceivePurchaseOrderDto::full(&order));
    let order = StoredValue::new(order);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let on_save = move |_| {
        let dto = form.get_untracked();
        if let Err(e) = order.with_value(|po| dto.validate(po)) {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        let id = order.with_value(|po| po.id.clone());
        run_mutation(
            saving,
            toast,
            "Stock received",
            async move { api::receive_order(&id, &dto).await },
            move |_| on_saved.run(()),
        );
    };

    let lines = order.with_value(|po| po.lines.clone());

    view! {
        <ModalFrame on_close=on_close modal_style="width: 640px;".to_string()>
            <div class="modal-header">
                <h2 class="modal-title">{order.with_value(|po| format!("Receive {}", po.po_number))}</h2>
            </div>
            <div class="modal-body">
                <FormError error=error />
                <table class="line-table">
                    <thead>
                        <tr>
                            <th>"Item"</th>
                            <th class="num">"Ordered"</th>
                            <th class="num">"Received"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {lines.into_iter().enumerate().map(|(idx, line)| view! {
                            <tr>
                                <td>{if line.description.is_empty() { line.inventory_item_id.clone() } else { line.description.clone() }}</td>
                                <td class="num">{format_quantity(line.quantity)}</td>
                                <td class="num">
                                    <input
                                        type="number"
                                        min="0"
                                        max=line.quantity.to_string()
                                        step="any"
                                        class="form__input form__input--narrow"
                                        prop:value=move || form.with(|f| {
                                            f.lines.get(idx).map(|l| l.received_quantity.to_string()).unwrap_or_default()
                                        })
                                        on:input=move |ev| {
                                            let v = event_target_value(&ev).trim().parse().unwrap_or(0.0);
                                            form.update(|f| {
                                                if let Some(l) = f.lines.get_mut(idx) {
                                                    l.received_quantity = v;
                                                }
                                            });
                                        }
                                    />
                                </td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
                <p class="form__hint">"Received quantities are added to inventory on hand."</p>
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=saving>
                    {icon("package-check")}
                    " Receive"
                </Button>
            </div>
        </ModalFrame>
    }
}
