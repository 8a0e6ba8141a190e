use contracts::domain::a004_b2b_account::aggregate::{B2bLocation, B2bLocationDto};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_b2b_account::api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::{ConfirmDialog, FormError};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::mutation::{load_into, run_mutation};

fn optional(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

#[component]
pub fn B2bLocationsPanel(account_id: String) -> impl IntoView {
    let toast = use_toast();
    let account_id = StoredValue::new(account_id);
    let items = RwSignal::new(Vec::<B2bLocation>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let show_add = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<B2bLocation>);
    let deleting = RwSignal::new(false);

    let load = move || {
        let id = account_id.get_value();
        load_into(loading, error, async move { api::fetch_locations(&id).await }, items);
    };
    load();

    let confirm_delete = move |_| {
        let Some(location) = pending_delete.get_untracked() else {
            return;
        };
        let account = account_id.get_value();
        run_mutation(
            deleting,
            toast,
            "Location removed",
            async move { api::delete_location(&account, &location.id).await },
            move |_| {
                pending_delete.set(None);
                load();
            },
        );
    };

    view! {
        <div class="settings-section">
            <div class="settings-section__header">
                <h3 class="settings-section__title">"Locations"</h3>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_add.set(true)>
                    {icon("plus")}
                    " Add location"
                </Button>
            </div>

            <FormError error=error />

            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=160.0>"Name"</TableHeaderCell>
                            <TableHeaderCell min_width=240.0>"Address"</TableHeaderCell>
                            <TableHeaderCell min_width=160.0>"Contact"</TableHeaderCell>
                            <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <Show when=move || !loading.get() && items.with(|v| v.is_empty())>
                            <TableRow>
                                <TableCell attr:colspan="4">
                                    <div class="table__empty">"No locations yet"</div>
                                </TableCell>
                            </TableRow>
                        </Show>
                        <For
                            each=move || items.get()
                            key=|l| l.id.clone()
                            children=move |location| {
                                let address = [
                                    Some(location.address.clone()),
                                    location.city.clone(),
                                    location.postal_code.clone(),
                                ]
                                .into_iter()
                                .flatten()
                                .collect::<Vec<_>>()
                                .join(", ");
                                let contact = [location.contact_name.clone(), location.contact_phone.clone()]
                                    .into_iter()
                                    .flatten()
                                    .collect::<Vec<_>>()
                                    .join(" · ");
                                let target = location.clone();
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout truncate=true>{location.name}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{address}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{contact}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| pending_delete.set(Some(target.clone()))
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
            </div>

            <Show when=move || show_add.get()>
                <AddLocationModal
                    account_id=account_id.get_value()
                    on_close=Callback::new(move |_| show_add.set(false))
                    on_saved=Callback::new(move |_| {
                        show_add.set(false);
                        load();
                    })
                />
            </Show>

            <Show when=move || pending_delete.with(|p| p.is_some())>
                <ConfirmDialog
                    title="Remove location"
                    message=pending_delete
                        .get_untracked()
                        .map(|l| format!("Remove location \"{}\"?", l.name))
                        .unwrap_or_default()
                    confirm_label="Remove"
                    busy=deleting
                    on_confirm=Callback::new(confirm_delete)
                    on_cancel=Callback::new(move |_| pending_delete.set(None))
                />
            </Show>
        </div>
    }
}

#[component]
fn AddLocationModal(account_id: String, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let toast = use_toast();
    let form = RwSignal::new(B2bLocationDto::default());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let account_id = StoredValue::new(account_id);

    let save = move |_| {
        let dto = form.get_untracked();
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        let account = account_id.get_value();
        run_mutation(
            saving,
            toast,
            "Location added",
            async move { api::create_location(&account, &dto).await },
            move |_| on_saved.run(()),
        );
    };

    let text_field = move |label: &'static str,
                           get: fn(&B2bLocationDto) -> String,
                           set: fn(&mut B2bLocationDto, String)| {
        view! {
            <div class="form__group">
                <Label>{label}</Label>
                <input
                    type="text"
                    class="form__input"
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <ModalFrame on_close=on_close>
            <div class="modal-header">
                <h2 class="modal-title">"Add location"</h2>
            </div>
            <div class="modal-body">
                <FormError error=error />
                {text_field("Name", |f| f.name.clone(), |f, v| f.name = v)}
                {text_field("Address", |f| f.address.clone(), |f, v| f.address = v)}
                <div class="form__row">
                    {text_field("City", |f| f.city.clone().unwrap_or_default(), |f, v| f.city = optional(v))}
                    {text_field(
                        "Postal code",
                        |f| f.postal_code.clone().unwrap_or_default(),
                        |f, v| f.postal_code = optional(v),
                    )}
                </div>
                <div class="form__row">
                    {text_field(
                        "Contact name",
                        |f| f.contact_name.clone().unwrap_or_default(),
                        |f, v| f.contact_name = optional(v),
                    )}
                    {text_field(
                        "Contact phone",
                        |f| f.contact_phone.clone().unwrap_or_default(),
                        |f, v| f.contact_phone = optional(v),
                    )}
                </div>
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=save disabled=saving>
                    {icon("check")}
                    " Add"
                </Button>
            </div>
        </ModalFrame>
    }
}
