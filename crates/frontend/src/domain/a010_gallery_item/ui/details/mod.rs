use contracts::domain::a010_gallery_item::aggregate::{is_http_url, GalleryItemDto};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a010_gallery_item::api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::FormError;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::mutation::run_mutation;

fn optional(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

#[component]
pub fn GalleryItemDetails(
    dto: GalleryItemDto,
    categories: Vec<String>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let is_edit = dto.id.is_some();
    let form = RwSignal::new(dto);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let on_save = move |_| {
        let dto = form.get_untracked();
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        run_mutation(
            saving,
            toast,
            if is_edit { "Gallery item saved" } else { "Gallery item added" },
            async move { api::save_item(&dto).await },
            move |_| on_saved.run(()),
        );
    };

    view! {
        <ModalFrame on_close=on_close modal_style="width: 640px;".to_string()>
            <div class="modal-header">
                <h2 class="modal-title">{if is_edit { "Edit gallery item" } else { "New gallery item" }}</h2>
            </div>
            <div class="modal-body">
                <FormError error=error />
                <div class="form__group">
                    <Label>"Title"</Label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <Label>"Image URL"</Label>
                    <input
                        type="url"
                        class="form__input"
                        placeholder="https://..."
                        prop:value=move || form.with(|f| f.image_url.clone())
                        on:input=move |ev| form.update(|f| f.image_url = event_target_value(&ev))
                    />
                </div>
                <Show when=move || form.with(|f| is_http_url(&f.image_url))>
                    <img class="gallery-preview" src=move || form.with(|f| f.image_url.clone()) alt="Preview" />
                </Show>
                <div class="form__row">
                    <div class="form__group">
                        <Label>"Category"</Label>
                        <input
                            type="text"
                            class="form__input"
                            list="gallery-categories"
                            prop:value=move || form.with(|f| f.category.clone().unwrap_or_default())
                            on:input=move |ev| form.update(|f| f.category = optional(event_target_value(&ev)))
                        />
                        <datalist id="gallery-categories">
                            {categories.into_iter().map(|c| view! { <option value=c /> }).collect_view()}
                        </datalist>
                    </div>
                    <div class="form__group">
                        <Label>"Sort order"</Label>
                        <input
                            type="number"
                            step="1"
                            class="form__input"
                            prop:value=move || form.with(|f| f.sort_order.to_string())
                            on:input=move |ev| {
                                let v = event_target_value(&ev).parse().unwrap_or(0);
                                form.update(|f| f.sort_order = v);
                            }
                        />
                    </div>
                </div>
                <div class="form__group">
                    <Label>"Description"</Label>
                    <textarea
                        class="form__textarea"
                        rows="2"
                        prop:value=move || form.with(|f| f.description.clone().unwrap_or_default())
                        on:input=move |ev| form.update(|f| f.description = optional(event_target_value(&ev)))
                    />
                </div>
                <div class="form__row">
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.is_published)
                            on:change=move |ev| form.update(|f| f.is_published = event_target_checked(&ev))
                        />
                        " Published"
                    </label>
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.is_featured)
                            on:change=move |ev| form.update(|f| f.is_featured = event_target_checked(&ev))
                        />
                        " Featured"
                    </label>
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
