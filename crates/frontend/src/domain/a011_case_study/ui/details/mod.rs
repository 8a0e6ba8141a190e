use contracts::domain::a010_gallery_item::aggregate::GalleryItem;
use contracts::domain::a011_case_study::aggregate::CaseStudyDto;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a011_case_study::api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::FormError;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::mutation::run_mutation;

fn optional(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

#[component]
pub fn CaseStudyDetails(
    dto: CaseStudyDto,
    gallery: Vec<GalleryItem>,
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
            if is_edit { "Case study saved" } else { "Case study created" },
            async move { api::save_case_study(&dto).await },
            move |_| on_saved.run(()),
        );
    };

    let text_area = move |label: &'static str, rows: &'static str, get: fn(&CaseStudyDto) -> String, set: fn(&mut CaseStudyDto, String)| {
        view! {
            <div class="form__group">
                <Label>{label}</Label>
                <textarea
                    class="form__textarea"
                    rows=rows
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <ModalFrame on_close=on_close modal_style="width: 760px; max-width: 95vw;".to_string()>
            <div class="modal-header">
                <h2 class="modal-title">{if is_edit { "Edit case study" } else { "New case study" }}</h2>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    {icon("x")}
                </Button>
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
                <div class="form__row">
                    <div class="form__group">
                        <Label>"Client"</Label>
                        <input
                            type="text"
                            class="form__input"
                            prop:value=move || form.with(|f| f.client_name.clone().unwrap_or_default())
                            on:input=move |ev| form.update(|f| f.client_name = optional(event_target_value(&ev)))
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Industry"</Label>
                        <input
                            type="text"
                            class="form__input"
                            prop:value=move || form.with(|f| f.industry.clone().unwrap_or_default())
                            on:input=move |ev| form.update(|f| f.industry = optional(event_target_value(&ev)))
                        />
                    </div>
                </div>
                <div class="form__group">
                    <Label>"Cover image URL"</Label>
                    <input
                        type="url"
                        class="form__input"
                        placeholder="https://..."
                        prop:value=move || form.with(|f| f.image_url.clone().unwrap_or_default())
                        on:input=move |ev| form.update(|f| f.image_url = optional(event_target_value(&ev)))
                    />
                </div>
                {text_area("Challenge", "3", |f| f.challenge.clone(), |f, v| f.challenge = v)}
                {text_area("Solution", "3", |f| f.solution.clone(), |f, v| f.solution = v)}
                {text_area("Outcome", "2", |f| f.outcome.clone(), |f, v| f.outcome = v)}

                <div class="settings-section">
                    <h3 class="settings-section__title">"Linked gallery images"</h3>
                    <Show when={
                        let empty = gallery.is_empty();
                        move || empty
                    }>
                        <p class="form__hint">"The gallery is empty."</p>
                    </Show>
                    <div class="gallery-picker">
                        {gallery.into_iter().map(|item| {
                            let id = item.id.clone();
                            let toggle_id = item.id.clone();
                            view! {
                                <button
                                    type="button"
                                    class="gallery-picker__item"
                                    class:gallery-picker__item--selected=move || form.with(|f| f.gallery_item_ids.contains(&id))
                                    attr:title=item.title.clone()
                                    on:click=move |_| form.update(|f| f.toggle_gallery_item(&toggle_id))
                                >
                                    <img src=item.image_url alt=item.title loading="lazy" />
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>

                <label class="form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.is_published)
                        on:change=move |ev| form.update(|f| f.is_published = event_target_checked(&ev))
                    />
                    " Published"
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
