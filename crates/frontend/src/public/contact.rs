use contracts::domain::a012_inquiry_form::aggregate::{InquiryForm, CONTACT_FORM_SLUG};
use leptos::prelude::*;

use super::layout::{PublicLayout, SectionTitle};
use crate::domain::a012_inquiry_form::api;
use crate::domain::a012_inquiry_form::ui::renderer::InquiryFormRenderer;
use crate::shared::mutation::load_into;

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(None::<InquiryForm>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    load_into(
        loading,
        error,
        async { api::fetch_form_by_slug(CONTACT_FORM_SLUG).await.map(Some) },
        form,
    );

    view! {
        <PublicLayout>
            <SectionTitle title="Contact us" lead="Tell us about your project and we'll get back to you with a quote." />

            <Show when=move || loading.get()>
                <p class="text-muted">"Loading..."</p>
            </Show>
            {move || error.get().map(|e| {
                log::warn!("Contact form unavailable: {}", e);
                view! { <div class="alert alert--error">"The contact form is unavailable right now. Please try again later."</div> }
            })}

            {move || form.get().map(|f| {
                if f.is_active {
                    view! {
                        <div class="site__form">
                            <InquiryFormRenderer form=f />
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <p class="text-muted">"We're not taking inquiries online at the moment."</p> }.into_any()
                }
            })}
        </PublicLayout>
    }
}
