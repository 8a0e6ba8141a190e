use leptos::prelude::*;

/// Inline error box above a form; renders nothing while `error` is `None`.
#[component]
pub fn FormError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })
}
