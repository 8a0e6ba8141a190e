use crate::layout::global_context::AppGlobalContext;
use crate::layout::toast_service::{ToastHost, ToastService};
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Dashboard tab state lives for the whole app so tabs survive re-renders of the shell.
    provide_context(AppGlobalContext::new());

    // Toasts are shared by the dashboard and the public pages.
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
