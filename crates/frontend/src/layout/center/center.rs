use leptos::prelude::*;

use super::tab_strip::TabStrip;
use crate::layout::global_context::AppGlobalContext;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let has_tabs = move || tabs_store.opened.with(|tabs| !tabs.is_empty());

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <TabStrip />
            {children()}
            <Show when=move || !has_tabs()>
                <div class="app-tabs__empty">"Pick a section in the sidebar to get started."</div>
            </Show>
        </div>
    }
}
