use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
fn TabHandle(tab: TabData) -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let key_for_active = tab.key.clone();
    let is_active =
        Memo::new(move |_| tabs_store.active.get().as_deref() == Some(key_for_active.as_str()));

    let key_for_click = tab.key.clone();
    let on_click = move |_| tabs_store.activate_tab(&key_for_click);

    let key_for_close = tab.key.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key_for_close);
    };

    // Titles can change after open (detail tabs), so read them from the store.
    let key_for_title = tab.key.clone();
    let title = move || {
        tabs_store.opened.with(|tabs| {
            tabs.iter()
                .find(|t| t.key == key_for_title)
                .map(|t| t.title.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="tab-strip__tab" class:tab-strip__tab--active=is_active on:click=on_click>
            <span class="tab-strip__title">{title}</span>
            <button class="tab-strip__close" on:click=on_close title="Close">
                {icon("x")}
            </button>
        </div>
    }
}

/// One handle per opened tab.
#[component]
pub fn TabStrip() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <Show when=move || tabs_store.opened.with(|tabs| !tabs.is_empty())>
            <div class="tab-strip">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabHandle tab=tab /> }
                />
                <button
                    class="tab-strip__close-all"
                    title="Close all tabs"
                    on:click=move |_| tabs_store.close_all()
                >
                    {icon("x")}
                    " Close all"
                </button>
            </div>
        </Show>
    }
}
