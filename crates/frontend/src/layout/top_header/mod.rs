//! Top bar: business name, sidebar toggle, signed-in user and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
            ctx.close_all();
        });
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">{config().ui.business_name.clone()}</span>
            </div>

            <div class="top-header__actions">
                <a class="top-header__icon-btn" href="/" target="_blank" title="Open public site">
                    {icon("home")}
                </a>

                <button
                    class="top-header__icon-btn"
                    title="Notification preferences"
                    on:click=move |_| ctx.open_tab("sys_notification_prefs", "Notifications")
                >
                    {icon("bell")}
                </button>

                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth_state.with(|s| s
                            .user_info
                            .as_ref()
                            .map(|u| format!("{} ({})", u.display_name(), u.role.label()))
                            .unwrap_or_default())}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
