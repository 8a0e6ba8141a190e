use contracts::system::users::UserRole;
use leptos::prelude::*;

use super::context::use_auth;

/// Renders children only for users holding at least `role`.
#[component]
pub fn RequireRole(role: UserRole, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.has_role(role))
            fallback=move || view! {
                <div class="alert alert--error">
                    {format!("Access denied. {} privileges required.", role.label())}
                </div>
            }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    view! { <RequireRole role=UserRole::Admin children=children /> }
}
