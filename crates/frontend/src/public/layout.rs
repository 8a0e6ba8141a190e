use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::config::config;

/// Header navigation and footer around every public page.
#[component]
pub fn PublicLayout(children: Children) -> impl IntoView {
    let business_name = config().ui.business_name.clone();

    view! {
        <div class="site">
            <header class="site__header">
                <A href="/" attr:class="site__brand">{business_name.clone()}</A>
                <nav class="site__nav">
                    <A href="/services">"Services"</A>
                    <A href="/gallery">"Our work"</A>
                    <A href="/contact">"Contact"</A>
                </nav>
            </header>
            <main class="site__main">{children()}</main>
            <footer class="site__footer">
                <span>{format!("© {}", business_name)}</span>
                <a href="/admin" class="site__staff-link">"Staff sign in"</a>
            </footer>
        </div>
    }
}

/// Section heading with an optional lead paragraph.
#[component]
pub fn SectionTitle(title: &'static str, #[prop(optional)] lead: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="site__section-title">
            <h2>{title}</h2>
            {lead.map(|l| view! { <p class="text-muted">{l}</p> })}
        </div>
    }
}
