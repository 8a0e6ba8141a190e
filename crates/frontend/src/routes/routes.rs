use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::layout::center::Center;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::public::{ContactPage, GalleryPage, HomePage, PublicLayout, ServicesPage};
use crate::system::auth::context::{use_auth, AuthProvider};
use crate::system::pages::login::LoginPage;

/// Staff dashboard: sidebar plus one hidden-or-shown page per opened tab.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Restores `?active=` once and keeps the URL in step afterwards.
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || view! {
                <Center>
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    />
                </Center>
            }.into_any()
        />
    }
}

#[component]
fn AdminGate() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || !auth_state.with(|s| s.restoring)
            fallback=|| view! { <div class="app-loading">"Checking your session..."</div> }
        >
            <Show
                when=move || auth_state.with(|s| s.is_authenticated())
                fallback=|| view! { <LoginPage /> }
            >
                <MainLayout />
            </Show>
        </Show>
    }
}

#[component]
fn AdminApp() -> impl IntoView {
    view! {
        <AuthProvider>
            <AdminGate />
        </AuthProvider>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <PublicLayout>
            <h1>"Page not found"</h1>
            <p><a href="/">"Back to the home page"</a></p>
        </PublicLayout>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/services") view=ServicesPage />
                <Route path=path!("/gallery") view=GalleryPage />
                <Route path=path!("/contact") view=ContactPage />
                <Route path=path!("/admin") view=AdminApp />
            </Routes>
        </Router>
    }
}
