//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, transform::TransformPage};
use crate::state::auth::{AuthState, restore_session};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API client, auth and toast contexts and sets up client-side
/// routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = HttpApi::new(ClientConfig::default());
    let auth = RwSignal::new(AuthState::restoring());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(api.clone());
    provide_context(auth);
    provide_context(toasts);

    // Effects only run in the browser, where the stored session lives.
    Effect::new(move || restore_session(&api, auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/foodtrace.css"/>
        <Title text="FoodTrace"/>

        <Router>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("transform") view=TransformPage/>
                </Routes>
            </main>
        </Router>
        <ToastStack/>
    }
}
