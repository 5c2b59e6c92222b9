//! Login page: username/password sign-in plus the demo-account shortcut.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpApi;
use crate::pages::login_flow::DemoRole;
use crate::state::auth::{AuthState, SessionAuth};
use crate::state::toast::ToastState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let demo_role = RwSignal::new(DemoRole::default());
    let busy = RwSignal::new(false);

    // Any successful sign-in (form, demo, or restored session) lands here.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_some() {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    let login_api = api.clone();
    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        let session = SessionAuth::new(login_api.clone(), auth);
        let user = username.get_untracked();
        let pass = password.get_untracked();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let (Ok(notice) | Err(notice)) = crate::pages::login_flow::sign_in(&session, &user, &pass).await;
            crate::state::toast::notify(toasts, notice);
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, user, pass, toasts);
            busy.set(false);
        }
    };

    let on_demo = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let session = SessionAuth::new(api.clone(), auth);
        let api = api.clone();
        let role = demo_role.get_untracked();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let admin = api.config().demo_admin.clone();
            let outcome = crate::pages::login_flow::demo_sign_in(&session, &api, &admin, role).await;
            crate::state::toast::notify(toasts, outcome.notice());
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, api, role);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"FoodTrace"</h1>
                <p class="login-card__subtitle">"Farm to table traceability"</p>
                <form class="login-form" on:submit=on_login>
                    <label class="form-field">
                        <span>"Username"</span>
                        <input
                            class="login-input"
                            type="text"
                            autocomplete="username"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span>"Password"</span>
                        <input
                            class="login-input"
                            type="password"
                            autocomplete="current-password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Try a demo account"</p>
                <div class="login-form">
                    <select
                        class="login-input"
                        prop:value=move || demo_role.get().as_str()
                        on:change=move |ev| {
                            if let Some(role) = DemoRole::parse(&event_target_value(&ev)) {
                                demo_role.set(role);
                            }
                        }
                    >
                        {DemoRole::ALL
                            .into_iter()
                            .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <button class="login-button" type="button" on:click=on_demo disabled=move || busy.get()>
                        "Signup Demo"
                    </button>
                </div>
            </div>
        </div>
    }
}
