//! Dashboard page listing the signed-in user's shipments.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It shows the shipment list with a
//! status filter, maps the selected shipment, and links to the transform flow.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::shipment_map_view::ShipmentMapView;
use crate::net::api::HttpApi;
use crate::net::types::Shipment;
use crate::state::auth::{AuthState, logout};
use crate::state::shipments::{distinct_statuses, filter_by_status, use_my_shipments};
use crate::util::auth::install_unauth_redirect;

/// Dashboard page. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let on_logout = move |_| logout(&api, auth);

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>"FoodTrace"</h1>
                <span class="dashboard-header__user">
                    {move || auth.get().username().map(str::to_owned).unwrap_or_default()}
                </span>
                <a href="/transform" class="btn btn--primary">
                    "Transform Products"
                </a>
                <button class="btn" type="button" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            // The list mounts only once a session exists so its fetch carries the token.
            <Show
                when=move || auth.get().user.is_some()
                fallback=|| view! { <p class="dashboard-empty">"Loading..."</p> }
            >
                <ShipmentBoard/>
            </Show>
        </div>
    }
}

#[component]
fn ShipmentBoard() -> impl IntoView {
    let shipments = use_my_shipments();
    let status_filter = RwSignal::new(None::<String>);
    let consumable_only = RwSignal::new(false);
    let selected = RwSignal::new(None::<String>);

    let visible = Memo::new(move |_| {
        let filtered = shipments.with(|all| filter_by_status(all, status_filter.get().as_deref()));
        if consumable_only.get() { filtered.into_iter().filter(Shipment::is_consumable).collect() } else { filtered }
    });
    let selected_shipment = Memo::new(move |_| {
        let id = selected.get()?;
        shipments.with(|all| all.iter().find(|s| s.id == id).cloned())
    });
    let farm_location = Signal::derive(move || selected_shipment.get().and_then(|s| s.farm_location()));
    let route = Signal::derive(move || selected_shipment.get().map(|s| s.route()).unwrap_or_default());

    view! {
        <section class="dashboard-filters">
            <label class="form-field">
                <span>"Status"</span>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    status_filter.set(if value.is_empty() { None } else { Some(value) });
                }>
                    <option value="">"All"</option>
                    {move || {
                        shipments
                            .with(|all| distinct_statuses(all))
                            .into_iter()
                            .map(|status| view! { <option value=status.clone()>{status.clone()}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>
            <label class="form-field form-field--inline">
                <input
                    type="checkbox"
                    prop:checked=move || consumable_only.get()
                    on:change=move |ev| consumable_only.set(event_target_checked(&ev))
                />
                <span>"Only transformable"</span>
            </label>
        </section>
        <Show
            when=move || !visible.with(Vec::is_empty)
            fallback=|| view! { <p class="dashboard-empty">"No shipments found."</p> }
        >
            <table class="shipment-table">
                <thead>
                    <tr>
                        <th>"Shipment"</th>
                        <th>"Product"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || visible.get()
                        key=|s| s.id.clone()
                        children=move |shipment: Shipment| {
                            let id = shipment.id.clone();
                            let is_selected = {
                                let id = id.clone();
                                move || selected.with(|sel| sel.as_deref() == Some(id.as_str()))
                            };
                            view! {
                                <tr
                                    class="shipment-row"
                                    class:shipment-row--selected=is_selected
                                    on:click=move |_| selected.set(Some(id.clone()))
                                >
                                    <td>{shipment.id.clone()}</td>
                                    <td>{shipment.product_name.clone().unwrap_or_default()}</td>
                                    <td>{shipment.status.clone().unwrap_or_default()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </Show>
        <Show when=move || selected_shipment.with(Option::is_some)>
            <section class="shipment-detail">
                <h2>{move || selected_shipment.get().map(|s| s.display_label()).unwrap_or_default()}</h2>
                <ShipmentMapView farm_location=farm_location route=route/>
            </section>
        </Show>
    }
}
