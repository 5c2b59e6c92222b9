//! Transform-products page: consume input shipments, produce new ones.
//!
//! SYSTEM CONTEXT
//! ==============
//! All form state lives in a single [`TransformForm`] signal. Rendering binds
//! rows by [`RowId`]; assembling and submitting the request is delegated to
//! [`submit_transform`].

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpApi;
use crate::net::types::{Shipment, UnitOfMeasure, consumable_shipments};
use crate::pages::transform_form::{InputRow, ProcessingField, ProductField, ProductRow, RowId, TransformForm};
use crate::state::aliases::use_aliases;
use crate::state::auth::AuthState;
use crate::state::shipments::use_my_shipments;
use crate::state::toast::ToastState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn TransformPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <div class="transform-page">
            <Show
                when=move || auth.get().user.is_some()
                fallback=|| view! { <p class="dashboard-empty">"Loading..."</p> }
            >
                <TransformEditor/>
            </Show>
        </div>
    }
}

#[component]
fn TransformEditor() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let shipments = use_my_shipments();
    let distributors = use_aliases("distributor");
    let consumable = Memo::new(move |_| shipments.with(|all| consumable_shipments(all)));

    let form = RwSignal::new(TransformForm::default());
    let busy = RwSignal::new(false);

    let submit_navigate = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        let snapshot = form.get_untracked();
        let api = api.clone();
        let navigate = submit_navigate.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let now = crate::util::timestamp::now_utc();
            let result = crate::pages::transform_form::submit_transform(&api, &snapshot, now).await;
            busy.set(false);
            match result {
                Ok(notice) => {
                    crate::state::toast::notify(toasts, notice);
                    navigate("/dashboard", NavigateOptions::default());
                }
                Err(notice) => crate::state::toast::notify(toasts, notice),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (snapshot, api, navigate, toasts);
            busy.set(false);
        }
    };

    let on_cancel = move |_| navigate("/dashboard", NavigateOptions::default());

    view! {
        <h1>"Transform Products"</h1>
        <form class="transform-form" on:submit=on_submit>
            <section class="transform-section">
                <h2>"Input Shipments"</h2>
                <For
                    each=move || form.get().inputs
                    key=|row| row.id
                    children=move |row: InputRow| input_row(form, consumable, row.id)
                />
                <button type="button" class="btn" on:click=move |_| {
                    form.update(|f| {
                        f.add_input();
                    });
                }>"Add Input"</button>
            </section>

            <section class="transform-section">
                <h2>"New Products"</h2>
                <For
                    each=move || form.get().products
                    key=|row| row.id
                    children=move |row: ProductRow| product_row(form, row.id)
                />
                <button type="button" class="btn" on:click=move |_| {
                    form.update(|f| {
                        f.add_product();
                    });
                }>"Add Product"</button>
            </section>

            <section class="transform-section">
                <h2>"Processing Details"</h2>
                {processing_input(form, ProcessingField::ProcessingType, "Processing Type", "text", true)}
                {processing_input(form, ProcessingField::ProcessingLineId, "Processing Line ID", "text", false)}
                {processing_input(form, ProcessingField::DateProcessed, "Date Processed", "datetime-local", false)}
                {processing_input(form, ProcessingField::OutputBatchId, "Output Batch ID", "text", false)}
                {processing_input(form, ProcessingField::ExpiryDate, "Expiry Date", "date", false)}
                <label class="form-field">
                    <span>"Destination Distributor"</span>
                    <select
                        prop:value=move || {
                            form.with(|f| f.processing.value(ProcessingField::DestinationDistributorId).to_owned())
                        }
                        on:change=move |ev| {
                            form.update(|f| {
                                f.set_processing(ProcessingField::DestinationDistributorId, event_target_value(&ev));
                            });
                        }
                    >
                        <option value="">"Select distributor"</option>
                        {move || {
                            distributors
                                .get()
                                .into_iter()
                                .map(|alias| view! { <option value=alias.clone()>{alias.clone()}</option> })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
            </section>

            <div class="transform-actions">
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Submit Transformation" }}
                </button>
                <button class="btn" type="button" on:click=on_cancel>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}

fn input_row(form: RwSignal<TransformForm>, consumable: Memo<Vec<Shipment>>, id: RowId) -> impl IntoView {
    view! {
        <div class="transform-row">
            <label class="form-field">
                <span>"Input Shipment"</span>
                <select
                    prop:value=move || form.with(|f| f.input_value(id).unwrap_or_default().to_owned())
                    on:change=move |ev| form.update(|f| f.set_input(id, event_target_value(&ev)))
                >
                    <option value="">"Select shipment"</option>
                    {move || {
                        consumable
                            .get()
                            .into_iter()
                            .map(|s| view! { <option value=s.id.clone()>{s.display_label()}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>
            <Show when=move || form.with(TransformForm::can_remove_inputs)>
                <button type="button" class="btn btn--ghost" on:click=move |_| {
                    form.update(|f| {
                        f.remove_input(id);
                    });
                }>"Remove"</button>
            </Show>
        </div>
    }
}

fn product_row(form: RwSignal<TransformForm>, id: RowId) -> impl IntoView {
    let text = move |field: ProductField, label: &'static str, kind: &'static str, required: bool| {
        view! {
            <label class="form-field">
                <span>{label}</span>
                <input
                    type=kind
                    step="any"
                    required=required
                    prop:value=move || form.with(|f| f.product_value(id, field).unwrap_or_default().to_owned())
                    on:input=move |ev| form.update(|f| f.set_product_field(id, field, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="transform-row">
            {text(ProductField::NewShipmentId, "New Shipment ID (optional)", "text", false)}
            {text(ProductField::ProductName, "Product Name", "text", true)}
            <label class="form-field">
                <span>"Description"</span>
                <textarea
                    prop:value=move || {
                        form.with(|f| f.product_value(id, ProductField::Description).unwrap_or_default().to_owned())
                    }
                    on:input=move |ev| {
                        form.update(|f| f.set_product_field(id, ProductField::Description, event_target_value(&ev)));
                    }
                ></textarea>
            </label>
            {text(ProductField::Quantity, "Quantity", "number", true)}
            <label class="form-field">
                <span>"Unit"</span>
                <select
                    prop:value=move || form.with(|f| f.product_unit(id).unwrap_or_default().as_str())
                    on:change=move |ev| {
                        if let Some(unit) = UnitOfMeasure::parse(&event_target_value(&ev)) {
                            form.update(|f| f.set_product_unit(id, unit));
                        }
                    }
                >
                    {UnitOfMeasure::ALL
                        .into_iter()
                        .map(|unit| view! { <option value=unit.as_str()>{unit.as_str()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <Show when=move || form.with(TransformForm::can_remove_products)>
                <button type="button" class="btn btn--ghost" on:click=move |_| {
                    form.update(|f| {
                        f.remove_product(id);
                    });
                }>"Remove"</button>
            </Show>
        </div>
    }
}

fn processing_input(
    form: RwSignal<TransformForm>,
    field: ProcessingField,
    label: &'static str,
    kind: &'static str,
    required: bool,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span>{label}</span>
            <input
                type=kind
                required=required
                prop:value=move || form.with(|f| f.processing.value(field).to_owned())
                on:input=move |ev| form.update(|f| f.set_processing(field, event_target_value(&ev)))
            />
        </label>
    }
}
