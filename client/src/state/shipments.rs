//! Data hook for the signed-in user's shipments.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dashboard and transform views read shipments through [`use_my_shipments`].
//! The list is fetched once per mount; failures degrade to an empty list and
//! never reach the view.

#[cfg(test)]
#[path = "shipments_test.rs"]
mod shipments_test;

use leptos::prelude::*;

use crate::net::api::{HttpApi, TraceApi};
use crate::net::types::Shipment;
use crate::util::mount_guard::MountGuard;

/// Fetch up to `limit` shipments, logging and swallowing any failure.
pub async fn load_my_shipments(api: &dyn TraceApi, limit: u32) -> Vec<Shipment> {
    match api.my_shipments(limit).await {
        Ok(shipments) => shipments,
        Err(err) => {
            log::error!("Failed to fetch my shipments: {err}");
            Vec::new()
        }
    }
}

/// Keep shipments whose status equals `status` (case-insensitive); `None` keeps all.
pub fn filter_by_status(shipments: &[Shipment], status: Option<&str>) -> Vec<Shipment> {
    shipments
        .iter()
        .filter(|s| match status {
            None => true,
            Some(wanted) => s.status.as_deref().is_some_and(|have| have.eq_ignore_ascii_case(wanted)),
        })
        .cloned()
        .collect()
}

/// Distinct statuses in first-seen order, uppercased, for filter selectors.
pub fn distinct_statuses(shipments: &[Shipment]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for status in shipments.iter().filter_map(|s| s.status.as_deref()) {
        let status = status.trim().to_ascii_uppercase();
        if !status.is_empty() && !out.contains(&status) {
            out.push(status);
        }
    }
    out
}

/// Reactive list of the current user's shipments, loaded on mount.
pub fn use_my_shipments() -> ReadSignal<Vec<Shipment>> {
    let api = expect_context::<HttpApi>();
    let (shipments, set_shipments) = signal(Vec::<Shipment>::new());
    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.release()
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let limit = api.config().shipment_page_size;
        let list = load_my_shipments(&api, limit).await;
        guard.deliver(list, |list| set_shipments.set(list));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (api, set_shipments, guard);

    shipments
}
