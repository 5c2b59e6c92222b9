use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::error::ApiError;
use crate::test_support::FakeBackend;

fn shipment(id: &str, status: Option<&str>) -> Shipment {
    let mut value = json!({ "id": id });
    if let Some(status) = status {
        value["status"] = json!(status);
    }
    serde_json::from_value(value).unwrap()
}

#[test]
fn load_returns_api_list() {
    let mut backend = FakeBackend::new();
    backend.shipments = Ok(vec![shipment("S1", Some("CREATED"))]);
    let list = block_on(load_my_shipments(&backend, 50));
    assert_eq!(list.len(), 1);
    assert_eq!(backend.calls(), vec!["api.my_shipments 50"]);
}

#[test]
fn load_respects_page_size() {
    let mut backend = FakeBackend::new();
    backend.shipments = Ok((0..80).map(|i| shipment(&format!("S{i}"), None)).collect());
    assert_eq!(block_on(load_my_shipments(&backend, 50)).len(), 50);
}

#[test]
fn load_swallows_api_rejection() {
    let mut backend = FakeBackend::new();
    backend.shipments = Err(ApiError::Status { status: 500, message: None });
    assert!(block_on(load_my_shipments(&backend, 50)).is_empty());
}

#[test]
fn load_swallows_network_failure() {
    let mut backend = FakeBackend::new();
    backend.outage = Some(ApiError::Network("offline".to_owned()));
    assert!(block_on(load_my_shipments(&backend, 50)).is_empty());
}

#[test]
fn unmounted_guard_discards_loaded_list() {
    let mut backend = FakeBackend::new();
    backend.shipments = Ok(vec![shipment("S1", None)]);
    let guard = MountGuard::new();
    let mut exposed: Vec<Shipment> = Vec::new();
    let list = block_on(load_my_shipments(&backend, 50));
    guard.release();
    assert!(!guard.deliver(list, |list| exposed = list));
    assert!(exposed.is_empty());
}

#[test]
fn filter_by_status_matches_case_insensitively() {
    let all = vec![
        shipment("1", Some("PROCESSED")),
        shipment("2", Some("in_transit")),
        shipment("3", None),
        shipment("4", Some("processed")),
    ];
    let ids: Vec<_> = filter_by_status(&all, Some("PROCESSED")).into_iter().map(|s| s.id).collect();
    assert_eq!(ids, ["1", "4"]);
    assert_eq!(filter_by_status(&all, None).len(), 4);
}

#[test]
fn distinct_statuses_are_uppercased_and_ordered() {
    let all = vec![
        shipment("1", Some("created")),
        shipment("2", Some("PROCESSED")),
        shipment("3", Some("CREATED")),
        shipment("4", Some(" ")),
        shipment("5", None),
    ];
    assert_eq!(distinct_statuses(&all), vec!["CREATED", "PROCESSED"]);
}
