use serde_json::json;

use super::*;

fn shipment(value: serde_json::Value) -> Shipment {
    serde_json::from_value(value).unwrap()
}

// =============================================================
// Shipment decoding
// =============================================================

#[test]
fn shipment_reads_id_name_and_status() {
    let s = shipment(json!({ "id": "SHIP-1", "productName": "Tomatoes", "status": "PROCESSED", "origin": "farm" }));
    assert_eq!(s.id, "SHIP-1");
    assert_eq!(s.product_name.as_deref(), Some("Tomatoes"));
    assert_eq!(s.status.as_deref(), Some("PROCESSED"));
    assert_eq!(s.extra.get("origin"), Some(&json!("farm")));
}

#[test]
fn shipment_falls_back_to_ledger_id_field() {
    let s = shipment(json!({ "shipmentID": "LEDGER-9" }));
    assert_eq!(s.id, "LEDGER-9");
    assert!(s.product_name.is_none());
    assert!(s.status.is_none());
}

#[test]
fn shipment_without_id_is_rejected() {
    let result = serde_json::from_value::<Shipment>(json!({ "productName": "x" }));
    assert!(result.is_err());
}

#[test]
fn shipment_list_defaults_to_empty() {
    let list: ShipmentListResponse = serde_json::from_value(json!({})).unwrap();
    assert!(list.shipments.is_empty());
}

#[test]
fn malformed_records_are_skipped_not_fatal() {
    let list: ShipmentListResponse = serde_json::from_value(json!({
        "shipments": [
            { "id": "S-1", "status": "PROCESSED" },
            { "productName": "no id here" },
            "not an object",
            { "shipmentID": "S-2", "productName": "Milk" }
        ]
    }))
    .unwrap();
    let ids: Vec<String> = list.into_shipments().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["S-1", "S-2"]);
}

// =============================================================
// Consumable filter
// =============================================================

#[test]
fn consumable_statuses_are_accepted() {
    for status in ["PROCESSED", "CERTIFIED", "DELIVERED", "delivered"] {
        assert!(shipment(json!({ "id": "a", "status": status })).is_consumable(), "{status}");
    }
}

#[test]
fn other_statuses_are_not_consumable() {
    for status in ["CREATED", "IN_TRANSIT", "CONSUMED", ""] {
        assert!(!shipment(json!({ "id": "a", "status": status })).is_consumable(), "{status}");
    }
    assert!(!shipment(json!({ "id": "a" })).is_consumable());
}

#[test]
fn consumable_shipments_keeps_order() {
    let all = vec![
        shipment(json!({ "id": "1", "status": "CERTIFIED" })),
        shipment(json!({ "id": "2", "status": "CREATED" })),
        shipment(json!({ "id": "3", "status": "DELIVERED" })),
    ];
    let ids: Vec<_> = consumable_shipments(&all).into_iter().map(|s| s.id).collect();
    assert_eq!(ids, ["1", "3"]);
}

#[test]
fn display_label_uses_placeholder_for_missing_name() {
    assert_eq!(shipment(json!({ "id": "S1", "productName": "Milk" })).display_label(), "Milk (S1)");
    assert_eq!(shipment(json!({ "id": "S2" })).display_label(), "Unnamed (S2)");
}

// =============================================================
// Geo fields
// =============================================================

#[test]
fn farm_location_and_route_are_read_from_extra() {
    let s = shipment(json!({
        "id": "S1",
        "farmLocation": { "latitude": 45.0, "longitude": 7.5 },
        "route": [
            { "latitude": 45.1, "longitude": 7.6 },
            { "latitude": "bad" },
            { "latitude": 46.0, "longitude": 8.0 }
        ]
    }));
    assert_eq!(s.farm_location(), Some(GeoPoint::new(45.0, 7.5)));
    assert_eq!(s.route(), vec![GeoPoint::new(45.1, 7.6), GeoPoint::new(46.0, 8.0)]);
}

#[test]
fn out_of_range_farm_location_is_ignored() {
    let s = shipment(json!({ "id": "S1", "farmLocation": { "latitude": 95.0, "longitude": 0.0 } }));
    assert_eq!(s.farm_location(), None);
    assert!(s.route().is_empty());
}

#[test]
fn geo_point_validity() {
    assert!(GeoPoint::ORIGIN.is_valid());
    assert!(GeoPoint::new(-90.0, 180.0).is_valid());
    assert!(!GeoPoint::new(0.0, 180.5).is_valid());
    assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
}

// =============================================================
// Transform payload wire shape
// =============================================================

#[test]
fn unit_of_measure_wire_values() {
    assert_eq!(serde_json::to_value(UnitOfMeasure::Liters).unwrap(), json!("liters"));
    assert_eq!(UnitOfMeasure::parse("pieces"), Some(UnitOfMeasure::Pieces));
    assert_eq!(UnitOfMeasure::parse("tons"), None);
    assert_eq!(UnitOfMeasure::default(), UnitOfMeasure::Kg);
}

#[test]
fn transform_request_serializes_camel_case() {
    let req = TransformRequest {
        input_consumption: vec![InputConsumption { shipment_id: "IN-1".to_owned() }],
        new_products: vec![NewProduct {
            new_shipment_id: "OUT-1".to_owned(),
            product_name: "Sauce".to_owned(),
            description: String::new(),
            quantity: 2.5,
            unit_of_measure: UnitOfMeasure::Liters,
        }],
        processing_record: ProcessingRecord {
            processing_type: "Cooking".to_owned(),
            processing_line_id: "L1".to_owned(),
            date_processed: "2024-03-15T10:00:00.000Z".to_owned(),
            output_batch_id: "B1".to_owned(),
            expiry_date: String::new(),
            processing_location: "Transformation Plant".to_owned(),
            quality_certifications: Vec::new(),
            destination_distributor_id: "DemoDistributor".to_owned(),
        },
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["inputConsumption"], json!([{ "shipmentId": "IN-1" }]));
    assert_eq!(value["newProducts"][0]["newShipmentId"], json!("OUT-1"));
    assert_eq!(value["newProducts"][0]["unitOfMeasure"], json!("liters"));
    assert_eq!(value["processingRecord"]["qualityCertifications"], json!([]));
    assert_eq!(value["processingRecord"]["destinationDistributorId"], json!("DemoDistributor"));
}

#[test]
fn register_request_uses_snake_case_alias_field() {
    let req = RegisterUserRequest {
        username: "testf".to_owned(),
        password: "testf".to_owned(),
        chaincode_alias: "DemoFarmer".to_owned(),
        role: "farmer".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        json!({ "username": "testf", "password": "testf", "chaincode_alias": "DemoFarmer", "role": "farmer" })
    );
}
