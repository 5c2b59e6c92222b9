//! Wire DTOs for the FoodTrace backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Shipments are read-only
//! on the client and keep every unknown field in `extra`, so views can reach
//! for optional data (farm location, route) without the schema pinning it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Statuses that make a shipment eligible as transformation input.
pub const CONSUMABLE_STATUSES: [&str; 3] = ["PROCESSED", "CERTIFIED", "DELIVERED"];

/// A latitude/longitude pair in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Fallback map center when nothing better is known.
    pub const ORIGIN: GeoPoint = GeoPoint { latitude: 0.0, longitude: 0.0 };

    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Whether both components are finite and inside their valid ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// A shipment as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Shipment {
    pub id: String,
    #[serde(rename = "productName", skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Every other field the backend sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for Shipment {
    type Error = String;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        // Older ledger records only carry `shipmentID`.
        let id = ["id", "shipmentID", "shipmentId"]
            .iter()
            .filter_map(|key| fields.remove(*key))
            .find_map(|value| match value {
                Value::String(s) if !s.is_empty() => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .ok_or_else(|| "shipment is missing an id".to_owned())?;
        let product_name = take_string(&mut fields, "productName");
        let status = take_string(&mut fields, "status");
        Ok(Self { id, product_name, status, extra: fields })
    }
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key) {
        Some(Value::String(s)) => Some(s),
        Some(Value::Null) | None => None,
        Some(other) => Some(other.to_string()),
    }
}

impl Shipment {
    /// Whether the shipment can be consumed by a transformation.
    #[must_use]
    pub fn is_consumable(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|status| CONSUMABLE_STATUSES.iter().any(|c| c.eq_ignore_ascii_case(status.trim())))
    }

    /// Label used in selectors: `"<product> (<id>)"`.
    #[must_use]
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.product_name.as_deref().unwrap_or("Unnamed"), self.id)
    }

    /// Farm of origin, when the backend recorded one.
    #[must_use]
    pub fn farm_location(&self) -> Option<GeoPoint> {
        self.extra
            .get("farmLocation")
            .and_then(|v| serde_json::from_value::<GeoPoint>(v.clone()).ok())
            .filter(GeoPoint::is_valid)
    }

    /// Recorded route waypoints in travel order. Malformed points are skipped.
    #[must_use]
    pub fn route(&self) -> Vec<GeoPoint> {
        self.extra
            .get("route")
            .and_then(Value::as_array)
            .map(|points| {
                points
                    .iter()
                    .filter_map(|v| serde_json::from_value::<GeoPoint>(v.clone()).ok())
                    .filter(GeoPoint::is_valid)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Keep only shipments eligible as transformation input.
pub fn consumable_shipments(shipments: &[Shipment]) -> Vec<Shipment> {
    shipments.iter().filter(|s| s.is_consumable()).cloned().collect()
}

/// `GET /api/shipments/my` body. Records stay raw until [`Self::into_shipments`]
/// so one malformed entry cannot fail the whole list.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ShipmentListResponse {
    #[serde(default)]
    pub shipments: Vec<Value>,
}

impl ShipmentListResponse {
    /// Decode each record, skipping (and logging) those without a usable id.
    pub fn into_shipments(self) -> Vec<Shipment> {
        self.shipments
            .into_iter()
            .filter_map(|record| {
                let fields = match record {
                    Value::Object(fields) => fields,
                    other => {
                        log::warn!("skipping non-object shipment record: {other}");
                        return None;
                    }
                };
                match Shipment::try_from(fields) {
                    Ok(shipment) => Some(shipment),
                    Err(reason) => {
                        log::warn!("skipping shipment record: {reason}");
                        None
                    }
                }
            })
            .collect()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AliasListResponse {
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Unit of measure for a newly produced shipment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitOfMeasure {
    #[default]
    Kg,
    Liters,
    Pieces,
}

impl UnitOfMeasure {
    pub const ALL: [UnitOfMeasure; 3] = [Self::Kg, Self::Liters, Self::Pieces];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Liters => "liters",
            Self::Pieces => "pieces",
        }
    }

    /// Parse a selector value; unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.as_str() == raw)
    }
}

/// Reference to a shipment consumed by a transformation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputConsumption {
    pub shipment_id: String,
}

/// A shipment to be created by a transformation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub new_shipment_id: String,
    pub product_name: String,
    pub description: String,
    pub quantity: f64,
    pub unit_of_measure: UnitOfMeasure,
}

/// Processing metadata attached to a transformation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingRecord {
    pub processing_type: String,
    pub processing_line_id: String,
    /// ISO-8601 UTC timestamp.
    pub date_processed: String,
    pub output_batch_id: String,
    /// ISO-8601 UTC timestamp at midnight, or empty when not supplied.
    pub expiry_date: String,
    pub processing_location: String,
    pub quality_certifications: Vec<String>,
    pub destination_distributor_id: String,
}

/// Body of `POST /api/shipments/process/transform`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformRequest {
    pub input_consumption: Vec<InputConsumption>,
    pub new_products: Vec<NewProduct>,
    pub processing_record: ProcessingRecord,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Successful login response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub user: Option<Value>,
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterUserRequest {
    pub username: String,
    pub password: String,
    pub chaincode_alias: String,
    pub role: String,
}
