//! Read-only map of a shipment's farm of origin and route.

use leptos::prelude::*;

use crate::components::map_surface::MapSurface;
use crate::net::types::GeoPoint;
use crate::util::geo::shipment_layers;

#[component]
pub fn ShipmentMapView(
    #[prop(into)] farm_location: Signal<Option<GeoPoint>>,
    #[prop(into)] route: Signal<Vec<GeoPoint>>,
) -> impl IntoView {
    let layers = Signal::derive(move || route.with(|route| shipment_layers(farm_location.get(), route)));

    view! { <MapSurface layers=layers/> }
}
