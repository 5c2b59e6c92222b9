//! Coordinate picker: click the map to choose a latitude/longitude.
//!
//! Purely presentational; the parent form owns the value and persists it.

use leptos::prelude::*;

use crate::components::map_surface::MapSurface;
use crate::net::types::GeoPoint;
use crate::util::geo::PickerView;

/// Map opened on the initial `value` (or the origin) with a marker at the
/// current `value`. Every click reports the clicked coordinate to `on_change`.
#[component]
pub fn MapPicker(#[prop(into)] value: Signal<Option<GeoPoint>>, on_change: Callback<GeoPoint>) -> impl IntoView {
    let picker = PickerView::open(value.get_untracked());
    let layers = Signal::derive(move || picker.layers(value.get()));

    view! { <MapSurface layers=layers on_pick=on_change/> }
}
