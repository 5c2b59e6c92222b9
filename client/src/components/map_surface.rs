//! Raster map with an SVG marker/route overlay.
//!
//! DESIGN
//! ======
//! Tiles and overlay ignore pointer events so every click lands on the
//! container and `offset_x`/`offset_y` are viewport coordinates.

use leptos::prelude::*;

use crate::net::types::GeoPoint;
use crate::util::geo::{ATTRIBUTION, MAP_HEIGHT, MAP_WIDTH, MapLayers, MapViewport, ScreenPoint, TILE_SIZE, svg_points};

#[component]
pub fn MapSurface(
    #[prop(into)] layers: Signal<MapLayers>,
    /// Invoked with the clicked coordinate; the map is read-only without it.
    #[prop(optional)]
    on_pick: Option<Callback<GeoPoint>>,
) -> impl IntoView {
    let viewport = Memo::new(move |_| MapViewport::new(layers.get().center));

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let Some(on_pick) = on_pick else {
            return;
        };
        let screen = ScreenPoint { x: f64::from(ev.offset_x()), y: f64::from(ev.offset_y()) };
        on_pick.run(viewport.get_untracked().to_geo(screen));
    };

    view! {
        <div
            class="map"
            class:map--interactive=on_pick.is_some()
            style=format!(
                "position:relative;overflow:hidden;width:{MAP_WIDTH}px;max-width:100%;height:{MAP_HEIGHT}px;",
            )
            on:click=on_click
        >
            <div class="map__tiles" style="position:absolute;inset:0;pointer-events:none;">
                {move || {
                    viewport
                        .get()
                        .tiles()
                        .into_iter()
                        .map(|tile| {
                            view! {
                                <img
                                    class="map__tile"
                                    src=tile.url
                                    alt=""
                                    width=TILE_SIZE.to_string()
                                    height=TILE_SIZE.to_string()
                                    style=format!("position:absolute;left:{:.0}px;top:{:.0}px;", tile.left, tile.top)
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <svg
                class="map__overlay"
                width=MAP_WIDTH.to_string()
                height=MAP_HEIGHT.to_string()
                style="position:absolute;left:0;top:0;pointer-events:none;"
            >
                {move || {
                    let vp = viewport.get();
                    layers
                        .get()
                        .polyline
                        .map(|points| {
                            view! {
                                <polyline
                                    class="map__route"
                                    points=svg_points(&vp, &points)
                                    fill="none"
                                    stroke="#2563eb"
                                    stroke-width="3"
                                />
                            }
                        })
                }}
                {move || {
                    let vp = viewport.get();
                    layers
                        .get()
                        .markers
                        .into_iter()
                        .map(|marker| {
                            let at = vp.to_screen(marker);
                            view! {
                                <circle
                                    class="map__marker"
                                    cx=format!("{:.1}", at.x)
                                    cy=format!("{:.1}", at.y)
                                    r="7"
                                    fill="#059669"
                                    stroke="#ffffff"
                                    stroke-width="2"
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </svg>
            <span class="map__attribution" style="position:absolute;right:4px;bottom:2px;pointer-events:none;">
                {ATTRIBUTION}
            </span>
        </div>
    }
}
