//! Web Mercator projection and map layer derivation.
//!
//! Map components render raster tiles plus an SVG overlay; everything they
//! need (tile placement, marker positions, click -> coordinate) comes from
//! [`MapViewport`]. Screen coordinates are CSS pixels relative to the map's
//! top-left corner.

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use std::f64::consts::PI;

use crate::net::types::GeoPoint;

pub const TILE_SIZE: f64 = 256.0;
pub const DEFAULT_ZOOM: u8 = 5;
pub const MAP_WIDTH: f64 = 640.0;
pub const MAP_HEIGHT: f64 = 300.0;
pub const TILE_URL_TEMPLATE: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const ATTRIBUTION: &str = "\u{a9} OpenStreetMap contributors";

/// Latitude bound where Web Mercator becomes a square world.
const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// A position in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// One raster tile placed in the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct TilePlacement {
    pub url: String,
    pub left: f64,
    pub top: f64,
}

fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(1u32 << zoom.min(22))
}

/// Project a coordinate to world pixels at `zoom`.
pub fn project(point: GeoPoint, zoom: u8) -> ScreenPoint {
    let size = world_size(zoom);
    let lat = point.latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (point.longitude + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    ScreenPoint { x, y }
}

/// Inverse of [`project`]. Longitude wraps into [-180, 180).
pub fn unproject(world: ScreenPoint, zoom: u8) -> GeoPoint {
    let size = world_size(zoom);
    let longitude = (world.x / size * 360.0 - 180.0 + 180.0).rem_euclid(360.0) - 180.0;
    let n = PI - 2.0 * PI * world.y / size;
    let latitude = n.sinh().atan().to_degrees().clamp(-MAX_LATITUDE, MAX_LATITUDE);
    GeoPoint { latitude, longitude }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapViewport {
    pub center: GeoPoint,
    pub zoom: u8,
    pub width: f64,
    pub height: f64,
}

impl MapViewport {
    pub fn new(center: GeoPoint) -> Self {
        Self { center, zoom: DEFAULT_ZOOM, width: MAP_WIDTH, height: MAP_HEIGHT }
    }

    /// World-pixel position of the viewport's top-left corner.
    fn top_left(&self) -> ScreenPoint {
        let c = project(self.center, self.zoom);
        ScreenPoint { x: c.x - self.width / 2.0, y: c.y - self.height / 2.0 }
    }

    pub fn to_screen(&self, point: GeoPoint) -> ScreenPoint {
        let origin = self.top_left();
        let p = project(point, self.zoom);
        ScreenPoint { x: p.x - origin.x, y: p.y - origin.y }
    }

    /// Coordinate under a click at `screen`.
    pub fn to_geo(&self, screen: ScreenPoint) -> GeoPoint {
        let origin = self.top_left();
        unproject(ScreenPoint { x: origin.x + screen.x, y: origin.y + screen.y }, self.zoom)
    }

    /// Tiles covering the viewport, wrapping horizontally across the antimeridian.
    pub fn tiles(&self) -> Vec<TilePlacement> {
        let origin = self.top_left();
        let count = 1i64 << self.zoom.min(22);
        #[allow(clippy::cast_possible_truncation)]
        let (x0, y0, x1, y1) = (
            (origin.x / TILE_SIZE).floor() as i64,
            (origin.y / TILE_SIZE).floor() as i64,
            ((origin.x + self.width) / TILE_SIZE).floor() as i64,
            ((origin.y + self.height) / TILE_SIZE).floor() as i64,
        );
        let mut tiles = Vec::new();
        for ty in y0.max(0)..=y1.min(count - 1) {
            for tx in x0..=x1 {
                #[allow(clippy::cast_precision_loss)]
                tiles.push(TilePlacement {
                    url: tile_url(self.zoom, tx.rem_euclid(count), ty),
                    left: tx as f64 * TILE_SIZE - origin.x,
                    top: ty as f64 * TILE_SIZE - origin.y,
                });
            }
        }
        tiles
    }
}

pub fn tile_url(zoom: u8, x: i64, y: i64) -> String {
    TILE_URL_TEMPLATE
        .replace("{z}", &zoom.to_string())
        .replace("{x}", &x.to_string())
        .replace("{y}", &y.to_string())
}

/// What a map draws: where it is centered, point markers, and an optional route line.
#[derive(Clone, Debug, PartialEq)]
pub struct MapLayers {
    pub center: GeoPoint,
    pub markers: Vec<GeoPoint>,
    pub polyline: Option<Vec<GeoPoint>>,
}

/// Farm location, else the first route point, else the origin.
pub fn display_center(farm: Option<GeoPoint>, route: &[GeoPoint]) -> GeoPoint {
    farm.or_else(|| route.first().copied()).unwrap_or(GeoPoint::ORIGIN)
}

/// Layers for a shipment: farm marker, one marker per waypoint, and a line
/// only when the route has at least two points.
pub fn shipment_layers(farm: Option<GeoPoint>, route: &[GeoPoint]) -> MapLayers {
    let markers = farm.into_iter().chain(route.iter().copied()).collect();
    MapLayers {
        center: display_center(farm, route),
        markers,
        polyline: (route.len() > 1).then(|| route.to_vec()),
    }
}

/// Coordinate picker model. The view opens on the initial value (or the
/// origin) and stays there; the marker follows whatever value is current.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickerView {
    viewport: MapViewport,
}

impl PickerView {
    pub fn open(initial: Option<GeoPoint>) -> Self {
        Self { viewport: MapViewport::new(initial.unwrap_or(GeoPoint::ORIGIN)) }
    }

    pub fn viewport(&self) -> MapViewport {
        self.viewport
    }

    /// A single marker at `value`, if set, over the fixed view.
    pub fn layers(&self, value: Option<GeoPoint>) -> MapLayers {
        MapLayers { center: self.viewport.center, markers: value.into_iter().collect(), polyline: None }
    }

    /// Coordinate reported for a click at `screen`.
    pub fn pick(&self, screen: ScreenPoint) -> GeoPoint {
        self.viewport.to_geo(screen)
    }
}

/// SVG `points` attribute for a polyline in viewport space.
pub fn svg_points(viewport: &MapViewport, points: &[GeoPoint]) -> String {
    points
        .iter()
        .map(|p| {
            let s = viewport.to_screen(*p);
            format!("{:.1},{:.1}", s.x, s.y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
