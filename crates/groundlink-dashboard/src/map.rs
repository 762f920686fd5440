//! Flat projection of mission geometry into SVG viewport coordinates.
//!
//! Equirectangular, with longitude scaled by the cosine of the centre
//! latitude. Good enough for a mission spanning a few hundred metres.

use groundlink_common::models::LatLng;
use groundlink_common::view::MapGeometry;

pub const MAP_WIDTH: f64 = 800.0;
pub const MAP_HEIGHT: f64 = 400.0;
const MAP_PADDING: f64 = 40.0;

/// Maps geographic positions into a `width` × `height` viewport.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    origin: LatLng,
    scale: f64,
    lng_factor: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Projection {
    pub fn fit(map: &MapGeometry, width: f64, height: f64) -> Self {
        let (sw, ne) = map.bounds();
        let lng_factor = map.center.lat.to_radians().cos().abs().max(1e-6);
        let span_x = (ne.lng - sw.lng) * lng_factor;
        let span_y = ne.lat - sw.lat;
        let avail_x = (width - 2.0 * MAP_PADDING).max(1.0);
        let avail_y = (height - 2.0 * MAP_PADDING).max(1.0);

        let scale = match (span_x > 0.0, span_y > 0.0) {
            (false, false) => 1.0,
            (true, false) => avail_x / span_x,
            (false, true) => avail_y / span_y,
            (true, true) => (avail_x / span_x).min(avail_y / span_y),
        };

        // Centre the drawing inside the viewport.
        let offset_x = (width - span_x * scale) / 2.0;
        let offset_y = (height - span_y * scale) / 2.0;

        Self {
            origin: LatLng {
                lat: ne.lat,
                lng: sw.lng,
            },
            scale,
            lng_factor,
            offset_x,
            offset_y,
        }
    }

    /// SVG `(x, y)`; north is up.
    pub fn project(&self, p: LatLng) -> (f64, f64) {
        let x = (p.lng - self.origin.lng) * self.lng_factor * self.scale + self.offset_x;
        let y = (self.origin.lat - p.lat) * self.scale + self.offset_y;
        (x, y)
    }
}

/// `points` attribute for an SVG polyline.
pub fn polyline_points(map: &MapGeometry, projection: &Projection) -> String {
    map.path
        .iter()
        .map(|p| {
            let (x, y) = projection.project(*p);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// OpenStreetMap link centred on the mission.
pub fn osm_link(center: LatLng) -> String {
    format!(
        "https://www.openstreetmap.org/?mlat={lat:.6}&mlon={lng:.6}#map=16/{lat:.6}/{lng:.6}",
        lat = center.lat,
        lng = center.lng
    )
}
