//! Derived view model: pure functions of the latest [`Status`].
//!
//! Nothing here mutates the status or talks to the network; front-ends
//! recompute a [`StatusView`] on every status update and render it.

use crate::models::{LatLng, Status};

/// Battery percentage below which the reading is shown as an alert.
pub const LOW_BATTERY_PERCENT: u8 = 15;

/// Rendering emphasis for a telemetry value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Warning,
    Alert,
}

// ── Telemetry ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryView {
    pub battery: Option<u8>,
    pub battery_tone: Tone,
    pub gps_locked: bool,
    pub gps_tone: Tone,
    pub flight_mode: Option<String>,
    pub flight_mode_tone: Tone,
}

impl TelemetryView {
    pub fn from_status(status: &Status) -> Self {
        let battery_tone = match status.battery {
            Some(pct) if pct < LOW_BATTERY_PERCENT => Tone::Alert,
            _ => Tone::Normal,
        };
        // An absent flag is treated as no lock.
        let gps_locked = status.gps_locked.unwrap_or(false);
        Self {
            battery: status.battery,
            battery_tone,
            gps_locked,
            gps_tone: if gps_locked { Tone::Normal } else { Tone::Warning },
            flight_mode: status.flight_mode.clone(),
            flight_mode_tone: if status.is_failsafe() {
                Tone::Alert
            } else {
                Tone::Normal
            },
        }
    }
}

// ── Mission ─────────────────────────────────────────────────────────

/// One line of the mission plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionRow {
    /// 1-based position in the mission.
    pub number: usize,
    pub name: String,
    /// The vehicle is currently flying to this waypoint.
    pub executing: bool,
}

pub fn mission_rows(status: &Status) -> Vec<MissionRow> {
    let active = status.active_index();
    status
        .waypoints()
        .iter()
        .enumerate()
        .map(|(idx, wp)| MissionRow {
            number: idx + 1,
            name: wp.display_name().to_string(),
            executing: active == Some(idx),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// 1-based number of the active waypoint.
    pub current: usize,
    pub total: usize,
}

impl Progress {
    /// Completed fraction in `(0, 1]`.
    pub fn fraction(&self) -> f64 {
        self.current as f64 / self.total as f64
    }

    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }
}

/// `None` without an active waypoint or without a mission.
pub fn progress(status: &Status) -> Option<Progress> {
    let idx = status.active_index()?;
    Some(Progress {
        current: idx + 1,
        total: status.waypoints().len(),
    })
}

// ── Map ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub position: LatLng,
    pub name: String,
    /// Index of the waypoint in the full mission.
    pub mission_index: usize,
    pub current: bool,
}

impl MapMarker {
    /// Popup text, e.g. `WP2 (Current)`.
    pub fn label(&self) -> String {
        if self.current {
            format!("{} (Current)", self.name)
        } else {
            self.name.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapGeometry {
    pub center: LatLng,
    /// Polyline through every positioned waypoint, in mission order.
    pub path: Vec<LatLng>,
    pub markers: Vec<MapMarker>,
}

impl MapGeometry {
    /// `(south_west, north_east)` corners of the path.
    pub fn bounds(&self) -> (LatLng, LatLng) {
        let mut sw = self.center;
        let mut ne = self.center;
        for p in &self.path {
            sw.lat = sw.lat.min(p.lat);
            sw.lng = sw.lng.min(p.lng);
            ne.lat = ne.lat.max(p.lat);
            ne.lng = ne.lng.max(p.lng);
        }
        (sw, ne)
    }
}

/// Map of the positioned waypoints; `None` when no waypoint has
/// numeric coordinates, in which case the map is not shown at all.
pub fn map_geometry(status: &Status) -> Option<MapGeometry> {
    let active = status.active_index();
    let markers: Vec<MapMarker> = status
        .waypoints()
        .iter()
        .enumerate()
        .filter_map(|(idx, wp)| {
            wp.position().map(|position| MapMarker {
                position,
                name: wp.display_name().to_string(),
                mission_index: idx,
                current: active == Some(idx),
            })
        })
        .collect();

    let center = markers.first()?.position;
    Some(MapGeometry {
        center,
        path: markers.iter().map(|m| m.position).collect(),
        markers,
    })
}

// ── Whole view ──────────────────────────────────────────────────────

/// Everything a front-end renders from one status snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusView {
    pub failsafe: bool,
    pub telemetry: TelemetryView,
    pub mission: Vec<MissionRow>,
    pub progress: Option<Progress>,
    pub map: Option<MapGeometry>,
}

impl StatusView {
    pub fn from_status(status: &Status) -> Self {
        Self {
            failsafe: status.is_failsafe(),
            telemetry: TelemetryView::from_status(status),
            mission: mission_rows(status),
            progress: progress(status),
            map: map_geometry(status),
        }
    }
}
