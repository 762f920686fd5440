//! Vehicle status snapshot as reported by `GET /api/status`.

use serde::{Deserialize, Deserializer, Serialize};

/// Flight mode reported while the vehicle is in its automatic protective state.
pub const FAILSAFE_MODE: &str = "FAILSAFE";

// ── Status ──────────────────────────────────────────────────────────

/// Latest snapshot received from the vehicle API.
///
/// Every field is optional: the server may omit any of them and the
/// client must keep rendering. The decoded document is kept alongside
/// the typed fields so the raw snapshot can be shown unabridged,
/// explicit `null`s and unmodelled fields included.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct Status {
    pub battery: Option<u8>,
    pub gps_locked: Option<bool>,
    pub flight_mode: Option<String>,
    pub mission: Option<Vec<Waypoint>>,
    pub current_wp_index: Option<usize>,
    pub armed: Option<bool>,
    /// Altitude above home, metres.
    pub altitude: Option<f64>,
    /// Vehicle lifecycle state (`disarmed`, `armed`, `flying`, `landing`).
    pub state: Option<String>,
    /// Fields this client does not model.
    pub extra: serde_json::Map<String, serde_json::Value>,
    /// Document as received; `Null` for a locally built status.
    pub(crate) raw: serde_json::Value,
}

/// Wire shape of [`Status`].
#[derive(Serialize, Deserialize)]
struct StatusFields {
    #[serde(
        default,
        deserialize_with = "lenient_percent",
        skip_serializing_if = "Option::is_none"
    )]
    battery: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gps_locked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    flight_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mission: Option<Vec<Waypoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    current_wp_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    armed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    altitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    state: Option<String>,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

/// Any JSON number, floored and clamped to 0..=100. Anything else reads
/// as absent rather than failing the snapshot.
fn lenient_percent<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_f64)
        .map(|pct| pct.floor().clamp(0.0, 100.0) as u8))
}

impl TryFrom<serde_json::Value> for Status {
    type Error = serde_json::Error;

    fn try_from(raw: serde_json::Value) -> Result<Self, Self::Error> {
        let f = StatusFields::deserialize(&raw)?;
        Ok(Self {
            battery: f.battery,
            gps_locked: f.gps_locked,
            flight_mode: f.flight_mode,
            mission: f.mission,
            current_wp_index: f.current_wp_index,
            armed: f.armed,
            altitude: f.altitude,
            state: f.state,
            extra: f.extra,
            raw,
        })
    }
}

impl Status {
    /// Mission waypoints, empty when no mission is loaded.
    pub fn waypoints(&self) -> &[Waypoint] {
        self.mission.as_deref().unwrap_or_default()
    }

    /// The active waypoint index, or `None` if it is unset or does not
    /// point into the mission.
    pub fn active_index(&self) -> Option<usize> {
        self.current_wp_index
            .filter(|&idx| idx < self.waypoints().len())
    }

    pub fn is_failsafe(&self) -> bool {
        self.flight_mode.as_deref() == Some(FAILSAFE_MODE)
    }

    /// Pretty-printed JSON of the snapshot as the server sent it.
    pub fn to_pretty_json(&self) -> String {
        let printed = if self.raw.is_null() {
            serde_json::to_string_pretty(&self.fields())
        } else {
            serde_json::to_string_pretty(&self.raw)
        };
        printed.unwrap_or_else(|e| format!("<unprintable status: {e}>"))
    }

    fn fields(&self) -> StatusFields {
        StatusFields {
            battery: self.battery,
            gps_locked: self.gps_locked,
            flight_mode: self.flight_mode.clone(),
            mission: self.mission.clone(),
            current_wp_index: self.current_wp_index,
            armed: self.armed,
            altitude: self.altitude,
            state: self.state.clone(),
            extra: self.extra.clone(),
        }
    }
}

// ── Waypoints ───────────────────────────────────────────────────────

/// A mission entry: either a bare name or an object with a name and
/// optional coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Waypoint {
    Named(String),
    Point(WaypointPoint),
}

/// Object form of a waypoint. Coordinates are kept as raw JSON so a
/// non-numeric value only disqualifies the waypoint from the map
/// instead of failing the whole status fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaypointPoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<serde_json::Value>,
}

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl Waypoint {
    /// Name shown to the operator.
    pub fn display_name(&self) -> &str {
        match self {
            Waypoint::Named(name) => name,
            Waypoint::Point(p) => p.name.as_deref().unwrap_or("unnamed"),
        }
    }

    /// Coordinates, if both `lat` and `lng` are JSON numbers.
    pub fn position(&self) -> Option<LatLng> {
        match self {
            Waypoint::Named(_) => None,
            Waypoint::Point(p) => {
                let lat = p.lat.as_ref()?.as_f64()?;
                let lng = p.lng.as_ref()?.as_f64()?;
                Some(LatLng { lat, lng })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_status_from_backend() {
        let json = r#"{
            "armed": true,
            "altitude": 12,
            "mission": [
                {"name": "WP1", "lat": 51.0447, "lng": -114.0719},
                {"name": "WP2", "lat": 51.0457, "lng": -114.0709}
            ],
            "current_wp_index": 1,
            "state": "flying",
            "battery": 87,
            "gps_locked": true,
            "flight_mode": "AUTO"
        }"#;
        let status: Status = serde_json::from_str(json).unwrap();
        assert_eq!(status.battery, Some(87));
        assert_eq!(status.gps_locked, Some(true));
        assert_eq!(status.flight_mode.as_deref(), Some("AUTO"));
        assert_eq!(status.waypoints().len(), 2);
        assert_eq!(status.active_index(), Some(1));
        assert_eq!(status.altitude, Some(12.0));
        assert!(status.extra.is_empty());
        assert!(!status.is_failsafe());
    }

    #[test]
    fn empty_object_is_all_absent() {
        let status: Status = serde_json::from_str("{}").unwrap();
        assert_eq!(status.battery, None);
        assert_eq!(status.flight_mode, None);
        assert!(status.extra.is_empty());
        assert!(status.waypoints().is_empty());
        assert_eq!(status.active_index(), None);
    }

    #[test]
    fn null_index_and_unknown_fields() {
        let status: Status =
            serde_json::from_str(r#"{"current_wp_index": null, "link_quality": 0.9}"#).unwrap();
        assert_eq!(status.current_wp_index, None);
        assert_eq!(status.extra.get("link_quality"), Some(&serde_json::json!(0.9)));
        assert!(status.to_pretty_json().contains("link_quality"));
    }

    #[test]
    fn raw_json_keeps_explicit_nulls() {
        let status: Status =
            serde_json::from_str(r#"{"battery":90,"current_wp_index":null,"mission":[]}"#).unwrap();
        let out = status.to_pretty_json();
        assert!(out.contains("\"current_wp_index\": null"), "{out}");
        assert!(out.contains("\"battery\": 90"));
        assert!(out.contains("\"mission\": []"));
    }

    #[test]
    fn built_status_prints_its_fields() {
        let status = Status {
            battery: Some(55),
            flight_mode: Some("AUTO".into()),
            ..Default::default()
        };
        let out = status.to_pretty_json();
        assert!(out.contains("\"battery\": 55"));
        assert!(out.contains("\"flight_mode\": \"AUTO\""));
        assert!(!out.contains("null"));
    }

    #[test]
    fn battery_read_loosely() {
        let read = |json: &str| serde_json::from_str::<Status>(json).unwrap().battery;
        assert_eq!(read(r#"{"battery": 42.5}"#), Some(42));
        assert_eq!(read(r#"{"battery": 14.9}"#), Some(14));
        assert_eq!(read(r#"{"battery": 140}"#), Some(100));
        assert_eq!(read(r#"{"battery": -3}"#), Some(0));
        assert_eq!(read(r#"{"battery": "full"}"#), None);
        assert_eq!(read(r#"{"battery": null}"#), None);
    }

    #[test]
    fn mixed_waypoint_forms() {
        let status: Status = serde_json::from_str(
            r#"{"mission": ["WP1", {"name": "WP2", "lat": 1, "lng": 2}, {"name": "WP3", "lat": "x", "lng": 2}]}"#,
        )
        .unwrap();
        let wps = status.waypoints();
        assert_eq!(wps[0].display_name(), "WP1");
        assert_eq!(wps[0].position(), None);
        assert_eq!(wps[1].display_name(), "WP2");
        assert_eq!(wps[1].position(), Some(LatLng { lat: 1.0, lng: 2.0 }));
        assert_eq!(wps[2].position(), None);
    }

    #[test]
    fn out_of_range_index_is_inactive() {
        let status = Status {
            mission: Some(vec![Waypoint::Named("WP1".into())]),
            current_wp_index: Some(3),
            ..Default::default()
        };
        assert_eq!(status.active_index(), None);
    }

    #[test]
    fn failsafe_detection() {
        let status = Status {
            flight_mode: Some(FAILSAFE_MODE.into()),
            ..Default::default()
        };
        assert!(status.is_failsafe());
    }
}
