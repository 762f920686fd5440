//! Plain-text rendering of the view model and notices.

use std::fmt::Write;

use groundlink_common::view::{StatusView, Tone};
use groundlink_common::{NoticeKind, Notifier, Status};

const BAR_WIDTH: usize = 20;

/// Prints notices to stdout, one per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&self, kind: NoticeKind, text: &str) {
        println!("{}", notice_line(kind, text));
    }
}

pub fn notice_line(kind: NoticeKind, text: &str) -> String {
    let tag = match kind {
        NoticeKind::Success => "ok",
        NoticeKind::Info => "info",
        NoticeKind::Error => "error",
    };
    format!("[{tag}] {text}")
}

fn mark(tone: Tone) -> &'static str {
    match tone {
        Tone::Normal => "",
        Tone::Warning => " (!)",
        Tone::Alert => " (!!)",
    }
}

/// Multi-line summary of a status snapshot.
pub fn render_status(status: Option<&Status>) -> String {
    let Some(status) = status else {
        return "No status fetched yet.".to_string();
    };
    let view = StatusView::from_status(status);
    let mut out = String::new();

    if view.failsafe {
        let _ = writeln!(out, "*** FAILSAFE MODE ACTIVE — Drone auto-landing ***");
    }

    let t = &view.telemetry;
    let battery = t.battery.map(|b| format!("{b}%")).unwrap_or_else(|| "—".into());
    let _ = writeln!(out, "Battery:     {battery}{}", mark(t.battery_tone));
    let _ = writeln!(
        out,
        "GPS Lock:    {}{}",
        if t.gps_locked { "Yes" } else { "No" },
        mark(t.gps_tone)
    );
    let _ = writeln!(
        out,
        "Flight Mode: {}{}",
        t.flight_mode.as_deref().unwrap_or("—"),
        mark(t.flight_mode_tone)
    );

    if !view.mission.is_empty() {
        let _ = writeln!(out, "Mission:");
        for row in &view.mission {
            let suffix = if row.executing { " → Executing" } else { "" };
            let _ = writeln!(out, "  Waypoint {}: {}{suffix}", row.number, row.name);
        }
        if let Some(p) = view.progress {
            let filled = (p.fraction() * BAR_WIDTH as f64).round() as usize;
            let _ = writeln!(
                out,
                "  [{}{}] Progress: {} / {}",
                "#".repeat(filled),
                ".".repeat(BAR_WIDTH.saturating_sub(filled)),
                p.current,
                p.total
            );
        }
        if let Some(map) = &view.map {
            let _ = writeln!(
                out,
                "Map: centre {:.6}, {:.6}; {} point path",
                map.center.lat,
                map.center.lng,
                map.path.len()
            );
            for marker in &map.markers {
                let _ = writeln!(
                    out,
                    "  {:.6}, {:.6}  {}",
                    marker.position.lat,
                    marker.position.lng,
                    marker.label()
                );
            }
        }
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(json: serde_json::Value) -> Status {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn before_first_fetch() {
        assert_eq!(render_status(None), "No status fetched yet.");
    }

    #[test]
    fn failsafe_and_alerts() {
        let s = status(serde_json::json!({"battery": 4, "gps_locked": false, "flight_mode": "FAILSAFE"}));
        let out = render_status(Some(&s));
        assert!(out.starts_with("*** FAILSAFE"));
        assert!(out.contains("Battery:     4% (!!)"));
        assert!(out.contains("GPS Lock:    No (!)"));
        assert!(out.contains("Flight Mode: FAILSAFE (!!)"));
    }

    #[test]
    fn mission_with_progress_and_map() {
        let s = status(serde_json::json!({
            "battery": 80, "gps_locked": true, "flight_mode": "AUTO",
            "mission": [
                {"name": "WP1", "lat": 51.0447, "lng": -114.0719},
                {"name": "WP2", "lat": 51.0457, "lng": -114.0709}
            ],
            "current_wp_index": 1
        }));
        let out = render_status(Some(&s));
        assert!(!out.contains("FAILSAFE"));
        assert!(out.contains("Waypoint 2: WP2 → Executing"));
        assert!(out.contains("[####################] Progress: 2 / 2"));
        assert!(out.contains("2 point path"));
        assert!(out.contains("WP2 (Current)"));
    }

    #[test]
    fn no_map_without_coordinates() {
        let s = status(serde_json::json!({"mission": ["WP1", "WP2"], "current_wp_index": null}));
        let out = render_status(Some(&s));
        assert!(out.contains("Waypoint 1: WP1"));
        assert!(!out.contains("Map:"));
        assert!(!out.contains("Progress"));
    }

    #[test]
    fn notice_tags() {
        assert_eq!(notice_line(NoticeKind::Error, "arm failed"), "[error] arm failed");
        assert_eq!(notice_line(NoticeKind::Info, "Mission cleared"), "[info] Mission cleared");
    }
}
