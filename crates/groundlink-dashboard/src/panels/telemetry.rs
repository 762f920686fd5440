//! Raw status, failsafe banner and telemetry readout.

use groundlink_common::view::{StatusView, Tone};
use groundlink_common::Status;
use leptos::prelude::*;

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Normal => "",
        Tone::Warning => "tone-warning",
        Tone::Alert => "tone-alert",
    }
}

/// Pretty-printed latest snapshot.
#[component]
pub fn StatusBox(status: RwSignal<Option<Status>>) -> impl IntoView {
    view! {
        <div class="label">"Drone Status"</div>
        <div class="status-box">
            {move || status.with(|s| match s {
                Some(s) => s.to_pretty_json(),
                None => "No status fetched yet.".to_string(),
            })}
        </div>
    }
}

#[component]
pub fn FailsafeBanner(view_model: Memo<Option<StatusView>>) -> impl IntoView {
    move || {
        view_model
            .with(|v| v.as_ref().is_some_and(|v| v.failsafe))
            .then(|| view! {
                <div class="failsafe">"🚨 FAILSAFE MODE ACTIVE — Drone auto-landing"</div>
            })
    }
}

#[component]
pub fn TelemetryPanel(view_model: Memo<Option<StatusView>>) -> impl IntoView {
    move || {
        view_model.get().map(|v| {
            let t = v.telemetry;
            let battery = t
                .battery
                .map(|b| format!("{b}%"))
                .unwrap_or_else(|| "—".into());
            let mode = t.flight_mode.unwrap_or_else(|| "—".into());
            view! {
                <div class="label">"Telemetry"</div>
                <ul>
                    <li>
                        <strong>"Battery:"</strong> " "
                        <span class={tone_class(t.battery_tone)}>{battery}</span>
                    </li>
                    <li>
                        <strong>"GPS Lock:"</strong> " "
                        <span class={tone_class(t.gps_tone)}>
                            {if t.gps_locked { "Yes" } else { "No" }}
                        </span>
                    </li>
                    <li>
                        <strong>"Flight Mode:"</strong> " "
                        <span class={tone_class(t.flight_mode_tone)}>{mode}</span>
                    </li>
                </ul>
            }
        })
    }
}
