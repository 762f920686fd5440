//! Groundlink Dashboard — Leptos CSR WASM application.
//!
//! Browser operator console for the UAV simulator. Polls the vehicle
//! status every 5s and provides:
//! - Arm / takeoff / land commands
//! - Mission upload and clear
//! - Failure injection
//! - Telemetry, failsafe banner, mission progress and map
//! - Command log

pub mod api;
pub mod map;
pub mod panels;
pub mod state;
pub mod toast;

use groundlink_common::poller::start_polling;
use groundlink_common::view::StatusView;
use groundlink_common::{Announce, ClientConfig, GroundControl};
use leptos::prelude::*;

use api::HttpApi;
use panels::action_log::ActionLogPanel;
use panels::controls::{CommandBar, FailureInjection, MissionEditor};
use panels::mission::MissionPanel;
use panels::telemetry::{FailsafeBanner, StatusBox, TelemetryPanel};
use state::{IntervalScheduler, SignalSession};
use toast::{ToastStack, Toasts};

/// Ground control wired to the browser: gloo-net, toasts, signals.
pub type Station = GroundControl<HttpApi, Toasts, SignalSession>;

/// Defaults, with the API base URL overridable at build time through
/// `GROUNDLINK_API_URL`.
fn dashboard_config() -> ClientConfig {
    let config = ClientConfig::default();
    match option_env!("GROUNDLINK_API_URL") {
        Some(url) => config.clone().with_api_url(url).unwrap_or_else(|e| {
            log::warn!("ignoring GROUNDLINK_API_URL: {e}");
            config
        }),
        None => config,
    }
}

// ── App Root ────────────────────────────────────────────────────────

/// Leptos application root.
#[component]
pub fn App() -> impl IntoView {
    let config = dashboard_config();
    log::info!("vehicle API at {}", config.api_url);

    let session = SignalSession::new();
    let toasts = Toasts::new();
    let waypoint_input = RwSignal::new(String::new());
    let station: Station = GroundControl::new(HttpApi::new(config.api_url.clone()), toasts, session);
    provide_context(station.clone());

    // Initial load
    let initial = station.clone();
    leptos::task::spawn_local(async move {
        initial.refresh(Announce::Quiet).await;
    });

    // Periodic refresh, torn down with the view
    let poll_station = station.clone();
    let poll = start_polling(&IntervalScheduler, config.poll_interval, move || {
        let station = poll_station.clone();
        leptos::task::spawn_local(async move {
            station.refresh(Announce::Quiet).await;
        });
    });
    let poll = StoredValue::new_local(Some(poll));
    on_cleanup(move || {
        if let Some(handle) = poll.try_update_value(Option::take).flatten() {
            handle.cancel();
        }
    });

    let status = session.status;
    let view_model = Memo::new(move |_| status.with(|s| s.as_ref().map(StatusView::from_status)));

    view! {
        <div class="container">
            <h1 class="title">"UAV Ground Control"</h1>

            <CommandBar />
            <MissionEditor input=waypoint_input />
            <FailureInjection />

            <StatusBox status=status />
            <FailsafeBanner view_model=view_model />
            <TelemetryPanel view_model=view_model />
            <MissionPanel view_model=view_model />
            <ActionLogPanel log=session.log />
        </div>
        <ToastStack toasts=toasts />
    }
}

// ── WASM entry point ────────────────────────────────────────────────

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("Groundlink Dashboard starting");
    leptos::mount::mount_to_body(App);
}
