//! Operator inputs: command buttons, mission editor, failure injection.

use groundlink_common::{Announce, Command, FailureMode};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::Station;

/// Fire-and-forget: the report is already surfaced through toasts and
/// the action log.
fn spawn_command(station: &Station, command: Command) {
    let station = station.clone();
    leptos::task::spawn_local(async move {
        station.execute(command).await;
    });
}

/// Arm / Takeoff / Land / Get Status.
#[component]
pub fn CommandBar() -> impl IntoView {
    let station = expect_context::<Station>();
    let refresh_station = station.clone();

    let button = move |label: &'static str, command: fn() -> Command| {
        let station = station.clone();
        view! {
            <button class="btn" on:click=move |_| spawn_command(&station, command())>
                {label}
            </button>
        }
    };

    let get_status = move |_| {
        let station = refresh_station.clone();
        leptos::task::spawn_local(async move {
            station.refresh(Announce::Success).await;
        });
    };

    view! {
        <div class="button-group">
            {button("Arm", || Command::Arm)}
            {button("Takeoff", || Command::Takeoff)}
            {button("Land", || Command::Land)}
            <button class="btn" on:click=get_status>"Get Status"</button>
            {button("Reset Vehicle", || Command::Reset)}
        </div>
    }
}

/// Waypoint text input with Upload and Clear Mission.
///
/// The input is left as typed after an upload; only the operator clears it.
#[component]
pub fn MissionEditor(input: RwSignal<String>) -> impl IntoView {
    let station = expect_context::<Station>();

    let upload_station = station.clone();
    let upload = move |_| {
        let station = upload_station.clone();
        let raw = input.get_untracked();
        leptos::task::spawn_local(async move {
            station.submit_mission(&raw).await;
        });
    };

    let clear = move |_| spawn_command(&station, Command::ClearMission);

    view! {
        <div class="label">"Upload Mission"</div>
        <div class="input-group">
            <input
                class="input"
                type="text"
                placeholder="Enter waypoints (e.g. WP1, WP2)"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            />
            <button class="btn" on:click=upload>"Upload"</button>
            <button class="btn btn-danger" on:click=clear>"Clear Mission"</button>
        </div>
    }
}

/// Dropdown that injects the chosen fault and snaps back to the prompt.
#[component]
pub fn FailureInjection() -> impl IntoView {
    let station = expect_context::<Station>();

    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        match value.parse::<FailureMode>() {
            Ok(mode) => spawn_command(&station, Command::InjectFailure(mode)),
            Err(e) => log::warn!("{e}"),
        }
        if let Some(select) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
        {
            select.set_value("");
        }
    };

    view! {
        <div class="label">"Failure Injection"</div>
        <select on:change=on_change>
            <option value="" disabled=true selected=true>"Choose a failure mode"</option>
            {FailureMode::ALL.into_iter().map(|mode| view! {
                <option value=mode.as_str()>{mode.label()}</option>
            }).collect::<Vec<_>>()}
        </select>
    }
}
