//! Mission plan, progress bar and map.

use groundlink_common::view::{MapGeometry, MissionRow, Progress, StatusView};
use leptos::prelude::*;

use crate::map::{osm_link, polyline_points, Projection, MAP_HEIGHT, MAP_WIDTH};

/// Shown only while a mission is loaded.
#[component]
pub fn MissionPanel(view_model: Memo<Option<StatusView>>) -> impl IntoView {
    move || {
        view_model
            .get()
            .filter(|v| !v.mission.is_empty())
            .map(|v| {
                view! {
                    <div class="label">"Current Mission Plan"</div>
                    <ul>
                        {v.mission.into_iter().map(mission_row).collect::<Vec<_>>()}
                    </ul>
                    {v.progress.map(progress_bar)}
                    {v.map.map(|map| view! { <MissionMap map=map /> })}
                }
            })
    }
}

fn mission_row(row: MissionRow) -> impl IntoView {
    let cls = if row.executing { "wp-executing" } else { "" };
    view! {
        <li class={cls}>
            {format!("Waypoint {}: {}", row.number, row.name)}
            {row.executing.then_some(" → Executing")}
        </li>
    }
}

fn progress_bar(progress: Progress) -> impl IntoView {
    let width = format!("width: {:.1}%;", progress.percent());
    view! {
        <div style="margin-top: 1rem;">
            <div class="progress-track">
                <div class="progress-fill" style={width}></div>
            </div>
            <div class="progress-caption">
                {format!("Progress: {} / {}", progress.current, progress.total)}
            </div>
        </div>
    }
}

/// Read-only plot of the positioned waypoints.
#[component]
fn MissionMap(map: MapGeometry) -> impl IntoView {
    let projection = Projection::fit(&map, MAP_WIDTH, MAP_HEIGHT);
    let points = polyline_points(&map, &projection);
    let link = osm_link(map.center);
    let view_box = format!("0 0 {MAP_WIDTH} {MAP_HEIGHT}");

    let markers = map
        .markers
        .iter()
        .map(|marker| {
            let (x, y) = projection.project(marker.position);
            let cls = if marker.current {
                "map-marker map-marker-current"
            } else {
                "map-marker"
            };
            view! {
                <circle class={cls} cx=format!("{x:.1}") cy=format!("{y:.1}") r="7"></circle>
                <text class="map-label" x=format!("{:.1}", x + 10.0) y=format!("{:.1}", y - 10.0)>
                    {marker.label()}
                </text>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="label">"Mission Map"</div>
        <svg class="map" viewBox={view_box} preserveAspectRatio="xMidYMid meet">
            <polyline class="map-path" points={points}></polyline>
            {markers}
        </svg>
        <a class="map-link" href={link} target="_blank" rel="noopener">"Open in OpenStreetMap"</a>
    }
}
