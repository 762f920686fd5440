//! Command log, newest first.

use groundlink_common::ActionLog;
use leptos::prelude::*;

#[component]
pub fn ActionLogPanel(log: RwSignal<ActionLog>) -> impl IntoView {
    move || {
        let lines = log.with(ActionLog::lines);
        (!lines.is_empty()).then(|| view! {
            <div class="label">"Command Log"</div>
            <ul>
                {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect::<Vec<_>>()}
            </ul>
        })
    }
}
