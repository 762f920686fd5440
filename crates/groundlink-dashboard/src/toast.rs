//! Toast notifications.

use std::sync::atomic::{AtomicU64, Ordering};

use gloo_timers::callback::Timeout;
use groundlink_common::{NoticeKind, Notifier};
use leptos::prelude::*;

/// How long a toast stays on screen.
const TOAST_MS: u32 = 3_000;

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Stack of live toasts; each one dismisses itself after [`TOAST_MS`].
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
        }
    }

    pub fn dismiss(&self, id: u64) {
        let _ = self.items.try_update(|items| items.retain(|t| t.id != id));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toasts {
    fn notify(&self, kind: NoticeKind, text: &str) {
        let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
        match kind {
            NoticeKind::Error => log::warn!("{text}"),
            _ => log::info!("{text}"),
        }
        let _ = self.items.try_update(|items| {
            items.push(Toast {
                id,
                kind,
                text: text.to_string(),
            })
        });
        let toasts = *self;
        Timeout::new(TOAST_MS, move || toasts.dismiss(id)).forget();
    }
}

fn icon(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "✅",
        NoticeKind::Info => "ℹ️",
        NoticeKind::Error => "❌",
    }
}

/// Top-right toast container.
#[component]
pub fn ToastStack(toasts: Toasts) -> impl IntoView {
    view! {
        <div class="toast-stack">
            {move || toasts.items.get().into_iter().map(|toast| {
                let cls = match toast.kind {
                    NoticeKind::Success => "toast toast-success",
                    NoticeKind::Info => "toast toast-info",
                    NoticeKind::Error => "toast toast-error",
                };
                let id = toast.id;
                view! {
                    <div class={cls} on:click=move |_| toasts.dismiss(id)>
                        {icon(toast.kind)} " " {toast.text}
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
