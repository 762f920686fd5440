//! Shared client core for the Groundlink ground-control station.
//!
//! This crate contains:
//! - **Models** — the vehicle `Status` snapshot and its waypoints
//! - **Protocol** — command identifiers, request bodies and replies for the vehicle API
//! - **Mission editing** — free-text waypoint parsing
//! - **Action log** — the operator-facing, newest-first event record
//! - **View model** — pure derivations over the latest status (telemetry, progress, map)
//! - **Polling** — the periodic status fetch and its cancellation handle
//! - **Ground control** — the command-issue/refresh protocol tying it all together
//!
//! HTTP transport, timers, notifications and state storage are injected
//! through traits so the same core runs in the browser and in a terminal.

pub mod api;
pub mod config;
pub mod control;
pub mod log;
pub mod mission;
pub mod models;
pub mod poller;
pub mod protocol;
pub mod session;
pub mod view;

pub use api::{ApiError, VehicleApi};
pub use config::ClientConfig;
pub use control::{Announce, DispatchOutcome, DispatchReport, GroundControl};
pub use log::{ActionLog, LogEntry};
pub use models::{Status, Waypoint};
pub use protocol::{Command, CommandReply, FailureMode};
pub use session::{MemorySession, NoticeKind, Notifier, Session};
