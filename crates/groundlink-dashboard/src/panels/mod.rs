//! Dashboard panels.

pub mod action_log;
pub mod controls;
pub mod mission;
pub mod telemetry;
