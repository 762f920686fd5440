//! Commands accepted by the vehicle API and their wire bodies.
//!
//! Every command is a single `POST {base}/{path}`; the reply body is
//! `{"message": "..."}` on success and on rejection alike.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::mission::MissionPlan;

// ── Commands ────────────────────────────────────────────────────────

/// A one-shot operator command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Arm,
    Takeoff,
    Land,
    /// Restore the vehicle to its default state.
    Reset,
    UploadMission(MissionPlan),
    ClearMission,
    InjectFailure(FailureMode),
}

impl Command {
    /// Endpoint name, also used as the command identifier in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Arm => "arm",
            Command::Takeoff => "takeoff",
            Command::Land => "land",
            Command::Reset => "reset",
            Command::UploadMission(_) => "mission",
            Command::ClearMission => "clear_mission",
            Command::InjectFailure(_) => "inject_failure",
        }
    }

    /// Path relative to the API base URL.
    pub fn path(&self) -> String {
        format!("/{}", self.name())
    }

    /// JSON request body, if the command carries one.
    pub fn payload(&self) -> Option<CommandPayload> {
        match self {
            Command::UploadMission(plan) => Some(CommandPayload::Mission(MissionUpload {
                waypoints: plan.waypoints().to_vec(),
            })),
            Command::InjectFailure(mode) => {
                Some(CommandPayload::Failure(FailureInjection { mode: *mode }))
            }
            _ => None,
        }
    }
}

/// Request bodies, serialized without an enum tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandPayload {
    Mission(MissionUpload),
    Failure(FailureInjection),
}

/// Body of `POST /mission`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionUpload {
    pub waypoints: Vec<String>,
}

/// Body of `POST /inject_failure`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureInjection {
    pub mode: FailureMode,
}

// ── Failure injection ───────────────────────────────────────────────

/// Fault the simulator should inject. `Reset` clears injected faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureMode {
    GpsLoss,
    LowBattery,
    MotorFail,
    Reset,
}

impl FailureMode {
    pub const ALL: [FailureMode; 4] = [
        FailureMode::GpsLoss,
        FailureMode::LowBattery,
        FailureMode::MotorFail,
        FailureMode::Reset,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FailureMode::GpsLoss => "gps_loss",
            FailureMode::LowBattery => "low_battery",
            FailureMode::MotorFail => "motor_fail",
            FailureMode::Reset => "reset",
        }
    }

    /// Operator-facing label.
    pub fn label(self) -> &'static str {
        match self {
            FailureMode::GpsLoss => "Simulate GPS Loss",
            FailureMode::LowBattery => "Simulate Low Battery",
            FailureMode::MotorFail => "Simulate Motor Failure",
            FailureMode::Reset => "Reset System",
        }
    }
}

impl fmt::Display for FailureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailureMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FailureMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s.trim())
            .ok_or_else(|| format!("unknown failure mode: {s}"))
    }
}

// ── Replies ─────────────────────────────────────────────────────────

/// Reply body of every command endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CommandReply {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_match_endpoints() {
        assert_eq!(Command::Arm.path(), "/arm");
        assert_eq!(Command::ClearMission.path(), "/clear_mission");
        assert_eq!(Command::InjectFailure(FailureMode::GpsLoss).path(), "/inject_failure");
        assert_eq!(Command::Reset.path(), "/reset");
    }

    #[test]
    fn plain_commands_have_no_body() {
        for cmd in [Command::Arm, Command::Takeoff, Command::Land, Command::ClearMission] {
            assert!(cmd.payload().is_none(), "{} should not carry a body", cmd.name());
        }
    }

    #[test]
    fn mission_body_shape() {
        let plan = MissionPlan::parse("WP1, WP2").unwrap();
        let body = serde_json::to_value(Command::UploadMission(plan).payload()).unwrap();
        assert_eq!(body, serde_json::json!({"waypoints": ["WP1", "WP2"]}));
    }

    #[test]
    fn failure_body_shape() {
        let body =
            serde_json::to_value(Command::InjectFailure(FailureMode::LowBattery).payload()).unwrap();
        assert_eq!(body, serde_json::json!({"mode": "low_battery"}));
    }

    #[test]
    fn failure_mode_from_str() {
        assert_eq!("motor_fail".parse::<FailureMode>(), Ok(FailureMode::MotorFail));
        assert_eq!(" reset ".parse::<FailureMode>(), Ok(FailureMode::Reset));
        assert!("engine_fire".parse::<FailureMode>().is_err());
    }

    #[test]
    fn reply_without_message() {
        let reply: CommandReply = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert_eq!(reply.message, None);
    }
}
