//! Command-issue/refresh protocol.
//!
//! [`GroundControl`] owns the injected API, notifier and session. Every
//! failure is handled here: each attempt produces exactly one operator
//! notification and one action-log entry, and nothing propagates.
//!
//! Refresh rules after a command:
//! - plain commands and mission upload refresh only when accepted
//! - clear mission refreshes whenever the server answered
//! - failure injection always refreshes, even when unreachable

use crate::api::{ApiError, VehicleApi};
use crate::mission::MissionPlan;
use crate::protocol::{Command, CommandReply, FailureMode};
use crate::session::{NoticeKind, Notifier, Session};

/// Whether a status fetch should confirm success to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Announce {
    /// Periodic tick or follow-up refresh.
    Quiet,
    /// Operator asked for it.
    Success,
}

/// How a single attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Accepted { message: String },
    Rejected { message: String },
    /// No response was received.
    Unreachable,
    /// Rejected locally; no request was made.
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    pub outcome: DispatchOutcome,
    /// Whether a status fetch followed the command.
    pub refreshed: bool,
}

/// Coordinates polling and commands over one session.
pub struct GroundControl<A, N, S> {
    api: A,
    notifier: N,
    session: S,
}

impl<A: Clone, N: Clone, S: Clone> Clone for GroundControl<A, N, S> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            notifier: self.notifier.clone(),
            session: self.session.clone(),
        }
    }
}

impl<A, N, S> GroundControl<A, N, S>
where
    A: VehicleApi,
    N: Notifier,
    S: Session,
{
    pub fn new(api: A, notifier: N, session: S) -> Self {
        Self {
            api,
            notifier,
            session,
        }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    // ── Status poller ───────────────────────────────────────────────

    /// Fetch the status once. On failure the previous status is kept.
    pub async fn refresh(&self, announce: Announce) -> bool {
        match self.api.fetch_status().await {
            Ok(status) => {
                tracing::debug!(
                    flight_mode = status.flight_mode.as_deref().unwrap_or("-"),
                    "status fetched"
                );
                self.session.replace_status(status);
                if announce == Announce::Success {
                    self.notifier.notify(NoticeKind::Success, "Status fetched");
                }
                self.session.record("Fetched status");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "status fetch failed");
                self.notifier
                    .notify(NoticeKind::Error, "Failed to fetch status");
                self.session.record("Failed to fetch status");
                false
            }
        }
    }

    // ── Command dispatcher ──────────────────────────────────────────

    /// Issue any command, routed to its specific handling.
    pub async fn execute(&self, command: Command) -> DispatchReport {
        match command {
            Command::UploadMission(plan) => self.upload_mission(plan).await,
            Command::ClearMission => self.clear_mission().await,
            Command::InjectFailure(mode) => self.inject_failure(mode).await,
            other => self.send_plain(&other).await,
        }
    }

    async fn send_plain(&self, command: &Command) -> DispatchReport {
        let name = command.name();
        match self.send(command).await {
            Ok(reply) => {
                let notice = reply
                    .message
                    .clone()
                    .unwrap_or_else(|| format!("{name} succeeded"));
                let entry = reply
                    .message
                    .unwrap_or_else(|| format!("{name} sent"));
                self.notifier.notify(NoticeKind::Success, &notice);
                self.session.record(&entry);
                self.refresh(Announce::Quiet).await;
                DispatchReport {
                    outcome: DispatchOutcome::Accepted { message: notice },
                    refreshed: true,
                }
            }
            Err(ApiError::Rejected { status, message }) => {
                let message = ApiError::rejection_message(status, message.as_deref());
                self.notifier.notify(NoticeKind::Error, &message);
                self.session.record(&format!("{name} failed: {message}"));
                DispatchReport {
                    outcome: DispatchOutcome::Rejected { message },
                    refreshed: false,
                }
            }
            Err(_) => {
                let message = format!("{name} failed");
                self.notifier.notify(NoticeKind::Error, &message);
                self.session.record(&message);
                DispatchReport {
                    outcome: DispatchOutcome::Unreachable,
                    refreshed: false,
                }
            }
        }
    }

    // ── Mission editor ──────────────────────────────────────────────

    /// Parse operator text and upload it. Empty input is rejected
    /// locally without touching the network.
    pub async fn submit_mission(&self, raw: &str) -> DispatchReport {
        match MissionPlan::parse(raw) {
            Ok(plan) => self.upload_mission(plan).await,
            Err(e) => {
                tracing::debug!("mission input rejected: {e}");
                self.notifier.notify(NoticeKind::Error, &e.to_string());
                self.session.record("Mission upload failed (empty input)");
                DispatchReport {
                    outcome: DispatchOutcome::Invalid,
                    refreshed: false,
                }
            }
        }
    }

    pub async fn upload_mission(&self, plan: MissionPlan) -> DispatchReport {
        let count = plan.waypoints().len();
        match self.send(&Command::UploadMission(plan)).await {
            Ok(reply) => {
                let message = reply
                    .message
                    .unwrap_or_else(|| "Mission uploaded".into());
                tracing::info!(waypoints = count, "mission uploaded");
                self.notifier.notify(NoticeKind::Success, &message);
                self.session.record("Uploaded mission");
                self.refresh(Announce::Quiet).await;
                DispatchReport {
                    outcome: DispatchOutcome::Accepted { message },
                    refreshed: true,
                }
            }
            Err(ApiError::Rejected { status, message }) => {
                let message = ApiError::rejection_message(status, message.as_deref());
                self.notifier.notify(NoticeKind::Error, &message);
                self.session
                    .record(&format!("Mission upload failed: {message}"));
                DispatchReport {
                    outcome: DispatchOutcome::Rejected { message },
                    refreshed: false,
                }
            }
            Err(_) => {
                self.notifier
                    .notify(NoticeKind::Error, "Mission upload failed");
                self.session.record("Mission upload failed");
                DispatchReport {
                    outcome: DispatchOutcome::Unreachable,
                    refreshed: false,
                }
            }
        }
    }

    /// Zero-payload clear. Any server answer, even a rejection, is shown
    /// as information and followed by a refresh.
    pub async fn clear_mission(&self) -> DispatchReport {
        let answer = match self.send(&Command::ClearMission).await {
            Ok(reply) => Ok(reply.message),
            Err(ApiError::Rejected { message, .. }) => Err(message),
            Err(_) => {
                self.notifier
                    .notify(NoticeKind::Error, "Failed to clear mission");
                self.session.record("Clear mission failed");
                return DispatchReport {
                    outcome: DispatchOutcome::Unreachable,
                    refreshed: false,
                };
            }
        };

        let outcome = match answer {
            Ok(message) => DispatchOutcome::Accepted {
                message: message.unwrap_or_else(|| "Mission cleared".into()),
            },
            Err(message) => DispatchOutcome::Rejected {
                message: message.unwrap_or_else(|| "Mission cleared".into()),
            },
        };
        if let DispatchOutcome::Accepted { message } | DispatchOutcome::Rejected { message } =
            &outcome
        {
            self.notifier.notify(NoticeKind::Info, message);
        }
        self.session.record("Cleared mission");
        self.refresh(Announce::Quiet).await;
        DispatchReport {
            outcome,
            refreshed: true,
        }
    }

    /// Inject (or with [`FailureMode::Reset`], clear) a simulated fault.
    /// Always refreshes afterwards, whatever the outcome.
    pub async fn inject_failure(&self, mode: FailureMode) -> DispatchReport {
        let outcome = match self.send(&Command::InjectFailure(mode)).await {
            Ok(reply) => {
                let message = reply
                    .message
                    .unwrap_or_else(|| format!("Injected failure mode: {mode}"));
                self.notifier.notify(NoticeKind::Info, &message);
                self.session
                    .record(&format!("Injected failure mode: {mode}"));
                DispatchOutcome::Accepted { message }
            }
            Err(ApiError::Rejected { status, message }) => {
                let message = ApiError::rejection_message(status, message.as_deref());
                self.notifier.notify(NoticeKind::Error, &message);
                self.session
                    .record(&format!("Failure injection failed: {message}"));
                DispatchOutcome::Rejected { message }
            }
            Err(_) => {
                self.notifier
                    .notify(NoticeKind::Error, "Failed to inject failure");
                self.session.record("Failure injection error");
                DispatchOutcome::Unreachable
            }
        };

        self.refresh(Announce::Quiet).await;
        DispatchReport {
            outcome,
            refreshed: true,
        }
    }

    async fn send(&self, command: &Command) -> Result<CommandReply, ApiError> {
        tracing::debug!(command = command.name(), "dispatching command");
        let result = self.api.send(command).await;
        if let Err(e) = &result {
            tracing::warn!(command = command.name(), error = %e, "command failed");
        }
        result
    }
}
