//! Transport seam for the vehicle's HTTP API.
//!
//! The browser implements this with gloo-net, the console with reqwest.
//! Futures are not required to be `Send`: everything runs on a single
//! cooperative thread.

use thiserror::Error;

use crate::models::Status;
use crate::protocol::{Command, CommandReply};

/// Default base URL of the vehicle simulator API.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No response was received.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("HTTP {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Rejected { status: u16, message: Option<String> },
    /// A success response whose body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message to show the operator for a rejection, falling back to
    /// the HTTP status when the body had none.
    pub fn rejection_message(status: u16, message: Option<&str>) -> String {
        message
            .map(str::to_owned)
            .unwrap_or_else(|| format!("HTTP {status}"))
    }
}

#[allow(async_fn_in_trait)]
pub trait VehicleApi {
    /// `GET /status`.
    async fn fetch_status(&self) -> Result<Status, ApiError>;

    /// `POST` the command. `Ok` only for a success status.
    async fn send(&self, command: &Command) -> Result<CommandReply, ApiError>;
}

/// Join a base URL and an endpoint path without doubling the slash.
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_urls() {
        assert_eq!(endpoint_url("http://h/api", "/status"), "http://h/api/status");
        assert_eq!(endpoint_url("http://h/api/", "arm"), "http://h/api/arm");
        assert_eq!(endpoint_url("/api", "/mission"), "/api/mission");
    }

    #[test]
    fn rejection_display() {
        let with = ApiError::Rejected {
            status: 400,
            message: Some("Battery too low to arm".into()),
        };
        assert_eq!(with.to_string(), "HTTP 400: Battery too low to arm");
        let without = ApiError::Rejected {
            status: 503,
            message: None,
        };
        assert_eq!(without.to_string(), "HTTP 503");
        assert_eq!(ApiError::rejection_message(503, None), "HTTP 503");
    }
}
