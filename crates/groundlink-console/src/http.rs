//! reqwest-backed vehicle API client.

use std::time::Duration;

use groundlink_common::api::endpoint_url;
use groundlink_common::{ApiError, Command, CommandReply, Status, VehicleApi};
use reqwest::{Client, Response};

/// Per-request timeout; a timed-out request counts as unreachable.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    client: Client,
    base_url: String,
}

impl ReqwestApi {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }
}

async fn rejection(resp: Response) -> ApiError {
    let status = resp.status().as_u16();
    let message = resp
        .json::<CommandReply>()
        .await
        .ok()
        .and_then(|r| r.message);
    ApiError::Rejected { status, message }
}

fn transport(e: reqwest::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

impl VehicleApi for ReqwestApi {
    async fn fetch_status(&self) -> Result<Status, ApiError> {
        let resp = self
            .client
            .get(endpoint_url(&self.base_url, "/status"))
            .send()
            .await
            .map_err(transport)?;

        if resp.status().is_success() {
            resp.json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            Err(rejection(resp).await)
        }
    }

    async fn send(&self, command: &Command) -> Result<CommandReply, ApiError> {
        let mut request = self
            .client
            .post(endpoint_url(&self.base_url, &command.path()));
        if let Some(body) = command.payload() {
            request = request.json(&body);
        }
        let resp = request.send().await.map_err(transport)?;

        if resp.status().is_success() {
            Ok(resp.json().await.unwrap_or_default())
        } else {
            Err(rejection(resp).await)
        }
    }
}
