//! HTTP client for the vehicle simulator API.
//!
//! Unauthenticated JSON over HTTP; the base URL comes from the client
//! config (`http://localhost:5000/api` unless overridden at build time).

use gloo_net::http::{Request, Response};
use groundlink_common::api::endpoint_url;
use groundlink_common::{ApiError, Command, CommandReply, Status, VehicleApi};

#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// Turn a non-2xx response into a rejection, keeping the body's
/// `message` when there is one.
async fn rejection(resp: Response) -> ApiError {
    let status = resp.status();
    let message = resp
        .json::<CommandReply>()
        .await
        .ok()
        .and_then(|r| r.message);
    ApiError::Rejected { status, message }
}

fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

impl VehicleApi for HttpApi {
    async fn fetch_status(&self) -> Result<Status, ApiError> {
        let resp = Request::get(&endpoint_url(&self.base_url, "/status"))
            .send()
            .await
            .map_err(transport)?;

        if resp.ok() {
            resp.json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            Err(rejection(resp).await)
        }
    }

    async fn send(&self, command: &Command) -> Result<CommandReply, ApiError> {
        let url = endpoint_url(&self.base_url, &command.path());
        let builder = Request::post(&url);
        let request = match command.payload() {
            Some(body) => builder.json(&body).map_err(transport)?,
            None => builder.build().map_err(transport)?,
        };
        let resp = request.send().await.map_err(transport)?;

        if resp.ok() {
            // A success without a readable body still counts as success.
            Ok(resp.json().await.unwrap_or_default())
        } else {
            Err(rejection(resp).await)
        }
    }
}
