use reqwest::{
    Client, StatusCode,
    header::{CONTENT_TYPE, HeaderValue},
};
use tracing::{debug, info};

use crate::errors::ProbeError;
use crate::models::credentials::Credentials;

/// Status and body text of a scan response, before any interpretation.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Thin wrapper over a reqwest client for the scan endpoint.
///
/// No timeout is configured: a request waits as long as the network stack does.
#[derive(Clone, Debug, Default)]
pub struct ScanApiClient {
    client: Client,
}

impl ScanApiClient {
    pub fn new() -> Self {
        Self { client: Client::new() }
    }

    /// Uses a preconfigured reqwest client, e.g. one with proxies disabled.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Sends one `GET <endpoint>?ip=<target>` and reads the body as text.
    pub async fn scan(&self, creds: &Credentials, target: &str) -> Result<RawResponse, ProbeError> {
        let auth_header_value = creds.header_value()?;

        info!(
            endpoint = creds.endpoint.as_str(),
            ip = target,
            api_key = creds.redacted_key().as_str(),
            "Sending scan request"
        );

        let response = self
            .client
            .get(creds.endpoint.clone())
            .header("x-api-key", auth_header_value)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .query(&[("ip", target)])
            .send()
            .await?;

        let status = response.status();
        info!(ip = target, status_code = status.as_u16(), "Scan response received");

        let body = response.text().await?;
        debug!(ip = target, body_len = body.len(), "Scan response body read");

        Ok(RawResponse { status, body })
    }
}
