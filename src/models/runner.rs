use std::io::{self, Write};

use tokio::runtime::{Builder, Runtime};
use tracing::warn;

use crate::clients::scan_api::ScanApiClient;
use crate::errors::ProbeError;
use crate::models::{config::ProbeConfig, outcome::ProbeOutcome};
use crate::report::{write_banner, write_outcome, write_status, write_transport_failure};

/// Runs one probe against the scanning API and reports it to a writer.
///
/// The runner owns a current-thread runtime so callers get a plain blocking
/// call: exactly one request is in flight and nothing else happens meanwhile.
pub struct SmokeTestRunner {
    runtime: Runtime,
    client: ScanApiClient,
    config: ProbeConfig,
}

impl SmokeTestRunner {
    pub fn new(config: ProbeConfig) -> io::Result<Self> {
        Self::with_client(config, ScanApiClient::new())
    }

    pub fn with_client(config: ProbeConfig, client: ScanApiClient) -> io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { runtime, client, config })
    }

    /// Prints the banner, sends the request and prints the interpreted result.
    ///
    /// Transport failures are reported to `out` and return `Ok(())`. Only a
    /// 200 response whose body is not JSON, or a failing writer, is an error.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<(), ProbeError> {
        self.runtime.block_on(probe(&self.client, &self.config, out))
    }
}

/// Async core of [`SmokeTestRunner::run`], usable from inside an existing runtime.
pub async fn probe<W: Write>(client: &ScanApiClient, config: &ProbeConfig, out: &mut W) -> Result<(), ProbeError> {
    write_banner(out, config)?;

    let raw = match client.scan(&config.credentials, &config.target).await {
        Ok(raw) => raw,
        Err(err) if err.is_transport() => {
            warn!(ip = config.target.as_str(), error = %err, "Scan request failed before a response");
            write_transport_failure(out, &err)?;
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    write_status(out, raw.status)?;
    let outcome = ProbeOutcome::from_response(raw.status, raw.body)?;
    write_outcome(out, &outcome)?;
    Ok(())
}
