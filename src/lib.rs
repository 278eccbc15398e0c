//! Smoke test client for the Signal Guard scanning API.
//!
//! Sends a single `GET <endpoint>?ip=<target>` authenticated with an
//! `x-api-key` header and prints a human-readable report of the response.
//!
//! Example:
//!
//! ```no_run
//! use signal_probe::{ProbeConfig, SmokeTestRunner};
//!
//! let config = ProbeConfig::new("http://localhost:3000/api/scan", "your-api-key", "8.8.8.8")?;
//! let runner = SmokeTestRunner::new(config)?;
//! runner.run(&mut std::io::stdout())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod cli;
pub mod clients;
pub mod errors;
pub mod models;
pub mod report;
pub mod utils;

pub use clients::ScanApiClient;
pub use errors::ProbeError;
pub use models::{Credentials, ProbeConfig, ProbeOutcome, Quota, ScanResult, SmokeTestRunner};
pub use utils::init_tracing;
