pub mod config;
pub mod credentials;
pub mod outcome;
pub mod runner;
pub mod scan_result;

pub use config::ProbeConfig;
pub use credentials::Credentials;
pub use outcome::ProbeOutcome;
pub use runner::SmokeTestRunner;
pub use scan_result::{Quota, ScanResult};
