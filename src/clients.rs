pub mod scan_api;

pub use scan_api::{RawResponse, ScanApiClient};
