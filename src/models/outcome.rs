use reqwest::StatusCode;

use crate::errors::ProbeError;
use crate::models::scan_result::{Quota, ScanResult};

/// What the service said, decided purely by status code.
#[derive(Clone, Debug, PartialEq)]
pub enum ProbeOutcome {
    Success { result: ScanResult, quota: Quota },
    Unauthorized,
    QuotaExhausted,
    Failed { status: StatusCode, body: String },
}

impl ProbeOutcome {
    /// Only a 200 body is parsed; a non-JSON 200 body is an error.
    pub fn from_response(status: StatusCode, body: String) -> Result<Self, ProbeError> {
        match status {
            StatusCode::OK => {
                let result = ScanResult::parse(&body)?;
                let quota = result.quota();
                Ok(ProbeOutcome::Success { result, quota })
            }
            StatusCode::UNAUTHORIZED => Ok(ProbeOutcome::Unauthorized),
            StatusCode::TOO_MANY_REQUESTS => Ok(ProbeOutcome::QuotaExhausted),
            status => Ok(ProbeOutcome::Failed { status, body }),
        }
    }
}
