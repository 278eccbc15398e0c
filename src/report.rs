//! Operator-facing console output.
//!
//! Every line the probe prints goes through here so the exact wording can be
//! checked against any `Write`, not only stdout.

use std::io::{self, Write};

use reqwest::StatusCode;

use crate::errors::ProbeError;
use crate::models::{config::ProbeConfig, outcome::ProbeOutcome};

pub fn write_banner<W: Write>(out: &mut W, config: &ProbeConfig) -> io::Result<()> {
    writeln!(out, "\n--- Signal Guard API Test ---")?;
    writeln!(out, "Target IP: {}", config.target)?;
    writeln!(out, "API Key  : {}", config.credentials.redacted_key())?;
    writeln!(out, "{}", "-".repeat(30))
}

pub fn write_status<W: Write>(out: &mut W, status: StatusCode) -> io::Result<()> {
    writeln!(out, "Status Code: {}", status.as_u16())
}

pub fn write_outcome<W: Write>(out: &mut W, outcome: &ProbeOutcome) -> io::Result<()> {
    match outcome {
        ProbeOutcome::Success { result, quota } => {
            writeln!(out, "\n[SUCCESS] Response Data:")?;
            writeln!(out, "{}", result.to_pretty())?;
            writeln!(out, "\nQuota Remaining: {quota}")
        }
        ProbeOutcome::Unauthorized => writeln!(out, "\n[ERROR] Unauthorized: Invalid API Key"),
        ProbeOutcome::QuotaExhausted => {
            writeln!(out, "\n[ERROR] Quota Exhausted: You have reached your 500-check limit")
        }
        ProbeOutcome::Failed { body, .. } => writeln!(out, "\n[ERROR] Request failed: {body}"),
    }
}

pub fn write_transport_failure<W: Write>(out: &mut W, err: &ProbeError) -> io::Result<()> {
    writeln!(out, "\n[CRITICAL] Could not connect to API: {err}")?;
    writeln!(out, "Tip: Make sure your local dev server is running (vercel dev)")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::scan_result::ScanResult;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn banner_shows_target_and_redacted_key() {
        let config = ProbeConfig::new("http://localhost:3000/api/scan", "abcd1234efgh5678", "1.2.3.4").unwrap();
        let text = render(|out| write_banner(out, &config));
        assert_eq!(
            text,
            "\n--- Signal Guard API Test ---\nTarget IP: 1.2.3.4\nAPI Key  : abcd...5678\n------------------------------\n"
        );
        assert!(!text.contains("1234efgh"));
    }

    #[test]
    fn success_prints_body_and_quota() {
        let result = ScanResult(json!({"quota": {"remaining": 450, "limit": 500}, "other": "x"}));
        let quota = result.quota();
        let text = render(|out| write_outcome(out, &ProbeOutcome::Success { result, quota }));
        assert!(text.contains("[SUCCESS] Response Data:"));
        assert!(text.contains("  \"other\": \"x\""));
        assert!(text.ends_with("\nQuota Remaining: 450/500\n"));
    }

    #[test]
    fn quota_exhausted_mentions_limit() {
        let text = render(|out| write_outcome(out, &ProbeOutcome::QuotaExhausted));
        assert!(text.contains("Quota Exhausted"));
        assert!(text.contains("500"));
    }

    #[test]
    fn failure_echoes_raw_body() {
        let outcome = ProbeOutcome::Failed {
            status: StatusCode::BAD_REQUEST,
            body: r#"{"error": "Missing parameters"}"#.to_owned(),
        };
        let text = render(|out| write_outcome(out, &outcome));
        assert_eq!(text, "\n[ERROR] Request failed: {\"error\": \"Missing parameters\"}\n");
    }

    #[test]
    fn status_line_is_numeric() {
        let text = render(|out| write_status(out, StatusCode::TOO_MANY_REQUESTS));
        assert_eq!(text, "Status Code: 429\n");
    }
}
