use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::errors::ProbeError;

/// Represents authentication credentials for the scanning API.
///
/// # Fields
///
/// * `api_key` - A secret string containing the API key sent as `x-api-key`.
///   It is never printed; use [`Credentials::redacted_key`] for display.
/// * `endpoint` - The scan endpoint URL the key is valid for.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub api_key: SecretString,
    pub endpoint: Url,
}

impl Credentials {
    pub fn new(endpoint: Url, api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            endpoint,
        }
    }

    /// First four and last four characters of the key with the middle elided.
    pub fn redacted_key(&self) -> String {
        redact(self.api_key.expose_secret())
    }

    /// Header value for `x-api-key`, flagged sensitive so it stays out of debug output.
    pub fn header_value(&self) -> Result<HeaderValue, ProbeError> {
        let mut api_key_val = HeaderValue::from_str(self.api_key.expose_secret())?;
        api_key_val.set_sensitive(true);
        Ok(api_key_val)
    }
}

// Short keys overlap rather than panic, matching plain prefix/suffix slicing.
fn redact(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let head: String = chars.iter().take(4).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{head}...{tail}")
}
