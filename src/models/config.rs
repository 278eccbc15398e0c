use url::Url;

use crate::models::credentials::Credentials;

/// Production scan endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://app.risksignal.name.ng/api/scan";
/// Demo key used when the operator does not pass one.
pub const DEFAULT_API_KEY: &str = "sg_demo_0000000000000000";
/// Well-known public resolver, always resolvable by the service.
pub const DEFAULT_TARGET: &str = "8.8.8.8";

/// Everything one probe needs: where to send it, as whom, and for which IP.
#[derive(Clone, Debug)]
pub struct ProbeConfig {
    pub credentials: Credentials,
    pub target: String,
}

impl ProbeConfig {
    pub fn new(endpoint: &str, api_key: impl Into<String>, target: impl Into<String>) -> Result<Self, url::ParseError> {
        Ok(Self {
            credentials: Credentials::new(Url::parse(endpoint)?, api_key),
            target: target.into(),
        })
    }

    /// Default endpoint with an optional key and target, falling back to the built-in values.
    pub fn with_overrides(api_key: Option<String>, target: Option<String>) -> Self {
        Self {
            credentials: Credentials::new(default_endpoint(), api_key.unwrap_or_else(|| DEFAULT_API_KEY.to_owned())),
            target: target.unwrap_or_else(|| DEFAULT_TARGET.to_owned()),
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::with_overrides(None, None)
    }
}

fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).unwrap_or_else(|e| unreachable!("DEFAULT_ENDPOINT is a valid URL: {e}"))
}
