use clap::Parser;

use crate::models::config::ProbeConfig;

/// Smoke test for the Signal Guard scanning API: one request, one report.
#[derive(Parser, Debug)]
#[command(name = "signal-probe", version, long_about = None)]
pub struct Cli {
    /// API key sent as `x-api-key` (defaults to the built-in demo key)
    pub api_key: Option<String>,

    /// IP address to scan (defaults to 8.8.8.8)
    pub target: Option<String>,
}

impl Cli {
    pub fn into_config(self) -> ProbeConfig {
        ProbeConfig::with_overrides(self.api_key, self.target)
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;
    use crate::models::config::{DEFAULT_API_KEY, DEFAULT_ENDPOINT};

    #[test]
    fn no_arguments_use_defaults() {
        let config = Cli::try_parse_from(["signal-probe"]).unwrap().into_config();
        assert_eq!(config.credentials.api_key.expose_secret(), DEFAULT_API_KEY);
        assert_eq!(config.target, "8.8.8.8");
        assert_eq!(config.credentials.endpoint.as_str(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn both_arguments_replace_defaults() {
        let config = Cli::try_parse_from(["signal-probe", "live-key-abcdef", "1.1.1.1"])
            .unwrap()
            .into_config();
        assert_eq!(config.credentials.api_key.expose_secret(), "live-key-abcdef");
        assert_eq!(config.target, "1.1.1.1");
    }

    #[test]
    fn key_alone_keeps_default_target() {
        let config = Cli::try_parse_from(["signal-probe", "live-key-abcdef"]).unwrap().into_config();
        assert_eq!(config.credentials.api_key.expose_secret(), "live-key-abcdef");
        assert_eq!(config.target, "8.8.8.8");
    }

    #[test]
    fn extra_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["signal-probe", "k", "1.1.1.1", "extra"]).is_err());
    }
}
