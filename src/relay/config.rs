//! Relay configuration parsed from environment variables.

use super::types::RelayError;

pub const DEFAULT_EMAILJS_BASE_URL: &str = "https://api.emailjs.com";
pub const DEFAULT_RELAY_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_RELAY_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub client_key: String,
    pub base_url: String,
    pub timeouts: RelayTimeouts,
}

impl RelayConfig {
    /// Build typed relay config from environment variables.
    ///
    /// Required:
    /// - `EMAILJS_SERVICE_ID`
    /// - `EMAILJS_TEMPLATE_ID`
    /// - `EMAILJS_PUBLIC_KEY`
    ///
    /// Optional:
    /// - `EMAILJS_BASE_URL`: default `https://api.emailjs.com`
    /// - `EMAILJS_REQUEST_TIMEOUT_SECS`: default 15
    /// - `EMAILJS_CONNECT_TIMEOUT_SECS`: default 5
    pub fn from_env() -> Result<Self, RelayError> {
        let service_id = required("EMAILJS_SERVICE_ID")?;
        let template_id = required("EMAILJS_TEMPLATE_ID")?;
        let client_key = required("EMAILJS_PUBLIC_KEY")?;
        let base_url = std::env::var("EMAILJS_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_EMAILJS_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = RelayTimeouts {
            request_secs: env_parse_u64("EMAILJS_REQUEST_TIMEOUT_SECS", DEFAULT_RELAY_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("EMAILJS_CONNECT_TIMEOUT_SECS", DEFAULT_RELAY_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { service_id, template_id, client_key, base_url, timeouts })
    }
}

fn required(key: &str) -> Result<String, RelayError> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| RelayError::MissingConfig { var: key.into() })
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
