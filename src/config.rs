//! Client Configuration
//!
//! Endpoint and timing settings, resolved once at startup.

use std::time::Duration;

/// Runtime settings for the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Scheme + host the API lives on, without trailing slash
    pub api_base: String,
    pub stats_interval: Duration,
    pub leads_interval: Duration,
    pub toast_duration: Duration,
    /// Browser-local storage key of the remembered "added by" name
    pub username_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            stats_interval: Duration::from_secs(30),
            leads_interval: Duration::from_secs(60),
            toast_duration: Duration::from_secs(3),
            username_key: "username".to_string(),
        }
    }
}

impl ClientConfig {
    /// Build from the compile-time `LEAD_BOARD_API_BASE`, falling back to the page origin
    pub fn from_env() -> Self {
        let api_base = option_env!("LEAD_BOARD_API_BASE")
            .map(str::to_string)
            .or_else(page_origin)
            .unwrap_or_default();
        Self::with_base(&api_base)
    }

    pub fn with_base(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Absolute URL for an API path such as `/api/leads`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Console log level from the compile-time `LEAD_BOARD_LOG`
pub fn log_level() -> log::Level {
    parse_level(option_env!("LEAD_BOARD_LOG").unwrap_or("info"))
}

fn parse_level(raw: &str) -> log::Level {
    raw.parse().unwrap_or(log::Level::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.stats_interval, Duration::from_secs(30));
        assert_eq!(config.leads_interval, Duration::from_secs(60));
        assert_eq!(config.toast_duration, Duration::from_secs(3));
        assert_eq!(config.username_key, "username");
    }

    #[test]
    fn test_url_joining() {
        let config = ClientConfig::with_base("http://localhost:8000/");
        assert_eq!(config.url("/api/leads"), "http://localhost:8000/api/leads");
        assert_eq!(config.url("api/stats"), "http://localhost:8000/api/stats");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), log::Level::Debug);
        assert_eq!(parse_level("WARN"), log::Level::Warn);
        assert_eq!(parse_level("loud"), log::Level::Info);
    }
}
