//! Runtime configuration for the relay.

pub const DEFAULT_UPSTREAM_URL: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Origins the frontend is served from during development.
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:5173"];

#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Host address to bind the relay server.
    pub host: String,
    /// Port number to bind the relay server.
    pub port: u16,
    /// Base URL of the upstream AI inference service.
    pub upstream_url: String,
    /// Timeout in seconds for a single upstream call.
    pub request_timeout_secs: u64,
    /// Origins allowed by CORS.
    pub cors_origins: Vec<String>,
    /// Directory to store log files. If None, logs only go to stdout.
    pub log_dir: Option<String>,
    /// Log level for the application.
    pub log_level: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
            log_dir: None,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid upstream URL: {url}")]
    InvalidUpstreamUrl { url: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl RelayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.upstream_url.starts_with("http://") && !self.upstream_url.starts_with("https://") {
            return Err(ConfigError::InvalidUpstreamUrl {
                url: self.upstream_url.clone(),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs",
                reason: "timeout must be positive".to_string(),
            });
        }
        for origin in &self.cors_origins {
            if !origin.starts_with("http://") && !origin.starts_with("https://") {
                return Err(ConfigError::InvalidValue {
                    field: "cors_origins",
                    reason: format!("not an origin: {}", origin),
                });
            }
        }
        Ok(())
    }
}
