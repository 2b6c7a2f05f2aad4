//! Environment-driven configuration for wiring the real service clients.

/// Default base URL for both services in local development.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Service endpoints and credential for a console session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Persistence API base URL (`SMSCAST_STORE_URL`).
    pub store_url: String,
    /// AI text service base URL (`SMSCAST_GENAI_URL`).
    pub genai_url: String,
    /// Bearer credential (`SMSCAST_API_TOKEN`).
    pub api_token: String,
}

impl SessionConfig {
    /// Read configuration from the environment, falling back to local
    /// development defaults.
    pub fn from_env() -> Self {
        Self {
            store_url: env_or("SMSCAST_STORE_URL", DEFAULT_BASE_URL),
            genai_url: env_or("SMSCAST_GENAI_URL", DEFAULT_BASE_URL),
            api_token: env_or("SMSCAST_API_TOKEN", ""),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
