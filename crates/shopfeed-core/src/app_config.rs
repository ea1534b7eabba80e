use std::net::SocketAddr;

/// Runtime configuration for the adapter, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Upstream endpoint returning the raw product JSON array.
    pub upstream_url: String,
    pub upstream_timeout_secs: u64,
    pub upstream_user_agent: String,
}
