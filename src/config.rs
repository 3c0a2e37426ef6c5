use std::env;

/// Runtime configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Deployment environment name ("local", "dev", "stage", "prod", ...).
    pub environment: String,
    pub bind_addr: String,
    pub server_name: Option<String>,
    pub server_ip: Option<String>,
    pub server_signature: Option<String>,
    /// Default sort key when a caller sorts without naming one.
    pub sort_key: String,
    /// Default sort direction, one of asc/ascending/desc/descending.
    pub sort_direction: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            environment: env::var("RESPONDER_ENV").unwrap_or_else(|_| "local".into()),
            bind_addr: env::var("RESPONDER_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            server_name: env::var("RESPONDER_SERVER_NAME").ok(),
            server_ip: env::var("RESPONDER_SERVER_IP").ok(),
            server_signature: env::var("RESPONDER_SERVER_SIG").ok(),
            sort_key: env::var("RESPONDER_SORT_KEY").unwrap_or_else(|_| "id".into()),
            sort_direction: env::var("RESPONDER_SORT_DIR").unwrap_or_else(|_| "asc".into()),
        }
    }

    /// Debug metadata must never be emitted in these environments.
    pub fn is_production_like(&self) -> bool {
        matches!(self.environment.as_str(), "production" | "prod")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "local".into(),
            bind_addr: "0.0.0.0:8080".into(),
            server_name: None,
            server_ip: None,
            server_signature: None,
            sort_key: "id".into(),
            sort_direction: "asc".into(),
        }
    }
}
