use std::path::PathBuf;

use herald_clients::ClientConfig;

/// Worker configuration loaded from environment variables.
///
/// Defaults suit local development; platform URLs have no default.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Whole-request timeout for the ingress, in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Lifetime of a cached tenant, in seconds (default: `300`).
    pub tenant_cache_ttl_secs: u64,
    /// Bundle used when a recipient's language has no template (default: `en`).
    pub default_locale: String,
    /// Optional JSON file of template overrides, `{locale: {key: template}}`.
    pub messages_file: Option<PathBuf>,
    /// Emit JSON log lines instead of the human-readable format.
    pub json_logs: bool,
    /// Platform service endpoints.
    pub clients: ClientConfig,
}

impl WorkerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default    |
    /// |-------------------------|------------|
    /// | `HOST`                  | `0.0.0.0`  |
    /// | `PORT`                  | `8080`     |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`       |
    /// | `TENANT_CACHE_TTL_SECS` | `300`      |
    /// | `DEFAULT_LOCALE`        | `en`       |
    /// | `MESSAGES_FILE`         | unset      |
    /// | `LOG_FORMAT`            | `text`     |
    ///
    /// Service URLs come from [`ClientConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let tenant_cache_ttl_secs: u64 = std::env::var("TENANT_CACHE_TTL_SECS")
            .unwrap_or_else(|_| "300".into())
            .parse()
            .expect("TENANT_CACHE_TTL_SECS must be a valid u64");

        let default_locale = std::env::var("DEFAULT_LOCALE").unwrap_or_else(|_| "en".into());

        let messages_file = std::env::var("MESSAGES_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let json_logs = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self {
            host,
            port,
            request_timeout_secs,
            tenant_cache_ttl_secs,
            default_locale,
            messages_file,
            json_logs,
            clients: ClientConfig::from_env(),
        }
    }
}
