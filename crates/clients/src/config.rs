/// Endpoints and credentials of the platform services.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub account_api_url: String,
    pub tenant_api_url: String,
    pub payment_api_url: String,
    pub order_api_url: String,
    pub shipping_api_url: String,
    pub sms_api_url: String,
    /// Sent as `X-Api-Key` on every platform call when set.
    pub api_key: Option<String>,
    /// Per-request timeout in seconds (default: `10`).
    pub http_timeout_secs: u64,
    pub bitly_api_url: String,
    /// Without a token links are sent unshortened.
    pub bitly_access_token: Option<String>,
}

impl ClientConfig {
    /// Load client configuration from environment variables.
    ///
    /// | Env Var              | Default                      |
    /// |----------------------|------------------------------|
    /// | `ACCOUNT_API_URL`    | `PLATFORM_API_URL`           |
    /// | `TENANT_API_URL`     | `PLATFORM_API_URL`           |
    /// | `PAYMENT_API_URL`    | `PLATFORM_API_URL`           |
    /// | `ORDER_API_URL`      | `PLATFORM_API_URL`           |
    /// | `SHIPPING_API_URL`   | `PLATFORM_API_URL`           |
    /// | `SMS_API_URL`        | `PLATFORM_API_URL`           |
    /// | `API_KEY`            | unset                        |
    /// | `HTTP_TIMEOUT_SECS`  | `10`                         |
    /// | `BITLY_API_URL`      | `https://api-ssl.bitly.com`  |
    /// | `BITLY_ACCESS_TOKEN` | unset                        |
    ///
    /// Panics when a service URL is set neither directly nor through
    /// `PLATFORM_API_URL`.
    pub fn from_env() -> Self {
        let platform = optional("PLATFORM_API_URL");
        let service_url = |var: &str| -> String {
            optional(var)
                .or_else(|| platform.clone())
                .unwrap_or_else(|| panic!("{var} or PLATFORM_API_URL must be set"))
                .trim_end_matches('/')
                .to_string()
        };

        let http_timeout_secs: u64 = std::env::var("HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("HTTP_TIMEOUT_SECS must be a valid u64");

        Self {
            account_api_url: service_url("ACCOUNT_API_URL"),
            tenant_api_url: service_url("TENANT_API_URL"),
            payment_api_url: service_url("PAYMENT_API_URL"),
            order_api_url: service_url("ORDER_API_URL"),
            shipping_api_url: service_url("SHIPPING_API_URL"),
            sms_api_url: service_url("SMS_API_URL"),
            api_key: optional("API_KEY"),
            http_timeout_secs,
            bitly_api_url: optional("BITLY_API_URL")
                .unwrap_or_else(|| "https://api-ssl.bitly.com".into()),
            bitly_access_token: optional("BITLY_ACCESS_TOKEN"),
        }
    }

    /// Every platform service at the same base URL. Used by tests and local
    /// setups that front all services with one gateway.
    pub fn single_host(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            account_api_url: base_url.clone(),
            tenant_api_url: base_url.clone(),
            payment_api_url: base_url.clone(),
            order_api_url: base_url.clone(),
            shipping_api_url: base_url.clone(),
            sms_api_url: base_url,
            api_key: None,
            http_timeout_secs: 10,
            bitly_api_url: "https://api-ssl.bitly.com".into(),
            bitly_access_token: None,
        }
    }
}

/// Non-empty value of `var`.
fn optional(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
