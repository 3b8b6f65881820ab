//! Service configuration parsed from environment variables.
//!
//! Variable names follow the web client's public env contract
//! (`NEXT_PUBLIC_STRAPI_*`) so one `.env` file serves both processes.

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:1337";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CMS_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CMS_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CmsTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// CMS origin without trailing slash, e.g. `http://127.0.0.1:1337`.
    pub api_url: String,
    /// Static bearer token attached to GraphQL requests. Empty disables the header.
    pub api_key: String,
    pub port: u16,
    pub timeouts: CmsTimeouts,
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `NEXT_PUBLIC_STRAPI_API_URL`: default `http://127.0.0.1:1337`
    /// - `NEXT_PUBLIC_STRAPI_API_KEY`: default empty
    /// - `PORT`: default 3000
    /// - `CMS_REQUEST_TIMEOUT_SECS`: default 30
    /// - `CMS_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = normalize_api_url(std::env::var("NEXT_PUBLIC_STRAPI_API_URL").ok().as_deref());
        let api_key = std::env::var("NEXT_PUBLIC_STRAPI_API_KEY")
            .map(|v| v.trim().to_owned())
            .unwrap_or_default();
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let timeouts = CmsTimeouts {
            request_secs: env_parse_u64("CMS_REQUEST_TIMEOUT_SECS", DEFAULT_CMS_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("CMS_CONNECT_TIMEOUT_SECS", DEFAULT_CMS_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { api_url, api_key, port, timeouts })
    }

    /// GraphQL endpoint on the CMS.
    #[must_use]
    pub fn graphql_url(&self) -> String {
        format!("{}/graphql", self.api_url)
    }

    /// REST endpoint on the CMS for an API-relative path such as `/auth/send-otp`.
    #[must_use]
    pub fn rest_url(&self, path: &str) -> String {
        format!("{}/api{path}", self.api_url)
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

pub(crate) fn normalize_api_url(raw: Option<&str>) -> String {
    let url = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_URL);
    url.trim_end_matches('/').to_owned()
}

pub(crate) fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid { var: "PORT", value: value.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
