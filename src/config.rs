/// Process-wide configuration, validated once at startup
use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::errors::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_LICENSE_FILE: &str = "licenses.json";

#[derive(Clone)]
pub struct AppConfig {
    /// HMAC secret shared with clients
    pub secret_key: String,
    /// Exact User-Agent value a validation request must carry
    pub allowed_user_agent: String,
    pub host: String,
    pub port: u16,
    /// JSON array of license records
    pub license_file: PathBuf,
}

impl AppConfig {
    /// Build from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let secret_key = required("SECRET_KEY")?;
        let allowed_user_agent = required("ALLOWED_USER_AGENT")?;

        let port = match lookup("PORT").filter(|p| !p.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let license_file = lookup("LICENSE_FILE")
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LICENSE_FILE.to_string())
            .into();

        Ok(Self {
            secret_key,
            allowed_user_agent,
            host,
            port,
            license_file,
        })
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("secret_key", &"<redacted>")
            .field("allowed_user_agent", &self.allowed_user_agent)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("license_file", &self.license_file)
            .finish()
    }
}
