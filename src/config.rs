use std::time::Duration;

/// The Telegraph API host.
pub const DEFAULT_API_URL: &str = "https://api.telegra.ph";

/// Uploads are served by the main site rather than the API host.
pub const DEFAULT_UPLOAD_URL: &str = "https://telegra.ph/upload";

/// Environment variable holding the access token.
pub const TOKEN_VAR: &str = "TELEGRAPH_TOKEN";

/// Older deployments spelled the variable this way; still honored as a fallback.
pub const LEGACY_TOKEN_VAR: &str = "TELEGRAPH_TOCKEN";

pub const API_URL_VAR: &str = "TELEGRAPH_API_URL";
pub const UPLOAD_URL_VAR: &str = "TELEGRAPH_UPLOAD_URL";

/// Everything a [`TelegraphClient`](crate::TelegraphClient) needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub upload_url: String,
    pub access_token: Option<String>,
    /// Applied to every request. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            upload_url: DEFAULT_UPLOAD_URL.to_string(),
            access_token: None,
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn upload_url(mut self, upload_url: impl Into<String>) -> Self {
        self.upload_url = upload_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Reads the process environment.
    ///
    /// Meant for binaries at startup; the library itself never calls this.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    /// Unset or empty variables leave the defaults in place.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let mut config = Self::default();

        config.access_token = lookup(TOKEN_VAR).or_else(|| lookup(LEGACY_TOKEN_VAR));
        if let Some(api_url) = lookup(API_URL_VAR) {
            config.api_url = api_url;
        }
        if let Some(upload_url) = lookup(UPLOAD_URL_VAR) {
            config.upload_url = upload_url;
        }

        config
    }
}
