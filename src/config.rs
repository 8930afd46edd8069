//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::spapi::client::{default_user_agent, ClientOptions, TOKEN_URL};
use crate::spapi::{Credentials, Marketplace, Region};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// LWA client id
    #[serde(default)]
    pub client_id: Option<String>,

    /// LWA client secret
    #[serde(default)]
    pub client_secret: Option<String>,

    /// LWA refresh token issued when the seller authorised the app
    #[serde(default)]
    pub refresh_token: Option<String>,

    /// Selling region, picks the SP-API host
    #[serde(default)]
    pub region: Region,

    /// Overrides the region host (sandbox, proxies, mocks)
    #[serde(default)]
    pub endpoint: Option<String>,

    /// LWA token endpoint
    #[serde(default = "default_auth_url")]
    pub auth_url: String,

    /// `user-agent` sent with SP-API calls
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Default marketplace for commands
    #[serde(default)]
    pub marketplace: Option<Marketplace>,

    /// Seller (merchant) id, needed for listings restrictions
    #[serde(default)]
    pub seller_id: Option<String>,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_auth_url() -> String {
    TOKEN_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            refresh_token: None,
            region: Region::Eu,
            endpoint: None,
            auth_url: default_auth_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            proxy: None,
            marketplace: None,
            seller_id: None,
            format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("spapi.toml");
        if local_config.exists() {
            debug!("Found spapi.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("amz-spapi").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(client_id) = std::env::var("SPAPI_CLIENT_ID") {
            self.client_id = Some(client_id);
        }

        if let Ok(client_secret) = std::env::var("SPAPI_CLIENT_SECRET") {
            self.client_secret = Some(client_secret);
        }

        if let Ok(refresh_token) = std::env::var("SPAPI_REFRESH_TOKEN") {
            self.refresh_token = Some(refresh_token);
        }

        if let Ok(region) = std::env::var("SPAPI_REGION") {
            if let Ok(r) = region.parse() {
                self.region = r;
            }
        }

        if let Ok(endpoint) = std::env::var("SPAPI_ENDPOINT") {
            self.endpoint = Some(endpoint);
        }

        if let Ok(user_agent) = std::env::var("SPAPI_USER_AGENT") {
            self.user_agent = user_agent;
        }

        if let Ok(timeout) = std::env::var("SPAPI_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.timeout_secs = t;
            }
        }

        if let Ok(seller_id) = std::env::var("SPAPI_SELLER_ID") {
            self.seller_id = Some(seller_id);
        }

        self
    }

    /// Builds credentials, failing if any of the three values is missing.
    pub fn credentials(&self) -> Result<Credentials> {
        let client_id = self
            .client_id
            .as_deref()
            .context("Missing client_id. Set SPAPI_CLIENT_ID or client_id in the config file")?;
        let client_secret = self.client_secret.as_deref().context(
            "Missing client_secret. Set SPAPI_CLIENT_SECRET or client_secret in the config file",
        )?;
        let refresh_token = self.refresh_token.as_deref().context(
            "Missing refresh_token. Set SPAPI_REFRESH_TOKEN or refresh_token in the config file",
        )?;

        Ok(Credentials::new(client_id, client_secret, refresh_token))
    }

    /// Returns the SP-API host: the explicit endpoint, else the region's.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or_else(|| self.region.endpoint())
    }

    /// Connection options for [`SpApiClient`](crate::spapi::SpApiClient).
    pub fn client_options(&self) -> ClientOptions {
        let mut options = ClientOptions::default()
            .with_endpoint(self.endpoint())
            .with_auth_url(self.auth_url.clone())
            .with_user_agent(self.user_agent.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_connect_timeout(Duration::from_secs(self.connect_timeout_secs));

        if let Some(proxy) = &self.proxy {
            options = options.with_proxy(proxy.clone());
        }

        options
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use: table, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
