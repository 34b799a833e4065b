//! Configuration for pingd.
//!
//! Everything has a default, so the server runs with no config at all and
//! listens on port 3001. A TOML file can be supplied through `PINGD_CONFIG`,
//! and `PINGD_PORT` overrides the port on top of whatever was loaded.
//! Invalid configs are rejected before any socket is opened.
//!
//! # Example
//! ```toml
//! port      = 3001
//! log_level = "pingd=debug,tower_http=info"
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Env var naming an optional TOML config file.
pub const CONFIG_ENV: &str = "PINGD_CONFIG";

/// Env var overriding [`Config::port`].
pub const PORT_ENV: &str = "PINGD_PORT";

/// Top-level server configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    /// Port bound on all interfaces (default: 3001).
    #[serde(default = "defaults::port")]
    pub port: u16,

    /// Log filter directive (also controlled by `RUST_LOG`, which wins).
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: defaults::port(),
            log_level: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&content)
    }

    /// Build the effective config from the process environment.
    ///
    /// Reads the file named by `PINGD_CONFIG` when set (a missing file is an
    /// error, not a silent fallback), then applies `PINGD_PORT`.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                let path = Path::new(&path);
                Self::load(path)
                    .with_context(|| format!("Failed to load config from {}", path.display()))?
            }
            None => Self::default(),
        };

        if let Ok(raw) = std::env::var(PORT_ENV) {
            config.apply_port_override(&raw)?;
        }

        Ok(config)
    }

    fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content).context("parsing config TOML")?;
        config.validate()?;
        Ok(config)
    }

    fn apply_port_override(&mut self, raw: &str) -> anyhow::Result<()> {
        let port: u16 = raw
            .trim()
            .parse()
            .with_context(|| format!("{PORT_ENV} must be a port number, got `{raw}`"))?;
        anyhow::ensure!(port != 0, "{PORT_ENV} must be non-zero");
        self.port = port;
        Ok(())
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.port != 0, "port must be non-zero");
        if let Some(level) = &self.log_level {
            tracing_subscriber::EnvFilter::try_new(level)
                .with_context(|| format!("invalid log_level `{level}`"))?;
        }
        Ok(())
    }
}

mod defaults {
    pub fn port() -> u16 { 3001 }
}
