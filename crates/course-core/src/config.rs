//! Configuration for the course servers.
//!
//! Loaded from a TOML file. Every field has a default, so a missing or empty
//! file yields a usable configuration. Command-line flags override the
//! values after loading.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "MCP_COURSE_CONFIG";

/// Directory name under the platform config dir.
pub const PROJECT_NAME: &str = "mcp-course";

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseConfig {
    /// GitHub Actions event log shared by the webhook and the PR agent.
    pub events: EventsConfig,
    /// Webhook receiver settings.
    pub webhook: WebhookConfig,
    /// PR agent settings.
    pub pr_agent: PrAgentConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Where webhook events are stored and how many are retained.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    /// JSON file holding the event log.
    pub file: PathBuf,
    /// Retention cap; older events are dropped first.
    pub max_events: usize,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("github_events/github_events.json"),
            max_events: 100,
        }
    }
}

/// Webhook listener settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Route receiving GitHub deliveries.
    pub path: String,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8080,
            path: "/webhook/github".to_string(),
        }
    }
}

/// PR agent settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrAgentConfig {
    /// Directory of Markdown PR templates. Built-in templates when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,
    /// Repository to analyze. The process working directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_dir: Option<PathBuf>,
    /// Base branch used when the caller does not name one.
    pub default_base_branch: String,
    /// Diff line cap used when the caller does not give one.
    pub max_diff_lines: usize,
}

impl Default for PrAgentConfig {
    fn default() -> Self {
        Self {
            templates_dir: None,
            repo_dir: None,
            default_base_branch: "main".to_string(),
            max_diff_lines: 500,
        }
    }
}

/// Logging settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl CourseConfig {
    /// Default config file location: `<config_dir>/mcp-course/config.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// Resolve the config path from an explicit flag, then the environment,
    /// then the platform default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        resolve_with(explicit, std::env::var(CONFIG_ENV_VAR).ok())
    }

    /// Load configuration.
    ///
    /// An explicitly named file (flag or environment) must exist. A missing
    /// default file yields the defaults.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let env_value = std::env::var(CONFIG_ENV_VAR).ok();
        let named = explicit.is_some() || env_value.is_some();

        match resolve_with(explicit, env_value) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) if named => Err(Error::config(format!(
                "Config file not found: {}",
                path.display()
            ))),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Reject values no server can run with.
    pub fn validate(&self) -> Result<()> {
        if self.events.max_events == 0 {
            return Err(Error::config("events.max_events must be at least 1"));
        }
        if !self.webhook.path.starts_with('/') {
            return Err(Error::config(format!(
                "webhook.path must start with '/': {}",
                self.webhook.path
            )));
        }
        if self.pr_agent.default_base_branch.trim().is_empty() {
            return Err(Error::config("pr_agent.default_base_branch must not be empty"));
        }
        Ok(())
    }
}

fn resolve_with(explicit: Option<&str>, env_value: Option<String>) -> Option<PathBuf> {
    explicit
        .map(PathBuf::from)
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
        .or_else(CourseConfig::default_config_path)
}
