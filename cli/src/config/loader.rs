//! Simple CLI configuration loader for repolens
//!
//! Implements single-source priority loading with env and flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Working directory: ./repolens.json or ./.repolens/config.json
//! 3. Git repository root: <repo_root>/.repolens/config.json
//! 4. User config dir: $XDG_CONFIG_HOME/repolens/config.json
//! 5. Built-in defaults
//!
//! `REPOLENS_BASE`, `REPOLENS_STRICT` and `REPOLENS_MAX_HISTORY` are applied
//! on top of whichever source was found, then command-line flags.

use anyhow::{anyhow, Context, Result};
use repolens_core::RouterConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Raw configuration file format; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    /// Path prefix the dashboards are served under
    pub base: Option<String>,
    /// Exact trailing-slash matching
    pub strict: Option<bool>,
    /// Maximum navigation history entries
    pub max_history: Option<usize>,
}

impl RawConfig {
    /// Overlay `other` on top of `self`
    fn merge(&mut self, other: RawConfig) {
        if other.base.is_some() {
            self.base = other.base;
        }
        if other.strict.is_some() {
            self.strict = other.strict;
        }
        if other.max_history.is_some() {
            self.max_history = other.max_history;
        }
    }
}

/// CLI configuration loader
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Directory to search instead of the process working directory
    working_dir: Option<PathBuf>,
    /// Whether to look at the user config directory
    search_user_config: bool,
    /// Whether to read REPOLENS_* environment variables
    read_env: bool,
    /// Flag overrides
    base_override: Option<String>,
    strict_override: Option<bool>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            working_dir: None,
            search_user_config: true,
            read_env: true,
            base_override: None,
            strict_override: None,
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Search for config files relative to `dir`
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }

    /// Only consider the working directory and explicit overrides
    #[cfg(test)]
    pub fn isolated(mut self) -> Self {
        self.search_user_config = false;
        self.read_env = false;
        self
    }

    /// Set base path override
    pub fn with_base_override(mut self, base: String) -> Self {
        self.base_override = Some(base);
        self
    }

    /// Set strict matching override
    pub fn with_strict_override(mut self, strict: bool) -> Self {
        self.strict_override = Some(strict);
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<RouterConfig> {
        // Step 1: Find and load base configuration
        let mut config = if let Some(override_path) = &self.config_override {
            let expanded = shellexpand::tilde(&override_path.to_string_lossy()).into_owned();
            let path = PathBuf::from(expanded);
            self.load_from_path(&path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            self.search_and_load().await?
        };

        // Step 2: Environment overrides
        if self.read_env {
            config.merge(env_overrides(|name| std::env::var(name).ok())?);
        }

        // Step 3: Flag overrides
        if let Some(base) = &self.base_override {
            config.base = Some(base.clone());
        }
        if let Some(strict) = self.strict_override {
            config.strict = Some(strict);
        }

        // Step 4: Resolve to final router config
        resolve_config(config)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<RawConfig> {
        let cwd = match &self.working_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        // 1. Working directory
        for candidate in [
            cwd.join("repolens.json"),
            cwd.join(".repolens").join("config.json"),
        ] {
            if candidate.exists() {
                return self.load_file(&candidate).await;
            }
        }

        // 2. Git repository root
        if let Some(git_root) = find_git_root(&cwd) {
            let config_path = git_root.join(".repolens").join("config.json");
            if config_path.exists() {
                return self.load_file(&config_path).await;
            }
        }

        // 3. User config directory
        if self.search_user_config {
            if let Some(config_dir) = user_config_dir() {
                let config_path = config_dir.join("repolens").join("config.json");
                if config_path.exists() {
                    return self.load_file(&config_path).await;
                }
            }
        }

        // 4. Defaults
        debug!("No config file found, using defaults");
        Ok(RawConfig::default())
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<RawConfig> {
        if path.is_file() {
            self.load_file(path).await
        } else if path.is_dir() {
            // Try config.json in the directory
            let config_file = path.join("config.json");
            if config_file.exists() {
                self.load_file(&config_file).await
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<RawConfig> {
        debug!(path = %path.display(), "Loading config file");
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Default for CliConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Read REPOLENS_* overrides through `lookup`
fn env_overrides(lookup: impl Fn(&str) -> Option<String>) -> Result<RawConfig> {
    let strict = match lookup("REPOLENS_STRICT") {
        Some(value) => Some(parse_bool(&value).with_context(|| {
            format!("Invalid REPOLENS_STRICT value: {}", value)
        })?),
        None => None,
    };

    let max_history = match lookup("REPOLENS_MAX_HISTORY") {
        Some(value) => Some(
            value
                .trim()
                .parse::<usize>()
                .with_context(|| format!("Invalid REPOLENS_MAX_HISTORY value: {}", value))?,
        ),
        None => None,
    };

    Ok(RawConfig {
        base: lookup("REPOLENS_BASE"),
        strict,
        max_history,
    })
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("expected a boolean, got '{}'", other)),
    }
}

/// Find git repository root
fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

/// Get XDG config directory
fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

/// Resolve raw config to RouterConfig
fn resolve_config(raw: RawConfig) -> Result<RouterConfig> {
    let mut config = RouterConfig::default();
    if let Some(base) = raw.base {
        config.base = base;
    }
    if let Some(strict) = raw.strict {
        config.strict = strict;
    }
    if let Some(max_history) = raw.max_history {
        config.max_history = max_history;
    }

    config
        .validate()
        .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

    Ok(config)
}
