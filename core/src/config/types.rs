//! Router configuration types
//!
//! Core only accepts fully resolved, validated configuration.
//! All discovery, loading, and merging happens in CLI layer.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default number of history entries kept by the router
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// A fully resolved router configuration ready for use by core
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Path prefix the application is served under (e.g. `/dashboards`)
    pub base: String,
    /// When false, a single trailing slash is ignored while matching
    pub strict: bool,
    /// Maximum number of history entries to keep
    pub max_history: usize,
}

impl RouterConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self {
            base: "/".to_string(),
            strict: false,
            max_history: DEFAULT_MAX_HISTORY,
        }
    }

    /// Set the base path prefix
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Require exact trailing-slash matching
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set maximum history size
    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }

    /// Base prefix without trailing slash; empty when served from the root.
    pub fn normalized_base(&self) -> &str {
        self.base.trim_end_matches('/')
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                field: "base".to_string(),
                value: self.base.clone(),
            });
        }

        if self.base.contains(['?', '#']) {
            return Err(ConfigError::InvalidValue {
                field: "base".to_string(),
                value: self.base.clone(),
            });
        }

        if self.max_history == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_history".to_string(),
                value: self.max_history.to_string(),
            });
        }

        Ok(())
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}
