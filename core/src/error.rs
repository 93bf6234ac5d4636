//! Error types and handling for repolens core

use thiserror::Error;

/// Result type alias for repolens operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for repolens core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Configuration-related errors (fatal at startup)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rejected navigations
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// Reverse URL generation errors
    #[error("Href error: {0}")]
    Href(#[from] HrefError),
}

/// Route table and router configuration errors.
///
/// Any of these refuses router construction; the application must not start
/// with an ambiguous or dangling route table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Duplicate route name: {name}")]
    DuplicateRouteName { name: String },

    #[error("Invalid pattern '{pattern}' for route '{route}': {reason}")]
    InvalidPattern {
        route: String,
        pattern: String,
        reason: String,
    },

    #[error("Route '{route}' references unknown view '{view}'")]
    UnknownView { route: String, view: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("No routes configured")]
    NoRoutes,
}

/// Errors returned when a navigation request is rejected.
///
/// A rejected navigation never changes router state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("No route matches '{path}'")]
    NotFound { path: String },

    #[error("Invalid navigation target '{target}': {reason}")]
    InvalidTarget { target: String, reason: String },
}

/// Errors from building a URL out of a route name and parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HrefError {
    #[error("Route '{name}' not found")]
    UnknownRoute { name: String },

    #[error("Missing required param '{param}' for route '{route}'")]
    MissingParam { route: String, param: String },
}
