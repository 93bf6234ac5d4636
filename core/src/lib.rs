//! # repolens Core
//!
//! Core library for repolens - the navigation layer of the repository
//! analytics dashboards.
//!
//! This library resolves URL paths to dashboard views, binds path
//! parameters such as `owner` and `repo` as view inputs, and keeps the
//! navigation history and scroll position consistent across navigations.

// Core modules
pub mod config;
pub mod dashboards;
pub mod error;
pub mod router;
pub mod view;

// Re-export commonly used types
pub use config::RouterConfig;
pub use dashboards::{dashboard_router, dashboard_routes, dashboard_views};
pub use error::{ConfigError, Error, HrefError, NavigationError, Result};
pub use router::{
    MemoryHost, NavigationHost, Resolution, ResolvedRoute, RouteDefinition, RouteParams, Router,
    RouterHandle, ScrollPosition,
};
pub use view::{MountedView, ViewDescriptor, ViewRegistry};

/// Current version of the repolens-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
