//! Minimal configuration module for repolens core
//!
//! Only exports pure data types. All loading logic is in CLI layer.

pub mod types;

pub use types::{RouterConfig, DEFAULT_MAX_HISTORY};
