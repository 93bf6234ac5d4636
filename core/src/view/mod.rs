//! Views the router can select
//!
//! The router treats a view as an opaque id. This module holds what the
//! view layer knows about each one.

pub mod registry;

pub use registry::{MountedView, ViewDescriptor, ViewRegistry};
