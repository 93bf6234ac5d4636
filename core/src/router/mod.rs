//! Router module for resolving paths and managing navigation
//!
//! This module matches URL paths against an ordered route table, binds
//! path parameters, and keeps the navigation history and scroll position
//! in sync with the host environment.

pub mod handle;
pub mod history;
pub mod host;
pub mod params;
pub mod pattern;
pub mod route;
#[allow(clippy::module_inception)]
pub mod router;
pub mod table;
pub mod target;

// Re-export commonly used types
pub use handle::RouterHandle;
pub use history::{HistoryEntry, NavigationHistory};
pub use host::{HostOperation, MemoryHost, NavigationHost, ScrollPosition};
pub use params::RouteParams;
pub use pattern::{PathPattern, PatternError, Segment};
pub use route::{Resolution, ResolvedRoute, RouteDefinition, RouteName, ViewId};
pub use router::{
    NavigationEvent, NavigationKind, NavigationListener, Router, RouterBuilder, RouterResult,
    RouterState,
};
pub use table::{CompiledRoute, RouteTable};
pub use target::NavigationTarget;
