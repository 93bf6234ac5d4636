//! A shareable handle around the single router instance
//!
//! All access goes through one mutex, so a reader never observes a
//! navigation half-way between resolution and state update.

use super::host::{MemoryHost, NavigationHost};
use super::params::RouteParams;
use super::route::{Resolution, ResolvedRoute};
use super::router::{Router, RouterResult};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable, thread-safe handle to control the router
pub struct RouterHandle<H = MemoryHost>(Arc<Mutex<Router<H>>>);

impl<H> Clone for RouterHandle<H> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<H: NavigationHost> RouterHandle<H> {
    /// Create a new router handle
    pub fn new(router: Router<H>) -> Self {
        Self(Arc::new(Mutex::new(router)))
    }

    fn lock(&self) -> MutexGuard<'_, Router<H>> {
        // Router state is only mutated by `commit`, which cannot panic half-way
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Navigate to a path
    pub fn navigate(&self, path: &str) -> RouterResult<ResolvedRoute> {
        self.lock().navigate(path).cloned()
    }

    /// Navigate, overwriting the current history entry
    pub fn replace(&self, path: &str) -> RouterResult<ResolvedRoute> {
        self.lock().replace(path).cloned()
    }

    pub fn resolve(&self, path: &str) -> Resolution {
        self.lock().resolve(path)
    }

    pub fn back(&self) -> Option<ResolvedRoute> {
        self.lock().back().cloned()
    }

    pub fn forward(&self) -> Option<ResolvedRoute> {
        self.lock().forward().cloned()
    }

    /// Get the current route
    pub fn current_route(&self) -> Option<ResolvedRoute> {
        self.lock().current_route().cloned()
    }

    pub fn current_params(&self) -> RouteParams {
        self.lock().current_params()
    }

    /// Run `f` with exclusive access to the router
    pub fn with<R>(&self, f: impl FnOnce(&mut Router<H>) -> R) -> R {
        f(&mut self.lock())
    }
}
