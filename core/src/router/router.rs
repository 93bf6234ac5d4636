//! Router implementation for managing navigation state
//!
//! This module provides the core router functionality including
//! state management, navigation, and route resolution.

use super::history::{HistoryEntry, NavigationHistory};
use super::host::{MemoryHost, NavigationHost, ScrollPosition};
use super::params::RouteParams;
use super::pattern::split_path;
use super::route::{Resolution, ResolvedRoute, RouteDefinition};
use super::table::RouteTable;
use super::target::NavigationTarget;
use crate::config::RouterConfig;
use crate::error::{ConfigError, HrefError, NavigationError};
use crate::view::ViewRegistry;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Type alias for router operation results
pub type RouterResult<T> = Result<T, NavigationError>;

/// How a navigation changed the history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationKind {
    Push,
    Replace,
    /// Back, forward or `go(n)`
    Traverse,
}

/// Emitted to listeners after every successful navigation
#[derive(Debug, Clone, Serialize)]
pub struct NavigationEvent {
    pub kind: NavigationKind,
    pub from: Option<ResolvedRoute>,
    pub to: ResolvedRoute,
}

/// Callback invoked after each successful navigation
pub type NavigationListener = Box<dyn Fn(&NavigationEvent) + Send + Sync>;

/// Current state of the router
#[derive(Debug, Clone)]
pub struct RouterState {
    /// Most recently resolved route; `None` until the first navigation
    current: Option<ResolvedRoute>,
    history: NavigationHistory,
    /// Scroll offset applied by the last navigation
    scroll: ScrollPosition,
}

impl RouterState {
    /// Create an empty router state
    pub fn new(max_history: usize) -> Self {
        Self {
            current: None,
            history: NavigationHistory::new(max_history),
            scroll: ScrollPosition::TOP,
        }
    }

    pub fn current(&self) -> Option<&ResolvedRoute> {
        self.current.as_ref()
    }

    /// Bound params of the current route; empty before the first navigation
    pub fn current_params(&self) -> RouteParams {
        self.current
            .as_ref()
            .map(|route| route.params.clone())
            .unwrap_or_default()
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    pub fn scroll(&self) -> ScrollPosition {
        self.scroll
    }
}

/// Main router struct that owns the route table and navigation state
pub struct Router<H = MemoryHost> {
    config: RouterConfig,
    table: RouteTable,
    state: RouterState,
    host: H,
    listeners: Vec<NavigationListener>,
}

impl Router<MemoryHost> {
    /// Start building a router
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }
}

impl<H: NavigationHost> Router<H> {
    /// Create a new router over a registered route table
    pub fn new(config: RouterConfig, table: RouteTable, host: H) -> Result<Self, ConfigError> {
        config.validate()?;

        info!(
            routes = table.len(),
            base = %config.base,
            "Router initialized"
        );

        let state = RouterState::new(config.max_history);
        Ok(Self {
            config,
            table,
            state,
            host,
            listeners: Vec::new(),
        })
    }

    /// Resolve an application path (relative to the base) without navigating
    pub fn resolve(&self, path: &str) -> Resolution {
        match NavigationTarget::parse(path) {
            Ok(target) => self.resolve_target(target),
            Err(e) => {
                debug!(path, error = %e, "Unparseable path");
                Resolution::NotFound {
                    path: path.to_string(),
                }
            }
        }
    }

    /// Resolve a full host URL, stripping the configured base first
    pub fn resolve_location(&self, url: &str) -> Resolution {
        let target = NavigationTarget::parse(url)
            .ok()
            .and_then(|target| target.strip_base(self.config.normalized_base()));

        match target {
            Some(target) => self.resolve_target(target),
            None => Resolution::NotFound {
                path: url.to_string(),
            },
        }
    }

    fn resolve_target(&self, target: NavigationTarget) -> Resolution {
        let target = if self.config.strict {
            target
        } else {
            target.trim_trailing_slash()
        };

        let segments = split_path(&target.path);
        match self.table.match_segments(&segments) {
            Some((route, params)) => {
                let definition = &route.definition;
                debug!(path = %target.path, route = %definition.name, "Resolved path");
                Resolution::Found(ResolvedRoute {
                    name: definition.name.clone(),
                    view: definition.view.clone(),
                    params,
                    props: definition.props,
                    path: target.path,
                    query: target.query,
                    hash: target.hash,
                })
            }
            None => {
                debug!(path = %target.path, "No route matched");
                Resolution::NotFound { path: target.path }
            }
        }
    }

    fn resolve_for_navigation(&self, path: &str) -> RouterResult<ResolvedRoute> {
        let target = NavigationTarget::parse(path).inspect_err(|e| {
            warn!(path, error = %e, "Navigation rejected");
        })?;

        match self.resolve_target(target) {
            Resolution::Found(route) => Ok(route),
            Resolution::NotFound { path } => {
                warn!(path = %path, "Navigation rejected: no matching route");
                Err(NavigationError::NotFound { path })
            }
        }
    }

    /// Navigate to a path, appending a history entry.
    ///
    /// On failure the router state is left untouched.
    pub fn navigate(&mut self, path: &str) -> RouterResult<&ResolvedRoute> {
        let route = self.resolve_for_navigation(path)?;
        Ok(self.commit(NavigationKind::Push, route))
    }

    /// Navigate to a path, overwriting the current history entry
    pub fn replace(&mut self, path: &str) -> RouterResult<&ResolvedRoute> {
        let route = self.resolve_for_navigation(path)?;
        Ok(self.commit(NavigationKind::Replace, route))
    }

    /// Navigate to a named route
    pub fn navigate_named(
        &mut self,
        name: &str,
        params: &RouteParams,
    ) -> crate::Result<&ResolvedRoute> {
        let path = self.path_for(name, params)?;
        Ok(self.navigate(&path)?)
    }

    /// Perform the initial navigation from the URL the host is showing.
    ///
    /// Replaces rather than pushes, so the first page has a single entry.
    pub fn start(&mut self) -> RouterResult<&ResolvedRoute> {
        let location = self.host.location().unwrap_or("/").to_string();
        match self.resolve_location(&location) {
            Resolution::Found(route) => Ok(self.commit(NavigationKind::Replace, route)),
            Resolution::NotFound { path } => {
                warn!(location = %location, "Initial location has no matching route");
                Err(NavigationError::NotFound { path })
            }
        }
    }

    /// Go back one entry; `None` when already at the oldest entry
    pub fn back(&mut self) -> Option<&ResolvedRoute> {
        self.go(-1)
    }

    /// Go forward one entry; `None` when already at the newest entry
    pub fn forward(&mut self) -> Option<&ResolvedRoute> {
        self.go(1)
    }

    /// Move through history by `delta` entries.
    ///
    /// The stored target is resolved again against the route table; an entry
    /// that no longer resolves leaves the router where it is.
    pub fn go(&mut self, delta: isize) -> Option<&ResolvedRoute> {
        let stored = self.state.history.peek(delta)?.route.full_path();
        let route = match self.resolve(&stored) {
            Resolution::Found(route) => route,
            Resolution::NotFound { path } => {
                warn!(path = %path, delta, "History entry no longer resolves");
                return None;
            }
        };

        self.state.history.go(delta)?;
        Some(self.commit(NavigationKind::Traverse, route))
    }

    pub fn can_go_back(&self) -> bool {
        self.state.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.state.history.can_go_forward()
    }

    /// Build the host URL for a named route, including the base
    pub fn href(&self, name: &str, params: &RouteParams) -> Result<String, HrefError> {
        let path = self.path_for(name, params)?;
        Ok(self.with_base(&path))
    }

    fn path_for(&self, name: &str, params: &RouteParams) -> Result<String, HrefError> {
        let route = self.table.get(name).ok_or_else(|| HrefError::UnknownRoute {
            name: name.to_string(),
        })?;

        route
            .pattern
            .build(params)
            .map_err(|param| HrefError::MissingParam {
                route: name.to_string(),
                param,
            })
    }

    fn with_base(&self, path: &str) -> String {
        format!("{}{}", self.config.normalized_base(), path)
    }

    /// Register a listener called after every successful navigation
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&NavigationEvent) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn commit(&mut self, kind: NavigationKind, route: ResolvedRoute) -> &ResolvedRoute {
        let url = self.with_base(&route.full_path());
        match kind {
            NavigationKind::Push => {
                self.state.history.push(HistoryEntry::new(route.clone()));
                self.host.push(&url);
            }
            NavigationKind::Replace => {
                self.state.history.replace(HistoryEntry::new(route.clone()));
                self.host.replace(&url);
            }
            NavigationKind::Traverse => self.host.traversed(&url),
        }

        // Every navigation lands at the top of the page
        self.state.scroll = ScrollPosition::TOP;
        self.host.scroll_to(ScrollPosition::TOP);

        info!(route = %route.name, url = %url, kind = ?kind, "Navigated");

        let from = self.state.current.take();
        let current = self.state.current.insert(route);
        let event = NavigationEvent {
            kind,
            from,
            to: current.clone(),
        };
        for listener in &self.listeners {
            listener(&event);
        }

        current
    }

    /// Get the current router state
    pub fn state(&self) -> &RouterState {
        &self.state
    }

    /// Get the router configuration
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Get the route table
    pub fn routes(&self) -> &RouteTable {
        &self.table
    }

    pub fn has_route(&self, name: &str) -> bool {
        self.table.contains(name)
    }

    /// Get the current route
    pub fn current_route(&self) -> Option<&ResolvedRoute> {
        self.state.current()
    }

    /// Bound params of the current route
    pub fn current_params(&self) -> RouteParams {
        self.state.current_params()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

/// Builder for creating routers from route definitions
pub struct RouterBuilder {
    config: RouterConfig,
    definitions: Vec<RouteDefinition>,
    views: Option<ViewRegistry>,
}

impl RouterBuilder {
    /// Create a new router builder
    pub fn new() -> Self {
        Self {
            config: RouterConfig::default(),
            definitions: Vec::new(),
            views: None,
        }
    }

    pub fn config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a route definition
    pub fn route(mut self, definition: RouteDefinition) -> Self {
        self.definitions.push(definition);
        self
    }

    /// Add several route definitions, keeping their order
    pub fn routes(mut self, definitions: impl IntoIterator<Item = RouteDefinition>) -> Self {
        self.definitions.extend(definitions);
        self
    }

    /// Require every route's view to be present in `views`
    pub fn views(mut self, views: ViewRegistry) -> Self {
        self.views = Some(views);
        self
    }

    /// Build with an in-memory host starting at the base URL
    pub fn build(self) -> Result<Router<MemoryHost>, ConfigError> {
        let location = format!("{}/", self.config.normalized_base());
        self.build_with_host(MemoryHost::with_location(location))
    }

    /// Build the router with a custom host
    pub fn build_with_host<H: NavigationHost>(self, host: H) -> Result<Router<H>, ConfigError> {
        let table = RouteTable::register(self.definitions)?;
        if let Some(views) = &self.views {
            table.check_views(views)?;
        }
        Router::new(self.config, table, host)
    }
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::host::HostOperation;
    use std::sync::{Arc, Mutex};

    fn test_router() -> Router {
        Router::builder()
            .route(RouteDefinition::new("home", "/", "Home"))
            .route(RouteDefinition::new("repo", "/repos/:owner/:repo", "Repo").with_props())
            .route(RouteDefinition::new("about", "/about", "About"))
            .build()
            .expect("Failed to create router")
    }

    fn params(pairs: &[(&str, &str)]) -> RouteParams {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_initial_state() {
        let router = test_router();
        assert!(router.current_route().is_none());
        assert!(router.current_params().is_empty());
        assert!(router.state().history().is_empty());
        assert!(!router.can_go_back());
        assert_eq!(router.state().scroll(), ScrollPosition::TOP);
    }

    #[test]
    fn test_resolve_does_not_navigate() {
        let router = test_router();
        let resolution = router.resolve("/repos/acme/widget");
        let route = resolution.route().unwrap();
        assert_eq!(route.name.as_str(), "repo");
        assert_eq!(route.params, params(&[("owner", "acme"), ("repo", "widget")]));
        assert!(router.current_route().is_none());
    }

    #[test]
    fn test_resolve_not_found_and_invalid() {
        let router = test_router();
        assert_eq!(
            router.resolve("/nope"),
            Resolution::NotFound {
                path: "/nope".to_string()
            }
        );
        assert!(!router.resolve("about").is_found());
    }

    #[test]
    fn test_resolve_keeps_query_and_hash() {
        let router = test_router();
        let route = router.resolve("/about?tab=team#bio").into_route().unwrap();
        assert_eq!(route.name.as_str(), "about");
        assert_eq!(route.query.as_deref(), Some("tab=team"));
        assert_eq!(route.hash.as_deref(), Some("bio"));
        assert_eq!(route.full_path(), "/about?tab=team#bio");
    }

    #[test]
    fn test_trailing_slash_and_strict_mode() {
        let router = test_router();
        assert!(router.resolve("/about/").is_found());

        let strict = Router::builder()
            .config(RouterConfig::new().with_strict(true))
            .route(RouteDefinition::new("about", "/about", "About"))
            .build()
            .unwrap();
        assert!(strict.resolve("/about").is_found());
        assert!(!strict.resolve("/about/").is_found());
    }

    #[test]
    fn test_navigate_updates_state_and_scroll() {
        let mut router = test_router();
        router.host_mut().set_scroll(ScrollPosition::new(0, 900));

        let route = router.navigate("/repos/acme/widget").unwrap();
        assert_eq!(route.name.as_str(), "repo");

        assert_eq!(
            router.current_params(),
            params(&[("owner", "acme"), ("repo", "widget")])
        );
        assert_eq!(router.state().scroll(), ScrollPosition::TOP);
        assert_eq!(router.host().scroll(), ScrollPosition::TOP);
        assert_eq!(router.host().location(), Some("/repos/acme/widget"));
        assert_eq!(router.state().history().len(), 1);
    }

    #[test]
    fn test_failed_navigation_changes_nothing() {
        let mut router = test_router();
        router.navigate("/about").unwrap();
        let operations = router.host().operations().len();

        let err = router.navigate("/nonexistent/path").unwrap_err();
        assert_eq!(
            err,
            NavigationError::NotFound {
                path: "/nonexistent/path".to_string()
            }
        );

        let err = router.navigate("relative").unwrap_err();
        assert!(matches!(err, NavigationError::InvalidTarget { .. }));

        assert_eq!(router.current_route().unwrap().name.as_str(), "about");
        assert_eq!(router.state().history().len(), 1);
        assert_eq!(router.host().operations().len(), operations);
    }

    #[test]
    fn test_back_forward_reset_scroll() {
        let mut router = test_router();
        router.navigate("/").unwrap();
        router.navigate("/about").unwrap();
        router.navigate("/repos/a/b").unwrap();

        router.host_mut().set_scroll(ScrollPosition::new(0, 300));
        assert_eq!(router.back().unwrap().name.as_str(), "about");
        assert_eq!(router.host().scroll(), ScrollPosition::TOP);
        assert_eq!(router.host().location(), Some("/about"));

        router.host_mut().set_scroll(ScrollPosition::new(0, 300));
        assert_eq!(router.forward().unwrap().name.as_str(), "repo");
        assert_eq!(router.host().scroll(), ScrollPosition::TOP);
        assert_eq!(router.current_params(), params(&[("owner", "a"), ("repo", "b")]));

        assert!(router.forward().is_none());
        assert_eq!(router.go(-2).unwrap().name.as_str(), "home");
        assert!(router.back().is_none());
        assert!(router.can_go_forward());
    }

    #[test]
    fn test_traversal_resolves_stored_target() {
        let mut router = test_router();
        router.navigate("/repos/acme/widget?tab=stars#top").unwrap();
        router.navigate("/about").unwrap();

        let route = router.back().unwrap();
        assert_eq!(route.name.as_str(), "repo");
        assert_eq!(route.params, params(&[("owner", "acme"), ("repo", "widget")]));
        assert_eq!(route.query.as_deref(), Some("tab=stars"));
        assert_eq!(route.hash.as_deref(), Some("top"));
        assert_eq!(router.host().location(), Some("/repos/acme/widget?tab=stars#top"));
        assert_eq!(router.state().history().position(), 0);
    }

    #[test]
    fn test_replace_overwrites_history_entry() {
        let mut router = test_router();
        router.navigate("/").unwrap();
        router.navigate("/about").unwrap();
        router.replace("/repos/a/b").unwrap();

        assert_eq!(router.state().history().len(), 2);
        assert_eq!(router.back().unwrap().name.as_str(), "home");
        assert_eq!(
            router.host().operations().last(),
            Some(&HostOperation::ScrollTo(ScrollPosition::TOP))
        );
        assert!(router
            .host()
            .operations()
            .contains(&HostOperation::Replace("/repos/a/b".to_string())));
    }

    #[test]
    fn test_href_and_navigate_named() {
        let mut router = test_router();
        let p = params(&[("owner", "my org"), ("repo", "widget")]);

        let href = router.href("repo", &p).unwrap();
        assert_eq!(href, "/repos/my%20org/widget");
        assert_eq!(router.resolve(&href).into_route().unwrap().params, p);

        assert_eq!(
            router.href("missing", &p),
            Err(HrefError::UnknownRoute {
                name: "missing".to_string()
            })
        );
        assert_eq!(
            router.href("repo", &params(&[("owner", "acme")])),
            Err(HrefError::MissingParam {
                route: "repo".to_string(),
                param: "repo".to_string()
            })
        );

        let route = router.navigate_named("repo", &p).unwrap();
        assert_eq!(route.params.get("owner"), Some("my org"));
        assert!(router.navigate_named("missing", &p).is_err());
    }

    #[test]
    fn test_base_prefix() {
        let mut router = Router::builder()
            .config(RouterConfig::new().with_base("/dashboards/"))
            .route(RouteDefinition::new("home", "/", "Home"))
            .route(RouteDefinition::new("about", "/about", "About"))
            .build()
            .unwrap();

        assert_eq!(router.host().location(), Some("/dashboards/"));
        assert_eq!(router.start().unwrap().name.as_str(), "home");
        assert_eq!(router.state().history().len(), 1);

        router.navigate("/about").unwrap();
        assert_eq!(router.host().location(), Some("/dashboards/about"));
        assert_eq!(
            router.href("about", &RouteParams::new()).unwrap(),
            "/dashboards/about"
        );

        assert!(router.resolve_location("/dashboards/about").is_found());
        assert!(!router.resolve_location("/about").is_found());
    }

    #[test]
    fn test_start_from_unknown_location_fails() {
        let mut router = Router::builder()
            .route(RouteDefinition::new("home", "/", "Home"))
            .build_with_host(MemoryHost::with_location("/missing"))
            .unwrap();

        assert!(matches!(
            router.start(),
            Err(NavigationError::NotFound { .. })
        ));
        assert!(router.current_route().is_none());
    }

    #[test]
    fn test_listeners_see_each_navigation() {
        let mut router = test_router();
        let events = Arc::new(Mutex::new(Vec::new()));

        let sink = events.clone();
        router.subscribe(move |event| {
            let from = event.from.as_ref().map(|r| r.name.to_string());
            sink.lock()
                .unwrap()
                .push((event.kind, from, event.to.name.to_string()));
        });

        router.navigate("/").unwrap();
        router.navigate("/about").unwrap();
        let _ = router.navigate("/missing");
        router.back();

        let events = events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                (NavigationKind::Push, None, "home".to_string()),
                (
                    NavigationKind::Push,
                    Some("home".to_string()),
                    "about".to_string()
                ),
                (
                    NavigationKind::Traverse,
                    Some("about".to_string()),
                    "home".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_builder_rejects_invalid_config() {
        let result = Router::builder()
            .config(RouterConfig::new().with_max_history(0))
            .route(RouteDefinition::new("home", "/", "Home"))
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }
}
