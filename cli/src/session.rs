//! Navigation session driving the dashboard router
//!
//! The session is the application shell: it owns the one router instance,
//! turns user steps into navigations, and mounts the selected view.

use repolens_core::router::NavigationEvent;
use repolens_core::{
    dashboard_router, dashboard_views, MemoryHost, MountedView, NavigationError, NavigationHost, Router,
    RouterConfig, ViewRegistry,
};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// A single user action in a navigation session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Push a new path
    Go(String),
    /// Replace the current entry with a path
    Replace(String),
    Back,
    Forward,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized step '{0}': expected a path, 'back', 'forward' or 'replace:<path>'")]
pub struct StepParseError(String);

impl FromStr for Step {
    type Err = StepParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "back" => Ok(Step::Back),
            "forward" => Ok(Step::Forward),
            _ => {
                if let Some(path) = s.strip_prefix("replace:") {
                    Ok(Step::Replace(path.to_string()))
                } else if s.starts_with('/') {
                    Ok(Step::Go(s.to_string()))
                } else {
                    Err(StepParseError(s.to_string()))
                }
            }
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Go(path) => f.write_str(path),
            Step::Replace(path) => write!(f, "replace:{}", path),
            Step::Back => f.write_str("back"),
            Step::Forward => f.write_str("forward"),
        }
    }
}

/// What happened when a step was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// A view was mounted at `url`
    Mounted { view: MountedView, url: String },
    /// Navigation was rejected; the fallback view is shown instead
    NotFound { path: String },
    Invalid { target: String, reason: String },
    /// Back/forward with nothing in that direction
    NoHistory,
}

/// The application shell around the router
pub struct Session {
    router: Router<MemoryHost>,
    views: ViewRegistry,
}

impl Session {
    /// Build the dashboard router and perform the initial navigation
    pub fn start(config: RouterConfig) -> anyhow::Result<Self> {
        let location = format!("{}/", config.normalized_base());
        let mut router = dashboard_router(config, MemoryHost::with_location(location))?;

        router.subscribe(|event: &NavigationEvent| {
            debug!(
                kind = ?event.kind,
                from = event.from.as_ref().map(|r| r.name.as_str()).unwrap_or("-"),
                to = %event.to.name,
                "Mounting view"
            );
        });
        router.start()?;

        Ok(Self {
            router,
            views: dashboard_views(),
        })
    }

    pub fn router(&self) -> &Router<MemoryHost> {
        &self.router
    }

    pub fn views(&self) -> &ViewRegistry {
        &self.views
    }

    /// Apply one step
    pub fn apply(&mut self, step: &Step) -> StepOutcome {
        let result = match step {
            Step::Go(path) => self.router.navigate(path).map(|_| true),
            Step::Replace(path) => self.router.replace(path).map(|_| true),
            Step::Back => Ok(self.router.back().is_some()),
            Step::Forward => Ok(self.router.forward().is_some()),
        };

        match result {
            Ok(true) => self.mounted(),
            Ok(false) => StepOutcome::NoHistory,
            Err(NavigationError::NotFound { path }) => StepOutcome::NotFound { path },
            Err(NavigationError::InvalidTarget { target, reason }) => {
                StepOutcome::Invalid { target, reason }
            }
        }
    }

    /// Mount the view of the current route
    pub fn mounted(&self) -> StepOutcome {
        let route = self.router.current_route();
        let view = route.and_then(|route| self.views.mount(route));
        match (route, view) {
            (Some(route), Some(view)) => StepOutcome::Mounted {
                view,
                url: format!(
                    "{}{}",
                    self.router.config().normalized_base(),
                    route.full_path()
                ),
            },
            _ => StepOutcome::NotFound {
                path: self.router.host().location().unwrap_or("/").to_string(),
            },
        }
    }
}
