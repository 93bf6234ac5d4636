//! The repository dashboards route table
//!
//! Route names and patterns here are a stable contract: links elsewhere in
//! the application are built from them.

use crate::config::RouterConfig;
use crate::error::ConfigError;
use crate::router::{NavigationHost, RouteDefinition, Router};
use crate::view::{ViewDescriptor, ViewRegistry};

/// Route names
pub mod names {
    pub const HOME: &str = "home";
    pub const ISSUES: &str = "issues-dashboard";
    pub const PULL_REQUESTS: &str = "pull-requests-dashboard";
    pub const NEWCOMERS: &str = "newcomers-dashboard";
    pub const ENGAGEMENT: &str = "engagement-dashboard";
    pub const CUSTOM: &str = "custom-dashboard";
}

/// View ids
pub mod views {
    pub const REPO_GRID: &str = "RepoGrid";
    pub const ISSUES: &str = "IssuesDashboard";
    pub const PULL_REQUESTS: &str = "PullRequestDashboard";
    pub const NEWCOMERS: &str = "NewcomersDashboard";
    pub const ENGAGEMENT: &str = "EngagementDashboard";
    pub const CUSTOM: &str = "CustomDashboard";
}

/// Route definitions in match order
pub fn dashboard_routes() -> Vec<RouteDefinition> {
    vec![
        RouteDefinition::new(names::HOME, "/", views::REPO_GRID).with_title("Repositories"),
        RouteDefinition::new(names::ISSUES, "/repos/:owner/:repo/issues", views::ISSUES)
            .with_props()
            .with_title("Issues"),
        RouteDefinition::new(
            names::PULL_REQUESTS,
            "/repos/:owner/:repo/pullRequests",
            views::PULL_REQUESTS,
        )
        .with_props()
        .with_title("Pull Requests"),
        RouteDefinition::new(names::NEWCOMERS, "/repos/:owner/:repo/newcomers", views::NEWCOMERS)
            .with_props()
            .with_title("Newcomers"),
        RouteDefinition::new(
            names::ENGAGEMENT,
            "/repos/:owner/:repo/engagement",
            views::ENGAGEMENT,
        )
        .with_props()
        .with_title("Engagement"),
        RouteDefinition::new(names::CUSTOM, "/repos/:owner/:repo/builder", views::CUSTOM)
            .with_props()
            .with_title("Dashboard Builder"),
    ]
}

fn repo_view(id: &str, title: &str, description: &str) -> ViewDescriptor {
    ViewDescriptor::new(id, title)
        .with_description(description)
        .with_input("owner")
        .with_input("repo")
}

/// Views for every dashboard
pub fn dashboard_views() -> ViewRegistry {
    let mut registry = ViewRegistry::new();

    registry.register(
        ViewDescriptor::new(views::REPO_GRID, "Repositories")
            .with_description("Grid of tracked repositories"),
    );
    registry.register(repo_view(
        views::ISSUES,
        "Issues",
        "Issue throughput, resolution time and milestone progress",
    ));
    registry.register(repo_view(
        views::PULL_REQUESTS,
        "Pull Requests",
        "Pull request throughput, review latency and merge rate",
    ));
    registry.register(repo_view(
        views::NEWCOMERS,
        "Newcomers",
        "First-time contributors and their retention",
    ));
    registry.register(repo_view(
        views::ENGAGEMENT,
        "Engagement",
        "Comments, reactions and contributor activity",
    ));
    registry.register(repo_view(
        views::CUSTOM,
        "Dashboard Builder",
        "User-assembled dashboard of selected widgets",
    ));

    registry
}

/// Build the application router over a host
pub fn dashboard_router<H: NavigationHost>(
    config: RouterConfig,
    host: H,
) -> Result<Router<H>, ConfigError> {
    Router::builder()
        .config(config)
        .routes(dashboard_routes())
        .views(dashboard_views())
        .build_with_host(host)
}
