//! Single path resolution command

use crate::config::CliConfigLoader;
use anyhow::Result;
use colored::Colorize;
use repolens_core::{dashboard_router, dashboard_views, MemoryHost, Resolution};
use serde_json::json;
use tracing::info;

/// Resolve one path without navigating. Returns whether a route matched.
pub async fn resolve_command(config_loader: CliConfigLoader, path: String, json: bool) -> Result<bool> {
    info!("Resolving path: {}", path);

    let config = config_loader.load().await?;
    let router = dashboard_router(config, MemoryHost::new())?;

    match router.resolve(&path) {
        Resolution::Found(route) => {
            let views = dashboard_views();
            let mounted = views.mount(&route);

            if json {
                let value = json!({
                    "route": route,
                    "view": mounted.as_ref().map(|m| &m.view),
                    "props": route.view_props(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{} {}", "route:".bold(), route.name.as_str());
                println!("{} {}", "view: ".bold(), route.view.as_str().cyan());
                if route.params.is_empty() {
                    println!("{} none", "params:".bold());
                } else {
                    println!("{} {}", "params:".bold(), route.params);
                }
                for (key, value) in route.query_pairs() {
                    println!("{} {}={}", "query:".bold(), key, value);
                }
                println!(
                    "{} {}",
                    "props:".bold(),
                    if route.props { "forwarded" } else { "not forwarded" }
                );
            }
            Ok(true)
        }
        Resolution::NotFound { path } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&json!({ "not_found": path }))?);
            } else {
                println!("{} No route matches '{}'", "✖".red(), path);
            }
            Ok(false)
        }
    }
}
