//! Terminal output for routes, mounted views and history

use crate::session::StepOutcome;
use colored::Colorize;
use repolens_core::router::NavigationHistory;
use repolens_core::{MountedView, Router, ViewRegistry};
use serde::Serialize;

/// One row of the route table listing
#[derive(Debug, Serialize)]
pub struct RouteRow<'a> {
    pub name: &'a str,
    pub pattern: &'a str,
    pub view: &'a str,
    pub props: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
}

/// Collect the route table in declaration order
pub fn route_rows<H>(router: &Router<H>) -> Vec<RouteRow<'_>>
where
    H: repolens_core::NavigationHost,
{
    router
        .routes()
        .iter()
        .map(|route| {
            let definition = &route.definition;
            RouteRow {
                name: definition.name.as_str(),
                pattern: route.pattern.as_str(),
                view: definition.view.as_str(),
                props: if definition.props {
                    route.pattern.param_names().collect()
                } else {
                    Vec::new()
                },
                title: definition.title.as_deref(),
            }
        })
        .collect()
}

/// Print the route table as aligned columns
pub fn print_route_table(rows: &[RouteRow<'_>]) {
    let name_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
    let pattern_width = rows.iter().map(|r| r.pattern.len()).max().unwrap_or(0);

    for row in rows {
        let props = if row.props.is_empty() {
            "none".to_string()
        } else {
            row.props.join(", ")
        };
        println!(
            "{:<name_width$}  {:<pattern_width$}  {}  [{}]",
            row.name.bold(),
            row.pattern,
            row.view.cyan(),
            props.dimmed(),
        );
    }
}

/// Describe a mounted view on one line
pub fn format_mounted(mounted: &MountedView, url: &str) -> String {
    let props = if mounted.props.is_empty() {
        String::new()
    } else {
        format!(" ({})", mounted.props)
    };
    format!(
        "{} {}{}  {}",
        "▶".green(),
        mounted.view.id.as_str().bold(),
        props,
        url.dimmed()
    )
}

/// Print the result of applying a step
pub fn print_outcome(outcome: &StepOutcome) {
    match outcome {
        StepOutcome::Mounted { view, url } => println!("{}", format_mounted(view, url)),
        StepOutcome::NotFound { path } => println!(
            "{} No route matches '{}'; showing the fallback view",
            "✖".red(),
            path
        ),
        StepOutcome::Invalid { target, reason } => {
            println!("{} Invalid target '{}': {}", "✖".red(), target, reason)
        }
        StepOutcome::NoHistory => println!("{} No history entry in that direction", "•".yellow()),
    }
}

/// Print the history with a marker on the current entry
pub fn print_history(history: &NavigationHistory) {
    for (index, entry) in history.entries().iter().enumerate() {
        let marker = if index == history.position() { "→" } else { " " };
        println!(
            "{} {:>2}. {:<24} {}",
            marker.green(),
            index + 1,
            entry.route.name.as_str(),
            entry.route.full_path().dimmed()
        );
    }
}

/// Print the registered views
pub fn print_views(views: &ViewRegistry) {
    for view in views.list() {
        println!("{}  {}", view.id.as_str().cyan(), view.title.bold());
        if !view.description.is_empty() {
            println!("   {}", view.description);
        }
    }
}
