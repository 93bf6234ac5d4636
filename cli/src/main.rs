//! # repolens CLI
//!
//! Command-line shell for the repolens dashboard router.
//!
//! ## Usage
//!
//! - `repolens` - Start the interactive navigation shell
//! - `repolens routes` - Show the route table
//! - `repolens resolve /repos/acme/widget/issues` - Resolve a single path
//! - `repolens href issues-dashboard -p owner=acme -p repo=widget` - Build a URL
//! - `repolens navigate / /repos/acme/widget/issues back` - Run a navigation session

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod config;
mod output;
mod session;

use commands::{href_command, navigate_command, resolve_command, routes_command, shell_command};
use config::CliConfigLoader;
use session::Step;

/// repolens - navigate repository analytics dashboards
#[derive(Parser)]
#[command(name = "repolens")]
#[command(version = repolens_core::VERSION)]
#[command(about = "Resolve and navigate repository dashboard routes")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Base path prefix override (e.g. /dashboards)
    #[arg(long, global = true)]
    base: Option<String>,

    /// Require exact trailing-slash matching
    #[arg(long, global = true)]
    strict: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the route table
    Routes {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a path to its route and params
    Resolve {
        /// Path to resolve, relative to the base
        path: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build the URL for a named route
    Href {
        /// Route name, e.g. issues-dashboard
        name: String,

        /// Route param as key=value (repeatable)
        #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },

    /// Run a navigation session: paths, `back`, `forward` or `replace:<path>`
    Navigate {
        #[arg(required = true, value_parser = parse_step)]
        steps: Vec<Step>,
    },

    /// Start the interactive navigation shell
    Shell,
}

fn parse_key_val(s: &str) -> Result<(String, String)> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| anyhow!("expected key=value, got '{}'", s))?;
    Ok((key.to_string(), value.to_string()))
}

fn parse_step(s: &str) -> Result<Step> {
    Ok(s.parse::<Step>()?)
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(base) = &cli.base {
        loader = loader.with_base_override(base.clone());
    }

    if cli.strict {
        loader = loader.with_strict_override(true);
    }

    loader
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    repolens_core::init_tracing_with_debug(cli.verbose);

    let config_loader = build_config_loader(&cli);

    match cli.command {
        Some(Commands::Routes { json }) => routes_command(config_loader, json).await?,
        Some(Commands::Resolve { path, json }) => {
            if !resolve_command(config_loader, path, json).await? {
                return Ok(ExitCode::from(2));
            }
        }
        Some(Commands::Href { name, params }) => href_command(config_loader, name, params).await?,
        Some(Commands::Navigate { steps }) => navigate_command(config_loader, steps).await?,
        // Default to the interactive shell
        Some(Commands::Shell) | None => shell_command(config_loader).await?,
    }

    Ok(ExitCode::SUCCESS)
}
