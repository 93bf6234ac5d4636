//! Scripted navigation session command

use crate::config::CliConfigLoader;
use crate::output::{print_history, print_outcome};
use crate::session::{Session, Step};
use anyhow::Result;
use colored::Colorize;
use tracing::info;

/// Apply each step in order, printing the mounted view after each one
pub async fn navigate_command(config_loader: CliConfigLoader, steps: Vec<Step>) -> Result<()> {
    info!("Running navigation session with {} steps", steps.len());

    let config = config_loader.load().await?;
    let mut session = Session::start(config)?;

    for step in &steps {
        println!("{} {}", "$".dimmed(), step);
        let outcome = session.apply(step);
        print_outcome(&outcome);
    }

    println!();
    println!("{}", "History".bold());
    print_history(session.router().state().history());

    Ok(())
}
