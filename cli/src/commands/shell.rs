//! Interactive navigation shell

use crate::config::CliConfigLoader;
use crate::output::{print_history, print_outcome, print_route_table, route_rows};
use crate::session::{Session, Step};
use anyhow::Result;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};

const HELP: &str = "\
Commands:
  <path>            navigate to a path, e.g. /repos/acme/widget/issues
  replace:<path>    navigate, replacing the current history entry
  back | forward    move through history
  params            show the current route params
  history           show the navigation history
  routes            show the route table
  help              show this help
  quit              leave the shell";

/// Read steps from stdin until EOF or `quit`
pub async fn shell_command(config_loader: CliConfigLoader) -> Result<()> {
    info!("Starting navigation shell");

    let config = config_loader.load().await?;
    let mut session = Session::start(config)?;

    println!("{}", "repolens shell - type 'help' for commands".bold());
    print_outcome(&session.mounted());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        debug!(input = line, "Shell input");

        match line {
            "" => continue,
            "quit" | "exit" => break,
            "help" => println!("{}", HELP),
            "params" => {
                let params = session.router().current_params();
                if params.is_empty() {
                    println!("(none)");
                } else {
                    println!("{}", params);
                }
            }
            "history" => print_history(session.router().state().history()),
            "routes" => print_route_table(&route_rows(session.router())),
            other => match other.parse::<Step>() {
                Ok(step) => print_outcome(&session.apply(&step)),
                Err(e) => println!("{} {}", "✖".red(), e),
            },
        }
    }

    Ok(())
}
