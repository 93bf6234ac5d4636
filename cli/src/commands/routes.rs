//! Route table listing command

use crate::config::CliConfigLoader;
use crate::output::{print_route_table, print_views, route_rows};
use anyhow::Result;
use repolens_core::{dashboard_router, dashboard_views, MemoryHost};
use tracing::info;

/// Show the route table
pub async fn routes_command(config_loader: CliConfigLoader, json: bool) -> Result<()> {
    info!("Listing routes");

    let config = config_loader.load().await?;
    let router = dashboard_router(config, MemoryHost::new())?;
    let rows = route_rows(&router);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    print_route_table(&rows);
    println!();
    print_views(&dashboard_views());

    Ok(())
}
