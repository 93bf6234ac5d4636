//! Reverse URL generation command

use crate::config::CliConfigLoader;
use anyhow::Result;
use repolens_core::{dashboard_router, MemoryHost, RouteParams};
use tracing::info;

/// Print the URL of a named route
pub async fn href_command(
    config_loader: CliConfigLoader,
    name: String,
    params: Vec<(String, String)>,
) -> Result<()> {
    info!("Building href for route: {}", name);

    let config = config_loader.load().await?;
    let router = dashboard_router(config, MemoryHost::new())?;
    let params: RouteParams = params.into_iter().collect();

    let href = router.href(&name, &params)?;
    println!("{}", href);

    Ok(())
}
