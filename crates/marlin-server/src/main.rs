use clap::Parser;
use marlin_adapter_mysql::MySqlAdapter;
use marlin_core::MarlinConfig;
use marlin_dashboard::{AppState, DashboardServer};
use marlin_privileges::checker::PrivilegeChecker;
use std::path::PathBuf;
use std::sync::Arc;

/// Marlin - stored-program administration console for MySQL.
#[derive(Debug, Parser)]
#[command(name = "marlin-server", version)]
struct Args {
    /// Path to the configuration file.
    #[arg(long, default_value = "marlin.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let config = MarlinConfig::load(&args.config)?;

    if !config.dashboard.enabled {
        anyhow::bail!("dashboard is disabled in {}", args.config.display());
    }

    let adapter = Arc::new(MySqlAdapter::new(&config.upstream.connection_string()).await?);
    let privileges = Arc::new(adapter.grant_checker().await?);
    tracing::info!(user = %privileges.current_user(), "connected to upstream");

    let state = AppState::new(config.clone(), adapter, privileges);
    DashboardServer::new(config.dashboard, state).run().await?;

    Ok(())
}
