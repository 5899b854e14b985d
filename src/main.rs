use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hrdesk::actions::ResourceActions;
use hrdesk::config::Config;
use hrdesk::gateway::Gateway;
use hrdesk::store::Store;

/// Client core for the HR/banking administration tool.
#[derive(Debug, Parser)]
#[command(name = "hrdesk", version)]
struct Args {
    /// Path to a TOML config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the backend base URL.
    #[arg(long)]
    base_url: Option<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
        config.validate()?;
    }

    let store = Arc::new(Store::new());
    let gateway = Gateway::new(&config);
    let roles = ResourceActions::new(store.clone(), gateway.role.clone());
    let employees = ResourceActions::new(store.clone(), gateway.employee.clone());
    let banking = ResourceActions::new(store.clone(), gateway.banking.clone());

    info!(base_url = %config.base_url, "fetching initial data");
    tokio::join!(roles.get(), employees.get(), banking.get());

    let state = store.state();
    info!(
        roles = state.role.get_result.success_data().map_or(0, Vec::len),
        employees = state.employee.get_result.success_data().map_or(0, Vec::len),
        bank_entries = state.banking.get_result.success_data().map_or(0, Vec::len),
        "initial fetch complete"
    );

    Ok(())
}
