//! Dashboard service entry point

use clap::Parser;
use shared::logging;
use tokio::signal;

use curator::MemoryCache;
use dashboard::{DashboardArgs, DashboardResult, DashboardServer, DashboardState};

const SERVICE: &str = "dashboard";

#[tokio::main]
async fn main() -> DashboardResult<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let args = DashboardArgs::parse();
    logging::init_tracing(Some(&args.log_level));

    let config = match args.art_config() {
        Ok(config) => config,
        Err(e) => {
            logging::log_error(SERVICE, "Loading art configuration", &e);
            return Err(e);
        }
    };
    let bind_address = args.bind_address()?;

    let sources: Vec<String> = config
        .enabled_sources()
        .map(|s| format!("{} ({})", s.key, s.weight))
        .collect();
    logging::log_startup(
        SERVICE,
        &format!(
            "dashboard on {} with pool size {} from {}",
            bind_address,
            config.pool_size,
            sources.join(", ")
        ),
    );

    let cache = MemoryCache::new();
    let janitor = cache.spawn_janitor(args.cache_purge_interval());

    let state = DashboardState::from_config(config, cache)?;
    let server = DashboardServer::new(state, bind_address);

    server.run(shutdown_signal()).await?;
    janitor.abort();

    logging::log_success(SERVICE, "Dashboard stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(SERVICE, "Received Ctrl+C signal"),
        Err(err) => logging::log_error(SERVICE, "Signal handling", &err),
    }
}
