pub mod ai;
pub mod commands;
pub mod config;

use crate::config::{default_config_path, FloweyConfig};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("flowey_engine=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run() -> anyhow::Result<()> {
    init_tracing();

    let config_path = default_config_path();
    let config = FloweyConfig::load(&config_path);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(commands::console::run_console(config));
    // stdin reads park a blocking thread; don't wait for it on exit.
    runtime.shutdown_background();
    result
}
