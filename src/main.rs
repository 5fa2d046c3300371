use std::io;
use std::sync::Arc;

use tracing::info;

use larder_rs::{
    console::ConsoleApp, init_observability, repositories::InMemoryItemRepository,
    seed::seed_demo_inventory, services::InventoryService, Config,
};

fn main() -> anyhow::Result<()> {
    let config = Config::from_environment()?;

    init_observability(
        &config.observability.service_name,
        &config.observability.log_level,
        config.observability.enable_json_logging,
    )?;

    info!(
        "Starting {} v{}",
        config.observability.service_name, config.observability.service_version
    );

    let repository = Arc::new(InMemoryItemRepository::new());
    let service = InventoryService::new(repository);

    if config.app.seed_demo_data {
        seed_demo_inventory(&service)?;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = ConsoleApp::new(service, stdin.lock(), stdout.lock());
    app.run()?;

    info!("Shutdown complete");
    Ok(())
}
