//! Main entry point for reelgraph.

use reelgraph::{AppResult, ReelGraphApp};
use reelgraph_common::{init_default_logging, init_logging};
use reelgraph_config::ConfigLoader;
use tracing::{error, info};

fn main() -> AppResult<()> {
    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(e) => {
            // No configured logging yet; report with the defaults.
            init_default_logging()?;
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    init_logging(&config.logging)?;

    info!("Starting reelgraph");

    let app = ReelGraphApp::new(config);
    if let Err(e) = app.run() {
        error!("Chart generation failed: {}", e);
        return Err(e);
    }

    Ok(())
}
