//! Application pipeline: load the catalog, then render every enabled chart.

use crate::error::{AppError, AppResult};
use reelgraph_config::Config;
use reelgraph_graphs::{Catalog, GraphManager, RunSummary};
use std::sync::Arc;
use tracing::{info, info_span};

/// The delimiter as one byte. Non-ASCII characters would split UTF-8 input.
fn delimiter_byte(delimiter: char) -> AppResult<u8> {
    u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(AppError::Delimiter(delimiter))
}

/// The reelgraph application.
pub struct ReelGraphApp {
    config: Arc<Config>,
}

impl ReelGraphApp {
    /// Creates an application from validated configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reads the configured catalog file.
    ///
    /// A missing required column aborts here, before any chart is drawn.
    pub fn load_catalog(&self) -> AppResult<Catalog> {
        let delimiter = self.config.data.delimiter;
        let delimiter = delimiter_byte(delimiter)?;
        Ok(Catalog::from_path(&self.config.data.path, delimiter)?)
    }

    /// Loads the catalog and renders the charts.
    pub fn run(&self) -> AppResult<RunSummary> {
        let span = info_span!("run", data = %self.config.data.path.display());
        let _enter = span.enter();

        let catalog = self.load_catalog()?;
        let manager = GraphManager::new(&self.config);
        let summary = manager.run(&catalog)?;

        info!(
            output = %self.config.output.directory.display(),
            charts = summary.rendered.len(),
            "all charts written"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_byte() {
        assert_eq!(delimiter_byte(',').unwrap(), b',');
        assert_eq!(delimiter_byte('\t').unwrap(), b'\t');
        assert!(matches!(delimiter_byte('é'), Err(AppError::Delimiter('é'))));
        assert!(matches!(delimiter_byte('→'), Err(AppError::Delimiter('→'))));
    }
}
