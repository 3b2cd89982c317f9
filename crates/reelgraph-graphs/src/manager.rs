//! Runs the enabled analyses in order and writes one PNG per chart.

use crate::catalog::Catalog;
use crate::collaborators::Collaborators;
use crate::content_trend::ContentTrend;
use crate::country_ranking::CountryRanking;
use crate::freshness_heatmap::FreshnessHeatmap;
use crate::genre_evolution::GenreEvolution;
use crate::rating_distribution::RatingDistribution;
use crate::traits::ContentGraph;
use crate::types::GraphStyle;
use reelgraph_common::{ContentRecord, GraphKind, ReelGraphError, Result};
use reelgraph_config::{AnnotationsConfig, Config, LimitsConfig};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, info_span, warn};

/// Outcome of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Charts written, in pipeline order.
    pub rendered: Vec<(GraphKind, PathBuf)>,
    /// Enabled charts that had nothing to draw.
    pub skipped: Vec<GraphKind>,
}

impl RunSummary {
    /// Paths of the written charts.
    pub fn paths(&self) -> Vec<&Path> {
        self.rendered.iter().map(|(_, path)| path.as_path()).collect()
    }
}

/// Builds and renders the enabled charts from one catalog.
#[derive(Debug, Clone)]
pub struct GraphManager {
    style: GraphStyle,
    output_dir: PathBuf,
    enabled: Vec<GraphKind>,
    limits: LimitsConfig,
    annotations: AnnotationsConfig,
}

impl GraphManager {
    /// Creates a manager from validated configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            style: GraphStyle::from_config(config),
            output_dir: config.output.directory.clone(),
            enabled: config.graphs.enabled.enabled_kinds(),
            limits: config.graphs.limits.clone(),
            annotations: config.graphs.annotations.clone(),
        }
    }

    /// Charts this manager will produce, in pipeline order.
    pub fn enabled_kinds(&self) -> &[GraphKind] {
        &self.enabled
    }

    /// Where the chart of `kind` is written.
    pub fn output_path(&self, kind: GraphKind) -> PathBuf {
        self.output_dir.join(kind.file_name())
    }

    /// Runs one analysis over the rows.
    pub fn analyze(&self, kind: GraphKind, records: &[ContentRecord]) -> Box<dyn ContentGraph> {
        match kind {
            GraphKind::ContentTrend => Box::new(
                ContentTrend::from_records(records)
                    .with_caption(self.annotations.trend_caption()),
            ),
            GraphKind::CountryRanking => Box::new(CountryRanking::from_records(
                records,
                self.limits.top_countries,
            )),
            GraphKind::RatingDistribution => Box::new(
                RatingDistribution::from_records(records)
                    .with_caption(self.annotations.rating_caption()),
            ),
            GraphKind::GenreEvolution => Box::new(GenreEvolution::from_records(
                records,
                self.limits.top_genres,
            )),
            GraphKind::Collaborators => {
                Box::new(Collaborators::from_records(records, self.limits.top_cast))
            }
            GraphKind::FreshnessHeatmap => Box::new(FreshnessHeatmap::from_records(records)),
        }
    }

    /// Runs every enabled analysis without rendering.
    pub fn analyze_all(&self, catalog: &Catalog) -> Vec<Box<dyn ContentGraph>> {
        self.enabled
            .iter()
            .map(|kind| self.analyze(*kind, catalog.records()))
            .collect()
    }

    /// Analyzes and renders every enabled chart in order.
    ///
    /// A chart with no data after cleaning is skipped with a warning. Any
    /// rendering failure stops the run.
    pub fn run(&self, catalog: &Catalog) -> Result<RunSummary> {
        std::fs::create_dir_all(&self.output_dir).map_err(|e| {
            ReelGraphError::with_source(
                format!(
                    "cannot create output directory {}",
                    self.output_dir.display()
                ),
                e,
            )
        })?;

        let mut summary = RunSummary::default();
        for kind in &self.enabled {
            let span = info_span!("graph", graph = %kind);
            let _enter = span.enter();
            let started = Instant::now();

            let graph = self.analyze(*kind, catalog.records());
            if graph.is_empty() {
                warn!("no data left after cleaning, skipping chart");
                summary.skipped.push(*kind);
                continue;
            }

            let path = self.output_path(*kind);
            graph.render_to_file(&self.style, &path)?;
            info!(elapsed_ms = started.elapsed().as_millis() as u64, "chart complete");
            summary.rendered.push((*kind, path));
        }

        info!(
            rendered = summary.rendered.len(),
            skipped = summary.skipped.len(),
            "graph generation finished"
        );
        Ok(summary)
    }
}
