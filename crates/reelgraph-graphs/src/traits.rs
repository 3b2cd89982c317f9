//! Chart trait implemented by every analysis.

use crate::types::GraphStyle;
use plotters::coord::Shift;
use plotters::prelude::*;
use reelgraph_common::{GraphKind, ReelGraphError, Result};
use std::path::Path;
use tracing::info;

/// Drawing area backed by the bitmap backend, as handed to [`ContentGraph::draw`].
pub type BitMapArea<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// An aggregated analysis that knows how to draw itself.
///
/// Implementors hold only derived data; building one never touches the
/// shared catalog again.
pub trait ContentGraph {
    /// Which of the six charts this is.
    fn kind(&self) -> GraphKind;

    /// Chart title.
    fn title(&self) -> &'static str;

    /// Whether cleaning left nothing to draw.
    fn is_empty(&self) -> bool;

    /// Draws onto an area already filled with the background color.
    fn draw(&self, root: &BitMapArea<'_>, style: &GraphStyle) -> Result<()>;

    /// Renders the chart to a PNG file.
    fn render_to_file(&self, style: &GraphStyle, path: &Path) -> Result<()> {
        if self.is_empty() {
            return Err(ReelGraphError::graph(format!(
                "No data available for {} chart",
                self.kind()
            )));
        }

        let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
        root.fill(&style.background)?;
        self.draw(&root, style)?;
        root.present().map_err(|e| {
            ReelGraphError::graph_with_source(format!("cannot write {}", path.display()), e)
        })?;

        info!(graph = %self.kind(), path = %path.display(), "rendered chart");
        Ok(())
    }

    /// Renders the chart into a raw RGB buffer of `width * height * 3` bytes.
    fn render_to_buffer(&self, style: &GraphStyle) -> Result<Vec<u8>> {
        if self.is_empty() {
            return Err(ReelGraphError::graph(format!(
                "No data available for {} chart",
                self.kind()
            )));
        }

        let mut buffer = vec![0u8; style.width as usize * style.height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
                .into_drawing_area();
            root.fill(&style.background)?;
            self.draw(&root, style)?;
            root.present()?;
        }
        Ok(buffer)
    }
}
