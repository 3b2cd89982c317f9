//! Most frequent cast members as a word cloud.

use crate::palette::TAB10;
use crate::reshape::{count_values, explode, top_k, MultiValueField};
use crate::traits::{BitMapArea, ContentGraph};
use crate::types::GraphStyle;
use crate::wordcloud::{layout_words, WordCloudConfig};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use reelgraph_common::{ContentRecord, GraphKind, Result};
use tracing::{debug, warn};

/// Appearances of one cast member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastCount {
    /// Cast member name.
    pub name: String,
    /// Titles they appear in.
    pub count: u32,
}

/// The most frequent cast members, most frequent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collaborators {
    /// Ranked cast members.
    pub entries: Vec<CastCount>,
}

impl Collaborators {
    /// Counts every cast member across all titles and keeps the `limit` most frequent.
    pub fn from_records(records: &[ContentRecord], limit: usize) -> Self {
        let counts = count_values(
            explode(records, MultiValueField::Cast)
                .into_iter()
                .map(|row| row.value),
        );
        let entries: Vec<CastCount> = top_k(&counts, limit)
            .into_iter()
            .map(|(name, count)| CastCount {
                name: name.to_string(),
                count,
            })
            .collect();

        debug!(distinct = counts.len(), kept = entries.len(), "ranked cast members");
        Self { entries }
    }

    /// Appearances of a cast member, if ranked.
    pub fn count_of(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.count)
    }

    fn frequencies(&self) -> Vec<(String, u32)> {
        self.entries
            .iter()
            .map(|entry| (entry.name.clone(), entry.count))
            .collect()
    }
}

impl ContentGraph for Collaborators {
    fn kind(&self) -> GraphKind {
        GraphKind::Collaborators
    }

    fn title(&self) -> &'static str {
        "Most Frequent Collaborators (Actors)"
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn draw(&self, root: &BitMapArea<'_>, style: &GraphStyle) -> Result<()> {
        let area = root.titled(self.title(), style.title_font())?;
        let area = area.margin(
            style.margins.outer,
            style.margins.outer,
            style.margins.outer,
            style.margins.outer,
        );
        let (width, height) = area.dim_in_pixel();

        let config = WordCloudConfig {
            width,
            height,
            max_font_size: (height / 6).max(style.label_font_size),
            min_font_size: style.label_font_size.saturating_sub(6).max(8),
            ..WordCloudConfig::default()
        };
        let family = style.font_family.as_str();

        let layout = layout_words(&self.frequencies(), &config, |text, size| {
            let font = (family, size).into_font();
            Ok(area.estimate_text_size(text, &font.into())?)
        })?;

        if !layout.skipped.is_empty() {
            warn!(skipped = layout.skipped.len(), "some cast members did not fit the cloud");
        }

        for word in &layout.placed {
            let color = TAB10[word.rank % TAB10.len()];
            area.draw(&Text::new(
                word.text.as_str(),
                (word.x, word.y),
                TextStyle {
                    font: (family, word.font_size).into_font(),
                    color: color.to_backend_color(),
                    pos: Pos::new(HPos::Left, VPos::Top),
                },
            ))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelgraph_common::test_utils::{catalog_fixtures, create_temp_dir, RecordBuilder};

    #[test]
    fn test_counts_across_titles() {
        let records = vec![
            RecordBuilder::movie("a").cast("Anupam Kher, Shah Rukh Khan").build(),
            RecordBuilder::movie("b").cast("Anupam Kher").build(),
            RecordBuilder::show("c").cast(" Anupam Kher ,Om Puri").build(),
            RecordBuilder::show("d").build(),
        ];

        let collaborators = Collaborators::from_records(&records, 50);

        assert_eq!(collaborators.entries[0].name, "Anupam Kher");
        assert_eq!(collaborators.count_of("Anupam Kher"), Some(3));
        assert_eq!(collaborators.count_of("Om Puri"), Some(1));
        assert_eq!(collaborators.entries.len(), 3);
    }

    #[test]
    fn test_limit_and_tie_order() {
        let collaborators = Collaborators::from_records(&catalog_fixtures::mixed_catalog(), 3);

        let names: Vec<&str> = collaborators.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Ama Qamata", "Gail Mabalane", "Khosi Ngema"]);
    }

    #[test]
    fn test_no_cast_is_empty() {
        let collaborators = Collaborators::from_records(&catalog_fixtures::two_movie_rows(), 50);
        assert!(collaborators.is_empty());
    }

    #[test]
    fn test_render_to_file() {
        let dir = create_temp_dir();
        let path = dir.path().join("collaborators.png");
        let collaborators = Collaborators::from_records(&catalog_fixtures::mixed_catalog(), 50);

        collaborators.render_to_file(&GraphStyle::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_render_single_name() {
        let dir = create_temp_dir();
        let path = dir.path().join("single_name.png");
        let collaborators =
            Collaborators::from_records(&[RecordBuilder::movie("a").cast("Om Puri").build()], 50);

        collaborators.render_to_file(&GraphStyle::default(), &path).unwrap();
        assert!(path.exists());
    }
}
