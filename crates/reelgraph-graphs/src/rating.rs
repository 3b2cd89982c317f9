//! Audience rating codes and their coarse buckets.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Runtime values such as "74 min" that leaked into the rating column.
static RUNTIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\s*min$").expect("Invalid runtime regex pattern"));

/// Coarse audience category.
///
/// Variants are declared in label order so sorted output matches sorted labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RatingBucket {
    /// Suitable for all ages.
    GeneralAudience,
    /// Any code missing from the lookup table.
    Others,
    /// Parental guidance suggested.
    ParentalGuidance,
    /// Restricted or mature audiences.
    Mature,
    /// Explicitly unrated.
    Unrated,
}

/// Lookup table from rating code to bucket. Codes not listed map to `Others`.
static RATING_TABLE: Lazy<HashMap<&'static str, RatingBucket>> = Lazy::new(|| {
    use RatingBucket::{GeneralAudience, Mature, ParentalGuidance, Unrated};

    HashMap::from([
        ("TV-Y", GeneralAudience),
        ("TV-Y7", GeneralAudience),
        ("TV-Y7-FV", GeneralAudience),
        ("TV-G", GeneralAudience),
        ("G", GeneralAudience),
        ("PG", ParentalGuidance),
        ("PG-13", ParentalGuidance),
        ("TV-PG", ParentalGuidance),
        ("TV-14", Mature),
        ("R", Mature),
        ("TV-MA", Mature),
        ("NC-17", Mature),
        ("NR", Unrated),
        ("UR", Unrated),
    ])
});

impl RatingBucket {
    /// Every bucket, in label order.
    pub const ALL: [Self; 5] = [
        Self::GeneralAudience,
        Self::Others,
        Self::ParentalGuidance,
        Self::Mature,
        Self::Unrated,
    ];

    /// Bucket for a rating code; total over all strings.
    pub fn from_code(code: &str) -> Self {
        RATING_TABLE.get(code).copied().unwrap_or(Self::Others)
    }

    /// Human-readable label shown in the chart.
    pub const fn label(self) -> &'static str {
        match self {
            Self::GeneralAudience => "General Audience (All Ages)",
            Self::Others => "Others",
            Self::ParentalGuidance => "Parental Guidance Suggested",
            Self::Mature => "Restricted / Mature (17+)",
            Self::Unrated => "Unrated / Not Classified",
        }
    }
}

impl fmt::Display for RatingBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a rating cell actually holds a runtime like "66 min".
pub fn is_runtime_string(value: &str) -> bool {
    RUNTIME_PATTERN.is_match(value)
}

/// Bucket for a raw rating cell, or `None` when the cell is a runtime string.
pub fn classify_rating(value: &str) -> Option<RatingBucket> {
    if is_runtime_string(value) {
        None
    } else {
        Some(RatingBucket::from_code(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_table() {
        assert_eq!(RatingBucket::from_code("TV-Y7-FV"), RatingBucket::GeneralAudience);
        assert_eq!(RatingBucket::from_code("PG-13"), RatingBucket::ParentalGuidance);
        assert_eq!(RatingBucket::from_code("NC-17"), RatingBucket::Mature);
        assert_eq!(RatingBucket::from_code("UR"), RatingBucket::Unrated);
        assert_eq!(RatingBucket::from_code("tv-ma"), RatingBucket::Others);
        assert_eq!(RatingBucket::from_code(""), RatingBucket::Others);
    }

    #[test]
    fn test_runtime_strings() {
        assert!(is_runtime_string("74 min"));
        assert!(is_runtime_string("66min"));
        assert!(!is_runtime_string("TV-MA"));
        assert!(!is_runtime_string("about 74 min"));
        assert!(!is_runtime_string("74 minutes"));
        assert_eq!(classify_rating("84 min"), None);
        assert_eq!(classify_rating("R"), Some(RatingBucket::Mature));
    }

    #[test]
    fn test_labels_sorted_like_variants() {
        let labels: Vec<&str> = RatingBucket::ALL.iter().map(|b| b.label()).collect();
        let mut sorted = labels.clone();
        sorted.sort_unstable();
        assert_eq!(labels, sorted);
    }
}
