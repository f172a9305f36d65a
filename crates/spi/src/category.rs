//! Drought and wetness categories.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// SPI category, ordered from driest to wettest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DroughtCategory {
    ExtremelyDry,
    SeverelyDry,
    ModeratelyDry,
    ModeratelyWet,
    Wet,
    VeryWet,
}

impl DroughtCategory {
    /// All categories, driest first.
    pub const ALL: [DroughtCategory; 6] = [
        DroughtCategory::ExtremelyDry,
        DroughtCategory::SeverelyDry,
        DroughtCategory::ModeratelyDry,
        DroughtCategory::ModeratelyWet,
        DroughtCategory::Wet,
        DroughtCategory::VeryWet,
    ];

    /// Classifies a score. Thresholds are checked from wettest down and the
    /// first match wins; NaN falls through to [`ExtremelyDry`](Self::ExtremelyDry).
    pub fn classify(score: f64) -> Self {
        if score >= 2.0 {
            DroughtCategory::VeryWet
        } else if score >= 1.5 {
            DroughtCategory::Wet
        } else if score >= 0.5 {
            DroughtCategory::ModeratelyWet
        } else if score >= -0.5 {
            DroughtCategory::ModeratelyDry
        } else if score >= -1.5 {
            DroughtCategory::SeverelyDry
        } else {
            DroughtCategory::ExtremelyDry
        }
    }

    /// Inclusive lower score bound, or `None` for the open-ended driest class.
    pub fn lower_bound(self) -> Option<f64> {
        match self {
            DroughtCategory::ExtremelyDry => None,
            DroughtCategory::SeverelyDry => Some(-1.5),
            DroughtCategory::ModeratelyDry => Some(-0.5),
            DroughtCategory::ModeratelyWet => Some(0.5),
            DroughtCategory::Wet => Some(1.5),
            DroughtCategory::VeryWet => Some(2.0),
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            DroughtCategory::ExtremelyDry => "Extremely Dry",
            DroughtCategory::SeverelyDry => "Severely Dry",
            DroughtCategory::ModeratelyDry => "Moderately Dry",
            DroughtCategory::ModeratelyWet => "Moderately Wet",
            DroughtCategory::Wet => "Wet",
            DroughtCategory::VeryWet => "Very Wet",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DroughtCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of scores in each category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: [usize; 6],
}

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, category: DroughtCategory) {
        self.counts[category.index()] += 1;
    }

    pub fn get(&self, category: DroughtCategory) -> usize {
        self.counts[category.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(category, count)` for all six categories, driest first.
    pub fn iter(&self) -> impl Iterator<Item = (DroughtCategory, usize)> + '_ {
        DroughtCategory::ALL.iter().map(|&c| (c, self.get(c)))
    }
}

/// Serializes as a map from category to count, driest first.
impl Serialize for CategoryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (category, count) in self.iter() {
            map.serialize_entry(&category, &count)?;
        }
        map.end()
    }
}

impl FromIterator<DroughtCategory> for CategoryCounts {
    fn from_iter<I: IntoIterator<Item = DroughtCategory>>(iter: I) -> Self {
        let mut counts = Self::new();
        for c in iter {
            counts.add(c);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive_lower_bounds() {
        assert_eq!(DroughtCategory::classify(2.0), DroughtCategory::VeryWet);
        assert_eq!(DroughtCategory::classify(1.999), DroughtCategory::Wet);
        assert_eq!(DroughtCategory::classify(1.5), DroughtCategory::Wet);
        assert_eq!(DroughtCategory::classify(0.5), DroughtCategory::ModeratelyWet);
        assert_eq!(DroughtCategory::classify(0.0), DroughtCategory::ModeratelyDry);
        assert_eq!(DroughtCategory::classify(-0.5), DroughtCategory::ModeratelyDry);
        assert_eq!(DroughtCategory::classify(-0.51), DroughtCategory::SeverelyDry);
        assert_eq!(DroughtCategory::classify(-1.5), DroughtCategory::SeverelyDry);
        assert_eq!(DroughtCategory::classify(-1.5001), DroughtCategory::ExtremelyDry);
        assert_eq!(DroughtCategory::classify(f64::NEG_INFINITY), DroughtCategory::ExtremelyDry);
        assert_eq!(DroughtCategory::classify(f64::INFINITY), DroughtCategory::VeryWet);
    }

    #[test]
    fn partition_is_total_and_consistent_with_bounds() {
        for i in -400..=400 {
            let score = i as f64 / 100.0;
            let c = DroughtCategory::classify(score);
            // Exactly one category: score within [lower, next lower).
            let matching: Vec<_> = DroughtCategory::ALL
                .iter()
                .enumerate()
                .filter(|(k, cat)| {
                    let lo = cat.lower_bound().unwrap_or(f64::NEG_INFINITY);
                    let hi = DroughtCategory::ALL
                        .get(k + 1)
                        .and_then(|n| n.lower_bound())
                        .unwrap_or(f64::INFINITY);
                    score >= lo && score < hi
                })
                .map(|(_, cat)| *cat)
                .collect();
            assert_eq!(matching, vec![c], "score {score}");
        }
    }

    #[test]
    fn ordering_dry_to_wet() {
        assert!(DroughtCategory::ExtremelyDry < DroughtCategory::SeverelyDry);
        assert!(DroughtCategory::Wet < DroughtCategory::VeryWet);
        let mut sorted = DroughtCategory::ALL;
        sorted.sort();
        assert_eq!(sorted, DroughtCategory::ALL);
    }

    #[test]
    fn counts_cover_all_categories() {
        let counts: CategoryCounts = [0.0, 0.1, 2.5, -3.0]
            .into_iter()
            .map(DroughtCategory::classify)
            .collect();
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.get(DroughtCategory::ModeratelyDry), 2);
        assert_eq!(counts.get(DroughtCategory::Wet), 0);
        let listed: Vec<_> = counts.iter().collect();
        assert_eq!(listed.len(), 6);
        assert_eq!(listed[0], (DroughtCategory::ExtremelyDry, 1));
        assert_eq!(listed[5], (DroughtCategory::VeryWet, 1));
    }

    #[test]
    fn labels() {
        assert_eq!(DroughtCategory::SeverelyDry.to_string(), "Severely Dry");
        assert_eq!(DroughtCategory::VeryWet.label(), "Very Wet");
    }
}
