//! Location and date sub-scores, and the fixed composite weighting.
//!
//! All sub-scores land in [0.0, 1.0]; the combined score is their fixed
//! weighted sum, so it stays in [0.0, 1.0] as well.

use ahash::AHashSet;
use chrono::{DateTime, Utc};

pub const TEXT_WEIGHT: f64 = 0.6;
pub const LOCATION_WEIGHT: f64 = 0.3;
pub const DATE_WEIGHT: f64 = 0.1;

/// Fixed weighted sum of the three sub-scores.
pub fn combine(text: f64, location: f64, date: f64) -> f64 {
    TEXT_WEIGHT * text + LOCATION_WEIGHT * location + DATE_WEIGHT * date
}

/// Fuzzy location match.
///
/// Normalizes both sides (trim + lowercase), then: exact match -> 1.0,
/// one side containing the other -> 0.8, otherwise Jaccard overlap of the
/// whitespace-split words. A missing location on either side scores 0.0.
pub fn location_score(a: Option<&str>, b: Option<&str>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0.0;
    };

    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a == b {
        return 1.0;
    }
    if a.contains(&b) || b.contains(&a) {
        return 0.8;
    }

    let words_a: AHashSet<&str> = a.split_whitespace().collect();
    let words_b: AHashSet<&str> = b.split_whitespace().collect();
    if words_a.is_empty() && words_b.is_empty() {
        return 1.0;
    }
    if words_a.is_empty() || words_b.is_empty() {
        return 0.0;
    }

    let intersection = words_a.intersection(&words_b).count();
    let union = words_a.union(&words_b).count();
    intersection as f64 / union as f64
}

/// Temporal proximity of the two event timestamps.
///
/// The absolute whole-day difference maps through a stepped decay; a
/// missing timestamp on either side scores 0.0.
pub fn date_score(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0.0;
    };

    match (a - b).num_days().abs() {
        0 => 1.0,
        1 => 0.9,
        2..=3 => 0.7,
        4..=7 => 0.5,
        8..=14 => 0.3,
        15..=30 => 0.1,
        _ => 0.0,
    }
}
