//! Composite ranking of found candidates against a lost record.
//!
//! Produces [`MatchResult`]s: a snapshot of the candidate's display fields
//! plus the three sub-scores and their fixed weighted sum. Candidates with
//! a combined score of zero are discarded; the survivors are sorted by
//! score descending (found id ascending on ties) and truncated to the top
//! [`MAX_RESULTS`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use matchx_core::{cosine, jaccard, TfIdfModel};

use crate::item::ItemRecord;
use crate::scoring::{combine, date_score, location_score};

/// Upper bound on the result list length.
pub const MAX_RESULTS: usize = 10;

/// How the text sub-score is computed, chosen once per ranking call.
///
/// `TfIdfCosine` when a usable model snapshot exists, `Jaccard` otherwise.
/// The choice is made up front - no per-candidate failure dispatch.
#[derive(Debug, Clone)]
pub enum TextScoreStrategy {
    TfIdfCosine(Arc<TfIdfModel>),
    Jaccard,
}

impl TextScoreStrategy {
    /// Text similarity of two descriptions under this strategy.
    ///
    /// A missing or blank description on either side scores exactly 0.0
    /// regardless of strategy.
    pub fn score(&self, lost: Option<&str>, found: Option<&str>) -> f64 {
        let (Some(lost), Some(found)) = (lost, found) else {
            return 0.0;
        };
        if lost.trim().is_empty() || found.trim().is_empty() {
            return 0.0;
        }
        match self {
            Self::TfIdfCosine(model) => cosine(&model.transform(lost), &model.transform(found)),
            Self::Jaccard => jaccard(lost, found),
        }
    }
}

/// One ranked candidate: found-item snapshot, finder contact, scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub found_item_id: i64,
    pub found_item_title: String,
    pub found_item_description: Option<String>,
    pub found_item_category: String,
    pub found_item_location: Option<String>,
    pub found_item_date: Option<DateTime<Utc>>,
    pub found_item_image_path: Option<String>,
    pub found_item_created_at: Option<DateTime<Utc>>,
    pub found_by_user_name: Option<String>,
    pub found_by_user_email: Option<String>,
    pub found_by_user_phone: Option<String>,
    pub match_score: f64,
    pub text_similarity: f64,
    pub location_score: f64,
    pub date_score: f64,
}

/// Scores, filters, sorts and truncates a candidate batch.
pub struct Ranker {
    strategy: TextScoreStrategy,
}

impl Ranker {
    pub fn new(strategy: TextScoreStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &TextScoreStrategy {
        &self.strategy
    }

    /// Rank candidates against the lost record.
    ///
    /// Per-candidate scoring is data-parallel; the final order does not
    /// depend on evaluation order because the sort key (score descending,
    /// then found id ascending) is total.
    pub fn rank(&self, lost: &ItemRecord, candidates: Vec<ItemRecord>) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = candidates
            .into_par_iter()
            .map(|found| self.score_candidate(lost, found))
            .filter(|result| result.match_score > 0.0)
            .collect();

        results.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.found_item_id.cmp(&b.found_item_id))
        });
        results.truncate(MAX_RESULTS);
        results
    }

    fn score_candidate(&self, lost: &ItemRecord, found: ItemRecord) -> MatchResult {
        let text_similarity = self
            .strategy
            .score(lost.description.as_deref(), found.description.as_deref());
        let location = location_score(lost.location.as_deref(), found.location.as_deref());
        let date = date_score(lost.occurred_at, found.occurred_at);
        let match_score = combine(text_similarity, location, date);

        let (user_name, user_email, user_phone) = match found.reported_by {
            Some(contact) => (Some(contact.name), Some(contact.email), contact.phone),
            None => (None, None, None),
        };

        MatchResult {
            found_item_id: found.id,
            found_item_title: found.title,
            found_item_description: found.description,
            found_item_category: found.category,
            found_item_location: found.location,
            found_item_date: found.occurred_at,
            found_item_image_path: found.image_path,
            found_item_created_at: found.created_at,
            found_by_user_name: user_name,
            found_by_user_email: user_email,
            found_by_user_phone: user_phone,
            match_score,
            text_similarity,
            location_score: location,
            date_score: date,
        }
    }
}
