//! The match engine: request orchestration over the store boundary.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::model::{ModelCell, ModelState};
use crate::ranker::{MatchResult, Ranker, TextScoreStrategy};
use crate::store::{DateWindow, ItemStore};

/// A match query: which lost item, and optional candidate filters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub lost_item_id: i64,
    #[serde(default)]
    pub location_filter: Option<String>,
    #[serde(default)]
    pub days_before: Option<i64>,
    #[serde(default)]
    pub days_after: Option<i64>,
}

impl MatchRequest {
    pub fn new(lost_item_id: i64) -> Self {
        Self {
            lost_item_id,
            location_filter: None,
            days_before: None,
            days_after: None,
        }
    }
}

/// Orchestrates a match query: resolve the lost record, settle the text
/// strategy, select candidates, rank.
pub struct MatchEngine<S: ItemStore> {
    store: S,
    model: ModelCell,
}

impl<S: ItemStore> MatchEngine<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            model: ModelCell::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Find the best-matching found items for a lost item.
    ///
    /// An unknown lost id yields an empty list, not an error. A failed
    /// model build downgrades the text score to token overlap. A failing
    /// candidate query is the one thing that fails the whole call.
    pub fn find_matches(&self, request: &MatchRequest) -> Result<Vec<MatchResult>> {
        let Some(lost) = self.store.lost_item(request.lost_item_id)? else {
            debug!(lost_item_id = request.lost_item_id, "Lost item not found");
            return Ok(Vec::new());
        };

        let strategy = self.text_strategy();

        let Some(lost_date) = lost.occurred_at else {
            debug!(
                lost_item_id = lost.id,
                "Lost item has no event timestamp, no candidate window"
            );
            return Ok(Vec::new());
        };

        let window = DateWindow::around(lost_date, request.days_before, request.days_after);
        // A blank filter means no filter.
        let location_filter = request
            .location_filter
            .as_deref()
            .filter(|filter| !filter.trim().is_empty());
        let candidates = self.store.found_in_window(&window, location_filter)?;
        debug!(
            lost_item_id = lost.id,
            candidates = candidates.len(),
            "Scoring candidates"
        );

        Ok(Ranker::new(strategy).rank(&lost, candidates))
    }

    /// Explicitly refit the shared model on the current corpus.
    ///
    /// The engine never refreshes on its own; freshness is the owner's
    /// call. Fails without touching the current model if the corpus cannot
    /// be read or is empty.
    pub fn rebuild_model(&self) -> Result<()> {
        let documents = self.store.all_descriptions()?;
        self.model.rebuild(&documents)
    }

    /// Current model state, for inspection.
    pub fn model_state(&self) -> ModelState {
        self.model.snapshot()
    }

    fn text_strategy(&self) -> TextScoreStrategy {
        match self.model.get_or_build(|| self.store.all_descriptions()) {
            Some(model) => TextScoreStrategy::TfIdfCosine(model),
            None => TextScoreStrategy::Jaccard,
        }
    }
}
