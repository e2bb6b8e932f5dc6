//! Lazy shared vector space model.
//!
//! The model is the engine's only shared mutable state. It moves through
//! an explicit state machine - `Unbuilt -> Ready | Failed` - instead of an
//! initialized-flag-plus-field pair, and scorers only ever see an immutable
//! snapshot once it is `Ready`.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use matchx_core::TfIdfModel;

use crate::error::Result;

/// Build state of the shared model.
#[derive(Debug, Clone, Default)]
pub enum ModelState {
    /// No build attempted yet.
    #[default]
    Unbuilt,
    /// Fitted and usable; the snapshot is read-only.
    Ready(Arc<TfIdfModel>),
    /// The build failed (corpus read error or empty corpus). Sticky until
    /// an explicit rebuild succeeds; requests fall back to token overlap.
    Failed,
}

/// Single-flight cell guarding the lazy model build.
#[derive(Debug, Default)]
pub struct ModelCell {
    state: RwLock<ModelState>,
}

impl ModelCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the model, building it on first demand.
    ///
    /// Concurrent first calls serialize on the write lock: exactly one
    /// caller runs `load_corpus` and fits the model; the rest block and
    /// observe the settled state on re-check. Once `Failed`, the corpus is
    /// not re-read - callers get `None` and use the fallback path.
    pub fn get_or_build<F>(&self, load_corpus: F) -> Option<Arc<TfIdfModel>>
    where
        F: FnOnce() -> Result<Vec<String>>,
    {
        match &*self.state.read() {
            ModelState::Ready(model) => return Some(Arc::clone(model)),
            ModelState::Failed => return None,
            ModelState::Unbuilt => {}
        }

        let mut state = self.state.write();
        // Lost the race: another request settled the state while we waited.
        match &*state {
            ModelState::Ready(model) => return Some(Arc::clone(model)),
            ModelState::Failed => return None,
            ModelState::Unbuilt => {}
        }

        match load_corpus().and_then(|corpus| TfIdfModel::fit(&corpus).map_err(Into::into)) {
            Ok(model) => {
                info!(
                    corpus_size = model.corpus_size(),
                    vocabulary = model.vocabulary_len(),
                    "Vector space model built"
                );
                let model = Arc::new(model);
                *state = ModelState::Ready(Arc::clone(&model));
                Some(model)
            }
            Err(err) => {
                warn!("Vector space model build failed, using token-overlap fallback: {err}");
                *state = ModelState::Failed;
                None
            }
        }
    }

    /// Explicitly refit the model on a fresh corpus.
    ///
    /// On success the new model replaces whatever state was there; on
    /// failure the error is returned and the previous state is left
    /// untouched, so a live model is never torn down by a bad refresh.
    pub fn rebuild(&self, documents: &[String]) -> Result<()> {
        let model = TfIdfModel::fit(documents)?;
        info!(
            corpus_size = model.corpus_size(),
            vocabulary = model.vocabulary_len(),
            "Vector space model rebuilt"
        );
        *self.state.write() = ModelState::Ready(Arc::new(model));
        Ok(())
    }

    /// Current state without side effects.
    pub fn snapshot(&self) -> ModelState {
        self.state.read().clone()
    }
}
