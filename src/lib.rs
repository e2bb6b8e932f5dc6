//! # matchx
//!
//! A candidate matching and ranking engine for lost & found items.
//!
//! Given a lost-item report, matchx finds the found-item reports most
//! likely to describe the same physical object and returns them ordered by
//! a composite confidence score: TF-IDF cosine similarity of the free-text
//! descriptions (with a token-overlap fallback), fuzzy location matching,
//! and a stepped temporal decay over the day difference of the two events.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install matchx
//! matchx --data items.json --lost-item 42 --days-before 7 --days-after 7
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use matchx::prelude::*;
//! use chrono::{TimeZone, Utc};
//!
//! let store = MemoryStore::new();
//! let date = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
//!
//! let mut lost = ItemRecord::new(1, "Bike", "bikes");
//! lost.description = Some("red bike with a basket".to_string());
//! lost.location = Some("Central Park".to_string());
//! lost.occurred_at = Some(date);
//! store.insert_lost(lost);
//!
//! let mut found = ItemRecord::new(2, "Bike", "bikes");
//! found.description = Some("red bike, basket on the front".to_string());
//! found.location = Some("Central Park Zone 5".to_string());
//! found.occurred_at = Some(date);
//! store.insert_found(found);
//!
//! let engine = MatchEngine::new(store);
//! let request = MatchRequest { days_after: Some(3), ..MatchRequest::new(1) };
//! let matches = engine.find_matches(&request).unwrap();
//! assert_eq!(matches[0].found_item_id, 2);
//! ```
//!
//! ## Crate Structure
//!
//! matchx is composed of two internal crates:
//!
//! - [`matchx-core`](https://docs.rs/matchx-core) - tokenization, the
//!   TF-IDF vector space model, cosine and Jaccard similarity
//! - [`matchx-engine`](https://docs.rs/matchx-engine) - item records, the
//!   store contract, composite scoring and ranking, the lazy model cell

// Re-export core types
pub use matchx_core::{cosine, jaccard, token_set, tokenize, TfIdfModel, WeightedVector};

// Re-export the engine
pub use matchx_engine::{
    Contact, DateWindow, ItemRecord, ItemStore, MatchEngine, MatchRequest, MatchResult,
    MemoryStore, ModelCell, ModelState, Ranker, TextScoreStrategy, MAX_RESULTS,
};

/// Convenience re-exports for the common use case.
pub mod prelude {
    pub use matchx_core::{cosine, jaccard, TfIdfModel};
    pub use matchx_engine::{
        Contact, ItemRecord, ItemStore, MatchEngine, MatchRequest, MatchResult, MemoryStore,
    };
}
