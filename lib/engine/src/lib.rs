//! # matchx Engine
//!
//! Matching engine for lost & found item reports.
//!
//! Given a lost-item record, the engine ranks found-item candidates by a
//! composite confidence score:
//!
//! - **Text** (weight 0.6): TF-IDF cosine similarity of the descriptions,
//!   falling back to token-set overlap when no vector space model could be
//!   built
//! - **Location** (weight 0.3): exact / containment / word-overlap match
//! - **Date** (weight 0.1): stepped decay over the day difference
//!
//! The vector space model is built lazily on the first query, exactly once,
//! and shared read-only afterwards; refreshing it is an explicit
//! [`MatchEngine::rebuild_model`] call.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use matchx_engine::{ItemRecord, MatchEngine, MatchRequest, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let date = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
//!
//! let mut lost = ItemRecord::new(1, "Wallet", "accessories");
//! lost.description = Some("black leather wallet".to_string());
//! lost.location = Some("Central Park".to_string());
//! lost.occurred_at = Some(date);
//! store.insert_lost(lost);
//!
//! let mut found = ItemRecord::new(2, "Wallet", "accessories");
//! found.description = Some("black leather wallet with zipper".to_string());
//! found.location = Some("central park".to_string());
//! found.occurred_at = Some(date);
//! store.insert_found(found);
//!
//! let engine = MatchEngine::new(store);
//! let matches = engine.find_matches(&MatchRequest::new(1)).unwrap();
//! assert_eq!(matches[0].found_item_id, 2);
//! ```

pub mod engine;
pub mod error;
pub mod item;
pub mod model;
pub mod ranker;
pub mod scoring;
pub mod store;

pub use engine::{MatchEngine, MatchRequest};
pub use error::{Error, Result};
pub use item::{Contact, ItemRecord};
pub use model::{ModelCell, ModelState};
pub use ranker::{MatchResult, Ranker, TextScoreStrategy, MAX_RESULTS};
pub use store::{DateWindow, ItemStore, MemoryStore};
