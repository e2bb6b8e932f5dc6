//! # matchx Core
//!
//! Core library for the matchx matching engine.
//!
//! This crate provides the text-statistics building blocks:
//!
//! - [`tokenize`] - the shared tokenization rule for descriptions
//! - [`TfIdfModel`] - corpus-wide TF-IDF vector space model
//! - [`cosine`] - cosine similarity over sparse weighted-term vectors
//! - [`jaccard`] - token-set similarity, the model-free fallback
//!
//! ## Example
//!
//! ```rust
//! use matchx_core::{cosine, TfIdfModel};
//!
//! let model = TfIdfModel::fit([
//!     "lost red bike near the park",
//!     "found black leather wallet",
//!     "found red bike by the park gate",
//! ]).unwrap();
//!
//! let a = model.transform("lost red bike near the park");
//! let b = model.transform("found red bike by the park gate");
//! assert!(cosine(&a, &b) > 0.0);
//! ```

pub mod error;
pub mod similarity;
pub mod tokenize;
pub mod vectorizer;

pub use error::{Error, Result};
pub use similarity::{cosine, jaccard};
pub use tokenize::{token_set, tokenize};
pub use vectorizer::{TfIdfModel, WeightedVector};
