//! TF-IDF vector space model.
//!
//! [`TfIdfModel::fit`] builds an immutable term -> IDF table from a corpus
//! of descriptions; [`TfIdfModel::transform`] projects any text into a
//! sparse weighted-term vector against that table. The model is a plain
//! value: build it once, share it read-only, rebuild explicitly when the
//! corpus has moved on.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tokenize::{token_set, tokenize};

/// Sparse term -> weight vector produced by [`TfIdfModel::transform`].
pub type WeightedVector = AHashMap<String, f64>;

/// Immutable term -> IDF mapping plus the corpus size it was fitted on.
///
/// IDF(term) = ln(N / documentFrequency(term)), N = corpus size. Terms
/// appearing in every document get IDF 0 and never contribute weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfIdfModel {
    idf: AHashMap<String, f64>,
    corpus_size: usize,
}

impl TfIdfModel {
    /// Fit a model on a corpus of documents.
    ///
    /// Blank documents still count toward N but contribute no terms.
    /// Returns [`Error::EmptyCorpus`] when the corpus is empty or no token
    /// survives tokenization: there is no usable model in that case and
    /// callers are expected to score text with the token-overlap fallback.
    pub fn fit<I, S>(documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut corpus_size = 0usize;
        let mut document_frequency: AHashMap<String, usize> = AHashMap::new();

        for document in documents {
            corpus_size += 1;
            for term in token_set(document.as_ref()) {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        if corpus_size == 0 || document_frequency.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let idf = document_frequency
            .into_iter()
            .map(|(term, df)| (term, (corpus_size as f64 / df as f64).ln()))
            .collect();

        Ok(Self { idf, corpus_size })
    }

    /// Project text into a sparse TF-IDF vector.
    ///
    /// Weight = raw term frequency within `text` x the model IDF. Terms
    /// unknown to the model (and terms with IDF 0) are omitted; they could
    /// only ever contribute zero. Blank input yields an empty vector.
    pub fn transform(&self, text: &str) -> WeightedVector {
        let mut term_frequency: AHashMap<String, u32> = AHashMap::new();
        for token in tokenize(text) {
            *term_frequency.entry(token).or_insert(0) += 1;
        }

        term_frequency
            .into_iter()
            .filter_map(|(term, tf)| {
                let idf = self.idf.get(&term).copied().unwrap_or(0.0);
                (idf != 0.0).then(|| (term, f64::from(tf) * idf))
            })
            .collect()
    }

    /// Number of documents the model was fitted on.
    #[inline]
    #[must_use]
    pub fn corpus_size(&self) -> usize {
        self.corpus_size
    }

    /// Number of distinct terms in the model.
    #[inline]
    #[must_use]
    pub fn vocabulary_len(&self) -> usize {
        self.idf.len()
    }

    /// IDF weight of a single term, if the model knows it.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_empty_corpus_is_an_error() {
        let err = TfIdfModel::fit(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, Error::EmptyCorpus);
    }

    #[test]
    fn test_fit_blank_only_corpus_is_an_error() {
        let err = TfIdfModel::fit(["", "   ", "a"]).unwrap_err();
        assert_eq!(err, Error::EmptyCorpus);
    }

    #[test]
    fn test_idf_formula() {
        let model = TfIdfModel::fit([
            "red bike park",
            "red umbrella",
            "blue bike",
            "green wallet",
        ])
        .unwrap();

        assert_eq!(model.corpus_size(), 4);
        // "red" appears in 2 of 4 documents
        let red = model.idf("red").unwrap();
        assert!((red - (4.0f64 / 2.0).ln()).abs() < 1e-12);
        // "wallet" appears in 1 of 4
        let wallet = model.idf("wallet").unwrap();
        assert!((wallet - (4.0f64).ln()).abs() < 1e-12);
        assert_eq!(model.idf("scooter"), None);
    }

    #[test]
    fn test_ubiquitous_terms_carry_no_weight() {
        let model = TfIdfModel::fit(["bike lost", "bike found"]).unwrap();
        // "bike" is in every document: IDF = ln(1) = 0, omitted from vectors
        let vector = model.transform("bike lost");
        assert!(!vector.contains_key("bike"));
        assert!(vector.contains_key("lost"));
    }

    #[test]
    fn test_transform_counts_term_frequency() {
        let model = TfIdfModel::fit(["red bike", "blue umbrella"]).unwrap();
        let vector = model.transform("red red bike");
        let expected = 2.0 * (2.0f64).ln();
        assert!((vector["red"] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_transform_blank_input_is_empty() {
        let model = TfIdfModel::fit(["red bike", "blue umbrella"]).unwrap();
        assert!(model.transform("").is_empty());
        assert!(model.transform("  \t ").is_empty());
    }

    #[test]
    fn test_transform_unknown_terms_omitted() {
        let model = TfIdfModel::fit(["red bike", "blue umbrella"]).unwrap();
        let vector = model.transform("green scooter");
        assert!(vector.is_empty());
    }

    #[test]
    fn test_transform_is_deterministic() {
        let corpus = ["lost red bike near the park", "found red bike by the park gate"];
        let a = TfIdfModel::fit(corpus).unwrap();
        let b = TfIdfModel::fit(corpus).unwrap();
        let text = "red bike near the gate";
        assert_eq!(a.transform(text), b.transform(text));
    }
}
