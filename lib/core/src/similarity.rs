//! Similarity functions over weighted-term vectors and raw text.
//!
//! Both functions are symmetric and return a score in [0.0, 1.0] where
//! 1.0 means identical. [`cosine`] is the preferred path whenever a fitted
//! [`TfIdfModel`](crate::TfIdfModel) exists; [`jaccard`] is the model-free
//! fallback over raw token sets.

use crate::tokenize::token_set;
use crate::vectorizer::WeightedVector;

/// Cosine similarity between two sparse weighted-term vectors.
///
/// Dot product over the union of terms divided by the product of the L2
/// norms. Returns 0.0 if either vector is empty or has zero norm.
pub fn cosine(a: &WeightedVector, b: &WeightedVector) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    // Only shared terms contribute to the dot product; walk the smaller map.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut dot = 0.0;
    for (term, weight) in small {
        if let Some(other) = large.get(term) {
            dot += weight * other;
        }
    }

    let norm_a = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b = b.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Token-set Jaccard similarity between two texts.
///
/// Tokenizes both sides with the shared rule and returns |intersection| /
/// |union|. Two empty token sets are identical (1.0); exactly one empty
/// set has nothing in common with the other (0.0).
pub fn jaccard(text_a: &str, text_b: &str) -> f64 {
    let set_a = token_set(text_a);
    let set_b = token_set(text_b);

    if set_a.is_empty() && set_b.is_empty() {
        return 1.0;
    }
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();
    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::TfIdfModel;

    fn vector(pairs: &[(&str, f64)]) -> WeightedVector {
        pairs.iter().map(|(t, w)| (t.to_string(), *w)).collect()
    }

    #[test]
    fn test_cosine_self_similarity_is_one() {
        let v = vector(&[("red", 1.2), ("bike", 0.7), ("park", 2.4)]);
        assert!((cosine(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_symmetric() {
        let a = vector(&[("red", 1.0), ("bike", 2.0)]);
        let b = vector(&[("bike", 1.0), ("park", 3.0)]);
        assert_eq!(cosine(&a, &b), cosine(&b, &a));
    }

    #[test]
    fn test_cosine_orthogonal_is_zero() {
        let a = vector(&[("red", 1.0)]);
        let b = vector(&[("blue", 1.0)]);
        assert_eq!(cosine(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_empty_or_zero_norm_is_zero() {
        let v = vector(&[("red", 1.0)]);
        let empty = WeightedVector::default();
        let zero = vector(&[("red", 0.0)]);
        assert_eq!(cosine(&v, &empty), 0.0);
        assert_eq!(cosine(&empty, &empty), 0.0);
        assert_eq!(cosine(&v, &zero), 0.0);
    }

    #[test]
    fn test_cosine_bounded() {
        let a = vector(&[("red", 3.0), ("bike", 4.0)]);
        let b = vector(&[("red", 1.0), ("bike", 2.0), ("park", 5.0)]);
        let score = cosine(&a, &b);
        assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn test_jaccard_identical() {
        assert_eq!(jaccard("red bike park", "park bike red"), 1.0);
    }

    #[test]
    fn test_jaccard_partial_overlap() {
        // {red, bike} vs {red, umbrella}: 1 shared of 3 distinct
        let score = jaccard("red bike", "red umbrella");
        assert!((score - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_jaccard_empty_rules() {
        assert_eq!(jaccard("", ""), 1.0);
        assert_eq!(jaccard("...", "!!"), 1.0);
        assert_eq!(jaccard("red bike", ""), 0.0);
        assert_eq!(jaccard("", "red bike"), 0.0);
    }

    #[test]
    fn test_jaccard_symmetric() {
        assert_eq!(jaccard("red bike", "red umbrella"), jaccard("red umbrella", "red bike"));
    }

    #[test]
    fn test_rare_terms_upweighted_over_jaccard() {
        // Shared rare terms (red, bike, park) push cosine above plain token
        // overlap once the corpus is wide enough for them to be rare.
        let lost = "lost red bike near the park";
        let found = "found red bike by the park gate";
        let corpus = [
            lost,
            found,
            "lost black wallet near the gate",
            "found blue umbrella near the gate",
            "lost silver phone near the fountain",
            "found brown backpack by the gate",
            "lost gray scarf near the entrance",
            "found green keys by the gate",
            "lost white headphones near the bench",
            "found golden ring by the gate",
        ];
        let model = TfIdfModel::fit(corpus).unwrap();
        let by_cosine = cosine(&model.transform(lost), &model.transform(found));
        let by_jaccard = jaccard(lost, found);
        assert!(
            by_cosine > by_jaccard,
            "expected cosine {by_cosine} > jaccard {by_jaccard}"
        );
    }
}
