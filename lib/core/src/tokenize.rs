//! Shared tokenization rule for free-text descriptions.
//!
//! Every text-similarity path (TF-IDF vectors and the token-overlap
//! fallback) must agree on the same token stream, so the rule lives here:
//! lowercase, replace every non-alphanumeric character with whitespace,
//! split on whitespace, and discard tokens shorter than three characters.

use ahash::AHashSet;

/// Tokens shorter than this carry too little signal and are dropped.
pub const MIN_TOKEN_LEN: usize = 3;

/// Tokenize text into a list of normalized terms, duplicates preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

/// Tokenize text into the set of distinct terms.
pub fn token_set(text: &str) -> AHashSet<String> {
    tokenize(text).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let tokens = tokenize("Red Bike, lost near the PARK!");
        assert_eq!(tokens, vec!["red", "bike", "lost", "near", "the", "park"]);
    }

    #[test]
    fn test_short_tokens_dropped() {
        let tokens = tokenize("a on it bag");
        assert_eq!(tokens, vec!["bag"]);
    }

    #[test]
    fn test_duplicates_preserved_in_list() {
        let tokens = tokenize("bike bike bike");
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_token_set_deduplicates() {
        let set = token_set("bike bike park");
        assert_eq!(set.len(), 2);
        assert!(set.contains("bike"));
        assert!(set.contains("park"));
    }

    #[test]
    fn test_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
        assert!(token_set("...!!!").is_empty());
    }

    #[test]
    fn test_digits_kept() {
        let tokens = tokenize("iPhone 14 serial 8842a");
        assert_eq!(tokens, vec!["iphone", "serial", "8842a"]);
    }
}
