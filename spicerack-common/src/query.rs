//! Recipe query derivation
//!
//! Turns near-expiry condiment names into search terms for the recipe API.
//! Names are cleaned against a configurable denylist of marketing-noise
//! substrings, then deduplicated preserving first-seen order so that each
//! distinct ingredient produces exactly one API query.

use std::collections::HashSet;

/// Clean one condiment name for use as a search term.
///
/// Strips every denylist substring, collapses runs of whitespace and trims.
/// Returns `None` when nothing usable remains (such names are skipped, not
/// queried as empty strings).
pub fn clean_name(name: &str, noise_keywords: &[String]) -> Option<String> {
    let mut cleaned = name.to_string();
    for keyword in noise_keywords {
        if !keyword.is_empty() {
            cleaned = cleaned.replace(keyword.as_str(), " ");
        }
    }

    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// Derive the ordered, deduplicated list of search terms for a set of
/// near-expiry condiment names.
///
/// The caller performs one recipe API call per returned term. Duplicate
/// cleaned names collapse to a single query; order follows the input
/// (which is expiry-ascending when fed from the database query).
pub fn derive_queries(names: &[String], noise_keywords: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut queries = Vec::new();
    for name in names {
        if let Some(cleaned) = clean_name(name, noise_keywords) {
            if seen.insert(cleaned.clone()) {
                queries.push(cleaned);
            }
        }
    }
    queries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_noise_keywords;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_clean_name_strips_noise_and_collapses_whitespace() {
        let noise = default_noise_keywords();
        assert_eq!(
            clean_name("premium soy sauce", &noise),
            Some("soy".to_string())
        );
        assert_eq!(
            clean_name("  additive-free   miso  ", &noise),
            Some("miso".to_string())
        );
    }

    #[test]
    fn test_clean_name_without_noise_is_unchanged() {
        let noise = default_noise_keywords();
        assert_eq!(clean_name("rice vinegar", &noise), Some("rice vinegar".to_string()));
    }

    #[test]
    fn test_clean_name_fully_noisy_is_discarded() {
        let noise = default_noise_keywords();
        assert_eq!(clean_name("premium sauce", &noise), None);
        assert_eq!(clean_name("   ", &noise), None);
    }

    #[test]
    fn test_empty_denylist_keeps_names_intact() {
        assert_eq!(clean_name("premium sauce", &[]), Some("premium sauce".to_string()));
    }

    #[test]
    fn test_derive_queries_preserves_input_order() {
        let queries = derive_queries(&names(&["mirin", "soy", "wasabi"]), &[]);
        assert_eq!(queries, vec!["mirin", "soy", "wasabi"]);
    }

    #[test]
    fn test_derive_queries_deduplicates_cleaned_names() {
        let noise = default_noise_keywords();
        // Both clean to "soy"; only one query results.
        let queries = derive_queries(&names(&["premium soy", "soy sauce"]), &noise);
        assert_eq!(queries, vec!["soy"]);
    }

    #[test]
    fn test_derive_queries_drops_empty_results() {
        let noise = default_noise_keywords();
        let queries = derive_queries(&names(&["sauce", "mustard"]), &noise);
        assert_eq!(queries, vec!["mustard"]);
    }

    #[test]
    fn test_derive_queries_empty_input() {
        let queries = derive_queries(&[], &default_noise_keywords());
        assert!(queries.is_empty());
    }
}
