// File: src/core/language.rs
use crate::core::types::RecommendedLanguage;

/// Any interest containing one of these steers the learner towards R.
const STATISTICAL_KEYWORDS: &[&str] = &["statistics", "statistical analysis"];

/// Text-heavy interests keep the learner on Python.
const TEXT_KEYWORDS: &[&str] = &[
    "text analysis",
    "word frequency",
    "nlp",
    "analyzing word frequency",
];

/// Picks a language from research interests.
///
/// Unlike the interest matcher this is a substring test, so "applied statistics"
/// counts as statistical. The statistical check runs first and wins ties.
pub fn recommend_language<S: AsRef<str>>(interests: &[S]) -> RecommendedLanguage {
    let lowered: Vec<String> = interests
        .iter()
        .map(|interest| interest.as_ref().to_lowercase())
        .collect();

    if mentions_any(&lowered, STATISTICAL_KEYWORDS) {
        RecommendedLanguage::R
    } else if mentions_any(&lowered, TEXT_KEYWORDS) {
        RecommendedLanguage::Python
    } else {
        RecommendedLanguage::default()
    }
}

fn mentions_any(interests: &[String], keywords: &[&str]) -> bool {
    interests
        .iter()
        .any(|interest| keywords.iter().any(|keyword| interest.contains(keyword)))
}
