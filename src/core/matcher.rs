// --- File: src/core/matcher.rs
use crate::core::types::Discipline;
use once_cell::sync::Lazy;
use std::collections::HashMap;

type ModuleTable = HashMap<&'static str, Vec<&'static str>>;

// --- Discipline table: one entry per mapped field ---

static DISCIPLINE_MODULES: Lazy<ModuleTable> = Lazy::new(|| {
    HashMap::from([
        (
            "literature",
            vec!["text-analysis-fundamentals", "data-visualization"],
        ),
        (
            "history",
            vec!["structured-data", "data-visualization", "web-data-collection"],
        ),
        (
            "linguistics",
            vec!["text-analysis-fundamentals", "corpus-linguistics", "structured-data"],
        ),
        (
            "art-history",
            vec!["digital-image-analysis", "structured-data", "data-visualization"],
        ),
    ])
});

// --- Interest table: keyed on whole interest phrases ---

static INTEREST_MODULES: Lazy<ModuleTable> = Lazy::new(|| {
    HashMap::from([
        ("text analysis", vec!["text-analysis-fundamentals"]),
        ("word frequency", vec!["text-analysis-fundamentals"]),
        ("nlp", vec!["text-analysis-fundamentals", "corpus-linguistics"]),
        ("web scraping", vec!["web-data-collection"]),
        ("data visualization", vec!["data-visualization"]),
        ("network analysis", vec!["network-analysis", "data-visualization"]),
        ("mapping", vec!["spatial-analysis"]),
        ("gis", vec!["spatial-analysis"]),
        ("statistics", vec!["statistical-methods"]),
        ("statistical analysis", vec!["statistical-methods", "data-visualization"]),
        ("digital archives", vec!["structured-data", "web-data-collection"]),
        ("image analysis", vec!["digital-image-analysis"]),
    ])
});

/// Returns the modules registered for a discipline label.
/// The label is lower-cased and matched exactly; unknown labels yield an empty slice.
pub fn match_discipline_modules(discipline: &str) -> &'static [&'static str] {
    lookup(&DISCIPLINE_MODULES, discipline)
}

/// Same as [`match_discipline_modules`] for an already-parsed discipline.
pub fn modules_for_discipline(discipline: &Discipline) -> &'static [&'static str] {
    match discipline {
        Discipline::Other(label) => match_discipline_modules(label),
        known => lookup(&DISCIPLINE_MODULES, known.as_str()),
    }
}

/// Returns the method modules registered for an interest phrase.
/// Whole-phrase match only: "doing text analysis" does not hit "text analysis".
pub fn get_method_modules(interest: &str) -> &'static [&'static str] {
    lookup(&INTEREST_MODULES, interest)
}

/// Every module id named by either table, in no particular order.
pub(crate) fn referenced_module_ids() -> impl Iterator<Item = &'static str> {
    DISCIPLINE_MODULES
        .values()
        .chain(INTEREST_MODULES.values())
        .flat_map(|ids| ids.iter().copied())
}

/// O(k) in the key length; the tables are read-only after first use.
fn lookup(table: &'static ModuleTable, key: &str) -> &'static [&'static str] {
    table
        .get(key.to_lowercase().as_str())
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discipline_lookup_ignores_case() {
        assert_eq!(
            match_discipline_modules("HISTORY"),
            &["structured-data", "data-visualization", "web-data-collection"]
        );
        assert_eq!(
            match_discipline_modules("Literature"),
            match_discipline_modules("literature")
        );
    }

    #[test]
    fn unknown_keys_return_empty() {
        assert!(match_discipline_modules("unknown").is_empty());
        assert!(get_method_modules("unknown").is_empty());
        assert!(match_discipline_modules("").is_empty());
    }

    #[test]
    fn interest_lookup_is_whole_phrase() {
        assert_eq!(get_method_modules("Web Scraping"), &["web-data-collection"]);
        assert!(get_method_modules("Text Analysis!").is_empty());
        assert!(get_method_modules("doing text analysis").is_empty());
    }

    #[test]
    fn parsed_discipline_matches_label_lookup() {
        let parsed = Discipline::parse("Art-History");
        assert_eq!(
            modules_for_discipline(&parsed),
            match_discipline_modules("art-history")
        );
        assert!(modules_for_discipline(&Discipline::parse("philosophy")).is_empty());
    }

    #[test]
    fn referenced_ids_cover_both_tables() {
        let ids: Vec<&str> = referenced_module_ids().collect();
        assert!(ids.contains(&"corpus-linguistics"));
        assert!(ids.contains(&"spatial-analysis"));
    }
}
