// File: src/catalog.rs
use crate::core::engine::{DEFAULT_FILL_MODULES, NO_EXPERIENCE_MODULES};
use crate::core::matcher::referenced_module_ids;
use crate::core::types::ModuleRecord;
use crate::error::{PathwayError, Result};
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read-only module catalog with an id index.
#[derive(Debug, Clone)]
pub struct ModuleCatalog {
    records: Vec<ModuleRecord>,
    index: HashMap<String, usize>,
}

impl ModuleCatalog {
    /// Builds a catalog, rejecting duplicate ids and negative or non-finite hours.
    pub fn from_records(records: Vec<ModuleRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !record.estimated_hours.is_finite() || record.estimated_hours < 0.0 {
                return Err(PathwayError::InvalidHours {
                    id: record.id.clone(),
                    hours: record.estimated_hours,
                });
            }
            if !seen.insert(record.id.as_str()) {
                return Err(PathwayError::DuplicateModule(record.id.clone()));
            }
        }
        Ok(Self::indexed(records))
    }

    fn indexed(records: Vec<ModuleRecord>) -> Self {
        let index = records
            .iter()
            .enumerate()
            .map(|(pos, record)| (record.id.clone(), pos))
            .collect();
        Self { records, index }
    }

    /// The catalog shipped with the curriculum content.
    pub fn builtin() -> &'static ModuleCatalog {
        &BUILTIN_CATALOG
    }

    pub fn get(&self, id: &str) -> Option<&ModuleRecord> {
        self.index.get(id).map(|&pos| &self.records[pos])
    }

    /// Hours for a module; ids missing from the catalog count as zero.
    pub fn hours_for(&self, id: &str) -> f64 {
        self.get(id).map_or(0.0, |record| record.estimated_hours)
    }

    pub fn records(&self) -> &[ModuleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ids the generator can select that this catalog does not contain.
    /// Sorted and de-duplicated; empty when content and tables agree.
    pub fn missing_referenced_ids(&self) -> Vec<&'static str> {
        referenced_module_ids()
            .chain(NO_EXPERIENCE_MODULES.iter().copied())
            .chain(DEFAULT_FILL_MODULES.iter().copied())
            .filter(|id| !self.index.contains_key(*id))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Reads a catalog from a JSON array of module records.
pub fn load_from_disk(path: &Path) -> Result<ModuleCatalog> {
    let file = File::open(path).map_err(|source| PathwayError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let records: Vec<ModuleRecord> = serde_json::from_reader(reader)?;
    ModuleCatalog::from_records(records)
}

fn module(
    id: &str,
    title: &str,
    hours: f64,
    prerequisites: &[&str],
    tags: &[&str],
) -> ModuleRecord {
    ModuleRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        estimated_hours: hours,
        prerequisites: prerequisites.iter().map(|s| s.to_string()).collect(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
    }
}

static BUILTIN_CATALOG: Lazy<ModuleCatalog> = Lazy::new(|| {
    let records = vec![
        module(
            "digital-literacy-foundations",
            "Digital Literacy Foundations",
            4.0,
            &[],
            &["foundations", "files", "command-line"],
        ),
        module(
            "python-basics",
            "Python Basics",
            12.0,
            &["digital-literacy-foundations"],
            &["python", "programming"],
        ),
        module(
            "text-analysis-fundamentals",
            "Text Analysis Fundamentals",
            8.0,
            &["python-basics"],
            &["text", "nlp", "word-frequency"],
        ),
        module(
            "data-visualization",
            "Data Visualization",
            6.0,
            &["python-basics"],
            &["visualization", "charts"],
        ),
        module(
            "structured-data",
            "Working with Structured Data",
            6.0,
            &["python-basics"],
            &["csv", "json", "tables"],
        ),
        module(
            "web-data-collection",
            "Web Data Collection",
            8.0,
            &["python-basics", "structured-data"],
            &["web-scraping", "apis"],
        ),
        module(
            "corpus-linguistics",
            "Corpus Linguistics",
            8.0,
            &["text-analysis-fundamentals"],
            &["corpora", "concordance", "nlp"],
        ),
        module(
            "network-analysis",
            "Network Analysis",
            6.0,
            &["structured-data"],
            &["networks", "graphs"],
        ),
        module(
            "spatial-analysis",
            "Mapping and Spatial Analysis",
            8.0,
            &["structured-data"],
            &["gis", "mapping"],
        ),
        module(
            "statistical-methods",
            "Statistical Methods for Humanists",
            10.0,
            &["structured-data"],
            &["statistics", "r"],
        ),
        module(
            "digital-image-analysis",
            "Digital Image Analysis",
            8.0,
            &["python-basics"],
            &["images", "iiif"],
        ),
    ];
    ModuleCatalog::indexed(records)
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_catalog_covers_every_referenced_id() {
        assert!(ModuleCatalog::builtin().missing_referenced_ids().is_empty());
    }

    #[test]
    fn builtin_catalog_passes_validation() {
        let records = ModuleCatalog::builtin().records().to_vec();
        assert!(ModuleCatalog::from_records(records).is_ok());
    }

    #[test]
    fn unknown_ids_contribute_zero_hours() {
        let catalog = ModuleCatalog::builtin();
        assert_eq!(catalog.hours_for("python-basics"), 12.0);
        assert_eq!(catalog.hours_for("no-such-module"), 0.0);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let records = vec![
            module("a", "A", 1.0, &[], &[]),
            module("a", "A again", 2.0, &[], &[]),
        ];
        let err = ModuleCatalog::from_records(records).unwrap_err();
        assert!(matches!(err, PathwayError::DuplicateModule(id) if id == "a"));
    }

    #[test]
    fn rejects_negative_hours() {
        let err = ModuleCatalog::from_records(vec![module("a", "A", -1.0, &[], &[])]).unwrap_err();
        assert!(matches!(err, PathwayError::InvalidHours { .. }));
    }

    #[test]
    fn reports_ids_missing_from_a_partial_catalog() {
        let catalog =
            ModuleCatalog::from_records(vec![module("python-basics", "Python", 12.0, &[], &[])])
                .unwrap();
        let missing = catalog.missing_referenced_ids();
        assert!(missing.contains(&"digital-literacy-foundations"));
        assert!(missing.contains(&"data-visualization"));
        assert!(!missing.contains(&"python-basics"));
        let mut sorted = missing.clone();
        sorted.sort();
        assert_eq!(missing, sorted);
    }

    #[test]
    fn loads_catalog_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "python-basics", "title": "Python Basics", "estimatedHours": 3.5}}]"#
        )
        .unwrap();
        let catalog = load_from_disk(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.hours_for("python-basics"), 3.5);
        assert!(catalog.get("python-basics").unwrap().tags.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_from_disk(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, PathwayError::Io { .. }));
    }
}
