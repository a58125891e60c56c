use crate::catalog::{load_from_disk, ModuleCatalog};
use crate::core::language::recommend_language;
use crate::core::matcher::{get_method_modules, modules_for_discipline};
use crate::core::types::{ModuleId, Pathway, PathwayId, ProgrammingExperience, UserProfile};
use std::borrow::Cow;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

/// Foundations for learners who have never programmed, in order.
pub const NO_EXPERIENCE_MODULES: &[&str] = &["digital-literacy-foundations", "python-basics"];
pub const BEGINNER_MODULES: &[&str] = &["python-basics"];

/// Appended when a selection is this small or smaller.
const DEFAULT_FILL_THRESHOLD: usize = 2;
pub const DEFAULT_FILL_MODULES: &[&str] = &["text-analysis-fundamentals", "data-visualization"];

// The engine owns the catalog it prices pathways against. It never mutates it.
pub struct PathwayEngine {
    catalog: Cow<'static, ModuleCatalog>,
}

impl PathwayEngine {
    pub fn new() -> Self {
        Self {
            catalog: Cow::Borrowed(ModuleCatalog::builtin()),
        }
    }

    pub fn with_catalog(catalog: ModuleCatalog) -> Self {
        Self {
            catalog: Cow::Owned(catalog),
        }
    }

    /// Loads the catalog at `path`, falling back to the built-in content when
    /// the file is missing or malformed.
    pub fn from_file_or_default(path: &Path) -> Self {
        match load_from_disk(path) {
            Ok(catalog) => {
                debug!("Loaded {} modules from {}", catalog.len(), path.display());
                Self::with_catalog(catalog)
            }
            Err(e) => {
                warn!(
                    "Could not load catalog from {}: {}. Using built-in catalog.",
                    path.display(),
                    e
                );
                Self::new()
            }
        }
    }

    pub fn catalog(&self) -> &ModuleCatalog {
        &self.catalog
    }

    pub fn generate(&self, profile: &UserProfile) -> Pathway {
        generate_pathway_with(&self.catalog, profile)
    }
}

impl Default for PathwayEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a pathway against the built-in catalog.
pub fn generate_pathway(profile: &UserProfile) -> Pathway {
    generate_pathway_with(ModuleCatalog::builtin(), profile)
}

/// Builds a fresh pathway for `profile`, pricing it against `catalog`.
///
/// Infallible: unknown disciplines or interests contribute nothing and the
/// default fill keeps the result from being trivially small. Every call gets
/// a new id even for identical input.
pub fn generate_pathway_with(catalog: &ModuleCatalog, profile: &UserProfile) -> Pathway {
    let background = &profile.background;

    // 1. Language is decided up front and does not influence module choice
    let recommended_language = recommend_language(&background.research_interests);

    let mut selection = ModuleSelection::default();

    // 2. Foundations gated on experience
    match background.programming_experience {
        ProgrammingExperience::None => selection.extend(NO_EXPERIENCE_MODULES),
        ProgrammingExperience::Beginner => selection.extend(BEGINNER_MODULES),
        _ => {}
    }

    // 3. Discipline modules, in table order
    selection.extend(modules_for_discipline(&background.discipline));

    // 4. Interest modules, in the order the learner listed them
    for interest in &background.research_interests {
        selection.extend(get_method_modules(&interest.to_lowercase()));
    }

    // 5. Default fill for near-empty selections
    if selection.len() <= DEFAULT_FILL_THRESHOLD {
        selection.extend(DEFAULT_FILL_MODULES);
    }

    let modules = selection.into_vec();

    // 6. Hours; ids missing from the catalog count as zero
    let estimated_hours = modules.iter().map(|id| catalog.hours_for(id)).sum();

    let pathway = Pathway {
        id: PathwayId::new(),
        modules,
        estimated_hours,
        recommended_language,
    };
    debug!(
        "Generated pathway {} for discipline '{}': {} modules, {} hours, {}",
        pathway.id,
        background.discipline,
        pathway.modules.len(),
        pathway.estimated_hours,
        pathway.recommended_language
    );
    pathway
}

/// Insertion-ordered set of module ids.
#[derive(Default)]
struct ModuleSelection {
    order: Vec<ModuleId>,
    seen: HashSet<ModuleId>,
}

impl ModuleSelection {
    fn push(&mut self, id: &str) {
        if self.seen.insert(id.to_string()) {
            self.order.push(id.to_string());
        }
    }

    fn extend(&mut self, ids: &[&str]) {
        for id in ids {
            self.push(id);
        }
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn into_vec(self) -> Vec<ModuleId> {
        self.order
    }
}
