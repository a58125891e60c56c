// src/core/types.rs
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The key used to look a module up in the catalog, e.g. "python-basics".
pub type ModuleId = String;

/// A learner's academic field. Anything outside the mapped disciplines is kept
/// verbatim in `Other` so it can round-trip back to the UI store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Discipline {
    Literature,
    History,
    Linguistics,
    ArtHistory,
    Other(String),
}

impl Discipline {
    /// Parses a free-text label. Matching is exact after lower-casing, so
    /// "History" maps but " history" and "art history" do not.
    pub fn parse(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "literature" => Discipline::Literature,
            "history" => Discipline::History,
            "linguistics" => Discipline::Linguistics,
            "art-history" => Discipline::ArtHistory,
            _ => Discipline::Other(label.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Discipline::Literature => "literature",
            Discipline::History => "history",
            Discipline::Linguistics => "linguistics",
            Discipline::ArtHistory => "art-history",
            Discipline::Other(label) => label,
        }
    }
}

impl Default for Discipline {
    fn default() -> Self {
        Discipline::Other(String::new())
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Discipline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Discipline {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Discipline::parse(&label))
    }
}

/// Self-reported programming experience. Only `None` and `Beginner` pull in
/// foundational modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgrammingExperience {
    #[default]
    None,
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    #[serde(other)]
    Other,
}

impl FromStr for ProgrammingExperience {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "none" => ProgrammingExperience::None,
            "beginner" => ProgrammingExperience::Beginner,
            "intermediate" => ProgrammingExperience::Intermediate,
            "advanced" => ProgrammingExperience::Advanced,
            "expert" => ProgrammingExperience::Expert,
            _ => ProgrammingExperience::Other,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendedLanguage {
    #[default]
    Python,
    R,
}

impl fmt::Display for RecommendedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendedLanguage::Python => f.write_str("python"),
            RecommendedLanguage::R => f.write_str("r"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    pub discipline: Discipline,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub research_interests: Vec<String>,
    /// Required: a missing value must not be read as "none".
    pub programming_experience: ProgrammingExperience,
}

/// The learner profile built by onboarding. Only `background` is read when
/// generating a pathway; the rest belongs to the UI store and is carried as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub background: Background,
    #[serde(default)]
    pub preferences: serde_json::Value,
    #[serde(default)]
    pub learning_goals: Vec<String>,
    #[serde(default)]
    pub current_pathway: Option<serde_json::Value>,
    #[serde(default)]
    pub onboarding_completed: bool,
}

impl UserProfile {
    pub fn new(
        discipline: &str,
        experience: ProgrammingExperience,
        interests: &[&str],
    ) -> Self {
        Self {
            background: Background {
                discipline: Discipline::parse(discipline),
                role: String::new(),
                research_interests: interests.iter().map(|s| s.to_string()).collect(),
                programming_experience: experience,
            },
            ..Self::default()
        }
    }
}

/// One unit of curriculum content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRecord {
    pub id: ModuleId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub estimated_hours: f64,
    #[serde(default)]
    pub prerequisites: Vec<ModuleId>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Identifier of a generated pathway. Fresh on every generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathwayId(Uuid);

impl PathwayId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PathwayId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PathwayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pathway {
    pub id: PathwayId,
    /// Insertion-ordered and duplicate-free.
    pub modules: Vec<ModuleId>,
    pub estimated_hours: f64,
    pub recommended_language: RecommendedLanguage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discipline_parse_is_case_insensitive_but_exact() {
        assert_eq!(Discipline::parse("Literature"), Discipline::Literature);
        assert_eq!(Discipline::parse("ART-HISTORY"), Discipline::ArtHistory);
        assert_eq!(
            Discipline::parse("art history"),
            Discipline::Other("art history".to_string())
        );
        assert_eq!(
            Discipline::parse(" history"),
            Discipline::Other(" history".to_string())
        );
    }

    #[test]
    fn unknown_experience_deserializes_to_other() {
        let exp: ProgrammingExperience = serde_json::from_str("\"wizard\"").unwrap();
        assert_eq!(exp, ProgrammingExperience::Other);
        let exp: ProgrammingExperience = serde_json::from_str("\"beginner\"").unwrap();
        assert_eq!(exp, ProgrammingExperience::Beginner);
        assert_eq!(
            "Advanced".parse::<ProgrammingExperience>(),
            Ok(ProgrammingExperience::Advanced)
        );
    }

    #[test]
    fn profile_reads_ui_store_shape() {
        let json = r#"{
            "background": {
                "discipline": "History",
                "role": "graduate student",
                "researchInterests": ["web scraping"],
                "programmingExperience": "intermediate"
            },
            "preferences": {"theme": "dark"},
            "learningGoals": ["publish a map"],
            "onboardingCompleted": true
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.background.discipline, Discipline::History);
        assert_eq!(
            profile.background.programming_experience,
            ProgrammingExperience::Intermediate
        );
        assert_eq!(profile.background.research_interests, vec!["web scraping"]);
        assert!(profile.onboarding_completed);
        assert!(profile.current_pathway.is_none());
    }

    #[test]
    fn profile_without_experience_is_rejected() {
        let json = r#"{"background": {"discipline": "history", "researchInterests": []}}"#;
        let err = serde_json::from_str::<UserProfile>(json).unwrap_err();
        assert!(err.to_string().contains("programmingExperience"));
    }

    #[test]
    fn pathway_serializes_camel_case_with_plain_uuid() {
        let pathway = Pathway {
            id: PathwayId::new(),
            modules: vec!["python-basics".to_string()],
            estimated_hours: 10.0,
            recommended_language: RecommendedLanguage::R,
        };
        let value = serde_json::to_value(&pathway).unwrap();
        assert_eq!(value["recommendedLanguage"], "r");
        assert_eq!(value["estimatedHours"], 10.0);
        assert_eq!(value["id"], pathway.id.to_string());
    }
}
