use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::normalize_name, diet::value_objects::DietSelection};

const HARD_DIETS: &[&str] = &[
    "Dairy-Free",
    "Gluten-Free",
    "Vegan",
    "Vegetarian",
    "Keto",
    "Pescatarian",
    "Diabetic-Friendly",
];

const SOFT_DIETS: &[&str] = &[
    "Heart-Healthy",
    "High-Protein",
    "Low-Fat",
    "Low-Carb",
    "Mediterranean",
];

/// Catalog diets that neither filter nor boost.
const OTHER_DIETS: &[&str] = &["Paleo", "Raw Food", "Whole30"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DietKind {
    /// Recipes not supporting the diet are excluded.
    Hard,
    /// Matching recipes are ranked first, nothing is excluded.
    Soft,
    Unknown,
}

/// Named diets known to the catalog, split by how they act on results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietCatalog {
    pub hard: Vec<String>,
    pub soft: Vec<String>,
    #[serde(default)]
    pub other: Vec<String>,
}

impl DietCatalog {
    pub fn standard() -> Self {
        Self {
            hard: owned(HARD_DIETS),
            soft: owned(SOFT_DIETS),
            other: owned(OTHER_DIETS),
        }
    }

    /// Case-insensitive lookup of a diet name.
    pub fn classify(&self, diet_name: &str) -> DietKind {
        let name = normalize_name(diet_name);
        if contains(&self.hard, &name) {
            DietKind::Hard
        } else if contains(&self.soft, &name) {
            DietKind::Soft
        } else {
            DietKind::Unknown
        }
    }

    /// Whether the name resolves to any catalog diet, including ones that
    /// classify as `Unknown`.
    pub fn is_known(&self, diet_name: &str) -> bool {
        let name = normalize_name(diet_name);
        contains(&self.hard, &name) || contains(&self.soft, &name) || contains(&self.other, &name)
    }

    pub fn known_names(&self) -> impl Iterator<Item = &str> {
        self.hard
            .iter()
            .chain(self.soft.iter())
            .chain(self.other.iter())
            .map(String::as_str)
    }

    /// Partitions names into hard and soft, keeping input order and silently
    /// dropping anything else.
    pub fn split_for_selection<I, S>(&self, diet_names: I) -> DietSelection
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = DietSelection::default();
        for name in diet_names {
            let name = name.as_ref();
            match self.classify(name) {
                DietKind::Hard => selection.hard.push(name.to_string()),
                DietKind::Soft => selection.soft.push(name.to_string()),
                DietKind::Unknown => {}
            }
        }
        selection
    }
}

impl Default for DietCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn contains(names: &[String], normalized: &str) -> bool {
    names.iter().any(|n| normalize_name(n) == normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_hard_diets() {
        let catalog = DietCatalog::standard();
        for diet in HARD_DIETS {
            assert_eq!(catalog.classify(diet), DietKind::Hard, "{diet}");
        }
        assert_eq!(catalog.classify("vegan"), DietKind::Hard);
    }

    #[test]
    fn test_classify_soft_diets() {
        let catalog = DietCatalog::standard();
        for diet in SOFT_DIETS {
            assert_eq!(catalog.classify(diet), DietKind::Soft, "{diet}");
        }
    }

    #[test]
    fn test_classify_unknown() {
        let catalog = DietCatalog::standard();
        assert_eq!(catalog.classify("Paleo"), DietKind::Unknown);
        assert_eq!(catalog.classify("Carnivore"), DietKind::Unknown);
        assert_eq!(catalog.classify(""), DietKind::Unknown);
    }

    #[test]
    fn test_is_known_covers_other_diets() {
        let catalog = DietCatalog::standard();
        assert!(catalog.is_known("whole30"));
        assert!(catalog.is_known("Low-Fat"));
        assert!(!catalog.is_known("Carnivore"));
    }

    #[test]
    fn test_split_for_selection_drops_unclassified() {
        let catalog = DietCatalog::standard();
        let split =
            catalog.split_for_selection(["Mediterranean", "Vegan", "Paleo", "Keto", "Low-Fat"]);
        assert_eq!(split.hard, vec!["Vegan", "Keto"]);
        assert_eq!(split.soft, vec!["Mediterranean", "Low-Fat"]);
    }

    #[test]
    fn test_diet_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&DietKind::Soft).unwrap(),
            "\"soft\""
        );
    }
}
