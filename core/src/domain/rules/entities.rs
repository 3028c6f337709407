use std::path::Path;

use serde::Deserialize;

use crate::domain::{
    allergen::{
        entities::{AllergenGroup, AllergenTable},
        helpers::is_ingredient_safe,
        value_objects::{SafetyOverrides, UnsafeTerms},
    },
    common::{entities::app_errors::CoreError, normalize_name},
    diet::entities::{DietCatalog, DietKind},
};

/// Immutable dietary configuration: allergen relations, always-safe names and the
/// diet catalog. Built once at startup and shared behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DietaryRules {
    pub allergens: AllergenTable,
    pub overrides: SafetyOverrides,
    pub diets: DietCatalog,
}

/// On-disk shape of a rules document. Missing sections keep the built-in defaults.
#[derive(Debug, Deserialize)]
struct RulesDocument {
    #[serde(default)]
    allergen_groups: Option<Vec<AllergenGroup>>,
    #[serde(default)]
    safety_overrides: Option<Vec<String>>,
    #[serde(default)]
    diets: Option<DietCatalog>,
}

impl DietaryRules {
    pub fn standard() -> Self {
        Self::default()
    }

    pub fn from_json(document: &str) -> Result<Self, CoreError> {
        let document: RulesDocument = serde_json::from_str(document).map_err(|e| {
            tracing::error!("Failed to parse dietary rules: {}", e);
            CoreError::InvalidConfiguration(format!("dietary rules: {}", e))
        })?;

        let rules = Self {
            allergens: document
                .allergen_groups
                .map(AllergenTable::new)
                .unwrap_or_default(),
            overrides: document
                .safety_overrides
                .map(SafetyOverrides::new)
                .unwrap_or_default(),
            diets: document.diets.unwrap_or_default(),
        };
        rules.validate()?;

        Ok(rules)
    }

    /// Reads rules from `path` when given, otherwise returns the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, CoreError> {
        let Some(path) = path else {
            return Ok(Self::standard());
        };

        let content = std::fs::read_to_string(path).map_err(|e| {
            tracing::error!("Failed to read dietary rules from {}: {}", path.display(), e);
            CoreError::InvalidConfiguration(format!("cannot read {}: {}", path.display(), e))
        })?;

        let rules = Self::from_json(&content)?;
        tracing::info!(
            groups = rules.allergens.groups().len(),
            overrides = rules.overrides.len(),
            "loaded dietary rules from {}",
            path.display()
        );
        Ok(rules)
    }

    fn validate(&self) -> Result<(), CoreError> {
        if let Some(diet) = self
            .diets
            .hard
            .iter()
            .find(|hard| self.diets.soft.iter().any(|soft| normalize_name(soft) == normalize_name(hard)))
        {
            return Err(CoreError::InvalidConfiguration(format!(
                "diet '{}' is declared both hard and soft",
                diet
            )));
        }
        Ok(())
    }

    pub fn classify_diet(&self, diet_name: &str) -> DietKind {
        self.diets.classify(diet_name)
    }

    pub fn unsafe_terms<I, S>(&self, allergies: I) -> UnsafeTerms
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allergens.expand_all(allergies)
    }

    pub fn is_safe(&self, ingredient_name: &str, unsafe_terms: &UnsafeTerms) -> bool {
        is_ingredient_safe(ingredient_name, unsafe_terms, &self.overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_keeps_defaults() {
        let rules = DietaryRules::from_json("{}").unwrap();
        assert_eq!(rules, DietaryRules::standard());
    }

    #[test]
    fn test_document_replaces_sections() {
        let rules = DietaryRules::from_json(
            r#"{
                "allergen_groups": [{"key": "Kiwi", "terms": ["kiwifruit"]}],
                "safety_overrides": ["kiwi sorbet flavouring"]
            }"#,
        )
        .unwrap();

        assert_eq!(rules.allergens.groups().len(), 1);
        assert!(rules.allergens.expand("kiwifruit").contains("kiwi"));
        assert!(rules.is_safe("Kiwi Sorbet Flavouring", &rules.unsafe_terms(["kiwi"])));
        assert_eq!(rules.diets, DietCatalog::standard());
    }

    #[test]
    fn test_overlapping_diet_kinds_are_rejected() {
        let err = DietaryRules::from_json(
            r#"{"diets": {"hard": ["Vegan"], "soft": ["vegan"]}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_malformed_document_is_rejected() {
        assert!(matches!(
            DietaryRules::from_json("[1, 2"),
            Err(CoreError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_load_without_path_is_standard() {
        assert_eq!(DietaryRules::load(None).unwrap(), DietaryRules::standard());
    }
}
