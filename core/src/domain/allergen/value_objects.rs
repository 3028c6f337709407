use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::common::normalize_name;

/// Consolidated allergen terms for one user: no ingredient name may contain any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnsafeTerms(BTreeSet<String>);

impl UnsafeTerms {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.0.contains(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Drops every term that exactly matches one of `carve_out` (already normalized).
    pub fn without(mut self, carve_out: &BTreeSet<String>) -> Self {
        self.0.retain(|term| !carve_out.contains(term));
        self
    }
}

impl FromIterator<String> for UnsafeTerms {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|t| normalize_name(&t))
                .filter(|t| !t.is_empty())
                .collect(),
        )
    }
}

/// Ingredient names that are always safe, whatever terms they happen to contain.
///
/// Substring matching turns "egg" into a hit on "eggplant"; these names
/// short-circuit the check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SafetyOverrides(BTreeSet<String>);

impl SafetyOverrides {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            names
                .into_iter()
                .map(|n| normalize_name(n.as_ref()))
                .filter(|n| !n.is_empty())
                .collect(),
        )
    }

    pub fn standard() -> Self {
        Self::new(["eggplant", "milk chocolate"])
    }

    /// `ingredient_name` must already be normalized.
    pub fn is_overridden(&self, ingredient_name: &str) -> bool {
        self.0.contains(ingredient_name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SafetyOverrides {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsafe_terms_drop_blank_entries() {
        let terms: UnsafeTerms = vec!["Milk".to_string(), "  ".to_string()]
            .into_iter()
            .collect();
        assert_eq!(terms.len(), 1);
        assert!(terms.contains("milk"));
    }

    #[test]
    fn test_without_removes_exact_matches_only() {
        let terms: UnsafeTerms = ["peanuts", "peanut", "groundnut"]
            .into_iter()
            .map(String::from)
            .collect();
        let carved = terms.without(&BTreeSet::from(["peanuts".to_string()]));
        assert!(!carved.contains("peanuts"));
        assert!(carved.contains("peanut"));
        assert_eq!(carved.len(), 2);
    }

    #[test]
    fn test_standard_overrides() {
        let overrides = SafetyOverrides::standard();
        assert!(overrides.is_overridden("eggplant"));
        assert!(overrides.is_overridden("milk chocolate"));
        assert!(!overrides.is_overridden("milk"));
    }
}
