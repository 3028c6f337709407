use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::normalize_name;

/// Global catalog entry. Read-only from the matching engine's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    /// Allergen group keys the ingredient is tagged with.
    pub allergens: BTreeSet<String>,
    /// Diet names the ingredient is compatible with.
    pub diets: BTreeSet<String>,
}

impl Ingredient {
    pub fn new(id: Uuid, name: &str) -> Self {
        Self {
            id,
            name: normalize_name(name),
            allergens: BTreeSet::new(),
            diets: BTreeSet::new(),
        }
    }

    pub fn with_allergens<I, S>(mut self, allergens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allergens = allergens
            .into_iter()
            .map(|a| normalize_name(a.as_ref()))
            .filter(|a| !a.is_empty())
            .collect();
        self
    }

    pub fn with_diets<I, S>(mut self, diets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.diets = diets
            .into_iter()
            .map(|d| d.as_ref().trim().to_string())
            .filter(|d| !d.is_empty())
            .collect();
        self
    }
}
