use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::normalize_name;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Normalized names of every required ingredient.
    pub ingredients: BTreeSet<String>,
    /// Allergen group keys the recipe is known to contain.
    pub allergens: BTreeSet<String>,
    /// Diet names the recipe is tagged as suitable for.
    pub diets: BTreeSet<String>,
}

impl Recipe {
    pub fn new<I, S>(id: Uuid, name: &str, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            id,
            name: name.trim().to_string(),
            description: None,
            ingredients: normalized_set(ingredients),
            allergens: BTreeSet::new(),
            diets: BTreeSet::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_allergens<I, S>(mut self, allergens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allergens = normalized_set(allergens);
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

fn normalized_set<I, S>(values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| normalize_name(v.as_ref()))
        .filter(|v| !v.is_empty())
        .collect()
}
