use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::normalize_name;

/// One ingredient a user keeps in their fridge or pantry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StockEntry {
    pub ingredient_name: String,
    pub is_available: bool,
    pub quantity: Option<String>,
    pub expires_on: Option<NaiveDate>,
}

impl StockEntry {
    pub fn available(ingredient_name: impl Into<String>) -> Self {
        Self {
            ingredient_name: ingredient_name.into(),
            is_available: true,
            quantity: None,
            expires_on: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserIngredientStock {
    pub user_id: Uuid,
    pub entries: Vec<StockEntry>,
}

impl UserIngredientStock {
    pub fn new(user_id: Uuid, entries: Vec<StockEntry>) -> Self {
        Self { user_id, entries }
    }

    /// Normalized names of every entry currently marked available.
    pub fn available_names(&self) -> BTreeSet<String> {
        self.entries
            .iter()
            .filter(|e| e.is_available)
            .map(|e| normalize_name(&e.ingredient_name))
            .filter(|n| !n.is_empty())
            .collect()
    }
}

/// A user's diet (at most one) and allergy list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDietaryProfile {
    pub diet: Option<String>,
    pub allergies: Vec<String>,
}

impl UserDietaryProfile {
    /// Profile applied when a user has none: no diet, no allergies.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn has_allergies(&self) -> bool {
        self.allergies.iter().any(|a| !a.trim().is_empty())
    }

    /// Normalized raw allergy names, without expansion.
    pub fn allergy_names(&self) -> BTreeSet<String> {
        self.allergies
            .iter()
            .map(|a| normalize_name(a))
            .filter(|a| !a.is_empty())
            .collect()
    }

    pub fn with_diet(mut self, diet: Option<String>) -> Self {
        self.diet = diet;
        self
    }
}
