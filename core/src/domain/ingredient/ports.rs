use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::Ingredient,
        value_objects::{IngredientMatch, SearchIngredientsInput},
    },
};

/// Read access to the global ingredient catalog.
#[cfg_attr(test, mockall::automock)]
pub trait IngredientCatalog: Send + Sync {
    /// Catalog entries whose name matches one of `names` (case-insensitive).
    /// Unknown names are silently dropped.
    fn resolve_ingredients(
        &self,
        names: Vec<String>,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    /// Substring search: exact match first, then shorter names, then alphabetical.
    fn search_ingredients(
        &self,
        query: String,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait IngredientService: Send + Sync {
    fn search_ingredients(
        &self,
        input: SearchIngredientsInput,
    ) -> impl Future<Output = Result<Vec<IngredientMatch>, CoreError>> + Send;
}
