use std::{collections::BTreeSet, future::Future};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Recipe,
        value_objects::{
            ListRecipesInput, MatchingRecipesInput, RecipeListFilter, SearchRecipesInput,
            SuggestRecipesInput,
        },
    },
    recipe_filter::value_objects::RecipePage,
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn list_recipes(
        &self,
        filter: RecipeListFilter,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    /// `None` when the recipe does not exist.
    fn get_recipe_ingredients(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Option<BTreeSet<String>>, CoreError>> + Send;
}

/// External recommender returning ranked recipe titles for a set of ingredients.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeSuggester: Send + Sync {
    fn suggest_recipe_titles(
        &self,
        ingredient_names: Vec<String>,
        top_n: usize,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    /// Whole catalog through the dietary filters.
    fn list_recipes(
        &self,
        input: ListRecipesInput,
    ) -> impl Future<Output = Result<RecipePage, CoreError>> + Send;

    /// Recipes fully covered by what the user has in stock.
    fn matching_recipes(
        &self,
        input: MatchingRecipesInput,
    ) -> impl Future<Output = Result<RecipePage, CoreError>> + Send;

    /// Recipes containing every ingredient the user asked for.
    fn search_recipes(
        &self,
        input: SearchRecipesInput,
    ) -> impl Future<Output = Result<RecipePage, CoreError>> + Send;

    /// Recommender suggestions resolved against the catalog.
    fn suggest_recipes(
        &self,
        input: SuggestRecipesInput,
    ) -> impl Future<Output = Result<RecipePage, CoreError>> + Send;
}
