use uuid::Uuid;

use crate::domain::recipe_filter::value_objects::Pagination;

pub const MAX_SUGGESTIONS: usize = 50;

/// Prefilter pushed down to the recipe store. Matching is still re-checked in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeListFilter {
    /// Case-insensitive substring of the recipe name.
    pub name_contains: Option<String>,
    /// Only recipes using at least one of these normalized ingredient names.
    pub any_ingredient: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct ListRecipesInput {
    pub user_id: Uuid,
    pub name_contains: Option<String>,
    /// Replaces the profile diet. Must name a catalog diet.
    pub diet: Option<String>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone)]
pub struct MatchingRecipesInput {
    pub user_id: Uuid,
    pub pagination: Pagination,
}

#[derive(Debug, Clone)]
pub struct SearchRecipesInput {
    pub user_id: Uuid,
    pub ingredients: Vec<String>,
    pub diet: Option<String>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone)]
pub struct SuggestRecipesInput {
    pub user_id: Uuid,
    pub ingredients: Vec<String>,
    pub top_n: Option<usize>,
    pub pagination: Pagination,
}
