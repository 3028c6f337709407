pub mod list_recipes;
pub mod matching_recipes;
pub mod search_recipes;
pub mod suggest_recipes;
