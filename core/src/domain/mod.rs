pub mod allergen;
pub mod common;
pub mod diet;
pub mod ingredient;
pub mod pantry;
pub mod recipe;
pub mod recipe_filter;
pub mod rules;
pub mod shopping;
