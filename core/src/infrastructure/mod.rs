pub mod db;
pub mod ingredient;
pub mod memory;
pub mod pantry;
pub mod recipe;
pub mod recommender;
