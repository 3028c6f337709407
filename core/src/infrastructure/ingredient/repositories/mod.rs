pub mod ingredient_catalog;
