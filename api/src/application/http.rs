pub mod diet;
pub mod ingredient;
pub mod query_extractor;
pub mod query_params;
pub mod recipe;
pub mod server;
pub mod shopping;
