pub mod profile_repository;
pub mod stock_repository;
