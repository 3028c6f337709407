use std::path::PathBuf;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct LarderConfig {
    pub database: DatabaseConfig,
    pub recommender: RecommenderConfig,
    pub rules_path: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct RecommenderConfig {
    /// Base URL of the external recipe recommender. `None` disables it.
    pub endpoint: Option<String>,
    pub top_n: usize,
    pub timeout_ms: u64,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            top_n: 3,
            timeout_ms: 5_000,
        }
    }
}

/// Canonical form used for every ingredient, allergen and recipe-tag comparison.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
