use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    domain::{
        common::{LarderConfig, entities::app_errors::CoreError, services::Service},
        rules::entities::DietaryRules,
    },
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        ingredient::repositories::ingredient_catalog::PostgresIngredientCatalog,
        pantry::repositories::{
            profile_repository::PostgresProfileRepository,
            stock_repository::PostgresStockRepository,
        },
        recipe::repositories::recipe_repository::PostgresRecipeRepository,
        recommender::http_suggester::HttpRecipeSuggester,
    },
};

pub type LarderService = Service<
    PostgresRecipeRepository,
    PostgresIngredientCatalog,
    PostgresStockRepository,
    PostgresProfileRepository,
    HttpRecipeSuggester,
>;

/// Loads the dietary rules, connects to the database and wires every adapter
/// into one service.
pub async fn create_service(config: LarderConfig) -> Result<LarderService, CoreError> {
    let rules = Arc::new(DietaryRules::load(config.rules_path.as_deref())?);

    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    let recipe_suggester = HttpRecipeSuggester::new(&config.recommender)?;
    if recipe_suggester.is_configured() {
        info!("recipe recommender enabled");
    } else {
        warn!("no recommender endpoint configured, suggestions use ingredient overlap");
    }

    Ok(Service::new(
        PostgresRecipeRepository::new(postgres.get_db()),
        PostgresIngredientCatalog::new(postgres.get_db()),
        PostgresStockRepository::new(postgres.get_db()),
        PostgresProfileRepository::new(postgres.get_db()),
        recipe_suggester,
        rules,
    )
    .with_suggestion_top_n(config.recommender.top_n))
}
