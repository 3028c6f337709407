use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::error;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, normalize_name},
        ingredient::{entities::Ingredient, ports::IngredientCatalog},
    },
    infrastructure::ingredient::mappers::ingredient_from_row,
};

#[derive(Debug, Clone)]
pub struct PostgresIngredientCatalog {
    pub db: DatabaseConnection,
}

impl PostgresIngredientCatalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch(&self, stmt: Statement, action: &str) -> Result<Vec<Ingredient>, CoreError> {
        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Failed to {}: {}", action, e);
            CoreError::InternalServerError
        })?;

        rows.iter()
            .map(ingredient_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                error!("Failed to map ingredient row: {}", e);
                CoreError::InternalServerError
            })
    }
}

impl IngredientCatalog for PostgresIngredientCatalog {
    async fn resolve_ingredients(&self, names: Vec<String>) -> Result<Vec<Ingredient>, CoreError> {
        let names: Vec<String> = names
            .iter()
            .map(|n| normalize_name(n))
            .filter(|n| !n.is_empty())
            .collect();
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
              i.id,
              i.name,
              ARRAY(
                SELECT lower(trim(a.name))
                FROM ingredient_allergens ia
                INNER JOIN allergies a ON a.id = ia.allergy_id
                WHERE ia.ingredient_id = i.id
              ) AS allergens,
              ARRAY(
                SELECT d.name
                FROM ingredient_diets idt
                INNER JOIN dietary_preferences d ON d.id = idt.dietary_preference_id
                WHERE idt.ingredient_id = i.id
              ) AS diets
            FROM ingredients i
            WHERE lower(trim(i.name)) = ANY($1)
            ORDER BY lower(i.name), i.id
            "#,
            [names.into()],
        );

        self.fetch(stmt, "resolve ingredients").await
    }

    async fn search_ingredients(
        &self,
        query: String,
        limit: u32,
    ) -> Result<Vec<Ingredient>, CoreError> {
        let query = normalize_name(&query);

        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
              i.id,
              i.name,
              ARRAY(
                SELECT lower(trim(a.name))
                FROM ingredient_allergens ia
                INNER JOIN allergies a ON a.id = ia.allergy_id
                WHERE ia.ingredient_id = i.id
              ) AS allergens,
              ARRAY(
                SELECT d.name
                FROM ingredient_diets idt
                INNER JOIN dietary_preferences d ON d.id = idt.dietary_preference_id
                WHERE idt.ingredient_id = i.id
              ) AS diets
            FROM ingredients i
            WHERE strpos(lower(i.name), $1) > 0
            ORDER BY
              (lower(trim(i.name)) = $1) DESC,
              length(trim(i.name)),
              lower(i.name)
            LIMIT $2
            "#,
            [query.into(), i64::from(limit).into()],
        );

        self.fetch(stmt, "search ingredients").await
    }
}
