use std::collections::BTreeSet;

use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement, Value};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, normalize_name},
        recipe::{entities::Recipe, ports::RecipeRepository, value_objects::RecipeListFilter},
    },
    infrastructure::recipe::mappers::recipe_from_row,
};

const RECIPE_COLUMNS: &str = r#"
    SELECT
      r.id,
      r.name,
      r.description,
      ARRAY(
        SELECT lower(trim(i.name))
        FROM recipe_ingredients ri
        INNER JOIN ingredients i ON i.id = ri.ingredient_id
        WHERE ri.recipe_id = r.id
      ) AS ingredients,
      ARRAY(
        SELECT lower(trim(a.name))
        FROM recipe_allergens ra
        INNER JOIN allergies a ON a.id = ra.allergy_id
        WHERE ra.recipe_id = r.id
      ) AS allergens,
      ARRAY(
        SELECT d.name
        FROM recipe_diets rd
        INNER JOIN dietary_preferences d ON d.id = rd.dietary_preference_id
        WHERE rd.recipe_id = r.id
      ) AS diets
    FROM recipes r
"#;

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Renders the filter into a WHERE clause with positional parameters.
    fn list_statement(filter: &RecipeListFilter) -> Statement {
        let mut conditions = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(name) = filter.name_contains.as_deref().map(normalize_name)
            && !name.is_empty()
        {
            values.push(name.into());
            conditions.push(format!("strpos(lower(r.name), ${}) > 0", values.len()));
        }

        if let Some(names) = &filter.any_ingredient {
            let names: Vec<String> = names.iter().map(|n| normalize_name(n)).collect();
            values.push(names.into());
            conditions.push(format!(
                r#"EXISTS (
                  SELECT 1
                  FROM recipe_ingredients ri
                  INNER JOIN ingredients i ON i.id = ri.ingredient_id
                  WHERE ri.recipe_id = r.id AND lower(trim(i.name)) = ANY(${})
                )"#,
                values.len()
            ));
        }

        let mut sql = RECIPE_COLUMNS.to_string();
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY lower(r.name), r.id");

        Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, values)
    }
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn list_recipes(&self, filter: RecipeListFilter) -> Result<Vec<Recipe>, CoreError> {
        let rows = self
            .db
            .query_all(Self::list_statement(&filter))
            .await
            .map_err(|e| {
                error!("Failed to list recipes: {}", e);
                CoreError::InternalServerError
            })?;

        rows.iter()
            .map(recipe_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                error!("Failed to map recipe row: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn get_recipe_ingredients(
        &self,
        recipe_id: Uuid,
    ) -> Result<Option<BTreeSet<String>>, CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT ARRAY(
              SELECT lower(trim(i.name))
              FROM recipe_ingredients ri
              INNER JOIN ingredients i ON i.id = ri.ingredient_id
              WHERE ri.recipe_id = r.id
            ) AS ingredients
            FROM recipes r
            WHERE r.id = $1
            "#,
            [recipe_id.into()],
        );

        let row = self.db.query_one(stmt).await.map_err(|e| {
            error!("Failed to get recipe ingredients: {}", e);
            CoreError::InternalServerError
        })?;

        let Some(row) = row else {
            return Ok(None);
        };

        let ingredients: Vec<String> = row.try_get("", "ingredients").map_err(|e| {
            error!("Failed to read recipe ingredients: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Some(
            ingredients
                .into_iter()
                .filter(|name| !name.is_empty())
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_statement_without_filter_has_no_where_clause() {
        let stmt = PostgresRecipeRepository::list_statement(&RecipeListFilter::default());
        assert!(!stmt.sql.contains("strpos"));
        assert!(!stmt.sql.contains("ANY("));
        assert!(stmt.sql.ends_with("ORDER BY lower(r.name), r.id"));
        assert!(stmt.values.is_none_or(|v| v.0.is_empty()));
    }

    #[test]
    fn test_list_statement_numbers_parameters_in_order() {
        let stmt = PostgresRecipeRepository::list_statement(&RecipeListFilter {
            name_contains: Some(" Curry ".to_string()),
            any_ingredient: Some(vec!["Rice".to_string()]),
        });

        assert!(stmt.sql.contains("strpos(lower(r.name), $1) > 0"));
        assert!(stmt.sql.contains("= ANY($2)"));
        assert_eq!(stmt.values.map(|v| v.0.len()), Some(2));
    }
}
