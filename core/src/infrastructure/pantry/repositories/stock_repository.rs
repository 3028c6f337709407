use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        pantry::{entities::UserIngredientStock, ports::StockRepository},
    },
    infrastructure::pantry::mappers::stock_entry_from_row,
};

#[derive(Debug, Clone)]
pub struct PostgresStockRepository {
    pub db: DatabaseConnection,
}

impl PostgresStockRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl StockRepository for PostgresStockRepository {
    async fn get_user_stock(&self, user_id: Uuid) -> Result<UserIngredientStock, CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
              i.name AS ingredient_name,
              ui.is_available,
              ui.quantity,
              ui.expires_on
            FROM user_ingredients ui
            INNER JOIN ingredients i ON i.id = ui.ingredient_id
            WHERE ui.user_id = $1
            ORDER BY lower(i.name)
            "#,
            [user_id.into()],
        );

        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Failed to get user stock: {}", e);
            CoreError::InternalServerError
        })?;

        let entries = rows
            .iter()
            .map(stock_entry_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                error!("Failed to map stock row: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(UserIngredientStock::new(user_id, entries))
    }
}
