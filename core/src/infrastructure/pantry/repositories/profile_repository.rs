use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        pantry::{entities::UserDietaryProfile, ports::ProfileRepository},
    },
    infrastructure::pantry::mappers::profile_from_row,
};

#[derive(Debug, Clone)]
pub struct PostgresProfileRepository {
    pub db: DatabaseConnection,
}

impl PostgresProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ProfileRepository for PostgresProfileRepository {
    async fn get_user_profile(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserDietaryProfile>, CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
              d.name AS diet,
              ARRAY(
                SELECT a.name
                FROM user_profile_allergies upa
                INNER JOIN allergies a ON a.id = upa.allergy_id
                WHERE upa.user_id = p.user_id
              ) AS allergies
            FROM user_profiles p
            LEFT JOIN dietary_preferences d ON d.id = p.dietary_preference_id
            WHERE p.user_id = $1
            "#,
            [user_id.into()],
        );

        let row = self.db.query_one(stmt).await.map_err(|e| {
            error!("Failed to get user profile: {}", e);
            CoreError::InternalServerError
        })?;

        row.as_ref()
            .map(profile_from_row)
            .transpose()
            .map_err(|e| {
                error!("Failed to map profile row: {}", e);
                CoreError::InternalServerError
            })
    }
}
