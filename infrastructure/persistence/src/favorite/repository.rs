use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::favorite::model::Favorite;
use business::domain::favorite::repository::FavoriteRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::FavoriteEntity;

pub struct FavoriteRepositoryPostgres {
    pool: PgPool,
}

impl FavoriteRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for FavoriteRepositoryPostgres {
    async fn find(
        &self,
        user_id: &UserId,
        product_id: Uuid,
    ) -> Result<Option<Favorite>, RepositoryError> {
        let entity = sqlx::query_as::<_, FavoriteEntity>(
            "SELECT id, user_id, product_id, created_at FROM favorites \
             WHERE user_id = $1 AND product_id = $2",
        )
        .bind(user_id.as_str())
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn insert(&self, favorite: &Favorite) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO favorites (id, user_id, product_id, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(favorite.id)
        .bind(favorite.user_id.as_str())
        .bind(favorite.product_id)
        .bind(favorite.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
            _ => RepositoryError::DatabaseError,
        })?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM favorites WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn get_all(&self, user_id: &UserId) -> Result<Vec<Favorite>, RepositoryError> {
        let entities = sqlx::query_as::<_, FavoriteEntity>(
            "SELECT id, user_id, product_id, created_at FROM favorites \
             WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
