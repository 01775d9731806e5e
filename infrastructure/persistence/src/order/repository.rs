use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::order::model::{Order, OrderItem};
use business::domain::order::repository::{OrderItemRepository, OrderRepository};
use business::domain::shared::value_objects::UserId;

use super::entity::{OrderEntity, OrderItemEntity};

pub struct OrderRepositoryPostgres {
    pool: PgPool,
}

impl OrderRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn insert(&self, order: &Order) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO orders (id, user_id, status, total_amount, delivery_type, idempotency_key, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(order.id)
        .bind(order.user_id.as_str())
        .bind(order.status.to_string())
        .bind(&order.total_amount)
        .bind(&order.delivery_type)
        .bind(order.idempotency_key)
        .bind(order.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
            _ => RepositoryError::DatabaseError,
        })?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn find_by_idempotency_key(
        &self,
        key: Uuid,
        user_id: &UserId,
    ) -> Result<Option<Order>, RepositoryError> {
        let entity = sqlx::query_as::<_, OrderEntity>(
            "SELECT id, user_id, status, total_amount, delivery_type, idempotency_key, created_at \
             FROM orders WHERE idempotency_key = $1 AND user_id = $2",
        )
        .bind(key)
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<Order, RepositoryError> {
        let entity = sqlx::query_as::<_, OrderEntity>(
            "SELECT id, user_id, status, total_amount, delivery_type, idempotency_key, created_at \
             FROM orders WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_all(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError> {
        let entities = sqlx::query_as::<_, OrderEntity>(
            "SELECT id, user_id, status, total_amount, delivery_type, idempotency_key, created_at \
             FROM orders WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}

pub struct OrderItemRepositoryPostgres {
    pool: PgPool,
}

impl OrderItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderItemRepository for OrderItemRepositoryPostgres {
    async fn insert_many(&self, items: &[OrderItem]) -> Result<(), RepositoryError> {
        if items.is_empty() {
            return Ok(());
        }

        let mut builder = QueryBuilder::new(
            "INSERT INTO order_items (id, order_id, product_id, quantity, unit_price_snapshot) ",
        );
        builder.push_values(items, |mut row, item| {
            row.push_bind(item.id)
                .push_bind(item.order_id)
                .push_bind(item.product_id)
                .push_bind(item.quantity)
                .push_bind(&item.unit_price_snapshot);
        });

        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn get_by_order(&self, order_id: Uuid) -> Result<Vec<OrderItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, OrderItemEntity>(
            "SELECT id, order_id, product_id, quantity, unit_price_snapshot \
             FROM order_items WHERE order_id = $1",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
