use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::OrderItem;
use crate::domain::shared::value_objects::UserId;

pub struct GetOrderItemsParams {
    pub user_id: UserId,
    pub order_id: Uuid,
}

#[async_trait]
pub trait GetOrderItemsUseCase: Send + Sync {
    async fn execute(&self, params: GetOrderItemsParams) -> Result<Vec<OrderItem>, OrderError>;
}
