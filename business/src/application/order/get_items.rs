use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::OrderItem;
use crate::domain::order::repository::{OrderItemRepository, OrderRepository};
use crate::domain::order::use_cases::get_items::{GetOrderItemsParams, GetOrderItemsUseCase};

pub struct GetOrderItemsUseCaseImpl {
    pub order_repository: Arc<dyn OrderRepository>,
    pub order_item_repository: Arc<dyn OrderItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrderItemsUseCase for GetOrderItemsUseCaseImpl {
    async fn execute(&self, params: GetOrderItemsParams) -> Result<Vec<OrderItem>, OrderError> {
        self.logger
            .debug(&format!("Listing items of order {}", params.order_id));

        // Scope the order to the caller before exposing its lines.
        self.order_repository
            .get_by_id(params.order_id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NotFound,
                other => OrderError::Repository(other),
            })?;

        let items = self
            .order_item_repository
            .get_by_order(params.order_id)
            .await?;
        Ok(items)
    }
}
