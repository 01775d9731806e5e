use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::Favorite;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::toggle::{ToggleFavoriteParams, ToggleFavoriteUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct ToggleFavoriteUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleFavoriteUseCase for ToggleFavoriteUseCaseImpl {
    async fn execute(&self, params: ToggleFavoriteParams) -> Result<bool, FavoriteError> {
        self.logger.info(&format!(
            "Toggling favorite {} for user {}",
            params.product_id, params.user_id
        ));

        match self
            .repository
            .find(&params.user_id, params.product_id)
            .await?
        {
            Some(existing) => {
                self.repository.delete(existing.id).await?;
                Ok(false)
            }
            None => {
                self.product_repository
                    .get_by_id(params.product_id)
                    .await
                    .map_err(|e| match e {
                        RepositoryError::NotFound => FavoriteError::ProductNotFound,
                        other => FavoriteError::Repository(other),
                    })?;

                let favorite = Favorite::new(params.user_id, params.product_id);
                self.repository.insert(&favorite).await?;
                Ok(true)
            }
        }
    }
}
