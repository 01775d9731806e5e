#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.cart_not_found")]
    CartNotFound,
    #[error("order.empty_cart")]
    EmptyCart,
    #[error("order.total_negative")]
    TotalNegative,
    #[error("order.price_integrity")]
    PriceIntegrity,
    #[error("order.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
