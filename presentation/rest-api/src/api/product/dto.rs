use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product display name
    pub name: String,
    /// Current unit price in decimal major units, e.g. "10.99"
    pub price_amount: String,
    /// Product image URL
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            price_amount: product.price_amount.to_string(),
            image_url: product.image_url,
        }
    }
}
