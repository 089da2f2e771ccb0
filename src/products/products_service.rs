use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::products_errors::{ProductError, Result};
use super::products_model::ProductComposition;
use super::products_traits::{CompositionServiceTrait, ProductRepositoryTrait};

pub struct ProductService {
    repository: Arc<dyn ProductRepositoryTrait>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CompositionServiceTrait for ProductService {
    async fn get_composition(&self, product_id: i32) -> Result<ProductComposition> {
        let product = self
            .repository
            .get_by_id(product_id)?
            .ok_or(ProductError::NotFound(product_id))?;

        let components = self.repository.get_components(product_id)?;
        if components.is_empty() {
            return Err(ProductError::EmptyComposition(product_id));
        }

        debug!(
            "Resolved composition for product {}: {} components, {}g",
            product_id,
            components.len(),
            product.weight
        );

        Ok(ProductComposition {
            product_id,
            total_weight: product.weight,
            components,
        })
    }
}
