use async_trait::async_trait;

use super::products_errors::Result;
use super::products_model::{CompositionComponent, NewProduct, Product, ProductComposition};

/// Contract of the composition resolver as seen by the pricing engine.
#[async_trait]
pub trait CompositionServiceTrait: Send + Sync {
    /// Fails with NotFound for a missing product and EmptyComposition for a
    /// product without components; pricing cannot proceed in either case.
    async fn get_composition(&self, product_id: i32) -> Result<ProductComposition>;
}

pub trait ProductRepositoryTrait: Send + Sync {
    fn get_by_id(&self, product_id: i32) -> Result<Option<Product>>;
    /// Components joined with their metal, restricted to active metals.
    fn get_components(&self, product_id: i32) -> Result<Vec<CompositionComponent>>;
    fn insert(&self, new_product: NewProduct) -> Result<Product>;
    fn add_component(
        &self,
        product_id: i32,
        metal_id: i32,
        quantity_ppt: rust_decimal::Decimal,
    ) -> Result<()>;
}
