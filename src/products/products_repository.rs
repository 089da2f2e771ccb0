use diesel::prelude::*;
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::products_errors::Result;
use super::products_model::{
    CompositionComponent, NewProduct, NewProductComponentDB, NewProductDB, Product,
    ProductComponentDB, ProductDB,
};
use super::products_traits::ProductRepositoryTrait;
use crate::db::{get_connection, DbPool};
use crate::metals::metals_model::MetalDB;
use crate::schema::{metals, product_components, products};

pub struct ProductRepository {
    pool: Arc<DbPool>,
}

impl ProductRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl ProductRepositoryTrait for ProductRepository {
    fn get_by_id(&self, product_id: i32) -> Result<Option<Product>> {
        let mut conn = get_connection(&self.pool)?;
        let row = products::table
            .filter(products::id.eq(product_id))
            .first::<ProductDB>(&mut conn)
            .optional()?;
        Ok(row.map(Product::from))
    }

    fn get_components(&self, product_id: i32) -> Result<Vec<CompositionComponent>> {
        let mut conn = get_connection(&self.pool)?;
        let rows: Vec<(ProductComponentDB, MetalDB)> = product_components::table
            .inner_join(metals::table)
            .filter(product_components::product_id.eq(product_id))
            .filter(metals::is_active.eq(true))
            .order(product_components::id.asc())
            .load(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(component, metal)| CompositionComponent {
                metal_id: metal.id,
                metal_name: metal.name,
                metal_symbol: metal.symbol,
                unit: metal.unit,
                quantity_ppt: Decimal::from_f64(component.quantity_ppt).unwrap_or_default(),
            })
            .collect())
    }

    fn insert(&self, new_product: NewProduct) -> Result<Product> {
        let mut conn = get_connection(&self.pool)?;
        let row: ProductDB = diesel::insert_into(products::table)
            .values(NewProductDB::from(new_product))
            .get_result(&mut conn)?;
        Ok(row.into())
    }

    fn add_component(&self, product_id: i32, metal_id: i32, quantity_ppt: Decimal) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::insert_into(product_components::table)
            .values(NewProductComponentDB {
                product_id,
                metal_id,
                quantity_ppt: quantity_ppt.to_f64().unwrap_or_default(),
                created_at: chrono::Utc::now().naive_utc(),
            })
            .execute(&mut conn)?;
        Ok(())
    }
}
