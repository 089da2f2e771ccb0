use chrono::NaiveDateTime;
use diesel::prelude::*;
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::metals::MetalClass;

/// Domain model for a product
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub reference: Option<String>,
    /// Declared total weight in grams.
    pub weight: Decimal,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// One (metal, quantity) pair of a product's composition. Quantity is in
/// parts-per-thousand of the product's declared weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionComponent {
    pub metal_id: i32,
    pub metal_name: String,
    pub metal_symbol: String,
    pub unit: String,
    pub quantity_ppt: Decimal,
}

impl CompositionComponent {
    pub fn class(&self) -> MetalClass {
        MetalClass::classify(&self.metal_symbol, &self.metal_name)
    }
}

/// A product's full composition as used by the pricing engine. Immutable
/// during a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductComposition {
    pub product_id: i32,
    /// Declared total weight in grams.
    pub total_weight: Decimal,
    pub components: Vec<CompositionComponent>,
}

/// Input model for creating a product
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub reference: Option<String>,
    pub weight: Decimal,
}

/// Database model for products
#[derive(Queryable, Identifiable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductDB {
    pub id: i32,
    pub name: String,
    pub reference: Option<String>,
    pub weight: f64,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProductDB {
    pub name: String,
    pub reference: Option<String>,
    pub weight: f64,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Database model for composition rows
#[derive(Queryable, Identifiable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::product_components)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductComponentDB {
    pub id: i32,
    pub product_id: i32,
    pub metal_id: i32,
    pub quantity_ppt: f64,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::product_components)]
pub struct NewProductComponentDB {
    pub product_id: i32,
    pub metal_id: i32,
    pub quantity_ppt: f64,
    pub created_at: NaiveDateTime,
}

impl From<ProductDB> for Product {
    fn from(db: ProductDB) -> Self {
        Product {
            id: db.id,
            name: db.name,
            reference: db.reference,
            weight: Decimal::from_f64(db.weight).unwrap_or_default(),
            is_active: db.is_active,
            created_at: db.created_at,
        }
    }
}

impl From<NewProduct> for NewProductDB {
    fn from(new: NewProduct) -> Self {
        NewProductDB {
            name: new.name,
            reference: new.reference,
            weight: new.weight.to_f64().unwrap_or_default(),
            is_active: true,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
