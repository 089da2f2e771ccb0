use chrono::NaiveDateTime;
use diesel::prelude::*;
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::metals::MetalClass;

/// Global adjustment constants applied uniformly to every calculation:
/// a flat per-ounce discount per priced metal class and a flat adjustment
/// subtracted from the COP exchange rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Formula {
    pub id: i32,
    pub rhodium_discount: Decimal,
    pub palladium_discount: Decimal,
    pub platinum_discount: Decimal,
    pub currency_adjustment: Decimal,
    pub updated_at: NaiveDateTime,
}

impl Formula {
    /// Flat per-ounce discount for a metal class. Unpriced metals carry no
    /// discount because they carry no value.
    pub fn discount_for(&self, class: MetalClass) -> Decimal {
        match class {
            MetalClass::Rhodium => self.rhodium_discount,
            MetalClass::Platinum => self.platinum_discount,
            MetalClass::Palladium => self.palladium_discount,
            MetalClass::Unpriced => Decimal::ZERO,
        }
    }
}

/// Input model for admin formula updates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulaUpdate {
    pub rhodium_discount: Decimal,
    pub palladium_discount: Decimal,
    pub platinum_discount: Decimal,
    pub currency_adjustment: Decimal,
}

impl FormulaUpdate {
    pub fn default_formula() -> Self {
        FormulaUpdate {
            rhodium_discount: Decimal::ZERO,
            palladium_discount: Decimal::ZERO,
            platinum_discount: Decimal::ZERO,
            currency_adjustment: Decimal::ZERO,
        }
    }
}

/// Database model for formulas
#[derive(Queryable, Identifiable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::formulas)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FormulaDB {
    pub id: i32,
    pub rhodium_discount: f64,
    pub palladium_discount: f64,
    pub platinum_discount: f64,
    pub currency_adjustment: f64,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::formulas)]
pub struct NewFormulaDB {
    pub rhodium_discount: f64,
    pub palladium_discount: f64,
    pub platinum_discount: f64,
    pub currency_adjustment: f64,
    pub updated_at: NaiveDateTime,
}

impl From<FormulaDB> for Formula {
    fn from(db: FormulaDB) -> Self {
        Formula {
            id: db.id,
            rhodium_discount: Decimal::from_f64(db.rhodium_discount).unwrap_or_default(),
            palladium_discount: Decimal::from_f64(db.palladium_discount).unwrap_or_default(),
            platinum_discount: Decimal::from_f64(db.platinum_discount).unwrap_or_default(),
            currency_adjustment: Decimal::from_f64(db.currency_adjustment).unwrap_or_default(),
            updated_at: db.updated_at,
        }
    }
}

impl From<&FormulaUpdate> for NewFormulaDB {
    fn from(update: &FormulaUpdate) -> Self {
        NewFormulaDB {
            rhodium_discount: update.rhodium_discount.to_f64().unwrap_or_default(),
            palladium_discount: update.palladium_discount.to_f64().unwrap_or_default(),
            platinum_discount: update.platinum_discount.to_f64().unwrap_or_default(),
            currency_adjustment: update.currency_adjustment.to_f64().unwrap_or_default(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
