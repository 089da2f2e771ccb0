use chrono::NaiveDateTime;
use diesel::prelude::*;
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::metals::MetalClass;

/// Per-company commercial terms: the fraction of computed metal value the
/// company actually pays per metal class, plus its operating cost structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyTerms {
    /// Payment fraction for base/palladium-class metals.
    pub payment_pct: Decimal,
    /// Payment fraction for platinum-class metals.
    pub payment_pct_pt: Decimal,
    /// Payment fraction for rhodium-class metals.
    pub payment_pct_rh: Decimal,
    /// Fixed operating cost subtracted per calculation.
    pub operating_cost: Decimal,
    /// Variable/financial cost as a fraction of gross value.
    pub financial_cost_rate: Decimal,
}

impl CompanyTerms {
    pub fn payment_pct_for(&self, class: MetalClass) -> Decimal {
        match class {
            MetalClass::Rhodium => self.payment_pct_rh,
            MetalClass::Platinum => self.payment_pct_pt,
            MetalClass::Palladium => self.payment_pct,
            MetalClass::Unpriced => Decimal::ZERO,
        }
    }
}

/// Domain model for a company
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: i32,
    pub name: String,
    pub identification: String,
    pub terms: CompanyTerms,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a company
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompany {
    pub name: String,
    pub identification: String,
    pub terms: CompanyTerms,
}

/// Database model for companies
#[derive(Queryable, Identifiable, Selectable, AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::companies)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CompanyDB {
    pub id: i32,
    pub name: String,
    pub identification: String,
    pub payment_pct: f64,
    pub payment_pct_pt: f64,
    pub payment_pct_rh: f64,
    pub operating_cost: f64,
    pub financial_cost_rate: f64,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::companies)]
pub struct NewCompanyDB {
    pub name: String,
    pub identification: String,
    pub payment_pct: f64,
    pub payment_pct_pt: f64,
    pub payment_pct_rh: f64,
    pub operating_cost: f64,
    pub financial_cost_rate: f64,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<CompanyDB> for Company {
    fn from(db: CompanyDB) -> Self {
        Company {
            id: db.id,
            name: db.name,
            identification: db.identification,
            terms: CompanyTerms {
                payment_pct: Decimal::from_f64(db.payment_pct).unwrap_or_default(),
                payment_pct_pt: Decimal::from_f64(db.payment_pct_pt).unwrap_or_default(),
                payment_pct_rh: Decimal::from_f64(db.payment_pct_rh).unwrap_or_default(),
                operating_cost: Decimal::from_f64(db.operating_cost).unwrap_or_default(),
                financial_cost_rate: Decimal::from_f64(db.financial_cost_rate)
                    .unwrap_or_default(),
            },
            is_active: db.is_active,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewCompany> for NewCompanyDB {
    fn from(new: NewCompany) -> Self {
        let now = chrono::Utc::now().naive_utc();
        NewCompanyDB {
            name: new.name,
            identification: new.identification,
            payment_pct: new.terms.payment_pct.to_f64().unwrap_or_default(),
            payment_pct_pt: new.terms.payment_pct_pt.to_f64().unwrap_or_default(),
            payment_pct_rh: new.terms.payment_pct_rh.to_f64().unwrap_or_default(),
            operating_cost: new.terms.operating_cost.to_f64().unwrap_or_default(),
            financial_cost_rate: new.terms.financial_cost_rate.to_f64().unwrap_or_default(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
