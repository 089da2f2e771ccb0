use diesel::prelude::*;
use num_traits::ToPrimitive;
use std::sync::Arc;

use super::companies_errors::{CompanyError, Result};
use super::companies_model::{Company, CompanyDB, CompanyTerms, NewCompany, NewCompanyDB};
use super::companies_traits::CompanyRepositoryTrait;
use crate::db::{get_connection, DbPool};
use crate::schema::companies;

pub struct CompanyRepository {
    pool: Arc<DbPool>,
}

impl CompanyRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl CompanyRepositoryTrait for CompanyRepository {
    fn get_by_id(&self, company_id: i32) -> Result<Option<Company>> {
        let mut conn = get_connection(&self.pool)?;
        let row = companies::table
            .filter(companies::id.eq(company_id))
            .first::<CompanyDB>(&mut conn)
            .optional()?;
        Ok(row.map(Company::from))
    }

    fn insert(&self, new_company: NewCompany) -> Result<Company> {
        let mut conn = get_connection(&self.pool)?;
        let row: CompanyDB = diesel::insert_into(companies::table)
            .values(NewCompanyDB::from(new_company))
            .get_result(&mut conn)?;
        Ok(row.into())
    }

    fn update_terms(&self, company_id: i32, terms: &CompanyTerms) -> Result<Company> {
        let mut conn = get_connection(&self.pool)?;
        let row: CompanyDB = diesel::update(companies::table.find(company_id))
            .set((
                companies::payment_pct.eq(terms.payment_pct.to_f64().unwrap_or_default()),
                companies::payment_pct_pt.eq(terms.payment_pct_pt.to_f64().unwrap_or_default()),
                companies::payment_pct_rh.eq(terms.payment_pct_rh.to_f64().unwrap_or_default()),
                companies::operating_cost.eq(terms.operating_cost.to_f64().unwrap_or_default()),
                companies::financial_cost_rate
                    .eq(terms.financial_cost_rate.to_f64().unwrap_or_default()),
                companies::updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .get_result(&mut conn)
            .optional()?
            .ok_or(CompanyError::NotFound(company_id))?;
        Ok(row.into())
    }
}
