use async_trait::async_trait;

use super::companies_errors::Result;
use super::companies_model::{Company, CompanyTerms, NewCompany};

/// Contract of the company terms resolver as seen by the pricing engine.
/// No defaulting: a missing company is a hard NotFound.
#[async_trait]
pub trait CompanyTermsServiceTrait: Send + Sync {
    async fn get_terms(&self, company_id: i32) -> Result<CompanyTerms>;
}

pub trait CompanyRepositoryTrait: Send + Sync {
    fn get_by_id(&self, company_id: i32) -> Result<Option<Company>>;
    fn insert(&self, new_company: NewCompany) -> Result<Company>;
    fn update_terms(&self, company_id: i32, terms: &CompanyTerms) -> Result<Company>;
}
