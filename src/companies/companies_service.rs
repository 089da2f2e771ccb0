use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::companies_errors::{CompanyError, Result};
use super::companies_model::{Company, CompanyTerms, NewCompany};
use super::companies_traits::{CompanyRepositoryTrait, CompanyTermsServiceTrait};

pub struct CompanyService {
    repository: Arc<dyn CompanyRepositoryTrait>,
}

impl CompanyService {
    pub fn new(repository: Arc<dyn CompanyRepositoryTrait>) -> Self {
        Self { repository }
    }

    pub fn create_company(&self, new_company: NewCompany) -> Result<Company> {
        self.repository.insert(new_company)
    }

    pub fn update_terms(&self, company_id: i32, terms: &CompanyTerms) -> Result<Company> {
        self.repository.update_terms(company_id, terms)
    }
}

#[async_trait]
impl CompanyTermsServiceTrait for CompanyService {
    async fn get_terms(&self, company_id: i32) -> Result<CompanyTerms> {
        debug!("Resolving commercial terms for company {}", company_id);
        let company = self
            .repository
            .get_by_id(company_id)?
            .ok_or(CompanyError::NotFound(company_id))?;
        Ok(company.terms)
    }
}
