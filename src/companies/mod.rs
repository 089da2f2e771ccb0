pub mod companies_errors;
pub mod companies_model;
pub mod companies_repository;
pub mod companies_service;
pub mod companies_traits;

pub use companies_errors::{CompanyError, Result};
pub use companies_model::{Company, CompanyTerms, NewCompany};
pub use companies_repository::CompanyRepository;
pub use companies_service::CompanyService;
pub use companies_traits::{CompanyRepositoryTrait, CompanyTermsServiceTrait};
