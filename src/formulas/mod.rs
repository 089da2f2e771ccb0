pub mod formulas_model;
pub mod formulas_repository;
pub mod formulas_service;
pub mod formulas_traits;

pub use formulas_model::{Formula, FormulaUpdate};
pub use formulas_repository::FormulaRepository;
pub use formulas_service::FormulaService;
pub use formulas_traits::{FormulaRepositoryTrait, FormulaServiceTrait};
