use async_trait::async_trait;

use super::formulas_model::{Formula, FormulaUpdate};
use crate::errors::Result;

#[async_trait]
pub trait FormulaServiceTrait: Send + Sync {
    /// Latest formula; auto-initializes the default record on first call.
    async fn get_current(&self) -> Result<Formula>;
    async fn update(&self, update: FormulaUpdate) -> Result<Formula>;
}

pub trait FormulaRepositoryTrait: Send + Sync {
    fn get_latest(&self) -> Result<Option<Formula>>;
    fn insert(&self, update: &FormulaUpdate) -> Result<Formula>;
}
