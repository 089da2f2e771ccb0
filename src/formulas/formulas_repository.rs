use diesel::prelude::*;
use std::sync::Arc;

use super::formulas_model::{Formula, FormulaDB, FormulaUpdate, NewFormulaDB};
use super::formulas_traits::FormulaRepositoryTrait;
use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::schema::formulas;

pub struct FormulaRepository {
    pool: Arc<DbPool>,
}

impl FormulaRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl FormulaRepositoryTrait for FormulaRepository {
    fn get_latest(&self) -> Result<Option<Formula>> {
        let mut conn = get_connection(&self.pool)?;
        let row = formulas::table
            .order(formulas::updated_at.desc())
            .then_order_by(formulas::id.desc())
            .first::<FormulaDB>(&mut conn)
            .optional()?;
        Ok(row.map(Formula::from))
    }

    fn insert(&self, update: &FormulaUpdate) -> Result<Formula> {
        let mut conn = get_connection(&self.pool)?;
        let row: FormulaDB = diesel::insert_into(formulas::table)
            .values(NewFormulaDB::from(update))
            .get_result(&mut conn)?;
        Ok(row.into())
    }
}
