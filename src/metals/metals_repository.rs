use diesel::prelude::*;
use std::sync::Arc;

use super::metals_model::{Metal, MetalDB, NewMetal, NewMetalDB};
use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::schema::metals;

pub struct MetalRepository {
    pool: Arc<DbPool>,
}

impl MetalRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    pub fn get_by_symbol(&self, symbol: &str) -> Result<Option<Metal>> {
        let mut conn = get_connection(&self.pool)?;
        let metal = metals::table
            .filter(metals::symbol.eq(symbol))
            .first::<MetalDB>(&mut conn)
            .optional()?;
        Ok(metal.map(Metal::from))
    }

    pub fn list_active(&self) -> Result<Vec<Metal>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = metals::table
            .filter(metals::is_active.eq(true))
            .order(metals::name.asc())
            .load::<MetalDB>(&mut conn)?;
        Ok(rows.into_iter().map(Metal::from).collect())
    }

    pub fn insert(&self, new_metal: NewMetal) -> Result<Metal> {
        let mut conn = get_connection(&self.pool)?;
        let row: MetalDB = diesel::insert_into(metals::table)
            .values(NewMetalDB::from(new_metal))
            .get_result(&mut conn)?;
        Ok(row.into())
    }
}
