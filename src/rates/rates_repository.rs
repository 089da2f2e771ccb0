use diesel::prelude::*;
use std::sync::Arc;

use super::rates_errors::Result;
use super::rates_model::{NewRateSnapshotDB, RateSnapshot, RateSnapshotDB};
use super::rates_traits::RateRepositoryTrait;
use crate::db::{get_connection, DbPool};
use crate::schema::metal_rates;

pub struct RateRepository {
    pool: Arc<DbPool>,
}

impl RateRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl RateRepositoryTrait for RateRepository {
    fn get_latest_snapshot(&self) -> Result<Option<RateSnapshot>> {
        let mut conn = get_connection(&self.pool)?;
        let row = metal_rates::table
            .order(metal_rates::timestamp.desc())
            .first::<RateSnapshotDB>(&mut conn)
            .optional()?;
        Ok(row.map(RateSnapshot::from))
    }

    fn save_snapshot(&self, snapshot: &RateSnapshot) -> Result<RateSnapshot> {
        let mut conn = get_connection(&self.pool)?;
        let row: RateSnapshotDB = diesel::insert_into(metal_rates::table)
            .values(NewRateSnapshotDB::from(snapshot))
            .get_result(&mut conn)?;
        Ok(row.into())
    }

    fn get_snapshot_history(&self, limit: i64) -> Result<Vec<RateSnapshot>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = metal_rates::table
            .order(metal_rates::timestamp.desc())
            .limit(limit)
            .load::<RateSnapshotDB>(&mut conn)?;
        Ok(rows.into_iter().map(RateSnapshot::from).collect())
    }
}
