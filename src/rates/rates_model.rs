use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::metals::MetalClass;

/// Domain model for one immutable rate snapshot: USD-per-troy-ounce prices
/// for each quoted metal plus the COP exchange rate, all as of the same
/// feed timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateSnapshot {
    pub timestamp: i64,
    pub date: NaiveDate,
    pub cop: Decimal,
    pub usd: Decimal,
    pub xau: Decimal,
    pub xag: Decimal,
    pub xpd: Decimal,
    pub xpt: Decimal,
    pub xrh: Decimal,
    pub unit: String,
}

impl RateSnapshot {
    /// Spot price for a priced metal class. `Unpriced` has no quote.
    pub fn spot_for(&self, class: MetalClass) -> Option<Decimal> {
        match class {
            MetalClass::Rhodium => Some(self.xrh),
            MetalClass::Platinum => Some(self.xpt),
            MetalClass::Palladium => Some(self.xpd),
            MetalClass::Unpriced => None,
        }
    }

    pub fn age_secs(&self, now_ts: i64) -> i64 {
        now_ts - self.timestamp
    }
}

/// Feed call accounting, exposed for admin/monitoring
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUsageStats {
    pub calls_used: u32,
    pub calls_remaining: u32,
    pub cache_age_secs: Option<u64>,
}

/// Database model for rate snapshots
#[derive(Queryable, Identifiable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::metal_rates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RateSnapshotDB {
    pub id: i32,
    pub timestamp: i64,
    pub date: NaiveDate,
    pub cop: f64,
    pub usd: f64,
    pub xau: f64,
    pub xag: f64,
    pub xpd: f64,
    pub xpt: f64,
    pub xrh: f64,
    pub unit: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::metal_rates)]
pub struct NewRateSnapshotDB {
    pub timestamp: i64,
    pub date: NaiveDate,
    pub cop: f64,
    pub usd: f64,
    pub xau: f64,
    pub xag: f64,
    pub xpd: f64,
    pub xpt: f64,
    pub xrh: f64,
    pub unit: String,
    pub created_at: NaiveDateTime,
}

// Decimal conversion happens once here, at the storage boundary.
impl From<RateSnapshotDB> for RateSnapshot {
    fn from(db: RateSnapshotDB) -> Self {
        RateSnapshot {
            timestamp: db.timestamp,
            date: db.date,
            cop: Decimal::from_f64(db.cop).unwrap_or_default(),
            usd: Decimal::from_f64(db.usd).unwrap_or_default(),
            xau: Decimal::from_f64(db.xau).unwrap_or_default(),
            xag: Decimal::from_f64(db.xag).unwrap_or_default(),
            xpd: Decimal::from_f64(db.xpd).unwrap_or_default(),
            xpt: Decimal::from_f64(db.xpt).unwrap_or_default(),
            xrh: Decimal::from_f64(db.xrh).unwrap_or_default(),
            unit: db.unit,
        }
    }
}

impl From<&RateSnapshot> for NewRateSnapshotDB {
    fn from(snapshot: &RateSnapshot) -> Self {
        NewRateSnapshotDB {
            timestamp: snapshot.timestamp,
            date: snapshot.date,
            cop: snapshot.cop.to_f64().unwrap_or_default(),
            usd: snapshot.usd.to_f64().unwrap_or_default(),
            xau: snapshot.xau.to_f64().unwrap_or_default(),
            xag: snapshot.xag.to_f64().unwrap_or_default(),
            xpd: snapshot.xpd.to_f64().unwrap_or_default(),
            xpt: snapshot.xpt.to_f64().unwrap_or_default(),
            xrh: snapshot.xrh.to_f64().unwrap_or_default(),
            unit: snapshot.unit.clone(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
