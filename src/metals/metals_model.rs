use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Priced metal classes recognized by the pricing engine.
///
/// Everything outside the three priced classes (gold, silver, copper, ...)
/// is `Unpriced`: such components contribute nothing to a calculation and
/// are surfaced to the caller instead of being silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetalClass {
    Rhodium,
    Platinum,
    Palladium,
    Unpriced,
}

impl MetalClass {
    /// Classify a metal by its quote symbol (XRH/XPT/XPD) or, failing that,
    /// by its display name. The legacy data set stores Spanish display names
    /// (RODIO, PLATINO, PALADIO), so both spellings are recognized.
    pub fn classify(symbol: &str, name: &str) -> MetalClass {
        match symbol.to_uppercase().as_str() {
            "XRH" => return MetalClass::Rhodium,
            "XPT" => return MetalClass::Platinum,
            "XPD" => return MetalClass::Palladium,
            _ => {}
        }

        match name.to_uppercase().as_str() {
            "RODIO" | "RHODIUM" => MetalClass::Rhodium,
            "PLATINO" | "PLATINUM" => MetalClass::Platinum,
            "PALADIO" | "PALLADIUM" => MetalClass::Palladium,
            _ => MetalClass::Unpriced,
        }
    }

    pub fn is_priced(&self) -> bool {
        !matches!(self, MetalClass::Unpriced)
    }
}

/// Domain model for a tradable metal (admin-maintained reference data)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metal {
    pub id: i32,
    pub name: String,
    pub symbol: String,
    pub unit: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl Metal {
    pub fn class(&self) -> MetalClass {
        MetalClass::classify(&self.symbol, &self.name)
    }
}

/// Input model for registering a metal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMetal {
    pub name: String,
    pub symbol: String,
    pub unit: String,
}

/// Database model for metals
#[derive(Queryable, Identifiable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::metals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MetalDB {
    pub id: i32,
    pub name: String,
    pub symbol: String,
    pub unit: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::metals)]
pub struct NewMetalDB {
    pub name: String,
    pub symbol: String,
    pub unit: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl From<MetalDB> for Metal {
    fn from(db: MetalDB) -> Self {
        Metal {
            id: db.id,
            name: db.name,
            symbol: db.symbol,
            unit: db.unit,
            is_active: db.is_active,
            created_at: db.created_at,
        }
    }
}

impl From<NewMetal> for NewMetalDB {
    fn from(new: NewMetal) -> Self {
        NewMetalDB {
            name: new.name,
            symbol: new.symbol,
            unit: new.unit,
            is_active: true,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_priced_metals_by_symbol() {
        assert_eq!(MetalClass::classify("XRH", ""), MetalClass::Rhodium);
        assert_eq!(MetalClass::classify("XPT", ""), MetalClass::Platinum);
        assert_eq!(MetalClass::classify("XPD", ""), MetalClass::Palladium);
    }

    #[test]
    fn classifies_priced_metals_by_legacy_name() {
        assert_eq!(MetalClass::classify("", "RODIO"), MetalClass::Rhodium);
        assert_eq!(MetalClass::classify("", "Platino"), MetalClass::Platinum);
        assert_eq!(MetalClass::classify("", "paladio"), MetalClass::Palladium);
    }

    #[test]
    fn gold_and_silver_are_unpriced() {
        assert_eq!(MetalClass::classify("XAU", "Oro"), MetalClass::Unpriced);
        assert_eq!(MetalClass::classify("XAG", "Plata"), MetalClass::Unpriced);
        assert!(!MetalClass::classify("XAU", "Oro").is_priced());
    }
}
