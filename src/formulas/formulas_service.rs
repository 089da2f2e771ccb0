use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use super::formulas_model::{Formula, FormulaUpdate};
use super::formulas_traits::{FormulaRepositoryTrait, FormulaServiceTrait};
use crate::errors::Result;

pub struct FormulaService {
    repository: Arc<dyn FormulaRepositoryTrait>,
}

impl FormulaService {
    pub fn new(repository: Arc<dyn FormulaRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl FormulaServiceTrait for FormulaService {
    async fn get_current(&self) -> Result<Formula> {
        if let Some(formula) = self.repository.get_latest()? {
            return Ok(formula);
        }

        // First call ever: seed the default record (all adjustments zero).
        info!("No pricing formula found, creating default");
        self.repository.insert(&FormulaUpdate::default_formula())
    }

    async fn update(&self, update: FormulaUpdate) -> Result<Formula> {
        // Latest-wins: updates append a new row so history stays auditable.
        self.repository.insert(&update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    struct FakeRepository {
        rows: Mutex<Vec<Formula>>,
    }

    impl FakeRepository {
        fn new() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
            }
        }
    }

    impl FormulaRepositoryTrait for FakeRepository {
        fn get_latest(&self) -> Result<Option<Formula>> {
            Ok(self.rows.lock().unwrap().last().cloned())
        }

        fn insert(&self, update: &FormulaUpdate) -> Result<Formula> {
            let mut rows = self.rows.lock().unwrap();
            let formula = Formula {
                id: rows.len() as i32 + 1,
                rhodium_discount: update.rhodium_discount,
                palladium_discount: update.palladium_discount,
                platinum_discount: update.platinum_discount,
                currency_adjustment: update.currency_adjustment,
                updated_at: chrono::Utc::now().naive_utc(),
            };
            rows.push(formula.clone());
            Ok(formula)
        }
    }

    #[tokio::test]
    async fn first_call_auto_initializes_default_formula() {
        let service = FormulaService::new(Arc::new(FakeRepository::new()));

        let formula = service.get_current().await.unwrap();
        assert_eq!(formula.rhodium_discount, Decimal::ZERO);
        assert_eq!(formula.currency_adjustment, Decimal::ZERO);

        // Second call returns the persisted record instead of re-seeding.
        let again = service.get_current().await.unwrap();
        assert_eq!(again.id, formula.id);
    }

    #[tokio::test]
    async fn update_takes_precedence_over_older_rows() {
        let service = FormulaService::new(Arc::new(FakeRepository::new()));
        let _ = service.get_current().await.unwrap();

        let updated = service
            .update(FormulaUpdate {
                rhodium_discount: dec!(150),
                palladium_discount: dec!(50),
                platinum_discount: dec!(75),
                currency_adjustment: dec!(100),
            })
            .await
            .unwrap();

        let current = service.get_current().await.unwrap();
        assert_eq!(current.id, updated.id);
        assert_eq!(current.rhodium_discount, dec!(150));
    }
}
