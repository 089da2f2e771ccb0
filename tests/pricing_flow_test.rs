use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use sitekol_core::companies::{
    CompanyRepository, CompanyRepositoryTrait, CompanyService, CompanyTerms, NewCompany,
};
use sitekol_core::db;
use sitekol_core::formulas::{FormulaRepository, FormulaService};
use sitekol_core::metals::{Metal, MetalRepository, NewMetal};
use sitekol_core::pricing::{PricingError, PricingService};
use sitekol_core::products::{NewProduct, ProductRepository, ProductRepositoryTrait, ProductService};
use sitekol_core::rates::{
    RateError, RateFeed, RateRepository, RateRepositoryTrait, RateService, RateSnapshot,
};
use sitekol_core::PricingServiceTrait;

/// Feed stub that always fails: the flow below must run entirely from
/// persisted snapshots.
struct DownFeed;

#[async_trait]
impl RateFeed for DownFeed {
    async fn fetch_latest(&self) -> Result<RateSnapshot, RateError> {
        Err(RateError::ProviderError("offline".to_string()))
    }
}

fn test_db_path(tag: &str) -> String {
    let path = std::env::temp_dir().join(format!(
        "sitekol_core_{}_{}.db",
        tag,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path.to_string_lossy().into_owned()
}

fn seed_metal(repo: &MetalRepository, name: &str, symbol: &str) -> Metal {
    repo.insert(NewMetal {
        name: name.to_string(),
        symbol: symbol.to_string(),
        unit: "PPM".to_string(),
    })
    .unwrap()
}

fn current_snapshot() -> RateSnapshot {
    let now = Utc::now();
    RateSnapshot {
        timestamp: now.timestamp(),
        date: now.date_naive(),
        cop: dec!(4000),
        usd: Decimal::ONE,
        xau: dec!(2000),
        xag: dec!(25),
        xpd: dec!(1500),
        xpt: dec!(1000),
        xrh: dec!(5000),
        unit: "USD".to_string(),
    }
}

fn build_engine(pool: Arc<db::DbPool>) -> PricingService {
    let rate_service = RateService::new(
        Arc::new(RateRepository::new(pool.clone())),
        Arc::new(DownFeed),
    );
    let formula_service = FormulaService::new(Arc::new(FormulaRepository::new(pool.clone())));
    let company_service = CompanyService::new(Arc::new(CompanyRepository::new(pool.clone())));
    let product_service = ProductService::new(Arc::new(ProductRepository::new(pool)));

    PricingService::new(
        Arc::new(rate_service),
        Arc::new(formula_service),
        Arc::new(company_service),
        Arc::new(product_service),
    )
}

#[tokio::test]
async fn prices_a_seeded_product_end_to_end() {
    let db_path = test_db_path("flow");
    db::init(&db_path).unwrap();
    let pool = db::create_pool(&db_path).unwrap();

    let metal_repo = MetalRepository::new(pool.clone());
    let palladium = seed_metal(&metal_repo, "Paladio", "XPD");
    let gold = seed_metal(&metal_repo, "Oro", "XAU");

    assert_eq!(
        metal_repo.get_by_symbol("XPD").unwrap().unwrap().id,
        palladium.id
    );
    assert_eq!(metal_repo.list_active().unwrap().len(), 2);

    let company = CompanyRepository::new(pool.clone())
        .insert(NewCompany {
            name: "Recicladora Andina".to_string(),
            identification: "900123456-1".to_string(),
            terms: CompanyTerms {
                payment_pct: dec!(0.8),
                payment_pct_pt: dec!(0.7),
                payment_pct_rh: dec!(0.6),
                operating_cost: dec!(7),
                financial_cost_rate: dec!(0.03),
            },
        })
        .unwrap();

    let product_repo = ProductRepository::new(pool.clone());
    let product = product_repo
        .insert(NewProduct {
            name: "Catalizador 10g".to_string(),
            reference: Some("CAT-10".to_string()),
            weight: dec!(10),
        })
        .unwrap();
    product_repo
        .add_component(product.id, palladium.id, dec!(500))
        .unwrap();
    product_repo
        .add_component(product.id, gold.id, dec!(100))
        .unwrap();

    // A superseded snapshot from yesterday plus the current one: snapshots
    // are append-only and the engine must price from the latest.
    let rate_repo = RateRepository::new(pool.clone());
    let mut old_snapshot = current_snapshot();
    old_snapshot.timestamp -= 24 * 60 * 60;
    old_snapshot.xpd = dec!(9999);
    rate_repo.save_snapshot(&old_snapshot).unwrap();
    rate_repo.save_snapshot(&current_snapshot()).unwrap();

    let history = rate_repo.get_snapshot_history(10).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].xpd, dec!(1500));
    assert_eq!(history[1].xpd, dec!(9999));

    let engine = build_engine(pool);
    let result = engine
        .calculate_price(product.id, company.id, "COL")
        .await
        .unwrap();

    assert_eq!(result.currency, "COP");
    assert!(!result.erroneous);
    assert_eq!(result.breakdown.len(), 1);
    assert_eq!(result.unpriced_metals, vec!["Oro"]);
    assert_eq!(result.total_ppt, dec!(500));
    assert!(
        (result.final_total - dec!(468.553)).abs() < dec!(0.001),
        "got {}",
        result.final_total
    );
    assert!(result.valid_until > result.calculated_at);

    // API payloads are camelCase.
    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("finalTotal").is_some());
    assert!(json.get("unpricedMetals").is_some());
}

#[tokio::test]
async fn missing_product_and_company_surface_as_not_found() {
    let db_path = test_db_path("notfound");
    db::init(&db_path).unwrap();
    let pool = db::create_pool(&db_path).unwrap();

    RateRepository::new(pool.clone())
        .save_snapshot(&current_snapshot())
        .unwrap();

    let engine = build_engine(pool.clone());

    let err = engine.calculate_price(999, 1, "COL").await.unwrap_err();
    assert!(matches!(err, PricingError::ProductNotFound(999)));

    // Product without components fails as invalid state.
    let metal_repo = MetalRepository::new(pool.clone());
    let palladium = seed_metal(&metal_repo, "Paladio", "XPD");
    let product_repo = ProductRepository::new(pool.clone());
    let empty_product = product_repo
        .insert(NewProduct {
            name: "Vacio".to_string(),
            reference: None,
            weight: dec!(5),
        })
        .unwrap();

    let err = engine
        .calculate_price(empty_product.id, 1, "COL")
        .await
        .unwrap_err();
    assert!(matches!(err, PricingError::EmptyComposition(_)));

    // Valid product but unknown company.
    let product = product_repo
        .insert(NewProduct {
            name: "Catalizador".to_string(),
            reference: None,
            weight: dec!(5),
        })
        .unwrap();
    product_repo
        .add_component(product.id, palladium.id, dec!(250))
        .unwrap();

    let err = engine
        .calculate_price(product.id, 77, "COL")
        .await
        .unwrap_err();
    assert!(matches!(err, PricingError::CompanyNotFound(77)));
}
