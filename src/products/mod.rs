pub mod products_errors;
pub mod products_model;
pub mod products_repository;
pub mod products_service;
pub mod products_traits;

pub use products_errors::{ProductError, Result};
pub use products_model::{CompositionComponent, NewProduct, Product, ProductComposition};
pub use products_repository::ProductRepository;
pub use products_service::ProductService;
pub use products_traits::{CompositionServiceTrait, ProductRepositoryTrait};
