pub mod metals_model;
pub mod metals_repository;

pub use metals_model::{Metal, MetalClass, NewMetal};
pub use metals_repository::MetalRepository;
