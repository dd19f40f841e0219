/// Application layer - Use cases, DTOs and read models
///
/// This layer orchestrates the reconciliation services and reaches
/// infrastructure only through ports.
pub mod component_scope;
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;

pub use component_scope::ComponentScope;
