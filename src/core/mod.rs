// Core modules: plan payload narrowing and error modeling.
pub mod error;
pub mod plan;
