//! Field metadata shared by forms

pub mod validation;

pub use validation::ValidationRules;
