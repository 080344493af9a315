//! Product creation contracts
//!
//! - aggregate.rs: form values and field identifiers
//! - rules.rs: declarative field → rules table
//! - payload.rs: multipart wire contract with the backend

pub mod aggregate;
pub mod payload;
pub mod rules;
