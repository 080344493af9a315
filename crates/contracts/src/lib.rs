//! Shared DTOs and form contracts for the admin product screens.

pub mod domain;
pub mod shared;
