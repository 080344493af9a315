//! Product Create UI Module
//!
//! MVVM with a pure state core:
//! - state.rs: immutable screen snapshot and its transitions
//! - traits.rs: collaborator interfaces
//! - controller.rs: async commands over the state
//! - model.rs: browser implementations of the collaborators
//! - view_model.rs: signals and commands for the view
//! - view.rs: Leptos component (pure UI)

pub mod controller;
mod model;
pub mod state;
pub mod traits;
mod view;
mod view_model;

pub use view::ProductCreate;
