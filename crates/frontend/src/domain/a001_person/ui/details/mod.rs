//! Person Details UI Module
//!
//! Simplified MVVM pattern implementation:
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::PersonDetails;
pub use view_model::{parse_age, PersonDetailsViewModel};
