//! Account settings page
//!
//! - state.rs: per-form submission state
//! - view_model.rs: form fields and submit commands
//! - view.rs: Leptos component (pure UI)

mod state;
mod view;
mod view_model;

pub use state::{SubmitOutcome, SubmitState};
pub use view::SettingsPage;
pub use view_model::SettingsVm;
