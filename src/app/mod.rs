//! App layer - central state management and command processing
//!
//! The App actor receives UI events and timer events,
//! updates state, schedules the form reset and emits render state.

pub mod state;
pub mod actor;
pub mod commands;
pub mod menu;
pub mod contact;

pub use state::AppState;
pub use actor::AppActor;
pub use menu::MenuSelection;
pub use contact::{ContactField, ContactForm};
