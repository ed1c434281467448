//! # Whisk & Bliss
//!
//! The Whisk & Bliss bakery storefront, in the terminal.
//!
//! ## Features
//! - Hero banner, about section and footer with the bakery's details
//! - Menu browser with category tabs
//! - Contact form with a simulated "message sent" acknowledgment
//! - Menu catalog override from `~/.whisk-bliss/catalog.yaml`
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Timer Layer (Tokio) - delayed form reset

pub mod constants;
pub mod models;
pub mod catalog;
pub mod content;
pub mod ui;
pub mod messages;
pub mod app;
pub mod timer;

// Re-export commonly used types
pub use models::{Category, MenuCatalog, MenuItem};
pub use messages::{UiEvent, TimerEvent, RenderState};
pub use app::{AppState, AppActor, ContactField, ContactForm, MenuSelection};
pub use timer::ResetTimer;
