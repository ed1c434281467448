//! App state - pure data structure with no I/O logic

use std::sync::Arc;

use crate::app::contact::{ContactField, ContactForm};
use crate::app::menu::MenuSelection;
use crate::messages::ui_events::{InputMode, Section};
use crate::messages::RenderState;
use crate::models::MenuCatalog;

/// Main application state - pure data, no I/O
pub struct AppState {
    // Navigation bar
    pub section: Section,

    // Menu browser
    pub menu: MenuSelection,

    // Contact form
    pub contact: ContactForm,
    pub active_field: ContactField,
    pub input_mode: InputMode,

    // Popups
    pub show_help: bool,
}

impl AppState {
    pub fn new(catalog: Arc<MenuCatalog>) -> Self {
        AppState {
            section: Section::Home,
            menu: MenuSelection::new(catalog),
            contact: ContactForm::new(),
            active_field: ContactField::Name,
            input_mode: InputMode::Normal,
            show_help: false,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            section: self.section,
            categories: self.menu.catalog().category_names(),
            selected_category: self.menu.selected_category().to_string(),
            visible_items: self.menu.visible_items().to_vec(),
            fields: self.contact.fields().clone(),
            active_field: self.active_field,
            input_mode: self.input_mode,
            acknowledged: self.contact.is_acknowledged(),
            show_help: self.show_help,
        }
    }
}
