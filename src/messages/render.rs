//! Render state - data structure sent from App layer to UI for rendering

use crate::app::contact::{ContactField, ContactFields};
use crate::messages::ui_events::{InputMode, Section};
use crate::models::MenuItem;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Navigation
    pub section: Section,

    // Menu browser
    pub categories: Vec<String>,
    pub selected_category: String,
    pub visible_items: Vec<MenuItem>,

    // Contact form
    pub fields: ContactFields,
    pub active_field: ContactField,
    pub input_mode: InputMode,
    pub acknowledged: bool,

    // Popups
    pub show_help: bool,
}

impl RenderState {
    /// Index of the selected category tab, if it is listed
    pub fn selected_category_index(&self) -> Option<usize> {
        self.categories.iter().position(|c| *c == self.selected_category)
    }
}
