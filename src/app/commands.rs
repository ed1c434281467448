//! Command handlers - business logic for processing UI events

use crate::app::contact::{ContactField, SubmissionTicket};
use crate::app::AppState;
use crate::messages::ui_events::{InputMode, Section};

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn switch_section(&mut self, section: Section) {
        if self.section != section {
            tracing::info!(section = section.title(), "Section changed");
        }
        self.section = section;
        self.input_mode = InputMode::Normal;
    }

    pub fn next_section(&mut self) {
        self.switch_section(self.section.next());
    }

    pub fn prev_section(&mut self) {
        self.switch_section(self.section.prev());
    }

    // ========================
    // Menu browser
    // ========================

    pub fn select_category(&mut self, name: &str) {
        self.menu.select_category(name);
    }

    pub fn select_category_index(&mut self, index: usize) {
        self.menu.select_index(index);
    }

    pub fn next_category(&mut self) {
        self.menu.next_category();
    }

    pub fn prev_category(&mut self) {
        self.menu.prev_category();
    }

    // ========================
    // Contact form editing
    // ========================

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
    }

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn enter_char(&mut self, c: char) {
        let mut value = self.contact.field(self.active_field).to_string();
        value.push(c);
        self.contact.update_field(self.active_field, value);
    }

    pub fn delete_char(&mut self) {
        let mut value = self.contact.field(self.active_field).to_string();
        if value.pop().is_some() {
            self.contact.update_field(self.active_field, value);
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        self.contact.update_field(field, value);
    }

    /// Submit the form. The caller owns the clock and must schedule the
    /// reset for the returned ticket.
    pub fn submit_form(&mut self) -> SubmissionTicket {
        self.stop_editing();
        self.contact.submit()
    }

    pub fn complete_submission(&mut self, ticket: SubmissionTicket) {
        if self.contact.complete(ticket) {
            self.active_field = ContactField::Name;
        }
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use std::sync::Arc;

    fn state() -> AppState {
        AppState::new(Arc::new(catalog::built_in().unwrap()))
    }

    #[test]
    fn test_typing_into_fields() {
        let mut state = state();
        state.switch_section(Section::Contact);
        state.start_editing();
        for c in "Alicex".chars() {
            state.enter_char(c);
        }
        state.delete_char();
        state.next_field();
        state.enter_char('@');

        assert_eq!(state.contact.field(ContactField::Name), "Alice");
        assert_eq!(state.contact.field(ContactField::Email), "@");
        assert_eq!(state.contact.field(ContactField::Message), "");
    }

    #[test]
    fn test_backspace_on_empty_field() {
        let mut state = state();
        state.delete_char();
        assert_eq!(state.contact.field(ContactField::Name), "");
    }

    #[test]
    fn test_submit_stops_editing_and_acknowledges() {
        let mut state = state();
        state.start_editing();
        state.set_field(ContactField::Message, "Two loaves please".to_string());
        let ticket = state.submit_form();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.to_render_state().acknowledged);

        state.next_field();
        state.complete_submission(ticket);
        let render = state.to_render_state();
        assert!(!render.acknowledged);
        assert!(render.fields.is_empty());
        assert_eq!(render.active_field, ContactField::Name);
    }

    #[test]
    fn test_switching_section_leaves_editing() {
        let mut state = state();
        state.switch_section(Section::Contact);
        state.start_editing();
        state.next_section();
        assert_eq!(state.section, Section::Home);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_render_state_reflects_menu() {
        let mut state = state();
        state.select_category("Beverages");
        let render = state.to_render_state();
        assert_eq!(render.selected_category, "Beverages");
        assert_eq!(render.selected_category_index(), Some(3));
        assert_eq!(render.visible_items[2].name, "Matcha Latte");
        assert_eq!(render.categories.len(), 4);
    }
}
