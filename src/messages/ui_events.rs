//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::contact::ContactField;

/// Page sections, in the order the navigation bar lists them
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Menu,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Home, Section::About, Section::Menu, Section::Contact];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Menu => "Menu",
            Section::Contact => "Contact",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Section::Home => 0,
            Section::About => 1,
            Section::Menu => 2,
            Section::Contact => 3,
        }
    }

    pub fn next(&self) -> Section {
        match self {
            Section::Home => Section::About,
            Section::About => Section::Menu,
            Section::Menu => Section::Contact,
            Section::Contact => Section::Home,
        }
    }

    pub fn prev(&self) -> Section {
        match self {
            Section::Home => Section::Contact,
            Section::About => Section::Home,
            Section::Menu => Section::About,
            Section::Contact => Section::Menu,
        }
    }
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Navigation bar
    SwitchSection(Section),
    NextSection,
    PrevSection,

    // Menu browser
    SelectCategory(String),
    SelectCategoryIndex(usize),
    NextCategory,
    PrevCategory,

    // Contact form
    NextField,
    PrevField,
    StartEditing,
    StopEditing,
    FieldChar(char),
    FieldBackspace,
    SetField(ContactField, String),
    SubmitForm,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    section: Section,
    input_mode: InputMode,
    show_help: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return Some(UiEvent::Quit),
            KeyCode::Char('s') if section == Section::Contact => return Some(UiEvent::SubmitForm),
            // Other chords must not leak into a field as plain characters
            _ => return None,
        }
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Editing => handle_editing_keys(key),
        InputMode::Normal => {
            match key.code {
                KeyCode::Char('q') => return Some(UiEvent::Quit),
                KeyCode::Char('?') => return Some(UiEvent::ToggleHelp),
                KeyCode::Char(c @ '1'..='4') => {
                    let index = c as usize - '1' as usize;
                    return Some(UiEvent::SwitchSection(Section::ALL[index]));
                }
                KeyCode::Tab => return Some(UiEvent::NextSection),
                KeyCode::BackTab => return Some(UiEvent::PrevSection),
                _ => {}
            }

            match section {
                Section::Home => handle_home_keys(key),
                Section::About => None,
                Section::Menu => handle_menu_keys(key),
                Section::Contact => handle_contact_keys(key),
            }
        }
    }
}

/// Hero call-to-action buttons
fn handle_home_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('m') => Some(UiEvent::SwitchSection(Section::Menu)),
        KeyCode::Char('v') => Some(UiEvent::SwitchSection(Section::Contact)),
        _ => None,
    }
}

fn handle_menu_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(UiEvent::PrevCategory),
        KeyCode::Right | KeyCode::Char('l') => Some(UiEvent::NextCategory),
        _ => None,
    }
}

fn handle_contact_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Up => Some(UiEvent::PrevField),
        KeyCode::Down => Some(UiEvent::NextField),
        KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::StartEditing),
        KeyCode::Char('s') => Some(UiEvent::SubmitForm),
        _ => None,
    }
}

fn handle_editing_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => Some(UiEvent::StopEditing),
        KeyCode::Tab => Some(UiEvent::NextField),
        KeyCode::BackTab => Some(UiEvent::PrevField),
        KeyCode::Backspace => Some(UiEvent::FieldBackspace),
        KeyCode::Char(c) => Some(UiEvent::FieldChar(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_number_keys_switch_section() {
        let key = press(KeyCode::Char('3'));
        let event = key_to_ui_event(key, Section::Home, InputMode::Normal, false);
        assert_eq!(event, Some(UiEvent::SwitchSection(Section::Menu)));
    }

    #[test]
    fn test_arrows_cycle_categories_on_menu() {
        let key = press(KeyCode::Right);
        let event = key_to_ui_event(key, Section::Menu, InputMode::Normal, false);
        assert_eq!(event, Some(UiEvent::NextCategory));
        let event = key_to_ui_event(key, Section::About, InputMode::Normal, false);
        assert_eq!(event, None);
    }

    #[test]
    fn test_editing_captures_letters() {
        let key = press(KeyCode::Char('q'));
        let event = key_to_ui_event(key, Section::Contact, InputMode::Editing, false);
        assert_eq!(event, Some(UiEvent::FieldChar('q')));
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        let event = key_to_ui_event(ctrl_s, Section::Contact, InputMode::Editing, false);
        assert_eq!(event, Some(UiEvent::SubmitForm));
    }

    #[test]
    fn test_unbound_ctrl_chords_ignored_while_editing() {
        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        let event = key_to_ui_event(ctrl_u, Section::Contact, InputMode::Editing, false);
        assert_eq!(event, None);
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        let event = key_to_ui_event(ctrl_s, Section::Menu, InputMode::Normal, false);
        assert_eq!(event, None);
    }

    #[test]
    fn test_help_popup_swallows_keys() {
        let key = press(KeyCode::Char('s'));
        let event = key_to_ui_event(key, Section::Contact, InputMode::Normal, true);
        assert_eq!(event, Some(UiEvent::CloseHelp));
    }
}
