use ratatui::{prelude::*, widgets::*};

use crate::models::MenuItem;

/// Brand accent used for headings and the selected tab
pub const ACCENT: Color = Color::Rgb(184, 115, 51);

/// Renders tabs
pub fn render_tabs<'a>(titles: &[&'a str], selected: usize) -> Tabs<'a> {
    let titles: Vec<Line> = titles.iter().map(|t| Line::from(*t)).collect();

    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Black).bg(ACCENT).bold())
        .divider("|")
}

/// Border style for an input, depending on focus and edit mode
pub fn field_border_style(is_focused: bool, is_editing: bool) -> Style {
    if is_focused && is_editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default()
    }
}

/// Section heading line
pub fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(ACCENT).bold(),
    ))
}

/// Lines for a list of menu items: name and price, then the description
pub fn menu_item_lines(items: &[MenuItem]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for item in items {
        lines.push(Line::from(vec![
            Span::styled(item.name.clone(), Style::default().fg(ACCENT).bold()),
            Span::raw("  "),
            Span::styled(item.display_price(), Style::default().fg(Color::Yellow)),
        ]));
        lines.push(Line::from(Span::styled(
            item.description.clone(),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Nothing in this category yet.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_lines() {
        let items = vec![MenuItem::new(
            "Cappuccino",
            199,
            "Smooth espresso with steamed milk and foam",
            "",
        )];
        let lines = menu_item_lines(&items);
        assert_eq!(lines.len(), 3);
        let first: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(first, "Cappuccino  Rs. 199");
    }

    #[test]
    fn test_empty_items_placeholder() {
        assert_eq!(menu_item_lines(&[]).len(), 1);
    }
}
