//! Whisk & Bliss - terminal storefront for the bakery
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Timer Layer (Tokio) - delayed contact form reset

use std::io;
use std::sync::Arc;
use std::time::Duration;
use chrono::Datelike;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;

use whisk_bliss::app::contact::ContactField;
use whisk_bliss::catalog::{self, CatalogSource};
use whisk_bliss::constants::{APP_NAME, APP_VERSION, LOG_FILE_NAME, SUBMIT_RESET_DELAY};
use whisk_bliss::content;
use whisk_bliss::messages::ui_events::{key_to_ui_event, InputMode, Section};
use whisk_bliss::messages::{RenderState, TimerEvent, UiEvent};
use whisk_bliss::ui::{self, centered_rect, field_border_style, heading, menu_item_lines, ACCENT};
use whisk_bliss::AppActor;

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE_NAME);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    tracing::info!(version = APP_VERSION, "Starting {}", APP_NAME);

    // Catalog is read once, before the terminal is taken over
    let override_path = catalog::override_path();
    let (menu_catalog, source) = catalog::load(override_path.as_deref())?;
    match &source {
        CatalogSource::BuiltIn => tracing::info!("Using built-in catalog"),
        CatalogSource::File(path) => tracing::info!(path = %path.display(), "Using catalog file"),
    }

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (timer_tx, timer_rx) = mpsc::unbounded_channel::<TimerEvent>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn app actor
    let app_actor = AppActor::new(Arc::new(menu_catalog), SUBMIT_RESET_DELAY, timer_tx, render_tx);
    let app_handle = tokio::spawn(app_actor.run(ui_rx, timer_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    // Let the actor drop its timer before the runtime goes away
    let _ = app_handle.await;
    tracing::info!("Shut down");

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();
    let year = chrono::Local::now().year();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state, year))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.section,
                    current_state.input_mode,
                    current_state.show_help,
                ) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState, year: i32) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Navigation bar
            Constraint::Min(0),     // Section
            Constraint::Length(8),  // Footer
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    draw_nav_bar(f, state, main_chunks[0]);

    match state.section {
        Section::Home => draw_hero(f, main_chunks[1]),
        Section::About => draw_about(f, main_chunks[1]),
        Section::Menu => draw_menu(f, state, main_chunks[1]),
        Section::Contact => draw_contact(f, state, main_chunks[1]),
    }

    draw_footer(f, main_chunks[2], year);
    draw_status_bar(f, state, main_chunks[3]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_nav_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(0)])
        .split(area);

    let brand = Paragraph::new(Span::styled(
        format!(" {} ", content::BRAND),
        Style::default().fg(ACCENT).bold(),
    ));
    f.render_widget(brand, chunks[0]);

    let titles: Vec<String> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, s)| format!(" {}:{} ", i + 1, s.title()))
        .collect();
    let titles: Vec<&str> = titles.iter().map(String::as_str).collect();
    f.render_widget(ui::render_tabs(&titles, state.section.index()), chunks[1]);
}

fn draw_hero(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(9),     // Hero text
            Constraint::Length(5),  // Featured products
        ])
        .split(area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(content::BRAND, Style::default().fg(ACCENT).bold())).centered(),
        Line::from(Span::styled(
            content::TAGLINE,
            Style::default().fg(Color::White).italic(),
        ))
        .centered(),
        Line::from(""),
        Line::from(Span::styled(content::HERO_BLURB, Style::default().fg(Color::Gray))).centered(),
        Line::from(""),
    ];

    let actions: Vec<Span> = content::HERO_ACTIONS
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(
                    format!(" {} ", label),
                    Style::default().fg(Color::Black).bg(ACCENT).bold(),
                ),
                Span::styled(format!(" ({}) ", key), Style::default().fg(Color::DarkGray)),
                Span::raw("   "),
            ]
        })
        .collect();
    lines.push(Line::from(actions).centered());

    let hero = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(ACCENT)))
        .wrap(Wrap { trim: true });
    f.render_widget(hero, chunks[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(chunks[1]);

    for (title, card_area) in content::FEATURED_PRODUCTS.iter().zip(cards.iter()) {
        let title = Line::from(Span::styled(*title, Style::default().bold())).centered();
        let card = Paragraph::new(title)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(card, *card_area);
    }
}

fn draw_about(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(4)])
        .split(area);

    let mut lines = vec![heading(content::ABOUT_TITLE), Line::from("")];
    for paragraph in content::ABOUT_PARAGRAPHS {
        lines.push(Line::from(paragraph));
        lines.push(Line::from(""));
    }

    let story = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" About "))
        .wrap(Wrap { trim: true });
    f.render_widget(story, chunks[0]);

    let stats = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[1]);

    for (stat, stat_area) in content::STATS.iter().zip(stats.iter()) {
        let text = vec![
            Line::from(Span::styled(stat.value, Style::default().fg(ACCENT).bold())).centered(),
            Line::from(Span::styled(stat.label, Style::default().fg(Color::Gray))).centered(),
        ];
        let stat = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
        f.render_widget(stat, *stat_area);
    }
}

fn draw_menu(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Title
            Constraint::Length(1),  // Category tabs
            Constraint::Min(3),     // Items
        ])
        .split(area);

    f.render_widget(Paragraph::new(heading(content::MENU_TITLE)).centered(), chunks[0]);

    let titles: Vec<&str> = state.categories.iter().map(String::as_str).collect();
    let selected = state.selected_category_index().unwrap_or(0);
    f.render_widget(ui::render_tabs(&titles, selected), chunks[1]);

    let items = Paragraph::new(menu_item_lines(&state.visible_items))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT))
                .title(format!(" {} (←/→ change category) ", state.selected_category)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(items, chunks[2]);
}

fn draw_contact(f: &mut Frame, state: &RenderState, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let intro = Paragraph::new(vec![
        heading(content::CONTACT_TITLE).centered(),
        Line::from(Span::styled(
            content::CONTACT_BLURB,
            Style::default().fg(Color::Gray).italic(),
        ))
        .centered(),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(intro, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    draw_contact_info(f, columns[0]);
    draw_contact_form(f, state, columns[1]);
}

fn draw_contact_info(f: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for info in content::CONTACT_INFO {
        lines.push(Line::from(Span::styled(info.title, Style::default().bold())));
        lines.push(Line::from(Span::styled(info.content, Style::default().fg(Color::Gray))));
        if let Some(extra) = info.extra {
            lines.push(Line::from(Span::styled(extra, Style::default().fg(Color::Gray))));
        }
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Contact Information ");
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

fn draw_contact_form(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", content::FORM_TITLE));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Name
            Constraint::Length(3),  // Email
            Constraint::Min(3),     // Message
            Constraint::Length(3),  // Send button
        ])
        .split(inner);

    let editing = state.input_mode == InputMode::Editing;

    for (field, field_area) in ContactField::ALL.iter().zip(chunks.iter()) {
        let is_focused = state.active_field == *field;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(field_border_style(is_focused, editing))
            .title(format!(" {} ", field.label()));

        let value = state.fields.get(*field);
        let input = Paragraph::new(value).block(block).wrap(Wrap { trim: false });
        f.render_widget(input, *field_area);

        if is_focused && editing {
            let max_x = field_area.x + field_area.width.saturating_sub(2);
            let cursor_x = (field_area.x + value.chars().count() as u16 + 1).min(max_x);
            f.set_cursor_position(Position::new(cursor_x, field_area.y + 1));
        }
    }

    let button = if state.acknowledged {
        Paragraph::new(Line::from(format!("✓ {}", content::SENT_LABEL)).centered())
            .style(Style::default().fg(Color::Black).bg(Color::Green).bold())
    } else {
        Paragraph::new(Line::from(format!("➤ {} (s)", content::SEND_LABEL)).centered())
            .style(Style::default().fg(Color::Black).bg(ACCENT).bold())
    };
    f.render_widget(button.block(Block::default().borders(Borders::ALL)), chunks[3]);
}

fn draw_footer(f: &mut Frame, area: Rect, year: i32) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(ACCENT))
        .title_bottom(Line::from(content::copyright(year)).centered());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(inner);

    let about = Paragraph::new(vec![
        Line::from(Span::styled(content::BRAND, Style::default().fg(ACCENT).bold())),
        Line::from(Span::styled(content::FOOTER_BLURB, Style::default().fg(Color::Gray))),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(about, columns[0]);

    let mut links = vec![Line::from(Span::styled("Quick Links", Style::default().bold()))];
    links.extend(Section::ALL.iter().enumerate().map(|(i, s)| {
        Line::from(Span::styled(
            format!("{} {}", i + 1, s.title()),
            Style::default().fg(Color::Gray),
        ))
    }));
    f.render_widget(Paragraph::new(links), columns[1]);

    let mut hours = vec![Line::from(Span::styled("Business Hours", Style::default().bold()))];
    hours.extend(
        content::BUSINESS_HOURS
            .iter()
            .map(|h| Line::from(Span::styled(*h, Style::default().fg(Color::Gray)))),
    );
    f.render_widget(Paragraph::new(hours), columns[2]);

    let contact = Paragraph::new(vec![
        Line::from(Span::styled("Contact Us", Style::default().bold())),
        Line::from(Span::styled(content::EMAIL, Style::default().fg(Color::Gray))),
        Line::from(Span::styled(content::PHONE, Style::default().fg(Color::Gray))),
        Line::from(Span::styled(content::LOCATION, Style::default().fg(Color::Gray))),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(contact, columns[3]);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.input_mode == InputMode::Editing {
        " ESC:stop editing | Tab:next field | Ctrl+S:send "
    } else {
        match state.section {
            Section::Home => " 1-4:section | m:menu | v:visit us | ?:help | q:quit ",
            Section::About => " 1-4:section | Tab:next section | ?:help | q:quit ",
            Section::Menu => " ←/→:category | 1-4:section | ?:help | q:quit ",
            Section::Contact => " ↑/↓:field | e:edit | s:send | 1-4:section | ?:help | q:quit ",
        }
    };

    let bar = Paragraph::new(status)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 WHISK & BLISS - Keyboard Shortcuts

 NAVIGATION
   1 / 2 / 3 / 4      Home / About / Menu / Contact
   Tab / Shift+Tab    Next / previous section

 HOME
   m                  View our menu
   v                  Visit us (contact)

 MENU
   ← / → or h / l     Previous / next category

 CONTACT
   ↑ / ↓              Move between fields
   e / Enter          Edit focused field
   Tab                Next field (while editing)
   Esc                Stop editing
   s / Ctrl+S         Send message

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}
