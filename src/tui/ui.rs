use crate::tui::app::{App, Status};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // List
            Constraint::Length(3), // Footer
        ])
        .split(frame.size());

    draw_header(frame, chunks[0], app);
    draw_item_list(frame, chunks[1], app);
    draw_footer(frame, chunks[2], app);

    if app.help_mode {
        draw_help_window(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let header = Paragraph::new(format!("Source: {}", app.source_label))
        .block(Block::default().borders(Borders::ALL).title("undolist"))
        .style(Style::default().fg(Color::Cyan));

    frame.render_widget(header, area);
}

fn draw_item_list(frame: &mut Frame, area: Rect, app: &mut App) {
    // Borders take one row each side
    let rows = area.height.saturating_sub(2) as usize;
    app.controller.store_mut().set_viewport(rows);

    let store = app.controller.store();
    let items: Vec<ListItem> = store
        .contents()
        .iter()
        .map(|item| ListItem::new(Line::from(Span::raw(item.as_str()))))
        .collect();

    let title = if store.is_empty() {
        "Items (empty, r to reload)".to_string()
    } else {
        format!("Items {}/{}", store.current_index() + 1, store.len())
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default().with_offset(store.scroll_top());
    if !store.is_empty() {
        list_state.select(Some(store.current_index()));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let counts = format!(
        "Items: {} | Baseline: {} | Undo: {}",
        app.controller.store().len(),
        app.controller.baseline().len(),
        app.controller.undo_log().len()
    );

    let (text, style) = match &app.status {
        Some(Status::Alert(message)) => (
            format!("{} | {}", counts, message),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Some(Status::Info(message)) => (
            format!("{} | {}", counts, message),
            Style::default().fg(Color::Yellow),
        ),
        None => (
            format!("{} | d: delete | D: delete previous | r: reload | u: undo | ?: help | q: quit", counts),
            Style::default().fg(Color::Yellow),
        ),
    };

    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);

    frame.render_widget(footer, area);
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = [
        "undolist - Keyboard Commands",
        "",
        "NAVIGATION:",
        "  ↑↓ / j/k          Move up/down",
        "  Home/End / g/G    First/last item",
        "  PgUp/PgDn         Page up/down",
        "",
        "EDITING:",
        "  d / Delete        Delete current item",
        "  D / Backspace     Delete item above the cursor",
        "  r / Ctrl+R        Reload the full list",
        "  u / Ctrl+Z        Undo last deletion",
        "",
        "OTHER:",
        "  ?                 Show this help",
        "  q / Esc / Ctrl+C  Quit",
        "",
        "Press ? or Esc to close this help window",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help - Keyboard Commands ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });

    let area = centered_rect(70, 70, frame.size());
    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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
