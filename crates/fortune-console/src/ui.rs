// crates/fortune-console/src/ui.rs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, View};
use crate::components::{
    backtest::draw_backtest, dashboard::draw_dashboard, help::draw_help,
    scaffolder::draw_scaffolder, status_bar::draw_status_bar, strategy::draw_strategy,
};

pub fn draw(f: &mut Frame, app: &App) {
    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    draw_header(f, chunks[0], app);

    match app.view {
        View::Scaffolder => draw_scaffolder(f, chunks[1], app),
        View::Strategy => draw_strategy(f, chunks[1], app),
        View::Backtest => draw_backtest(f, chunks[1], app),
        View::Dashboard => draw_dashboard(f, chunks[1], app),
    }

    draw_status_bar(f, chunks[2], app);

    // Draw help overlay if active
    if app.show_help {
        draw_help(f, centered_rect(60, 60, f.size()));
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(26)])
        .split(area);

    // Left: view tabs
    let titles: Vec<Line> = View::ALL
        .iter()
        .map(|view| Line::from(view.title()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.view.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .block(
            Block::default()
                .title(" Fortune AI Trading System ")
                .borders(Borders::ALL),
        );
    f.render_widget(tabs, header_chunks[0]);

    // Right: AI proxy state
    let (state, state_color) = if app.ai_enabled {
        ("ON", Color::Green)
    } else {
        ("OFF", Color::Red)
    };
    let ai_line = Line::from(vec![
        Span::raw("Gemini API [g]: "),
        Span::styled(state, Style::default().fg(state_color).add_modifier(Modifier::BOLD)),
    ]);
    let ai_widget = Paragraph::new(ai_line).block(Block::default().borders(Borders::ALL));
    f.render_widget(ai_widget, header_chunks[1]);
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
