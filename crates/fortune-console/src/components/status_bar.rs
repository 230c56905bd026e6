// crates/fortune-console/src/components/status_bar.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, InputMode, View};

fn key(label: &str, color: Color) -> Span<'_> {
    Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD))
}

pub fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let (msg, style) = match app.input_mode {
        InputMode::Normal => {
            let mut shortcuts = match app.view {
                View::Scaffolder => vec![
                    key("[E]", Color::Yellow),
                    Span::raw("dit "),
                    key("[Enter]", Color::Green),
                    Span::raw(" Generate "),
                    key("[C]", Color::Cyan),
                    Span::raw("opy "),
                    key("[Space]", Color::Magenta),
                    Span::raw(" Fold "),
                    key("[↑↓]", Color::Blue),
                    Span::raw(" Select "),
                ],
                View::Strategy => vec![
                    key("[E]", Color::Yellow),
                    Span::raw("dit "),
                    key("[Enter]", Color::Green),
                    Span::raw(" Generate "),
                    key("[↑↓]", Color::Blue),
                    Span::raw(" Scroll "),
                ],
                View::Backtest => vec![
                    key("[S]", Color::Yellow),
                    Span::raw("ymbol "),
                    key("[T]", Color::Yellow),
                    Span::raw(" Strategy "),
                    key("[Enter]", Color::Green),
                    Span::raw(" Run "),
                    key("[↑↓]", Color::Blue),
                    Span::raw(" Trades "),
                ],
                View::Dashboard => vec![
                    key("[←→]", Color::Yellow),
                    Span::raw(" Tabs "),
                    key("[F]", Color::Cyan),
                    Span::raw(" Sync "),
                    key("[R]", Color::Magenta),
                    Span::raw(" Reload "),
                ],
            };
            shortcuts.extend([
                key("[Tab]", Color::Gray),
                Span::raw(" View "),
                key("[?]", Color::Gray),
                Span::raw(" Help "),
                key("[Q]", Color::Gray),
                Span::raw("uit"),
            ]);
            (Line::from(shortcuts), Style::default())
        }
        InputMode::Editing => {
            let hints = vec![
                Span::raw("Editing prompt  "),
                key("[Enter]", Color::Green),
                Span::raw(" Generate  "),
                key("[Esc]", Color::Gray),
                Span::raw(" Cancel"),
            ];
            (Line::from(hints), Style::default().fg(Color::Yellow))
        }
    };

    let status_block = Block::default().borders(Borders::ALL).border_style(style);

    let paragraph = Paragraph::new(msg)
        .block(status_block)
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}
