// crates/fortune-console/src/components/help.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

pub fn draw_help(f: &mut Frame, area: Rect) {
    // Clear the area first for the overlay
    f.render_widget(Clear, area);

    let help_items = vec![
        ListItem::new(Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Blue)),
            Span::raw(" - Next View"),
        ])),
        ListItem::new(Line::from(vec![
            Span::styled("Shift+Tab", Style::default().fg(Color::Blue)),
            Span::raw(" - Previous View"),
        ])),
        ListItem::new(Line::from(vec![
            Span::styled("G/g", Style::default().fg(Color::Magenta)),
            Span::raw(" - Toggle Gemini API"),
        ])),
        ListItem::new(Line::from(vec![
            Span::styled("E/e", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw(" - Edit Prompt (Scaffolder, Strategy)"),
        ])),
        ListItem::new(Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw(" - Generate / Run Backtest"),
        ])),
        ListItem::new(Line::from(vec![
            Span::styled("C/c", Style::default().fg(Color::Cyan)),
            Span::raw(" - Copy Prompt to Clipboard (Scaffolder)"),
        ])),
        ListItem::new(Line::from(vec![
            Span::styled("Space", Style::default().fg(Color::Magenta)),
            Span::raw(" - Fold/Unfold Selected Folder (Scaffolder)"),
        ])),
        ListItem::new(Line::from(vec![
            Span::styled("S/s", Style::default().fg(Color::Yellow)),
            Span::raw(" - Next Symbol (Backtest)"),
        ])),
        ListItem::new(Line::from(vec![
            Span::styled("T/t", Style::default().fg(Color::Yellow)),
            Span::raw(" - Next Strategy (Backtest)"),
        ])),
        ListItem::new(Line::from(vec![
            Span::styled("←/→", Style::default().fg(Color::Blue)),
            Span::raw(" - Overview / Alerts Tab (Dashboard)"),
        ])),
        ListItem::new(Line::from(vec![
            Span::styled("F/f", Style::default().fg(Color::Cyan)),
            Span::raw(" - Sync with Fyers (Dashboard)"),
        ])),
        ListItem::new(Line::from(vec![
            Span::styled("R/r", Style::default().fg(Color::Magenta)),
            Span::raw(" - Reload Data (Dashboard)"),
        ])),
        ListItem::new(Line::from(vec![
            Span::styled("↑/k", Style::default().fg(Color::White)),
            Span::raw(" - Move Up / Scroll Up"),
        ])),
        ListItem::new(Line::from(vec![
            Span::styled("↓/j", Style::default().fg(Color::White)),
            Span::raw(" - Move Down / Scroll Down"),
        ])),
        ListItem::new(Line::from(vec![
            Span::styled("Q/q", Style::default().fg(Color::Red)),
            Span::raw(" - Quit"),
        ])),
    ];

    let help_list = List::new(help_items)
        .block(Block::default()
            .title(" Help - Keyboard Shortcuts ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(help_list, area);

    // Add footer with close instruction
    let footer = Paragraph::new("Press F1, ? or ESC to close help")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    let footer_area = Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    };

    f.render_widget(footer, footer_area);
}
