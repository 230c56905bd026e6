// crates/fortune-console/src/components/signals.rs

use chrono::{DateTime, Local};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use fortune_core::{Signal, SignalKind};

pub fn draw_signals(f: &mut Frame, area: Rect, signals: &[Signal]) {
    let block = Block::default()
        .title(" Active Trading Signals ")
        .borders(Borders::ALL);

    if signals.is_empty() {
        let widget = Paragraph::new("No active signals.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(widget, area);
        return;
    }

    let header = Row::new(vec!["Ticker", "Side", "Signal Price", "Strategy", "Time"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = signals
        .iter()
        .map(|signal| {
            let (side, color) = match signal.kind {
                SignalKind::Buy => ("▲ BUY", Color::Green),
                SignalKind::Sell => ("▼ SELL", Color::Red),
            };
            Row::new(vec![
                Cell::from(signal.ticker.clone())
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(side).style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Cell::from(format!("${:.2}", signal.price)),
                Cell::from(signal.strategy.clone()),
                Cell::from(format_timestamp(&signal.timestamp))
                    .style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Length(14),
        Constraint::Min(16),
        Constraint::Length(20),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}

/// Render an ISO-8601 timestamp in local time; shown as-is when it
/// does not parse.
fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(instant) => instant
            .with_timezone(&Local)
            .format("%d/%m/%Y %H:%M:%S")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}
