// crates/fortune-console/src/components/trade_table.rs

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use fortune_core::{Trade, TradeDirection};

pub fn draw_trade_table(f: &mut Frame, area: Rect, trades: &[Trade], selected: usize) {
    let header = Row::new(vec!["Date", "Type", "Entry", "Exit", "P&L"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = trades
        .iter()
        .map(|trade| {
            let direction_color = match trade.direction {
                TradeDirection::Long => Color::Green,
                TradeDirection::Short => Color::Red,
            };
            let pnl_color = if trade.pnl >= 0.0 {
                Color::Green
            } else {
                Color::Red
            };
            Row::new(vec![
                Cell::from(trade.date.clone()),
                Cell::from(trade.direction.as_str())
                    .style(Style::default().fg(direction_color)),
                Cell::from(format!("{:.2}", trade.entry)),
                Cell::from(format!("{:.2}", trade.exit)),
                Cell::from(format!("{:+.2}", trade.pnl))
                    .style(Style::default().fg(pnl_color)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(7),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(" Trade Log ").borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = TableState::default();
    if !trades.is_empty() {
        state.select(Some(selected.min(trades.len() - 1)));
    }
    f.render_stateful_widget(table, area, &mut state);
}
