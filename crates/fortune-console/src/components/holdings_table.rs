// crates/fortune-console/src/components/holdings_table.rs

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use fortune_core::Holding;

pub fn draw_holdings_table(f: &mut Frame, area: Rect, holdings: &[Holding]) {
    let header = Row::new(vec!["Asset", "Quantity", "Value", "Unrealized P&L"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = holdings
        .iter()
        .map(|holding| {
            let pnl_color = if holding.pnl >= 0.0 {
                Color::Green
            } else {
                Color::Red
            };
            // Name over ticker, like a two-line card cell.
            let asset = Text::from(vec![
                Line::from(holding.name.clone()),
                Line::from(Span::styled(
                    holding.ticker.clone(),
                    Style::default().fg(Color::DarkGray),
                )),
            ]);
            Row::new(vec![
                Cell::from(asset),
                Cell::from(format!("{}", holding.quantity)),
                Cell::from(format!("${:.2}", holding.value)),
                Cell::from(format!("{:+.2}", holding.pnl))
                    .style(Style::default().fg(pnl_color)),
            ])
            .height(2)
        })
        .collect();

    let widths = [
        Constraint::Min(18),
        Constraint::Length(10),
        Constraint::Length(14),
        Constraint::Length(15),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(" Holdings ").borders(Borders::ALL));
    f.render_widget(table, area);
}
