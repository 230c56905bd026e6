// crates/fortune-console/src/components/allocation.rs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use fortune_core::{allocation, Holding};

const SLICE_COLORS: [Color; 6] = [
    Color::Magenta,
    Color::Green,
    Color::Yellow,
    Color::LightRed,
    Color::Blue,
    Color::Cyan,
];

pub fn draw_allocation(f: &mut Frame, area: Rect, holdings: &[Holding]) {
    let block = Block::default()
        .title(" Asset Allocation ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if holdings.is_empty() {
        let widget = Paragraph::new("No holdings.").style(Style::default().fg(Color::DarkGray));
        f.render_widget(widget, inner);
        return;
    }

    let slices = allocation(holdings);

    // One gauge row per slice; anything past the bottom edge is dropped.
    let mut constraints: Vec<Constraint> = vec![Constraint::Length(1); slices.len()];
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (index, slice) in slices.iter().enumerate() {
        let color = SLICE_COLORS[index % SLICE_COLORS.len()];
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color).bg(Color::Black))
            .ratio((slice.percent / 100.0).clamp(0.0, 1.0))
            .label(format!(
                "{}  ${:.2} ({:.2}%)",
                slice.ticker, slice.value, slice.percent
            ));
        f.render_widget(gauge, rows[index]);
    }
}
