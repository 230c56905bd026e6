// crates/fortune-console/src/components/metrics.rs

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use fortune_core::PerformanceMetrics;

pub fn draw_metrics(f: &mut Frame, area: Rect, metrics: &PerformanceMetrics) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ])
        .split(area);

    let pnl_color = if metrics.total_pnl >= 0.0 {
        Color::Green
    } else {
        Color::Red
    };

    card(
        f,
        chunks[0],
        " Total P&L ",
        format!("${:.2}", metrics.total_pnl),
        pnl_color,
    );
    card(
        f,
        chunks[1],
        " Win Rate ",
        format!("{:.2}%", metrics.win_rate),
        Color::Blue,
    );
    card(
        f,
        chunks[2],
        " Max Drawdown ",
        format!("{:.2}%", metrics.max_drawdown),
        Color::Red,
    );
    card(
        f,
        chunks[3],
        " Sharpe Ratio ",
        format!("{:.2}", metrics.sharpe_ratio),
        Color::Yellow,
    );
    card(
        f,
        chunks[4],
        " CAGR ",
        format!("{:.2}%", metrics.cagr),
        Color::Cyan,
    );
}

fn card(f: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let widget = Paragraph::new(Line::from(value))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(widget, area);
}
