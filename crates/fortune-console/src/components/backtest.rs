// crates/fortune-console/src/components/backtest.rs

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use fortune_core::{BacktestReport, EquityPoint};

use crate::app::App;
use crate::components::metrics::draw_metrics;
use crate::components::trade_table::draw_trade_table;

pub fn draw_backtest(f: &mut Frame, area: Rect, app: &App) {
    let page = &app.backtest;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Parameters
            Constraint::Min(10),   // Results
        ])
        .split(area);

    // Parameter line
    let run_hint = if page.loading {
        Span::styled("Running...", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("[Enter] Run Backtest", Style::default().fg(Color::Green))
    };
    let params = Line::from(vec![
        Span::raw("Symbol [s]: "),
        Span::styled(
            page.symbol().1,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    Strategy [t]: "),
        Span::styled(
            page.strategy().1,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        run_hint,
    ]);
    let params_widget = Paragraph::new(params).block(
        Block::default()
            .title(" Run Backtest ")
            .borders(Borders::ALL),
    );
    f.render_widget(params_widget, chunks[0]);

    if let Some(report) = &page.report {
        draw_results(f, chunks[1], report, page.selected_trade);
        return;
    }

    // No results yet: one message box, mirroring the page states.
    let message = if let Some(error) = &page.error {
        Span::styled(error.as_str(), Style::default().fg(Color::Red))
    } else if page.loading {
        Span::styled(
            "Running simulation on the server...",
            Style::default().fg(Color::Gray),
        )
    } else {
        Span::styled(
            "Select parameters and run a backtest to see results.",
            Style::default().fg(Color::DarkGray),
        )
    };
    let placeholder = Paragraph::new(Line::from(message))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(placeholder, chunks[1]);
}

fn draw_results(f: &mut Frame, area: Rect, report: &BacktestReport, selected_trade: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Metric cards
            Constraint::Min(8),    // Equity curve
            Constraint::Length(9), // Trade log
        ])
        .split(area);

    draw_metrics(f, chunks[0], &report.metrics);
    draw_equity_chart(f, chunks[1], &report.metrics.equity_curve);
    draw_trade_table(f, chunks[2], &report.trades, selected_trade);
}

fn draw_equity_chart(f: &mut Frame, area: Rect, curve: &[EquityPoint]) {
    let points: Vec<(f64, f64)> = curve
        .iter()
        .map(|point| (point.trade as f64, point.equity))
        .collect();

    let x_min = points.first().map_or(0.0, |point| point.0);
    let x_max = points.last().map_or(1.0, |point| point.0).max(x_min + 1.0);

    let mut y_min = f64::MAX;
    let mut y_max = f64::MIN;
    for (_, equity) in &points {
        y_min = y_min.min(*equity);
        y_max = y_max.max(*equity);
    }
    if points.is_empty() {
        y_min = 0.0;
        y_max = 1.0;
    }
    let pad = ((y_max - y_min) * 0.05).max(1.0);
    let y_lo = y_min - pad;
    let y_hi = y_max + pad;

    let datasets = vec![Dataset::default()
        .name("equity")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::LightBlue))
        .data(&points)];

    let x_labels = vec![
        Span::raw(format!("{x_min:.0}")),
        Span::raw(format!("{:.0}", (x_min + x_max) / 2.0)),
        Span::raw(format!("{x_max:.0}")),
    ];
    let y_labels = vec![
        Span::raw(format!("{y_lo:.2}")),
        Span::raw(format!("{:.2}", (y_lo + y_hi) / 2.0)),
        Span::raw(format!("{y_hi:.2}")),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Equity Curve ")
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title("trade")
                .style(Style::default().fg(Color::Gray))
                .bounds([x_min, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("equity")
                .style(Style::default().fg(Color::Gray))
                .bounds([y_lo, y_hi])
                .labels(y_labels),
        );
    f.render_widget(chart, area);
}
