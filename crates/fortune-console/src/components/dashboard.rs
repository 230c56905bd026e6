// crates/fortune-console/src/components/dashboard.rs

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::{App, DashboardTab};
use crate::components::allocation::draw_allocation;
use crate::components::holdings_table::draw_holdings_table;
use crate::components::signals::draw_signals;

pub fn draw_dashboard(f: &mut Frame, area: Rect, app: &App) {
    let page = &app.dashboard;

    if page.loading {
        let widget = Paragraph::new("Loading dashboard data...")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, area);
        return;
    }

    if let Some(error) = &page.error {
        let widget = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, area);
        return;
    }

    let sync_error_height = if page.sync_error.is_some() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                 // Tabs + sync action
            Constraint::Length(sync_error_height), // Sync failure line
            Constraint::Min(5),                    // Tab content
        ])
        .split(area);

    draw_dashboard_header(f, chunks[0], page.tab, page.syncing);

    if let Some(sync_error) = &page.sync_error {
        let widget = Paragraph::new(sync_error.as_str()).style(Style::default().fg(Color::Red));
        f.render_widget(widget, chunks[1]);
    }

    match page.tab {
        DashboardTab::Overview => {
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(chunks[2]);
            draw_allocation(f, halves[0], &page.holdings);
            draw_holdings_table(f, halves[1], &page.holdings);
        }
        DashboardTab::Alerts => draw_signals(f, chunks[2], &page.signals),
    }
}

fn draw_dashboard_header(f: &mut Frame, area: Rect, tab: DashboardTab, syncing: bool) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(24)])
        .split(area);

    let titles: Vec<Line> = ["Overview", "Alerts"].iter().map(|t| Line::from(*t)).collect();
    let selected = match tab {
        DashboardTab::Overview => 0,
        DashboardTab::Alerts => 1,
    };
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    f.render_widget(tabs, chunks[0]);

    let sync = if syncing {
        Paragraph::new("Syncing...").style(Style::default().fg(Color::Yellow))
    } else {
        Paragraph::new("[f] Sync with Fyers").style(Style::default().fg(Color::Cyan))
    };
    f.render_widget(
        sync.alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        chunks[1],
    );
}
