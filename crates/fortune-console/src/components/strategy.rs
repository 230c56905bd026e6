// crates/fortune-console/src/components/strategy.rs

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, InputMode, Notice, NoticeKind};

pub fn draw_strategy(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Prompt
            Constraint::Min(5),    // Output
        ])
        .split(area);

    let editing = matches!(app.input_mode, InputMode::Editing);
    draw_prompt(f, chunks[0], &app.strategy.prompt, editing);
    draw_output(f, chunks[1], app);

    // Toast in the lower right corner, on top of the output.
    if let Some(notice) = &app.strategy.notice {
        draw_notice(f, area, notice);
    }
}

fn draw_prompt(f: &mut Frame, area: Rect, prompt: &str, editing: bool) {
    let mut spans = vec![Span::raw(prompt)];
    if editing {
        spans.push(Span::styled(
            "_",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let glyphs = prompt.chars().count() + 1;
    let x_scroll = if editing {
        glyphs.saturating_sub(inner_width) as u16
    } else {
        0
    };

    let border = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let widget = Paragraph::new(Line::from(spans))
        .scroll((0, x_scroll))
        .block(
            Block::default()
                .title(" Strategy Prompt [e] ")
                .borders(Borders::ALL)
                .border_style(border),
        );
    f.render_widget(widget, area);
}

fn draw_output(f: &mut Frame, area: Rect, app: &App) {
    let page = &app.strategy;
    let block = Block::default()
        .title(" Generated Output ")
        .borders(Borders::ALL);

    if let Some(output) = &page.output {
        let paragraph = Paragraph::new(output.as_str())
            .wrap(Wrap { trim: false })
            .scroll((page.scroll, 0))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let message = if page.loading {
        Span::styled("AI is thinking...", Style::default().fg(Color::Gray))
    } else {
        Span::styled(
            "Your generated strategy will appear here.",
            Style::default().fg(Color::DarkGray),
        )
    };
    let paragraph = Paragraph::new(Line::from(message))
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}

fn draw_notice(f: &mut Frame, area: Rect, notice: &Notice) {
    if area.width < 8 || area.height < 3 {
        return;
    }
    let width = (notice.message.chars().count() as u16 + 4).min(area.width);
    let rect = Rect {
        x: area.right() - width,
        y: area.bottom() - 3,
        width,
        height: 3,
    };
    f.render_widget(Clear, rect);

    let color = match notice.kind {
        NoticeKind::Success => Color::Green,
        NoticeKind::Error => Color::Red,
    };
    let toast = Paragraph::new(notice.message.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(toast, rect);
}
