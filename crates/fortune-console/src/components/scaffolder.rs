// crates/fortune-console/src/components/scaffolder.rs

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, InputMode};
use crate::components::file_tree::draw_file_tree;

pub fn draw_scaffolder(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Prompt
            Constraint::Min(5),    // Output
        ])
        .split(area);

    let editing = matches!(app.input_mode, InputMode::Editing);
    draw_prompt(f, chunks[0], &app.scaffolder.prompt, editing);
    draw_output(f, chunks[1], app);
}

fn draw_prompt(f: &mut Frame, area: Rect, prompt: &str, editing: bool) {
    let mut spans = vec![Span::raw(prompt)];
    if editing {
        spans.push(Span::styled(
            "_",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    // Keep the end of a long prompt in view while typing.
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
                .title(" Project Description [e] ")
                .borders(Borders::ALL)
                .border_style(border),
        );
    f.render_widget(widget, area);
}

fn draw_output(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Generated Structure ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let page = &app.scaffolder;
    if let Some(tree) = &page.tree {
        draw_file_tree(f, inner, tree, &page.tree_view);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    if let Some(error) = &page.error {
        lines.push(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(""));
    }
    if page.loading {
        lines.push(Line::from(Span::styled(
            "Analyzing prompt and building tree...",
            Style::default().fg(Color::Gray),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Your project structure will appear here.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, inner);
}
