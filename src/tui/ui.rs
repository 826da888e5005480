use super::app::App;
use crate::history::ExpansionResult;
use crate::session::Phase;
use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const PREVIEW_CHARS: usize = 150;
const INPUT_PLACEHOLDER: &str = "e.g., Japanese man, 30, street style, Tokyo night";

pub fn render(frame: &mut Frame, app: &App) {
    let error = app.state().error();

    let mut constraints = vec![Constraint::Length(3), Constraint::Length(3)];
    if error.is_some() {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(5));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_input(frame, chunks[1], app);
    let mut next = 2;
    if let Some(message) = error {
        render_error(frame, chunks[next], message);
        next += 1;
    }
    render_result(frame, chunks[next], app);
    render_footer(frame, chunks[next + 1], app);

    if app.show_history() {
        render_history(frame, drawer_area(frame.area()), app);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(vec![
        Span::styled(
            " AvatarGen AI ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Prompt Engineer",
            Style::default().fg(Color::Gray),
        ),
        Span::raw("  "),
        Span::styled(
            format!("History ({})", app.history().len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let header = Paragraph::new(title).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let border_style = if app.show_history() {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let line = if app.input().is_empty() {
        Line::from(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::styled(app.input(), Style::default().fg(Color::White)),
            Span::styled("│", Style::default().fg(Color::Yellow)),
        ])
    };

    let title = if app.state().is_submitting() {
        format!(" Description {} Engineering... ", app.spinner())
    } else if app.submit_enabled() {
        " Description (Enter to expand) ".to_string()
    } else {
        " Description ".to_string()
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );
    frame.render_widget(input, area);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let banner = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default().fg(Color::Red),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(banner, area);
}

fn render_result(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" AI Engineered Output ");

    let lines = match &app.state().phase {
        Phase::Submitting { .. } => vec![Line::from(Span::styled(
            format!("{} Engineering...", app.spinner()),
            Style::default().fg(Color::Yellow),
        ))],
        Phase::Displaying { result } => result_lines(result),
        Phase::Idle | Phase::Failed { .. } => vec![Line::from(Span::styled(
            "Transform simple descriptions into hyper-detailed prompts for AI image generators.",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn result_lines(result: &ExpansionResult) -> Vec<Line<'_>> {
    let meta = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);
    let mut lines: Vec<Line> = result.expanded_prompt.lines().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!("Input: \"{}\"", result.original_input), meta),
        Span::styled(
            format!(
                "  {}",
                result.created_at.with_timezone(&Local).format("%H:%M:%S")
            ),
            meta,
        ),
    ]));
    lines
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let text = match app.status() {
        Some(status) => Span::styled(status, Style::default().fg(Color::Green)),
        None => Span::styled(
            "Enter: expand  Tab: history  Ctrl-Y: copy  Esc: quit",
            Style::default().fg(Color::DarkGray),
        ),
    };
    frame.render_widget(Paragraph::new(Line::from(text)), area);
}

fn render_history(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Generation History ");

    if app.history().is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No history yet",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app.history().iter().map(history_item).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.history_cursor()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn history_item(entry: &ExpansionResult) -> ListItem<'_> {
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(
                entry.original_input.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", entry.created_at.with_timezone(&Local).format("%Y-%m-%d")),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            format!("\"{}\"", entry.preview(PREVIEW_CHARS)),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
    ])
}

/// Right-hand drawer, 45% of the width
fn drawer_area(area: Rect) -> Rect {
    let share = u16::try_from(u32::from(area.width) * 45 / 100).unwrap_or(area.width);
    let width = share.max(30).min(area.width);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: area.height,
    }
}
