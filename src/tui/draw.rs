//! TUI rendering: layout and widgets for the calculator screen.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use std::time::Instant;

use crate::core::app;
use crate::core::session::EvalStatus;

use super::app::App;
use super::constants::{ACCENT, ACCENT_SECONDARY, FUNCTION_HINTS, KEY_HINTS, LOGO};

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    draw_header(f, app, chunks[0]);
    draw_display(f, app, chunks[1]);
    draw_history(f, app, chunks[2]);
    draw_footer(f, chunks[4]);
    draw_copy_toast(f, app, area);
}

/// Logo and app name on the left, angle mode on the right.
fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(10)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            LOGO,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(app::NAME, Style::default().add_modifier(Modifier::BOLD)),
    ]);
    f.render_widget(Paragraph::new(title), header_chunks[0]);

    let mode = Line::from(Span::styled(
        app.session.angle_mode.to_string(),
        Style::default()
            .fg(ACCENT_SECONDARY)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(
        Paragraph::new(mode).alignment(Alignment::Right),
        header_chunks[1],
    );
}

/// The display: expression input (with cursor), result, and status line.
fn draw_display(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let input_line = if app.input.is_empty() {
        Line::from(Span::styled(
            "Type an expression and press Enter",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            app.input.as_str(),
            Style::default().fg(Color::White),
        ))
    };
    f.render_widget(Paragraph::new(input_line), rows[0]);

    let status = app.status();
    let result_style = if status == EvalStatus::Failed {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            app.session.result.as_str(),
            result_style,
        )))
        .alignment(Alignment::Right),
        rows[1],
    );

    let status_style = match status {
        EvalStatus::Failed => Style::default().fg(Color::Red),
        EvalStatus::Computing(_) => Style::default().fg(Color::Yellow),
        _ => Style::default().fg(Color::DarkGray),
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(status.to_string(), status_style))),
        rows[2],
    );

    // Cursor sits at the end of the typed expression
    let cursor_col = (app.input.chars().count() as u16).min(inner.width.saturating_sub(1));
    f.set_cursor_position(Position::new(inner.x + cursor_col, inner.y));
}

/// The latest committed calculation, or a placeholder before the first one.
fn draw_history(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" History (latest) ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let line = match &app.session.history {
        Some(entry) => Line::from(vec![
            Span::styled(
                entry.question.as_str(),
                Style::default().fg(Color::White),
            ),
            Span::styled(" = ", Style::default().fg(Color::DarkGray)),
            Span::styled(entry.answer.as_str(), Style::default().fg(ACCENT)),
        ]),
        None => Line::from(Span::styled(
            "No calculations yet.",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), inner);
}

/// Key bindings and the function vocabulary.
fn draw_footer(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            FUNCTION_HINTS,
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

/// Toast: top right, below header. Opaque background so it's visible over content.
fn draw_copy_toast(f: &mut Frame, app: &mut App, area: Rect) {
    if let Some(deadline) = app.copy_toast_until {
        if deadline > Instant::now() {
            const HEADER_HEIGHT: u16 = 2;
            let toast_text = " Copied ";
            let toast_width = toast_text.len() as u16 + 2;
            let toast_height = 3u16;
            let toast_area = Rect {
                x: area.x + area.width.saturating_sub(toast_width).saturating_sub(1),
                y: area.y + HEADER_HEIGHT,
                width: toast_width,
                height: toast_height,
            };
            f.render_widget(Clear, toast_area);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT))
                .style(Style::default().bg(Color::Black));
            let para = Paragraph::new(Line::from(toast_text))
                .block(block)
                .style(Style::default().fg(ACCENT).bg(Color::Black));
            f.render_widget(para, toast_area);
        } else {
            app.copy_toast_until = None;
        }
    }
}
