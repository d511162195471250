use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, InputMode};
use crate::candidate::FieldId;

/// Column where field values start: focus marker (2) + label column (36).
const VALUE_COL: u16 = 38;
const LABEL_WIDTH: usize = 36;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = app.palette();

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),                         // Title
            Constraint::Length(FieldId::ALL.len() as u16), // Field rows
            Constraint::Length(2),                         // Key hints
            Constraint::Min(0),                            // Filler
            Constraint::Length(1),                         // Status bar
        ])
        .split(frame.area());

    draw_title(frame, app, chunks[0]);
    draw_fields(frame, app, chunks[1]);
    draw_hints(frame, app, chunks[2]);
    draw_status_bar(frame, app, chunks[4]);
}

fn draw_title(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let title = Paragraph::new(vec![
        Line::from(Span::styled(" ADD CANDIDATES.", palette.title())),
        Line::from(Span::styled(
            " required fields are marked *",
            palette.key_hint(),
        )),
    ]);
    frame.render_widget(title, area);
}

fn draw_fields(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); FieldId::ALL.len()])
        .split(area);

    for (index, field) in FieldId::ALL.into_iter().enumerate() {
        let focused = app.focus() == field;
        let value = app.candidate().text(field);

        let (marker, label_style) = if focused {
            ("❯ ", palette.label_focused())
        } else {
            ("  ", palette.label())
        };

        let label = if field.is_required() {
            format!("{} *", field.label())
        } else {
            field.label().to_string()
        };

        let value_span = if value.is_empty() {
            Span::styled(field.placeholder().to_string(), palette.placeholder())
        } else {
            Span::styled(value.to_string(), palette.value())
        };

        let mut spans = vec![
            Span::styled(marker, label_style),
            Span::styled(format!("{label:<width$}", width = LABEL_WIDTH), label_style),
            value_span,
        ];

        // Inline error next to the offending field
        if let Some(message) = app.errors().message(field) {
            spans.push(Span::styled(format!("  ✗ {message}"), palette.error()));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), rows[index]);

        if focused && app.input_mode() == InputMode::Insert {
            let text_before_cursor: String = value.chars().take(app.cursor()).collect();
            let cursor_x = rows[index].x + VALUE_COL + text_before_cursor.width() as u16;
            frame.set_cursor_position((cursor_x, rows[index].y));
        }
    }
}

fn draw_hints(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let hints = match app.input_mode() {
        InputMode::Normal => vec![
            Span::raw(" "),
            Span::styled("Enter", palette.key_highlight()),
            Span::styled(" add candidate  ", palette.key_hint()),
            Span::styled("i", palette.key_highlight()),
            Span::styled(" edit field  ", palette.key_hint()),
            Span::styled("Tab/j/k", palette.key_highlight()),
            Span::styled(" move  ", palette.key_hint()),
            Span::styled("q", palette.key_highlight()),
            Span::styled(" quit", palette.key_hint()),
        ],
        InputMode::Insert => vec![
            Span::raw(" "),
            Span::styled("Enter", palette.key_highlight()),
            Span::styled(" next field (submits from last)  ", palette.key_hint()),
            Span::styled("Tab", palette.key_highlight()),
            Span::styled(" move  ", palette.key_hint()),
            Span::styled("Esc", palette.key_highlight()),
            Span::styled(" normal", palette.key_hint()),
        ],
    };

    frame.render_widget(Paragraph::new(Line::from(hints)), area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let (mode_text, mode_style) = match app.input_mode() {
        InputMode::Normal => (" NORMAL ", palette.mode_normal()),
        InputMode::Insert => (" INSERT ", palette.mode_insert()),
    };

    let status_style = if app.errors().is_empty() {
        palette.status_ok()
    } else {
        palette.status_warn()
    };

    let mut spans = vec![Span::styled(mode_text, mode_style)];
    if let Some(message) = app.status_message() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(message.to_string(), status_style));
    }

    let submitted = format!("submitted: {} ", app.submitted_count());
    let submitted_width = submitted.len() as u16;

    let status_area = Rect {
        width: area.width.saturating_sub(submitted_width),
        ..area
    };
    let submitted_area = Rect {
        x: area.x + area.width.saturating_sub(submitted_width),
        width: submitted_width,
        ..area
    };

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);

    let submitted_widget = Paragraph::new(Line::from(Span::styled(
        submitted,
        Style::default().fg(palette.text_muted),
    )))
    .alignment(Alignment::Right);

    frame.render_widget(submitted_widget, submitted_area);
}
