//! Rendering helpers for labelled form inputs and buttons.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Text shown by a select whose value is empty.
pub const SELECT_PLACEHOLDER: &str = "-- Select --";

/// Border colour for an input: red when failing, yellow when focused.
pub fn border_color(has_error: bool, focused: bool) -> Color {
    if has_error {
        Color::Red
    } else if focused {
        Color::Yellow
    } else {
        Color::DarkGray
    }
}

/// Returns the bordered block framing an input.
pub fn input_block(label: &str, has_error: bool, focused: bool) -> Block<'_> {
    Block::default()
        .title(label)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(has_error, focused)))
}

/// Renders a single-line text input, with a cursor block when focused.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_text_input(
    label: &str,
    value: &str,
    error: Option<&str>,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let mut spans = vec![Span::raw(value)];
    if focused {
        spans.push(Span::styled(
            "\u{2588}",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    let paragraph =
        Paragraph::new(Line::from(spans)).block(input_block(label, error.is_some(), focused));
    frame.render_widget(paragraph, area);
    draw_error(error, frame, area);
}

/// Renders a single-choice select showing `value`, or the placeholder when
/// it is empty.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_select(
    label: &str,
    value: &str,
    error: Option<&str>,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let (text, style) = if value.is_empty() {
        (SELECT_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        (value, Style::default())
    };

    let line = if focused {
        Line::from(vec![
            Span::styled("\u{25c2} ", Style::default().fg(Color::Yellow)),
            Span::styled(text, style),
            Span::styled(" \u{25b8}", Style::default().fg(Color::Yellow)),
        ])
    } else {
        Line::from(Span::styled(text, style))
    };

    let paragraph = Paragraph::new(line).block(input_block(label, error.is_some(), focused));
    frame.render_widget(paragraph, area);
    draw_error(error, frame, area);
}

/// Renders a push button, highlighted when focused.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_button(label: &str, focused: bool, accent: Color, frame: &mut Frame, area: Rect) {
    let (border, text) = if focused {
        (
            Style::default().fg(accent),
            Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (Style::default().fg(Color::DarkGray), Style::default())
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {label} "), text)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}

/// Draws `error` over the bottom border of an input's area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_error(error: Option<&str>, frame: &mut Frame, area: Rect) {
    let Some(err) = error else {
        return;
    };
    if area.height == 0 {
        return;
    }
    let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
    let err_area = Rect {
        x: area.x + 2,
        y: area.y + area.height - 1,
        width: area.width.saturating_sub(4),
        height: 1,
    };
    frame.render_widget(error_line, err_area);
}
