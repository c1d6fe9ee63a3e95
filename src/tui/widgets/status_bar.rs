//! Status bar widget: one-line phase and location display.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::Phase;

/// Data passed to the status bar widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBarContext {
    /// Where the app is in the edit/submit/view cycle.
    pub phase: Phase,
    /// The current location, query included.
    pub location: String,
}

fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Editing => Color::Cyan,
        Phase::Submitting => Color::Yellow,
        Phase::Viewing => Color::Green,
    }
}

/// Renders a one-line status bar.
///
/// Display format: `EDITING  /` or `VIEWING  /success?fullName=...`, with the
/// phase coloured and the location dimmed. Long locations are clipped.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let spans = vec![
        Span::styled(
            ctx.phase.label().to_ascii_uppercase(),
            Style::default().fg(phase_color(ctx.phase)),
        ),
        Span::raw("  "),
        Span::styled(ctx.location.clone(), Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render_status_bar(ctx: &StatusBarContext, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_status_bar(ctx, frame, frame.area());
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn renders_editing_at_root() {
        let ctx = StatusBarContext {
            phase: Phase::Editing,
            location: "/".to_string(),
        };
        let output = render_status_bar(&ctx, 40, 1);
        assert!(output.contains("EDITING"), "should show phase");
        assert!(output.contains('/'), "should show location");
    }

    #[test]
    fn renders_viewing_with_query() {
        let ctx = StatusBarContext {
            phase: Phase::Viewing,
            location: "/success?age=30".to_string(),
        };
        let output = render_status_bar(&ctx, 40, 1);
        assert!(output.contains("VIEWING"));
        assert!(output.contains("/success?age=30"));
    }

    #[test]
    fn renders_submitting() {
        let ctx = StatusBarContext {
            phase: Phase::Submitting,
            location: "/".to_string(),
        };
        let output = render_status_bar(&ctx, 40, 1);
        assert!(output.contains("SUBMITTING"));
    }

    #[test]
    fn phase_colors_differ() {
        assert_ne!(phase_color(Phase::Editing), phase_color(Phase::Viewing));
        assert_ne!(phase_color(Phase::Submitting), phase_color(Phase::Viewing));
    }
}
