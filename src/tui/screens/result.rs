//! Result screen: echoes the submitted values decoded from the location.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::model::{Field, Submission};
use crate::notify::{Notification, Notifier};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::form::draw_button;

/// State for the result screen.
#[derive(Debug, Clone)]
pub struct ResultState {
    submission: Submission,
    mounted: bool,
}

impl ResultState {
    /// Creates the screen for `submission`. Nothing is announced until
    /// [`mount`](Self::mount).
    pub fn new(submission: Submission) -> Self {
        Self {
            submission,
            mounted: false,
        }
    }

    /// Announces the successful submission. Only the first call notifies.
    pub fn mount(&mut self, notifier: &mut dyn Notifier) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        tracing::debug!("result screen mounted");
        notifier.notify(Notification::SubmittedSuccessfully);
    }

    /// Returns the submitted values.
    pub fn submission(&self) -> &Submission {
        &self.submission
    }
}

impl ScreenState for ResultState {
    fn handle_key(&mut self, key: KeyEvent, _notifier: &mut dyn Notifier) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Action::GoHome,
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the result screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_result(state: &ResultState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Submission Successful ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [values_area, button_area, footer_area] = Layout::vertical([
        Constraint::Min(6),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    let label_style = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();
    for &field in Field::all() {
        let value = state.submission.display_value(field);
        let mut value_lines = value.split('\n');
        let first = value_lines.next().unwrap_or("");
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", field.label()), label_style),
            Span::raw(first.to_string()),
        ]));
        lines.extend(value_lines.map(|l| Line::from(format!("  {l}"))));
    }

    let values = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::NONE));
    frame.render_widget(values, values_area);

    let [_, button, _] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(28),
        Constraint::Min(0),
    ])
    .areas(button_area);
    draw_button("Submit Another Response", true, Color::Cyan, frame, button);

    let footer = Paragraph::new(Line::from("Enter: submit another response  Esc: quit"))
        .alignment(Alignment::Left)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn jane() -> Submission {
        Submission::from_pairs([
            ("fullName", "Jane Doe"),
            ("email", "jane@x.com"),
            ("age", "30"),
            ("gender", "Female"),
            ("comments", ""),
        ])
    }

    mod mount {
        use super::*;

        #[test]
        fn first_mount_notifies() {
            let mut state = ResultState::new(jane());
            let mut notes = Vec::new();
            state.mount(&mut notes);
            assert_eq!(notes, vec![Notification::SubmittedSuccessfully]);
        }

        #[test]
        fn repeated_mount_notifies_once() {
            let mut state = ResultState::new(jane());
            let mut notes = Vec::new();
            state.mount(&mut notes);
            state.mount(&mut notes);
            assert_eq!(notes.len(), 1);
        }

        #[test]
        fn new_does_not_notify() {
            let state = ResultState::new(jane());
            assert_eq!(state.submission(), &jane());
        }
    }

    mod keys {
        use super::*;

        #[test]
        fn enter_goes_home() {
            let mut state = ResultState::new(jane());
            let mut notes = Vec::new();
            assert_eq!(state.handle_key(press(KeyCode::Enter), &mut notes), Action::GoHome);
        }

        #[test]
        fn space_goes_home() {
            let mut state = ResultState::new(jane());
            let mut notes = Vec::new();
            assert_eq!(
                state.handle_key(press(KeyCode::Char(' ')), &mut notes),
                Action::GoHome
            );
        }

        #[test]
        fn esc_quits() {
            let mut state = ResultState::new(jane());
            let mut notes = Vec::new();
            assert_eq!(state.handle_key(press(KeyCode::Esc), &mut notes), Action::Quit);
        }

        #[test]
        fn other_keys_do_nothing() {
            let mut state = ResultState::new(jane());
            let mut notes = Vec::new();
            assert_eq!(
                state.handle_key(press(KeyCode::Char('x')), &mut notes),
                Action::None
            );
            assert!(notes.is_empty());
        }
    }

    mod rendering {
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

        fn render_result(state: &ResultState, width: u16, height: u16) -> String {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| {
                    draw_result(state, frame, frame.area());
                })
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn renders_title_and_values() {
            let state = ResultState::new(jane());
            let output = render_result(&state, 60, 16);
            assert!(output.contains("Submission Successful"));
            assert!(output.contains("Full Name: Jane Doe"));
            assert!(output.contains("Email: jane@x.com"));
            assert!(output.contains("Age: 30"));
            assert!(output.contains("Gender: Female"));
        }

        #[test]
        fn empty_comments_render_as_na() {
            let state = ResultState::new(jane());
            let output = render_result(&state, 60, 16);
            assert!(output.contains("Comments: N/A"));
        }

        #[test]
        fn absent_fields_render_blank() {
            let state = ResultState::new(Submission::default());
            let output = render_result(&state, 60, 16);
            let email_line = output.lines().find(|l| l.contains("Email:")).unwrap();
            assert_eq!(email_line.trim_end_matches([' ', '\u{2502}']).trim_end(), "\u{2502}Email:");
        }

        #[test]
        fn multiline_comments_render_each_line() {
            let state = ResultState::new(Submission::from_pairs([("comments", "first\nsecond")]));
            let output = render_result(&state, 60, 16);
            assert!(output.contains("Comments: first"));
            assert!(output.contains("second"));
        }

        #[test]
        fn renders_return_button() {
            let state = ResultState::new(jane());
            let output = render_result(&state, 60, 16);
            assert!(output.contains("Submit Another Response"));
        }
    }
}
