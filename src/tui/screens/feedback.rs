//! Feedback form screen: five bound inputs plus Reset and Submit.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use tui_textarea::TextArea;

use crate::model::{FeedbackDraft, Field, FieldErrors, validate_draft};
use crate::navigation::Location;
use crate::notify::{Notification, Notifier};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::form::{draw_button, draw_select, draw_text_input, input_block};

/// Something on the form that can hold focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input(Field),
    ResetButton,
    SubmitButton,
}

/// Tab order of the form.
static FOCUS_ORDER: &[Focus] = &[
    Focus::Input(Field::FullName),
    Focus::Input(Field::Email),
    Focus::Input(Field::Age),
    Focus::Input(Field::Gender),
    Focus::Input(Field::Comments),
    Focus::ResetButton,
    Focus::SubmitButton,
];

/// Values offered by the gender select; the empty string is "unselected".
static GENDER_CHOICES: &[&str] = &["", "Male", "Female", "Other"];

/// Key hints shown at the bottom of the form.
const FOOTER_HINTS: &str = concat!(
    "Tab/Shift+Tab: next/prev  ",
    "\u{2190}\u{2192}: choose  ",
    "Ctrl+S: submit  Ctrl+R: reset  Esc: quit",
);

/// Rows given to the comments text area, borders included.
const COMMENTS_HEIGHT: u16 = 6;

/// State for the feedback form screen.
#[derive(Debug, Clone)]
pub struct FormState {
    draft: FeedbackDraft,
    errors: FieldErrors,
    focus: Focus,
    comments: TextArea<'static>,
    navigation_delay: Duration,
}

impl FormState {
    /// Creates a form with an empty draft. A successful submit navigates
    /// after `navigation_delay`.
    pub fn new(navigation_delay: Duration) -> Self {
        Self {
            draft: FeedbackDraft::new(),
            errors: FieldErrors::new(),
            focus: FOCUS_ORDER[0],
            comments: TextArea::default(),
            navigation_delay,
        }
    }

    /// Returns the current draft.
    pub fn draft(&self) -> &FeedbackDraft {
        &self.draft
    }

    /// Returns the errors from the last submit attempt.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Returns what currently has focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Replaces one field of the draft.
    ///
    /// Existing errors are left alone, including the one for `field`; they
    /// are only recomputed by [`submit`](Self::submit).
    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Validates the draft. On success, schedules navigation to the result
    /// location; on failure, stores the errors and navigates nowhere.
    pub fn submit(&mut self, notifier: &mut dyn Notifier) -> Action {
        self.errors = validate_draft(&self.draft);

        if !self.errors.is_empty() {
            tracing::debug!(failing = self.errors.len(), "feedback rejected");
            notifier.notify(Notification::FixErrors);
            return Action::None;
        }

        match Location::for_submission(&self.draft) {
            Ok(location) => {
                tracing::info!(
                    %location,
                    delay_ms = self.navigation_delay.as_millis() as u64,
                    "feedback accepted"
                );
                notifier.notify(Notification::Submitted);
                Action::NavigateAfter(location, self.navigation_delay)
            }
            Err(e) => {
                tracing::error!(error = %e, "could not encode feedback");
                Action::None
            }
        }
    }

    /// Empties every field and error. Focus stays where it is.
    pub fn reset(&mut self, notifier: &mut dyn Notifier) {
        self.draft.clear();
        self.errors.clear();
        self.comments = TextArea::default();
        tracing::info!("feedback form reset");
        notifier.notify(Notification::Reset);
    }

    fn focus_next(&mut self) {
        self.focus = cycle(FOCUS_ORDER, self.focus, true);
    }

    fn focus_prev(&mut self) {
        self.focus = cycle(FOCUS_ORDER, self.focus, false);
    }

    /// Handles a key on a single-line text input.
    fn handle_text_key(
        &mut self,
        field: Field,
        key: KeyEvent,
        notifier: &mut dyn Notifier,
    ) -> Action {
        match key.code {
            KeyCode::Enter => self.submit(notifier),
            KeyCode::Backspace => {
                let mut value = self.draft.get(field).to_string();
                if value.pop().is_some() {
                    self.change(field, value);
                }
                Action::None
            }
            KeyCode::Char(ch) if !has_command_modifier(key) => {
                let mut value = self.draft.get(field).to_string();
                value.push(ch);
                self.change(field, value);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Handles a key on the gender select.
    fn handle_select_key(&mut self, key: KeyEvent, notifier: &mut dyn Notifier) -> Action {
        let current = self.draft.get(Field::Gender);
        let current = GENDER_CHOICES
            .iter()
            .copied()
            .find(|&c| c == current)
            .unwrap_or("");

        match key.code {
            KeyCode::Enter => self.submit(notifier),
            KeyCode::Right | KeyCode::Char(' ') => {
                self.change(Field::Gender, cycle(GENDER_CHOICES, current, true));
                Action::None
            }
            KeyCode::Left => {
                self.change(Field::Gender, cycle(GENDER_CHOICES, current, false));
                Action::None
            }
            KeyCode::Backspace | KeyCode::Delete => {
                self.change(Field::Gender, "");
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Forwards a key to the comments text area and mirrors its contents
    /// into the draft.
    fn handle_comments_key(&mut self, key: KeyEvent) -> Action {
        if self.comments.input(key) {
            let text = self.comments.lines().join("\n");
            self.change(Field::Comments, text);
        }
        Action::None
    }
}

impl ScreenState for FormState {
    fn handle_key(&mut self, key: KeyEvent, notifier: &mut dyn Notifier) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => return self.submit(notifier),
                KeyCode::Char('r') => {
                    self.reset(notifier);
                    return Action::None;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Esc => return Action::Quit,
            KeyCode::Tab => {
                self.focus_next();
                return Action::None;
            }
            KeyCode::BackTab => {
                self.focus_prev();
                return Action::None;
            }
            _ => {}
        }

        match self.focus {
            Focus::Input(Field::Comments) => self.handle_comments_key(key),
            Focus::Input(Field::Gender) => self.handle_select_key(key, notifier),
            Focus::Input(field) => self.handle_text_key(field, key, notifier),
            Focus::ResetButton => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.reset(notifier);
                    Action::None
                }
                _ => Action::None,
            },
            Focus::SubmitButton => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.submit(notifier),
                _ => Action::None,
            },
        }
    }
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Cycles through a slice to find the next or previous element.
fn cycle<T: PartialEq + Copy>(items: &[T], current: T, forward: bool) -> T {
    let pos = items.iter().position(|&x| x == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % items.len()
    } else {
        (pos + items.len() - 1) % items.len()
    };
    items[next]
}

/// Renders the feedback form screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_feedback_form(state: &FormState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Feedback Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [
        name_area,
        email_area,
        age_area,
        gender_area,
        comments_area,
        buttons_area,
        _spacer,
        footer_area,
    ] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(COMMENTS_HEIGHT),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    for (field, field_area) in [
        (Field::FullName, name_area),
        (Field::Email, email_area),
        (Field::Age, age_area),
    ] {
        let error = state.errors.message(field);
        draw_text_input(
            field.label(),
            state.draft.get(field),
            error.as_deref(),
            state.focus == Focus::Input(field),
            frame,
            field_area,
        );
    }

    let gender_error = state.errors.message(Field::Gender);
    draw_select(
        Field::Gender.label(),
        state.draft.get(Field::Gender),
        gender_error.as_deref(),
        state.focus == Focus::Input(Field::Gender),
        frame,
        gender_area,
    );

    let comments_focused = state.focus == Focus::Input(Field::Comments);
    let mut comments = state.comments.clone();
    comments.set_block(input_block(Field::Comments.label(), false, comments_focused));
    comments.set_cursor_line_style(Style::default());
    if !comments_focused {
        comments.set_cursor_style(Style::default());
    }
    frame.render_widget(&comments, comments_area);

    let [_, reset_area, _, submit_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(11),
        Constraint::Length(1),
        Constraint::Length(12),
    ])
    .areas(buttons_area);
    draw_button(
        "Reset",
        state.focus == Focus::ResetButton,
        Color::Gray,
        frame,
        reset_area,
    );
    draw_button(
        "Submit",
        state.focus == Focus::SubmitButton,
        Color::Cyan,
        frame,
        submit_area,
    );

    let footer =
        Paragraph::new(Line::from(FOOTER_HINTS)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
