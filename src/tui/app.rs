use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};

use crate::config::Config;
use crate::navigation::{Location, Navigator, Route, Router};
use crate::tui::action::{Action, ScreenState};
use crate::tui::screens::{FormState, ResultState, draw_feedback_form, draw_result};
use crate::tui::widgets::{StatusBarContext, ToastStack, draw_status_bar, draw_toasts};

use super::error::AppError;

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Fill in and submit feedback.
    Form,
    /// Review the submitted values.
    Result,
}

/// Where the app is in the edit, submit, view cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The form is shown and no navigation is pending.
    Editing,
    /// A valid submission is waiting out the navigation delay.
    Submitting,
    /// The result screen is shown.
    Viewing,
}

impl Phase {
    /// Human-readable label for the status bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Editing => "Editing",
            Self::Submitting => "Submitting",
            Self::Viewing => "Viewing",
        }
    }
}

/// The mounted screen and its state.
#[derive(Debug, Clone)]
enum ActiveScreen {
    Form(FormState),
    Result(ResultState),
}

/// A navigation waiting for its delay to elapse.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingNavigation {
    location: Location,
    due: Instant,
}

/// Top-level application state.
pub struct App {
    config: Config,
    navigator: Navigator,
    active: ActiveScreen,
    pending: Vec<PendingNavigation>,
    toasts: ToastStack,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` on the form screen.
    pub fn new(config: Config) -> Self {
        Self::with_location(config, Location::root())
    }

    /// Creates a new `App` that starts at `start`, mounting whatever screen
    /// it resolves to.
    pub fn with_location(config: Config, start: Location) -> Self {
        let mut app = Self {
            active: ActiveScreen::Form(FormState::new(config.navigation_delay())),
            navigator: Navigator::new(start),
            pending: Vec::new(),
            toasts: ToastStack::new(config.toast_lifetime()),
            should_quit: false,
            config,
        };
        app.mount_current();
        app
    }

    /// Main event loop: draw → poll for a key → dispatch → tick timers.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(self.config.tick_rate())?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }
            self.tick(Instant::now());
        }
        Ok(())
    }

    /// Renders the active screen, the status bar, and any toasts.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match &self.active {
            ActiveScreen::Form(state) => draw_feedback_form(state, frame, main_area),
            ActiveScreen::Result(state) => draw_result(state, frame, main_area),
        }

        let ctx = StatusBarContext {
            phase: self.phase(),
            location: self.navigator.current().to_string(),
        };
        draw_status_bar(&ctx, frame, status_area);
        draw_toasts(&self.toasts, frame, main_area);
    }

    /// Handles a key event: global keys first, then the active screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let action = match &mut self.active {
            ActiveScreen::Form(state) => state.handle_key(key, &mut self.toasts),
            ActiveScreen::Result(state) => state.handle_key(key, &mut self.toasts),
        };
        self.apply(action, Instant::now());
    }

    /// Fires navigations due by `now` and drops expired toasts.
    ///
    /// Due navigations fire in the order they were scheduled.
    pub fn tick(&mut self, now: Instant) {
        let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|p| p.due <= now);
        self.pending = waiting;

        for pending in due {
            self.navigator.push(pending.location);
            self.mount_current();
        }

        self.toasts.prune(now);
    }

    fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::None => {}
            Action::NavigateAfter(location, delay) => self.schedule(location, delay, now),
            Action::GoHome => self.navigator.home(),
            Action::Quit => self.should_quit = true,
        }
        self.mount_current();
    }

    fn schedule(&mut self, location: Location, delay: Duration, now: Instant) {
        tracing::debug!(%location, delay_ms = delay.as_millis() as u64, "navigation scheduled");
        self.pending.push(PendingNavigation {
            location,
            due: now + delay,
        });
    }

    /// Mounts the screen for the current location if it changed.
    ///
    /// Unknown paths fall back to the root.
    fn mount_current(&mut self) {
        while let Some(location) = self.navigator.take_mount() {
            match Route::resolve(&location) {
                Ok(Route::Form) => {
                    let delay = self.config.navigation_delay();
                    self.active = ActiveScreen::Form(FormState::new(delay));
                }
                Ok(Route::Result(submission)) => {
                    let mut state = ResultState::new(submission);
                    state.mount(&mut self.toasts);
                    self.active = ActiveScreen::Result(state);
                }
                Err(e) => {
                    tracing::warn!(%location, error = %e, "falling back to the form");
                    self.navigator.home();
                }
            }
        }
    }

    /// Returns the mounted screen.
    pub fn screen(&self) -> Screen {
        match self.active {
            ActiveScreen::Form(_) => Screen::Form,
            ActiveScreen::Result(_) => Screen::Result,
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        if !self.pending.is_empty() {
            return Phase::Submitting;
        }
        match self.active {
            ActiveScreen::Form(_) => Phase::Editing,
            ActiveScreen::Result(_) => Phase::Viewing,
        }
    }

    /// Returns the current location.
    pub fn location(&self) -> &Location {
        self.navigator.current()
    }

    /// Returns the form state if the form is mounted.
    pub fn form(&self) -> Option<&FormState> {
        match &self.active {
            ActiveScreen::Form(state) => Some(state),
            ActiveScreen::Result(_) => None,
        }
    }

    /// Returns the result state if the result screen is mounted.
    pub fn result(&self) -> Option<&ResultState> {
        match &self.active {
            ActiveScreen::Result(state) => Some(state),
            ActiveScreen::Form(_) => None,
        }
    }

    /// Returns the visible toasts.
    pub fn toasts(&self) -> &ToastStack {
        &self.toasts
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
