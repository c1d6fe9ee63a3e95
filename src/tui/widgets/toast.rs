//! Toast stack: short-lived notifications drawn in the top-right corner.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::notify::{Notification, Notifier, ToastLevel};

/// Width of a rendered toast, including borders.
const TOAST_WIDTH: u16 = 36;
/// Height of a rendered toast, including borders.
const TOAST_HEIGHT: u16 = 3;

/// A visible notification and the moment it disappears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub notification: Notification,
    pub expires_at: Instant,
}

/// Toasts currently on screen, oldest first.
///
/// Several toasts may be visible at once; each expires on its own.
#[derive(Debug, Clone)]
pub struct ToastStack {
    toasts: VecDeque<Toast>,
    lifetime: Duration,
}

impl ToastStack {
    /// Creates an empty stack whose toasts live for `lifetime`.
    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            lifetime,
        }
    }

    /// Shows `notification`, created at `now`.
    pub fn push_at(&mut self, notification: Notification, now: Instant) {
        self.toasts.push_back(Toast {
            notification,
            expires_at: now + self.lifetime,
        });
    }

    /// Removes toasts that have expired by `now`. Returns `true` if any were
    /// removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.expires_at > now);
        self.toasts.len() != before
    }

    /// Returns the visible toasts, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Returns the visible notifications, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.toasts.iter().map(|t| t.notification).collect()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notifier for ToastStack {
    fn notify(&mut self, notification: Notification) {
        tracing::debug!(%notification, "toast");
        self.push_at(notification, Instant::now());
    }
}

fn level_color(level: ToastLevel) -> Color {
    match level {
        ToastLevel::Info => Color::Blue,
        ToastLevel::Success => Color::Green,
        ToastLevel::Error => Color::Red,
    }
}

/// Renders visible toasts stacked down from the top-right corner of `area`,
/// newest on top. Toasts that do not fit are skipped.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_toasts(stack: &ToastStack, frame: &mut Frame, area: Rect) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width - width;
    let mut y = area.y;

    for toast in stack.iter().rev() {
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let rect = Rect {
            x,
            y,
            width,
            height: TOAST_HEIGHT,
        };
        let color = level_color(toast.notification.level());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let paragraph = Paragraph::new(Line::from(toast.notification.message()))
            .style(Style::default().fg(color))
            .block(block);

        frame.render_widget(Clear, rect);
        frame.render_widget(paragraph, rect);
        y += TOAST_HEIGHT;
    }
}
