//! Actions returned by screen event handlers.

use std::time::Duration;

use crossterm::event::KeyEvent;

use crate::navigation::Location;
use crate::notify::Notifier;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to schedule navigation or quit.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given location once the delay has elapsed.
    NavigateAfter(Location, Duration),
    /// Navigate to the root location.
    GoHome,
    /// Quit the application.
    Quit,
}

/// Common behavior for all screen state types.
pub trait ScreenState {
    /// Process a key event and return an [`Action`] for the `App` to apply.
    ///
    /// Notifications raised while handling the key go to `notifier`.
    fn handle_key(&mut self, key: KeyEvent, notifier: &mut dyn Notifier) -> Action;
}
