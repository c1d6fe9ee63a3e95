//! Transient user notifications.
//!
//! Screens report through a [`Notifier`] passed into their handlers, so the
//! form logic can be exercised without any toast display behind it.

use std::fmt;

/// Severity of a notification, used for colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

/// Every notification the app can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// Submit was attempted with failing fields.
    FixErrors,
    /// Submit passed validation; navigation is pending.
    Submitted,
    /// The form was cleared.
    Reset,
    /// The result screen was mounted.
    SubmittedSuccessfully,
}

impl Notification {
    /// Returns the severity of this notification.
    pub fn level(self) -> ToastLevel {
        match self {
            Notification::FixErrors => ToastLevel::Error,
            Notification::Submitted | Notification::SubmittedSuccessfully => ToastLevel::Success,
            Notification::Reset => ToastLevel::Info,
        }
    }

    /// Returns the text shown to the user.
    pub fn message(self) -> &'static str {
        match self {
            Notification::FixErrors => "Please fix the errors.",
            Notification::Submitted => "Form submitted!",
            Notification::Reset => "Form reset.",
            Notification::SubmittedSuccessfully => "Form submitted successfully!",
        }
    }
}

#[mutants::skip]
impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Fire-and-forget sink for notifications.
pub trait Notifier {
    /// Raises `notification`.
    fn notify(&mut self, notification: Notification);
}

#[cfg(test)]
impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}
