//! Reusable TUI widgets.

pub mod form;
pub mod status_bar;
pub mod toast;

pub use form::{SELECT_PLACEHOLDER, draw_button, draw_select, draw_text_input, input_block};
pub use status_bar::{StatusBarContext, draw_status_bar};
pub use toast::{Toast, ToastStack, draw_toasts};
