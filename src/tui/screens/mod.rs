//! TUI screen implementations.

pub mod feedback;
pub mod result;

pub use feedback::{Focus, FormState, draw_feedback_form};
pub use result::{ResultState, draw_result};
