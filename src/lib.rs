#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! A terminal feedback form.
//!
//! The form screen validates a five-field draft, then hands the values to a
//! result screen through a URL-style location (`/success?fullName=...`).
//! Nothing is persisted; the query string is the only state that crosses
//! between screens.

pub mod config;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod notify;
pub mod tui;
