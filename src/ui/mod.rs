//! Terminal output and interactive prompts.
//!
//! - [`theme`] - console styles and message formatting
//! - [`prompts`] - dialoguer wrappers for select/confirm/input
//! - [`spinner`] - indicatif spinners for remote calls and installs

pub mod prompts;
pub mod spinner;
pub mod theme;

pub use prompts::{confirm, input, password, select};
pub use spinner::ProgressSpinner;
pub use theme::{should_use_colors, SherpaTheme};
