//! Interactive prompts.
//!
//! Thin wrappers over dialoguer so the session code reads as intent
//! ("select a project") rather than prompt plumbing.

use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password, Select};

use crate::error::{Result, SherpaError};

/// Convert dialoguer errors to SherpaError.
fn map_dialoguer_err(e: dialoguer::Error) -> SherpaError {
    SherpaError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Select one item from a list; returns the chosen index.
pub fn select(question: &str, items: &[&str]) -> Result<usize> {
    Select::with_theme(&prompt_theme())
        .with_prompt(question)
        .items(items)
        .default(0)
        .interact()
        .map_err(map_dialoguer_err)
}

/// Yes/no confirmation.
pub fn confirm(question: &str, default: bool) -> Result<bool> {
    Confirm::with_theme(&prompt_theme())
        .with_prompt(question)
        .default(default)
        .interact()
        .map_err(map_dialoguer_err)
}

/// Free-form text input.
pub fn input(question: &str) -> Result<String> {
    Input::<String>::with_theme(&prompt_theme())
        .with_prompt(question)
        .interact_text()
        .map_err(map_dialoguer_err)
}

/// Hidden text input for credentials.
pub fn password(question: &str) -> Result<String> {
    Password::with_theme(&prompt_theme())
        .with_prompt(question)
        .interact()
        .map_err(map_dialoguer_err)
}
