//! Shell command execution.
//!
//! Install and verification commands are passed verbatim to the host shell.
//! Every invocation blocks until the command completes; there is no timeout
//! or cancellation anywhere in the tool.

mod command;

pub use command::{execute, execute_check, CommandResult, CommandRunner, ShellRunner};
