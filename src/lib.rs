//! Sherpa - README-driven development environment setup.
//!
//! Sherpa scans a GitHub repository for sub-projects (directories with a
//! `README.md`), interprets each README into a structured setup guide,
//! detects the development tools it mentions, and can install those tools
//! on the local machine.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`discovery`] - Finding projects in the remote repository
//! - [`error`] - Error types and result aliases
//! - [`github`] - Blocking GitHub REST client
//! - [`readme`] - Markdown parsing and setup-section extraction
//! - [`session`] - Interactive menu loop
//! - [`shell`] - Shell command execution
//! - [`tools`] - Tool registry, detection, and installation
//! - [`ui`] - Prompts, spinners, and terminal styling
//!
//! # Example
//!
//! ```
//! use sherpa::readme;
//!
//! let info = readme::extract("## Setup\n\n- run `docker-compose up`\n");
//! assert_eq!(info.environment_setup, vec!["run docker-compose up"]);
//! assert!(info.detected_tools.contains("docker"));
//! ```

pub mod cli;
pub mod discovery;
pub mod error;
pub mod github;
pub mod readme;
pub mod session;
pub mod shell;
pub mod tools;
pub mod ui;

pub use error::{Result, SherpaError};
