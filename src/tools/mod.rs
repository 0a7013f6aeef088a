//! Tool knowledge: the registry, the detector, and the installer.
//!
//! - [`registry`] - static table of known tools and how to install them
//! - [`detector`] - regex scan mapping free text to tool identifiers
//! - [`installer`] - dependency-aware install/verify state machine

pub mod detector;
pub mod installer;
pub mod registry;

pub use detector::detect;
pub use installer::{InstallOutcome, ToolInstaller};
pub use registry::{ToolRegistry, ToolSpec};
