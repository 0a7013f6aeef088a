//! Tool installation.
//!
//! Each `ensure_installed` call walks a small state machine: resolve the
//! tool's dependency chain depth-first, check whether the tool is already
//! present, run its install script if not, then re-verify. Running the
//! install script is not itself proof of success; only a passing
//! post-install verification is.
//!
//! There is no retry and no rollback. Install scripts are assumed
//! idempotent enough for the operator to safely re-run later.

use crate::error::{Result, SherpaError};
use crate::shell::CommandRunner;
use crate::tools::ToolRegistry;
use std::collections::HashSet;

/// Outcome of an installation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Verification passed before any install ran.
    AlreadyInstalled,
    /// Install script ran and post-install verification passed.
    Installed,
    /// Something went wrong; the reason is operator-readable.
    Failed { reason: String },
}

impl InstallOutcome {
    /// Whether the tool is usable after this outcome.
    pub fn success(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }
}

/// Installs tools from the registry via a command runner.
pub struct ToolInstaller<'a> {
    registry: &'a ToolRegistry,
    runner: &'a dyn CommandRunner,
}

impl<'a> ToolInstaller<'a> {
    pub fn new(registry: &'a ToolRegistry, runner: &'a dyn CommandRunner) -> Self {
        Self { registry, runner }
    }

    /// Check whether a tool's verification command passes.
    ///
    /// Errors only for an unknown tool name; a failing verification is a
    /// normal `false`, not an error.
    pub fn is_installed(&self, name: &str) -> Result<bool> {
        let spec = self.registry.lookup(name)?;
        Ok(self.runner.check(&spec.verify))
    }

    /// Ensure a tool and its dependency chain are installed.
    ///
    /// A failure anywhere in the dependency chain aborts the whole call:
    /// the top-level tool's install script is never attempted on top of a
    /// broken dependency.
    pub fn ensure_installed(&self, name: &str) -> Result<InstallOutcome> {
        let mut in_progress = HashSet::new();
        self.ensure_inner(name, &mut in_progress)
    }

    fn ensure_inner(
        &self,
        name: &str,
        in_progress: &mut HashSet<String>,
    ) -> Result<InstallOutcome> {
        let spec = self.registry.lookup(name)?;

        // The builtin table is acyclic; this guards hand-edited tables.
        if !in_progress.insert(name.to_string()) {
            return Ok(InstallOutcome::Failed {
                reason: format!("dependency cycle involving '{}'", name),
            });
        }

        // RESOLVE_DEPENDENCIES: depth-first, before the tool itself.
        for dep in &spec.depends_on {
            tracing::debug!(tool = name, dependency = %dep, "resolving dependency");
            let outcome = self.ensure_inner(dep, in_progress)?;
            if !outcome.success() {
                in_progress.remove(name);
                return Ok(InstallOutcome::Failed {
                    reason: format!("dependency '{}' could not be installed", dep),
                });
            }
        }

        // CHECK_INSTALLED: a passing verification short-circuits.
        if self.runner.check(&spec.verify) {
            tracing::debug!(tool = name, "already installed");
            in_progress.remove(name);
            return Ok(InstallOutcome::AlreadyInstalled);
        }

        // RUN_INSTALL: an empty script means the tool arrives with a
        // dependency (npm ships with node), so go straight to verification.
        if !spec.install.trim().is_empty() {
            tracing::info!(tool = name, "running install script");
            match self.runner.run(&spec.install) {
                Ok(result) if !result.success => {
                    in_progress.remove(name);
                    return Ok(InstallOutcome::Failed {
                        reason: install_failure_reason(name, result.exit_code, &result.stderr),
                    });
                }
                Ok(_) => {}
                Err(SherpaError::CommandFailed { command, .. }) => {
                    in_progress.remove(name);
                    return Ok(InstallOutcome::Failed {
                        reason: format!("could not spawn install command: {}", command),
                    });
                }
                Err(e) => {
                    in_progress.remove(name);
                    return Err(e);
                }
            }
        }

        // VERIFY: re-run the verification command.
        in_progress.remove(name);
        if self.runner.check(&spec.verify) {
            Ok(InstallOutcome::Installed)
        } else {
            Ok(InstallOutcome::Failed {
                reason: format!(
                    "install script completed but '{}' still fails",
                    spec.verify
                ),
            })
        }
    }
}

fn install_failure_reason(name: &str, exit_code: Option<i32>, stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        format!("install of '{}' exited with code {:?}", name, exit_code)
    } else {
        format!(
            "install of '{}' exited with code {:?}: {}",
            name, exit_code, stderr
        )
    }
}
