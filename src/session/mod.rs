//! Interactive session.
//!
//! The menu loop that ties everything together: discover projects, set up
//! a project's environment (detect tools, install them, render the setup
//! guide), install individual tools, and summarize tool usage across the
//! repository.
//!
//! Failures inside an action are printed and the loop continues; only the
//! operator choosing Exit (or a broken terminal) ends the session.

pub mod stats;

use crate::discovery::{self, Project};
use crate::error::{Result, SherpaError};
use crate::github::GithubClient;
use crate::readme::{self, SetupInfo};
use crate::shell::CommandRunner;
use crate::tools::{InstallOutcome, ToolInstaller, ToolRegistry};
use crate::ui::{self, ProgressSpinner, SherpaTheme};

const MENU: &[&str] = &[
    "Set up environment for a specific project",
    "Install a specific tool",
    "List available projects",
    "List recommended tools",
    "Exit",
];

/// One interactive session against a connected repository.
pub struct Session<'a> {
    client: &'a GithubClient,
    registry: &'a ToolRegistry,
    runner: &'a dyn CommandRunner,
    theme: SherpaTheme,
    projects: Vec<Project>,
}

impl<'a> Session<'a> {
    pub fn new(
        client: &'a GithubClient,
        registry: &'a ToolRegistry,
        runner: &'a dyn CommandRunner,
        theme: SherpaTheme,
    ) -> Self {
        Self {
            client,
            registry,
            runner,
            theme,
            projects: Vec::new(),
        }
    }

    /// Run the menu loop until the operator exits.
    pub fn run(&mut self) -> Result<()> {
        println!("Welcome to Sherpa, your README-driven environment setup assistant.");

        let spinner = ProgressSpinner::new(&format!(
            "Discovering projects in {}...",
            self.client.repo()
        ));
        match discovery::discover(self.client) {
            Ok(projects) => {
                spinner.finish_success(&format!(
                    "Found {} projects with README.md files.",
                    projects.len()
                ));
                self.projects = projects;
            }
            Err(e) => {
                spinner.finish_error("Discovery failed");
                return Err(e);
            }
        }

        loop {
            println!();
            let choice = ui::select("What would you like to do?", MENU)?;
            match choice {
                0 => self.setup_project()?,
                1 => self.install_single_tool()?,
                2 => self.list_projects(),
                3 => self.list_recommended_tools(),
                _ => {
                    println!("Thanks for using Sherpa. Goodbye!");
                    return Ok(());
                }
            }
        }
    }

    /// Set up the environment for one project: install its detected tools,
    /// then print the extracted setup guide.
    fn setup_project(&self) -> Result<()> {
        let Some(project) = self.select_project()? else {
            return Ok(());
        };

        let info = readme::extract(&project.readme);
        let installer = ToolInstaller::new(self.registry, self.runner);

        for tool in &info.detected_tools {
            match installer.is_installed(tool) {
                Ok(true) => continue,
                Ok(false) => {}
                Err(e) => {
                    // detected_tools should be a subset of the registry;
                    // report and carry on if that ever breaks
                    println!("{}", self.theme.format_warning(&e.to_string()));
                    continue;
                }
            }

            let spinner = ProgressSpinner::new(&format!("Installing {}...", tool));
            match installer.ensure_installed(tool) {
                Ok(InstallOutcome::Failed { reason }) => {
                    spinner.finish_error(&format!("Failed to install {}: {}", tool, reason));
                }
                Ok(_) => {
                    spinner.finish_success(&format!("Installed {}", tool));
                }
                Err(e) => {
                    spinner.finish_error(&format!("Failed to install {}: {}", tool, e));
                }
            }
        }

        println!("{}", render_guide(&project.name, &info, &self.theme));
        Ok(())
    }

    /// Install one tool chosen from the registry.
    fn install_single_tool(&self) -> Result<()> {
        let names = self.registry.known_names();
        let choice = ui::select("Select a tool to install:", &names)?;
        let tool = names[choice];

        let installer = ToolInstaller::new(self.registry, self.runner);
        if installer.is_installed(tool)? {
            println!("{}", self.theme.format_success(&format!("{} is already installed", tool)));
            return Ok(());
        }

        let spinner = ProgressSpinner::new(&format!("Installing {}...", tool));
        match installer.ensure_installed(tool) {
            Ok(InstallOutcome::Failed { reason }) => {
                spinner.finish_error(&format!("Failed to install {}: {}", tool, reason));
            }
            Ok(_) => {
                spinner.finish_success(&format!("Successfully installed {}", tool));
            }
            Err(SherpaError::UnknownTool { name }) => {
                spinner.finish_error(&format!("Unknown tool: {}", name));
            }
            Err(e) => {
                spinner.finish_error(&format!("Failed to install {}: {}", tool, e));
            }
        }
        Ok(())
    }

    fn list_projects(&self) {
        if self.projects.is_empty() {
            println!("No projects with a README.md were found.");
            return;
        }
        println!("\nAvailable projects:");
        for (i, project) in self.projects.iter().enumerate() {
            println!("{}. {}", i + 1, project.name);
        }
    }

    /// Aggregate detected tools across every project and annotate each
    /// with its installed status.
    fn list_recommended_tools(&self) {
        if self.projects.is_empty() {
            println!("No projects with a README.md were found.");
            return;
        }

        let infos: Vec<SetupInfo> = self
            .projects
            .iter()
            .map(|p| readme::extract(&p.readme))
            .collect();
        let usage = stats::aggregate_usage(&infos, self.projects.len());

        let installer = ToolInstaller::new(self.registry, self.runner);

        println!("\nRecommended tools based on project requirements:");
        for entry in usage {
            println!(
                "- {}: used in {}/{} projects ({:.1}%)",
                entry.tool,
                entry.count,
                self.projects.len(),
                entry.percent
            );
            match installer.is_installed(&entry.tool) {
                Ok(true) => println!("  {}", self.theme.format_success("Already installed")),
                Ok(false) => println!(
                    "  {}",
                    self.theme
                        .format_error("Not installed. Use 'Install a specific tool' to install it.")
                ),
                Err(e) => println!("  {}", self.theme.format_warning(&e.to_string())),
            }
        }
    }

    fn select_project(&self) -> Result<Option<&Project>> {
        if self.projects.is_empty() {
            println!("No projects with a README.md were found.");
            return Ok(None);
        }
        let names: Vec<&str> = self.projects.iter().map(|p| p.name.as_str()).collect();
        let choice = ui::select("Select a project to set up:", &names)?;
        Ok(Some(&self.projects[choice]))
    }
}

/// Render a project's setup guide as printable text.
///
/// Prerequisites, environment setup, and running instructions always get a
/// header; database and IDE sections appear only when they have content.
pub fn render_guide(project_name: &str, info: &SetupInfo, theme: &SherpaTheme) -> String {
    let mut out = String::new();
    let rule = "=".repeat(50);

    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&theme.format_header(&format!("Setup Guide for {}", project_name)));
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    push_section(&mut out, theme, "Prerequisites", &info.prerequisites, true);
    push_section(
        &mut out,
        theme,
        "Environment Setup",
        &info.environment_setup,
        true,
    );
    push_section(&mut out, theme, "Database Setup", &info.database_setup, false);
    push_section(
        &mut out,
        theme,
        "Running Instructions",
        &info.running_instructions,
        true,
    );
    push_section(&mut out, theme, "IDE Setup", &info.ide_setup, false);

    out
}

fn push_section(
    out: &mut String,
    theme: &SherpaTheme,
    title: &str,
    entries: &[String],
    always: bool,
) {
    if entries.is_empty() && !always {
        return;
    }
    out.push('\n');
    out.push_str(&theme.format_header(&format!("{}:", title)));
    out.push('\n');
    for entry in entries {
        out.push_str("- ");
        out.push_str(entry);
        out.push('\n');
    }
}
