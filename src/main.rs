//! Sherpa CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use sherpa::cli::Cli;
use sherpa::github::GithubClient;
use sherpa::session::Session;
use sherpa::shell::ShellRunner;
use sherpa::tools::ToolRegistry;
use sherpa::ui::{self, ProgressSpinner, SherpaTheme};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("sherpa=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sherpa=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

/// Credentials for one connection attempt.
struct Credentials {
    token: String,
    repo: String,
}

/// Resolve credentials from flags/env, prompting for whatever is missing.
fn resolve_credentials(token: Option<String>, repo: Option<String>) -> sherpa::Result<Credentials> {
    let token = match token {
        Some(t) => t,
        None => ui::password("Enter your GitHub Personal Access Token")?,
    };
    let repo = match repo {
        Some(r) => r,
        None => ui::input("Enter the repository name (e.g. 'organization/repo')")?,
    };
    Ok(Credentials { token, repo })
}

/// Prompt for a fresh set of credentials, ignoring flags and environment.
fn prompt_credentials() -> sherpa::Result<Credentials> {
    resolve_credentials(None, None)
}

fn connect(creds: &Credentials) -> sherpa::Result<GithubClient> {
    let spinner = ProgressSpinner::new(&format!("Connecting to GitHub repository: {}", creds.repo));
    let client = GithubClient::new(creds.token.clone(), creds.repo.clone())?;
    match client.connect() {
        Ok(()) => {
            spinner.finish_success(&format!("Connected to {}", creds.repo));
            Ok(client)
        }
        Err(e) => {
            spinner.finish_error("Connection failed");
            Err(e)
        }
    }
}

fn print_connection_diagnosis(theme: &SherpaTheme, error: &sherpa::SherpaError) {
    eprintln!("{}", theme.format_error(&format!("Error connecting to GitHub: {}", error)));
    eprintln!("\nPossible causes:");
    eprintln!("1. The GitHub token doesn't have sufficient permissions");
    eprintln!("2. The repository name format is incorrect (should be 'owner/repo')");
    eprintln!("3. The repository doesn't exist or you don't have access to it");
}

fn run() -> sherpa::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Sherpa starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let theme = if ui::should_use_colors() {
        SherpaTheme::new()
    } else {
        SherpaTheme::plain()
    };

    let creds = resolve_credentials(cli.token, cli.repo)?;

    // One retry with fresh credentials, then give up.
    let client = match connect(&creds) {
        Ok(client) => client,
        Err(e) => {
            print_connection_diagnosis(&theme, &e);
            if !ui::confirm("Would you like to try again with different credentials?", false)? {
                eprintln!("Exiting. Please check your credentials and try again.");
                return Ok(ExitCode::from(1));
            }
            let retry_creds = prompt_credentials()?;
            match connect(&retry_creds) {
                Ok(client) => client,
                Err(e) => {
                    eprintln!(
                        "{}",
                        theme.format_error(&format!("Still encountering errors: {}", e))
                    );
                    eprintln!("Please check your credentials and try again later.");
                    return Ok(ExitCode::from(1));
                }
            }
        }
    };

    let registry = ToolRegistry::new();
    let runner = ShellRunner;
    let mut session = Session::new(&client, &registry, &runner, theme);
    session.run()?;

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
