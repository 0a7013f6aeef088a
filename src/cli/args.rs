//! CLI argument definitions.
//!
//! Sherpa is an interactive tool, so the surface is deliberately small:
//! credentials and the target repository, which can also arrive through
//! environment variables, and a couple of output toggles. Anything not
//! supplied here is prompted for at startup.

use clap::Parser;

/// Sherpa - README-driven development environment setup.
#[derive(Debug, Parser)]
#[command(name = "sherpa")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// GitHub personal access token (prompted if absent)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Repository to scan, as "owner/name" (prompted if absent)
    #[arg(long, env = "GITHUB_REPO")]
    pub repo: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_no_args() {
        let cli = Cli::try_parse_from(["sherpa"]).unwrap();
        assert!(cli.repo.is_none() || std::env::var("GITHUB_REPO").is_ok());
        assert!(!cli.debug);
    }

    #[test]
    fn parses_token_and_repo_flags() {
        let cli =
            Cli::try_parse_from(["sherpa", "--token", "tok", "--repo", "acme/mono"]).unwrap();
        assert_eq!(cli.token.as_deref(), Some("tok"));
        assert_eq!(cli.repo.as_deref(), Some("acme/mono"));
    }

    #[test]
    fn parses_output_toggles() {
        let cli = Cli::try_parse_from(["sherpa", "--no-color", "--debug"]).unwrap();
        assert!(cli.no_color);
        assert!(cli.debug);
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["sherpa", "--frobnicate"]).is_err());
    }
}
