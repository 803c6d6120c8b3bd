//! CLI argument parsing with clap

use clap::{ArgAction, Parser};
use std::ffi::OsStr;

const AFTER_HELP: &str = "\
Examples:
  create-verb my-app
  create-verb fullstack-project
  bunx create-verb my-new-app
  npm create verb my-app

What you get:
  • Verb framework with Bun's native routing
  • React frontend with TypeScript
  • REST API with CRUD examples
  • Hot module reloading
  • Zero configuration setup";

/// Create a new Verb fullstack application with one command.
#[derive(Parser, Debug)]
#[command(name = "create-verb")]
#[command(about, long_about = None, after_help = AFTER_HELP)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Name of the project directory to create
    #[arg(value_name = "project-name", allow_hyphen_values = true)]
    pub name: Option<String>,

    /// Additional arguments are ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,

    /// Show version number
    #[arg(short = 'v', long = "version", action = ArgAction::SetTrue)]
    pub version: bool,

    /// Increase log verbosity (--verbose, --verbose --verbose)
    #[arg(long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Boilerplate repository to clone
    #[arg(long, env = "CREATE_VERB_REPO", hide = true)]
    pub repo: Option<String>,

    /// Package manager used to install dependencies
    #[arg(long, env = "CREATE_VERB_PACKAGE_MANAGER", hide = true)]
    pub package_manager: Option<String>,
}

/// Flags that short-circuit everything else on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EarlyExit {
    Help,
    Version,
}

/// Look for help or version flags anywhere in `args`.
///
/// Help wins over version, and both win over any other argument, valid or not.
/// Arguments that are not valid UTF-8 are skipped and left for clap to report.
pub fn early_exit<I, S>(args: I) -> Option<EarlyExit>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut found = None;
    for arg in args {
        match arg.as_ref().to_str() {
            Some("-h" | "--help") => return Some(EarlyExit::Help),
            Some("-v" | "--version") => found = Some(EarlyExit::Version),
            _ => {}
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_early_exit() {
        assert_eq!(early_exit(["--help"]), Some(EarlyExit::Help));
        assert_eq!(early_exit(["my-app", "-h"]), Some(EarlyExit::Help));
        assert_eq!(early_exit(["-v", "--bogus", "-h"]), Some(EarlyExit::Help));
        assert_eq!(early_exit(["--version"]), Some(EarlyExit::Version));
        assert_eq!(early_exit(["my-app", "-v"]), Some(EarlyExit::Version));
        assert_eq!(early_exit(["my-app"]), None);
        assert_eq!(early_exit(Vec::<String>::new()), None);
    }

    #[test]
    fn test_parse_name() {
        let cli = Cli::try_parse_from(["create-verb", "my-app"]).unwrap();
        assert_eq!(cli.name.as_deref(), Some("my-app"));
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_hyphenated_name_as_value() {
        let cli = Cli::try_parse_from(["create-verb", "-app"]).unwrap();
        assert_eq!(cli.name.as_deref(), Some("-app"));
    }

    #[test]
    fn test_parse_extra_args_ignored() {
        let cli = Cli::try_parse_from(["create-verb", "--verbose", "my-app", "extra"]).unwrap();
        assert_eq!(cli.name.as_deref(), Some("my-app"));
        assert_eq!(cli.rest, vec!["extra".to_string()]);
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_parse_trailing_flags_ignored() {
        let cli = Cli::try_parse_from(["create-verb", "my-app", "-x", "--bogus"]).unwrap();
        assert_eq!(cli.name.as_deref(), Some("my-app"));
        assert_eq!(cli.rest, vec!["-x".to_string(), "--bogus".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_early_exit_skips_non_utf8() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let bad = OsString::from_vec(b"my\xffapp".to_vec());
        assert_eq!(early_exit([bad.clone()]), None);
        assert_eq!(
            early_exit([bad, OsString::from("--version")]),
            Some(EarlyExit::Version)
        );
    }

    #[test]
    fn test_parse_no_name() {
        let cli = Cli::try_parse_from(["create-verb"]).unwrap();
        assert!(cli.name.is_none());
    }
}
