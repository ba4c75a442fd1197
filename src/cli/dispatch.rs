//! Command dispatch for play-cli
//!
//! Every outcome is mapped to a process exit code here. Usage problems
//! (missing or unknown subcommand) print a message and fail; I/O problems
//! print the OS diagnostic and fail. Nothing is retried.

use crate::cli::args::{Cli, Command};
use crate::copy::{CopyReport, copy_file};
use crate::error::PlaygroundError;
use crate::layout::PlaygroundLayout;
use crate::logging;
use crate::output::HumanFormatter;
use clap::Parser;
use std::ffi::OsString;
use std::io::{self, IsTerminal};
use std::path::Path;
use tracing::debug;

/// Exit codes for play-cli
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;

/// Printed on stderr when no subcommand is given
pub const USAGE: &str = "usage: play-cli <hello|io>";

/// Parse `args` (including the program name) and run the command
///
/// Argument errors are printed by clap and exit with [`EXIT_ERROR`];
/// `--help` and `--version` print to stdout and exit with [`EXIT_SUCCESS`].
pub fn run_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => run(cli),
        Err(e) => {
            let code = if e.use_stderr() {
                EXIT_ERROR
            } else {
                EXIT_SUCCESS
            };
            let _ = e.print();
            code
        }
    }
}

/// Run a parsed command line
///
/// # Returns
///
/// Exit code:
/// - 0: the command succeeded
/// - 1: usage error or I/O failure
pub fn run(cli: Cli) -> i32 {
    logging::init(cli.verbose);

    let layout = cli.root.map(PlaygroundLayout::new).unwrap_or_default();
    let formatter = HumanFormatter::new(cli.color.resolve(io::stdout().is_terminal()));

    let Some(command) = cli.command else {
        eprintln!("{}", USAGE);
        return EXIT_ERROR;
    };

    match run_command(&command, &layout, &formatter) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e);
            EXIT_ERROR
        }
    }
}

fn run_command(
    command: &Command,
    layout: &PlaygroundLayout,
    formatter: &HumanFormatter,
) -> Result<i32, PlaygroundError> {
    match command {
        Command::Hello => {
            formatter.greet_to_stdout()?;
            Ok(EXIT_SUCCESS)
        }
        Command::Io { input, output } => {
            let report = run_io(layout, input.as_deref(), output.as_deref())?;
            formatter.copy_to_stdout(&report)?;
            Ok(EXIT_SUCCESS)
        }
        Command::Paths => {
            formatter.paths_to_stdout(layout)?;
            Ok(EXIT_SUCCESS)
        }
        Command::Unknown(args) => {
            eprintln!("unknown command: {}", unknown_token(args));
            Ok(EXIT_ERROR)
        }
    }
}

/// Copy `input` to `output`, defaulting both to the layout's files
pub fn run_io(
    layout: &PlaygroundLayout,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<CopyReport, PlaygroundError> {
    let from = input
        .map(Path::to_path_buf)
        .unwrap_or_else(|| layout.default_input());
    let to = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| layout.default_output());

    debug!(root = %layout.root().display(), from = %from.display(), to = %to.display(), "resolved io paths");

    copy_file(&from, &to)
}

/// The offending subcommand token, lossily decoded
fn unknown_token(args: &[OsString]) -> String {
    args.first()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Helper to create a playground with data/vectors and data/results
    fn create_playground(content: Option<&[u8]>) -> (TempDir, PlaygroundLayout) {
        let temp_dir = TempDir::new().unwrap();
        let layout = PlaygroundLayout::new(temp_dir.path());
        fs::create_dir_all(layout.vectors_dir()).unwrap();
        fs::create_dir_all(layout.results_dir()).unwrap();
        if let Some(content) = content {
            fs::write(layout.default_input(), content).unwrap();
        }
        (temp_dir, layout)
    }

    #[test]
    fn test_run_io_default_paths() {
        let (_temp_dir, layout) = create_playground(Some(b"vector data\n"));

        let report = run_io(&layout, None, None).unwrap();

        assert_eq!(report.from, layout.default_input());
        assert_eq!(report.to, layout.default_output());
        assert_eq!(report.bytes, 12);
        assert_eq!(
            fs::read(layout.default_output()).unwrap(),
            b"vector data\n"
        );
    }

    #[test]
    fn test_run_io_overrides() {
        let (temp_dir, layout) = create_playground(None);
        let input = temp_dir.path().join("custom-in.txt");
        let output = temp_dir.path().join("custom-out.txt");
        fs::write(&input, "custom").unwrap();

        let report = run_io(&layout, Some(&input), Some(&output)).unwrap();

        assert_eq!(report.from, input);
        assert_eq!(report.to, output);
        assert_eq!(fs::read_to_string(&output).unwrap(), "custom");
        assert!(!layout.default_output().exists());
    }

    #[test]
    fn test_run_io_missing_source() {
        let (_temp_dir, layout) = create_playground(None);

        let err = run_io(&layout, None, None).unwrap_err();

        assert!(matches!(err, PlaygroundError::OpenInput { .. }));
        assert!(!layout.default_output().exists());
    }

    #[test]
    fn test_run_io_missing_results_dir() {
        let temp_dir = TempDir::new().unwrap();
        let layout = PlaygroundLayout::new(temp_dir.path());
        fs::create_dir_all(layout.vectors_dir()).unwrap();
        fs::write(layout.default_input(), "data").unwrap();

        let err = run_io(&layout, None, None).unwrap_err();

        assert!(matches!(err, PlaygroundError::OpenOutput { .. }));
    }

    #[test]
    fn test_run_without_command_fails() {
        let cli = Cli::try_parse_from(["play-cli"]).unwrap();
        assert_eq!(run(cli), EXIT_ERROR);
    }

    #[test]
    fn test_run_unknown_command_fails() {
        let cli = Cli::try_parse_from(["play-cli", "foo"]).unwrap();
        assert_eq!(run(cli), EXIT_ERROR);
    }

    #[test]
    fn test_run_io_command_exit_codes() {
        let (temp_dir, _layout) = create_playground(Some(b"abc"));
        let root = temp_dir.path().to_string_lossy().to_string();

        let cli = Cli::try_parse_from(["play-cli", "--root", &root, "--color", "never", "io"])
            .unwrap();
        assert_eq!(run(cli), EXIT_SUCCESS);

        let empty = TempDir::new().unwrap();
        let empty_root = empty.path().to_string_lossy().to_string();
        let cli = Cli::try_parse_from(["play-cli", "--root", &empty_root, "io"]).unwrap();
        assert_eq!(run(cli), EXIT_ERROR);
    }

    #[test]
    fn test_run_from_args_bad_flag_fails() {
        assert_eq!(run_from_args(["play-cli", "io", "--bogus"]), EXIT_ERROR);
    }

    #[test]
    fn test_run_from_args_help_succeeds() {
        assert_eq!(run_from_args(["play-cli", "--help"]), EXIT_SUCCESS);
    }

    #[test]
    fn test_run_from_args_help_token_fails() {
        assert_eq!(run_from_args(["play-cli", "help"]), EXIT_ERROR);
    }

    #[test]
    fn test_unknown_token() {
        let args = vec![OsString::from("foo"), OsString::from("bar")];
        assert_eq!(unknown_token(&args), "foo");
        assert_eq!(unknown_token(&[]), "");
    }
}
