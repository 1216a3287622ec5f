//! CLI module for the typekey registry inspector
//!
//! Binding authors use it to look up the names, hashes and compatibility rules the binding layer applies,
//! without writing a test program.
//!
//! ## Commands
//!
//! - `names [--json]` - List the primitive, wrapper and engine-type vocabularies
//! - `hash <NAME>... [--seed N]` - Print the case-insensitive identifier hash of each name
//! - `split <SUBJECT> <DELIMITER>` - Split once, the way binding code splits qualified names
//! - `check <CATEGORY> <TAG>` - Evaluate the compatibility rule for a category/tag pair
//! - `signature [--delimiter D]` - Print the composed keys of a few sample signatures
//!
//! ## Design
//!
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod errors;

use std::fmt;
use std::io;
use std::process;

use clap::{Parser, Subcommand};

pub use errors::CommandError;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    /// Invalid input (unknown spelling, empty subject, conflicting seed).
    pub const USAGE: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already rendered for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        let exit_code = err.exit_code();
        // The report's Debug impl renders through miette's installed handler.
        let message = format!("{:?}", miette::Report::new(err));
        Self::new(message, exit_code)
    }
}

impl From<typekey_core::TypeKeyError> for CliError {
    fn from(err: typekey_core::TypeKeyError) -> Self {
        CommandError::from(err).into()
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CommandError::from(err).into()
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Inspect the type keys and argument checks of the typekey binding layer
#[derive(Parser, Debug)]
#[command(name = "typekey")]
#[command(version = VERSION)]
#[command(about = "Inspect type keys and argument-tag rules for scripting bindings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the registered primitive, wrapper and engine-type names
    Names {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the case-insensitive identifier hash of each name
    Hash {
        /// Names to hash
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,
        /// Hash seed (fixed for the whole process)
        #[arg(long, env = "TYPEKEY_HASH_SEED", value_name = "N")]
        seed: Option<u32>,
    },

    /// Split a subject once at a delimiter
    Split {
        #[arg(value_name = "SUBJECT")]
        subject: String,
        #[arg(value_name = "DELIMITER")]
        delimiter: String,
        /// Match the delimiter case-sensitively
        #[arg(long)]
        case_sensitive: bool,
        /// Split at the last occurrence instead of the first
        #[arg(long)]
        from_end: bool,
    },

    /// Check whether a value tag may bind to a parameter category
    Check {
        /// numeric, boolean, text, object, pointer or permissive
        #[arg(value_name = "CATEGORY")]
        category: String,
        /// Tag name (number, string, userdata, ...) or raw integer
        #[arg(value_name = "TAG", allow_hyphen_values = true)]
        tag: String,
    },

    /// Print the composed keys of sample binding signatures
    Signature {
        /// Delimiter placed after every name
        #[arg(long, default_value = ",")]
        delimiter: String,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_to(cli, &mut out)
}

/// Execute the CLI command, writing its output to `out`.
pub fn execute_to(cli: Cli, out: &mut impl io::Write) -> CliResult<ExitCode> {
    match cli.command {
        Command::Names { json } => commands::names(out, json),
        Command::Hash { names, seed } => commands::hash(out, &names, seed),
        Command::Split {
            subject,
            delimiter,
            case_sensitive,
            from_end,
        } => commands::split(out, &subject, &delimiter, case_sensitive, from_end),
        Command::Check { category, tag } => commands::check(out, &category, &tag),
        Command::Signature { delimiter } => commands::signature(out, &delimiter),
    }
}

// ============================================================================
// Tests
// ============================================================================
