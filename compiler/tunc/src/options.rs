//! Command-line options for the `tun` binary.
//!
//! Parsed by hand: one subcommand, one file, and a few flags in any order
//! after the subcommand.

use tun_diagnostic::emitter::ColorMode;
use tun_eval::{ArityPolicy, DEFAULT_MAX_CALL_DEPTH};

/// Pipeline stage to stop after.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Command {
    /// Print the token list.
    Lex,
    /// Print the AST as indented JSON.
    Parse,
    /// Run the scope checker.
    Check,
    /// Check and evaluate, then print the final bindings.
    Run,
}

impl Command {
    pub fn from_name(name: &str) -> Option<Command> {
        match name {
            "lex" => Some(Command::Lex),
            "parse" => Some(Command::Parse),
            "check" => Some(Command::Check),
            "run" => Some(Command::Run),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub command: Command,
    pub path: String,
    pub arity: ArityPolicy,
    pub max_call_depth: usize,
    /// Skip the scope checker before `run`.
    pub skip_check: bool,
    pub color: ColorMode,
}

impl Options {
    /// Defaults for `command` on `path`.
    pub fn new(command: Command, path: impl Into<String>) -> Self {
        Options {
            command,
            path: path.into(),
            arity: ArityPolicy::Lenient,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            skip_check: false,
            color: ColorMode::Auto,
        }
    }

    /// Parse arguments after the program name.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Options, UsageError> {
        let Some((command, rest)) = args.split_first() else {
            return Err(UsageError::MissingCommand);
        };
        let command = command.as_ref();
        if command == "help" || command == "--help" || command == "-h" {
            return Err(UsageError::HelpRequested);
        }
        let command = Command::from_name(command)
            .ok_or_else(|| UsageError::UnknownCommand(command.to_string()))?;

        let mut path = None;
        let mut options = Options::new(command, String::new());
        for arg in rest {
            let arg = arg.as_ref();
            if arg == "--strict-arity" {
                options.arity = ArityPolicy::Strict;
            } else if arg == "--no-check" {
                options.skip_check = true;
            } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
                options.max_call_depth = depth
                    .parse()
                    .map_err(|_| UsageError::InvalidValue(arg.to_string()))?;
            } else if let Some(mode) = arg.strip_prefix("--color=") {
                options.color = match mode {
                    "auto" => ColorMode::Auto,
                    "always" => ColorMode::Always,
                    "never" => ColorMode::Never,
                    _ => return Err(UsageError::InvalidValue(arg.to_string())),
                };
            } else if arg.starts_with('-') {
                return Err(UsageError::UnknownFlag(arg.to_string()));
            } else if path.is_none() {
                path = Some(arg.to_string());
            } else {
                return Err(UsageError::UnexpectedArgument(arg.to_string()));
            }
        }

        options.path = path.ok_or(UsageError::MissingPath)?;
        Ok(options)
    }
}

/// Bad command line. The binary prints [`USAGE`] and exits with 64.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("missing command")]
    MissingCommand,
    #[error("help requested")]
    HelpRequested,
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("missing file path")]
    MissingPath,
    #[error("unknown flag '{0}'")]
    UnknownFlag(String),
    #[error("invalid value in '{0}'")]
    InvalidValue(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

impl UsageError {
    /// Exit status for a usage error (`EX_USAGE`).
    pub const EXIT_CODE: i32 = 64;
}

pub const USAGE: &str = "\
Usage: tun <command> <file.tun> [options]

Commands:
  lex      Print the token list
  parse    Print the AST as indented JSON
  check    Check that every name is defined before use
  run      Check and run the program, then print its bindings

Options:
  --strict-arity       Require calls to pass exactly one argument per parameter
  --max-depth=<n>      Maximum nested call depth (default: 1024)
  --no-check           Run without the scope checker
  --color=<mode>       Diagnostic colors: auto, always, never

Set RUST_LOG (e.g. RUST_LOG=tun_eval=debug) for trace output.
";
