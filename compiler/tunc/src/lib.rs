//! Tunc - driver for the tun toolchain.
//!
//! Runs the pipeline (scan, parse, check, evaluate) over one source file
//! and renders each stage's output. The `tun` binary is a thin wrapper
//! around [`drive`].
//!
//! ```text
//! tun lex <file>      token list as {Type: KIND, Literal: text}
//! tun parse <file>    AST as indented JSON
//! tun check <file>    "pass check" or the reference error
//! tun run <file>      name = value lines
//! ```

mod error;
mod options;
mod render;
mod session;

pub use error::{CompileError, Stage};
pub use options::{Command, Options, UsageError, USAGE};
pub use render::{ast_json, render_bindings, render_tokens};
pub use session::Session;

use std::io::{IsTerminal, Write};
use std::sync::Once;

use tun_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=tun_eval=debug` or `RUST_LOG=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Run the command in `options` against the file it names.
///
/// Command output goes to `out`, errors to `err`. Returns the process exit
/// status: 0 on success, otherwise the failing stage's code.
pub fn drive(options: &Options, out: &mut impl Write, err: &mut impl Write) -> i32 {
    let session = match Session::from_path(&options.path) {
        Ok(session) => session,
        Err(error) => {
            let _ = writeln!(err, "{error}");
            return error.exit_code();
        }
    };
    drive_session(&session, options, out, err)
}

/// [`drive`] for source already in memory.
pub fn drive_session(
    session: &Session,
    options: &Options,
    out: &mut impl Write,
    err: &mut impl Write,
) -> i32 {
    match run_command(session, options) {
        Ok(text) => {
            let _ = out.write_all(text.as_bytes());
            let _ = out.flush();
            0
        }
        Err(error) => {
            report(session, options, &error, err);
            error.exit_code()
        }
    }
}

fn run_command(session: &Session, options: &Options) -> Result<String, CompileError> {
    tracing::debug!(command = ?options.command, path = session.path(), "driving");
    match options.command {
        Command::Lex => {
            let output = session.tokens();
            if let Some(error) = CompileError::from_lex_errors(&output.errors) {
                return Err(error);
            }
            Ok(render_tokens(&output.tokens, session.source()))
        }
        Command::Parse => {
            let program = session.parse()?;
            let mut json = ast_json(&program, session.interner())?;
            json.push('\n');
            Ok(json)
        }
        Command::Check => {
            let program = session.parse()?;
            session.check(&program)?;
            Ok("pass check\n".to_string())
        }
        Command::Run => {
            let (program, bindings) = session.run(options)?;
            Ok(render_bindings(&bindings, &program, session.interner()))
        }
    }
}

/// Print a one-line summary, then the diagnostic with its source snippet.
fn report(session: &Session, options: &Options, error: &CompileError, err: &mut impl Write) {
    let _ = writeln!(err, "{error}");
    if let Some(diagnostic) = error.to_diagnostic() {
        tracing::debug!(
            code = %diagnostic.code,
            span = ?diagnostic.primary_span(),
            stage = ?error.stage(),
            "reporting"
        );
        let is_tty = std::io::stderr().is_terminal();
        let mut emitter = TerminalEmitter::with_color_mode(&mut *err, options.color, is_tty)
            .with_source(session.path(), session.source());
        emitter.emit(&diagnostic);
        emitter.flush();
    }
}
