//! Shared helpers for driver tests.

use tun_diagnostic::emitter::ColorMode;
use tunc::{drive, drive_session, Command, Options, Session};

/// What a driver run printed and returned.
pub struct Outcome {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Path of a file under the workspace `demos/` directory.
pub fn demo(name: &str) -> String {
    format!("{}/../../demos/{name}", env!("CARGO_MANIFEST_DIR"))
}

pub fn options(command: Command, path: &str) -> Options {
    let mut options = Options::new(command, path);
    options.color = ColorMode::Never;
    options
}

/// Run a command on a file.
pub fn drive_file(options: &Options) -> Outcome {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = drive(options, &mut stdout, &mut stderr);
    Outcome {
        code,
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    }
}

/// Run a command on in-memory source named `test.tun`.
pub fn drive_source(command: Command, source: &str) -> Outcome {
    drive_source_with(&options(command, "test.tun"), source)
}

pub fn drive_source_with(options: &Options, source: &str) -> Outcome {
    let session = Session::new(options.path.clone(), source);
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = drive_session(&session, options, &mut stdout, &mut stderr);
    Outcome {
        code,
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    }
}
