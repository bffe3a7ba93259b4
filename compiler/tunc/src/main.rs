//! Tun CLI

use tunc::{drive, init_tracing, Options, UsageError, USAGE};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match Options::parse(&args) {
        Ok(options) => options,
        Err(UsageError::HelpRequested) => {
            print!("{USAGE}");
            return;
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprint!("{USAGE}");
            std::process::exit(UsageError::EXIT_CODE);
        }
    };

    let code = drive(
        &options,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    );
    std::process::exit(code);
}
