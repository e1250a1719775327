use std::ffi::OsString;
use std::io::Write;

use drinks::CliError;
use drinks::commands::no_color_requested;
use drinks::telemetry::init_tracing;
use drinks_common::Colors;
use drinks_common::error_codes::EX_OK;

fn main() {
    let args: Vec<OsString> = std::env::args_os().collect();
    let code = {
        let _telemetry = init_tracing("warn");
        match run(&args) {
            Ok(()) => EX_OK,
            Err(e) => report(&e, no_color_requested(&args)),
        }
    };
    std::process::exit(code);
}

fn run(args: &[OsString]) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    drinks::run(args.iter().cloned(), &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

fn report(error: &CliError, no_color: bool) -> i32 {
    // no-op when parsing got far enough to initialize colors
    drinks_common::color_init(no_color);

    match error {
        // clap renders its own usage, help and version text
        CliError::Usage(clap_error) => {
            let _ = clap_error.print();
            if let Some(suggestion) = error.suggestion() {
                eprintln!("{} {}", Colors::dim("Suggestion:"), suggestion);
            }
        }
        _ => {
            tracing::error!(category = %error.category(), "{}", error);
            eprintln!("{} {}", Colors::error("Error:"), error);
            if let Some(suggestion) = error.suggestion() {
                eprintln!("{} {}", Colors::dim("Suggestion:"), suggestion);
            }
        }
    }
    error.exit_code()
}
