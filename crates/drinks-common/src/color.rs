//! ANSI colors for terminal output.
//!
//! Whether the user opted out is decided once per process. Each painter then
//! checks the stream it labels: `bold` and `drink` style program output on
//! stdout, `error` and `dim` style diagnostics on stderr.

use std::io::IsTerminal;
use std::sync::OnceLock;

static NO_COLOR: OnceLock<bool> = OnceLock::new();

/// Records whether colors are turned off by `--no-color` or `NO_COLOR`.
/// Only the first call has an effect.
pub fn init(no_color_flag: bool) {
    let _ = NO_COLOR.set(no_color_flag || std::env::var_os("NO_COLOR").is_some());
}

fn opted_out() -> bool {
    *NO_COLOR.get().unwrap_or(&false)
}

mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const RED: &str = "\x1b[31m";
    pub const CYAN: &str = "\x1b[36m";
    pub const DIM: &str = "\x1b[90m";
    pub const BOLD: &str = "\x1b[1m";
}

fn paint(code: &str, text: &str, on_terminal: bool) -> String {
    if opted_out() || !on_terminal {
        text.to_string()
    } else {
        format!("{}{}{}", code, text, codes::RESET)
    }
}

pub struct Colors;

impl Colors {
    pub fn error(text: &str) -> String {
        paint(codes::RED, text, std::io::stderr().is_terminal())
    }

    pub fn dim(text: &str) -> String {
        paint(codes::DIM, text, std::io::stderr().is_terminal())
    }

    pub fn bold(text: &str) -> String {
        paint(codes::BOLD, text, std::io::stdout().is_terminal())
    }

    /// Drink names in listings and match results.
    pub fn drink(text: &str) -> String {
        paint(codes::CYAN, text, std::io::stdout().is_terminal())
    }
}
