#![deny(clippy::all)]

pub mod catalog;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod presenter;
pub mod telemetry;

use std::ffi::OsString;
use std::io::Write;

use clap::Parser;

pub use catalog::Catalog;
pub use catalog::CatalogError;
pub use catalog::Recipe;
pub use commands::Cli;
pub use commands::Mode;
pub use commands::OutputFormat;
pub use error::CliError;
pub use handlers::HandlerContext;
pub use handlers::HandlerResult;
pub use presenter::Presenter;

/// Parses `args`, performs the selected lookup against the built-in catalog
/// and writes the result to `out`.
///
/// Usage errors are returned before the catalog is built or consulted.
pub fn run<I, T, W>(args: I, out: W) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = Cli::try_parse_from(args)?;
    let mode = cli.mode()?;

    drinks_common::color_init(cli.no_color);

    let catalog = Catalog::builtin()?;
    let mut presenter = presenter::presenter_for(cli.effective_format(), out);
    let mut ctx = HandlerContext::new(&catalog, presenter.as_mut());
    handlers::dispatch(&mut ctx, mode)
}
