use std::ffi::OsStr;

use clap::ArgGroup;
use clap::CommandFactory;
use clap::Parser;
use clap::ValueEnum;
use clap::error::ErrorKind;

const LONG_ABOUT: &str = r#"drinks looks up cocktail recipes from a built-in catalog.

Exactly one mode must be given per invocation:

    -l, --list                  List every known drink
    -d, --drink <NAME>          Show the ingredients of a drink
    -i, --ingredients <ING>...  Find the drink made from exactly these ingredients

A lookup that finds nothing is not an error; a message is printed and the
exit status is 0. Usage errors exit with status 64.

EXAMPLES:
    drinks --list
    drinks --drink mojito
    drinks -d "gin tonic"
    drinks --ingredients gin "tonic water" ice
    drinks --list --json"#;

#[derive(Debug, Parser)]
#[command(name = "drinks")]
#[command(author, version)]
#[command(about = "Look up cocktail recipes by name or by ingredients")]
#[command(long_about = LONG_ABOUT)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .multiple(false)
        .args(["list", "ingredients", "drink"])
))]
pub struct Cli {
    /// List all available drinks
    #[arg(short, long)]
    pub list: bool,

    /// Find the drink made from exactly these ingredients
    #[arg(short, long, num_args = 1.., value_name = "INGREDIENT")]
    pub ingredients: Option<Vec<String>>,

    /// Show the ingredients of the named drink
    #[arg(short, long, value_name = "NAME")]
    pub drink: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Output as JSON (shorthand for --format json)
    #[arg(long)]
    pub json: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// The single operation selected for this invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    List,
    FindByIngredients(Vec<String>),
    FindByName(String),
}

impl Cli {
    /// Returns the effective output format, considering --json shorthand.
    pub fn effective_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }

    /// Resolves the selected mode.
    ///
    /// Parsing through clap already guarantees exactly one mode; a `Cli`
    /// built by hand with none or several set is reported the same way clap
    /// would report it.
    pub fn mode(&self) -> Result<Mode, clap::Error> {
        match (self.list, &self.ingredients, &self.drink) {
            (true, None, None) => Ok(Mode::List),
            (false, Some(ingredients), None) => Ok(Mode::FindByIngredients(ingredients.clone())),
            (false, None, Some(drink)) => Ok(Mode::FindByName(drink.clone())),
            (false, None, None) => Err(Cli::command().error(
                ErrorKind::MissingRequiredArgument,
                "one of --list, --ingredients or --drink is required",
            )),
            _ => Err(Cli::command().error(
                ErrorKind::ArgumentConflict,
                "--list, --ingredients and --drink cannot be used together",
            )),
        }
    }
}

/// Whether `--no-color` was passed, judged from the raw arguments.
///
/// Errors raised while parsing are reported without a `Cli`, so the flag is
/// looked up directly. Arguments after `--` are not flags.
pub fn no_color_requested<I, T>(args: I) -> bool
where
    I: IntoIterator<Item = T>,
    T: AsRef<OsStr>,
{
    args.into_iter()
        .skip(1)
        .take_while(|arg| arg.as_ref() != OsStr::new("--"))
        .any(|arg| arg.as_ref() == OsStr::new("--no-color"))
}
