use std::io::Write;

use drinks_common::Colors;
use serde::Serialize;

use crate::catalog::Recipe;
use crate::commands::OutputFormat;
use crate::error::CliError;

pub type PresentResult = Result<(), CliError>;

/// Trait for presenting lookup results to the user.
///
/// Handlers decide what to show; presenters decide how it looks, so every
/// mode supports both text and JSON output.
pub trait Presenter {
    /// Present every drink name, already sorted.
    fn present_list(&mut self, names: &[&str]) -> PresentResult;

    /// Present the outcome of a lookup by drink name.
    fn present_drink(&mut self, name: &str, recipe: Option<&Recipe>) -> PresentResult;

    /// Present the outcome of a lookup by ingredient set. `query` is the
    /// normalized (sorted, deduplicated) set that was searched for.
    fn present_match(&mut self, query: &[&str], recipe: Option<&Recipe>) -> PresentResult;
}

/// Builds the presenter for `format`, writing to `out`.
pub fn presenter_for<'a, W: Write + 'a>(format: OutputFormat, out: W) -> Box<dyn Presenter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextPresenter::new(out)),
        OutputFormat::Json => Box::new(JsonPresenter::new(out)),
    }
}

/// Human-readable output.
pub struct TextPresenter<W> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn present_list(&mut self, names: &[&str]) -> PresentResult {
        writeln!(self.out, "{}", Colors::bold("These drinks are available:"))?;
        for name in names {
            writeln!(self.out, "* {}", Colors::drink(name))?;
        }
        Ok(())
    }

    fn present_drink(&mut self, name: &str, recipe: Option<&Recipe>) -> PresentResult {
        match recipe {
            Some(recipe) => writeln!(self.out, "{}", recipe.ingredients_joined())?,
            None => writeln!(self.out, "{} does not exist.", name)?,
        }
        Ok(())
    }

    fn present_match(&mut self, _query: &[&str], recipe: Option<&Recipe>) -> PresentResult {
        match recipe {
            Some(recipe) => writeln!(self.out, "{}", Colors::drink(recipe.name()))?,
            None => writeln!(self.out, "No drink found.")?,
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct DrinkListJson<'a> {
    drinks: &'a [&'a str],
}

#[derive(Serialize)]
struct DrinkJson<'a> {
    drink: &'a str,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    ingredients: Option<Vec<&'a str>>,
}

#[derive(Serialize)]
struct MatchJson<'a> {
    ingredients: &'a [&'a str],
    found: bool,
    drink: Option<&'a str>,
}

/// One JSON object per invocation, newline terminated.
pub struct JsonPresenter<W> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit<T: Serialize>(&mut self, value: &T) -> PresentResult {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn present_list(&mut self, names: &[&str]) -> PresentResult {
        self.emit(&DrinkListJson { drinks: names })
    }

    fn present_drink(&mut self, name: &str, recipe: Option<&Recipe>) -> PresentResult {
        self.emit(&DrinkJson {
            drink: name,
            found: recipe.is_some(),
            ingredients: recipe.map(|r| r.ingredients().collect()),
        })
    }

    fn present_match(&mut self, query: &[&str], recipe: Option<&Recipe>) -> PresentResult {
        self.emit(&MatchJson {
            ingredients: query,
            found: recipe.is_some(),
            drink: recipe.map(Recipe::name),
        })
    }
}
