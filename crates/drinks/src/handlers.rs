use std::collections::BTreeSet;

use tracing::info;

use crate::catalog::Catalog;
use crate::commands::Mode;
use crate::error::CliError;
use crate::presenter::Presenter;

pub type HandlerResult = Result<(), CliError>;

/// Everything a handler needs for one invocation.
pub struct HandlerContext<'a> {
    pub catalog: &'a Catalog,
    pub presenter: &'a mut dyn Presenter,
}

impl<'a> HandlerContext<'a> {
    pub fn new(catalog: &'a Catalog, presenter: &'a mut dyn Presenter) -> Self {
        Self { catalog, presenter }
    }
}

/// Runs the one catalog operation selected by `mode`.
pub fn dispatch(ctx: &mut HandlerContext<'_>, mode: Mode) -> HandlerResult {
    match mode {
        Mode::List => handle_list(ctx),
        Mode::FindByIngredients(ingredients) => handle_find_by_ingredients(ctx, &ingredients),
        Mode::FindByName(name) => handle_find_by_name(ctx, &name),
    }
}

pub fn handle_list(ctx: &mut HandlerContext<'_>) -> HandlerResult {
    let names: Vec<&str> = ctx.catalog.list().collect();
    info!(count = names.len(), "Listing drinks");
    ctx.presenter.present_list(&names)
}

pub fn handle_find_by_name(ctx: &mut HandlerContext<'_>, name: &str) -> HandlerResult {
    let recipe = ctx.catalog.find_by_name(name);
    ctx.presenter.present_drink(name, recipe)
}

pub fn handle_find_by_ingredients(ctx: &mut HandlerContext<'_>, ingredients: &[String]) -> HandlerResult {
    let query: BTreeSet<&str> = ingredients.iter().map(String::as_str).collect();
    let recipe = ctx.catalog.find_by_ingredients(&query);
    let query: Vec<&str> = query.into_iter().collect();
    ctx.presenter.present_match(&query, recipe)
}
