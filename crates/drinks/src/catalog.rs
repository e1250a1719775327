//! The recipe catalog: a fixed mapping from drink name to ingredient set.
//!
//! The catalog is built once at startup and only read afterwards. Iteration
//! order is insertion order, which is also the tie-break order for
//! [`Catalog::find_by_ingredients`].

use std::collections::BTreeSet;
use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

/// Drinks known to the program, in catalog order.
const BUILTIN_RECIPES: &[(&str, &[&str])] = &[
    ("caipirinha", &["cachaca", "sugar", "lime"]),
    (
        "mojito",
        &["white rum", "sugar cane juice", "lime juice", "soda water", "mint"],
    ),
    ("gin tonic", &["gin", "tonic water", "ice"]),
    ("vodka martini", &["vodka", "vermouth", "ice", "olives"]),
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Recipe '{name}' has no ingredients")]
    EmptyRecipe { name: String },

    #[error("Recipe '{name}' is defined more than once")]
    DuplicateName { name: String },
}

/// A single drink and the set of ingredients it is made from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    name: String,
    ingredients: BTreeSet<String>,
}

impl Recipe {
    pub fn new<N, I, S>(name: N, ingredients: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ingredients in lexicographic order.
    pub fn ingredients(&self) -> impl Iterator<Item = &str> + '_ {
        self.ingredients.iter().map(String::as_str)
    }

    /// Sorted ingredients joined with `", "`.
    pub fn ingredients_joined(&self) -> String {
        self.ingredients().collect::<Vec<_>>().join(", ")
    }

    fn matches(&self, ingredients: &BTreeSet<String>) -> bool {
        self.ingredients == *ingredients
    }
}

/// Immutable recipe catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    /// Indices into `recipes`, ordered by drink name.
    sorted: Vec<usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting recipes without ingredients and repeated
    /// drink names.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(recipes.len());
        for recipe in &recipes {
            if recipe.ingredients.is_empty() {
                return Err(CatalogError::EmptyRecipe {
                    name: recipe.name.clone(),
                });
            }
            if !seen.insert(recipe.name.as_str()) {
                return Err(CatalogError::DuplicateName {
                    name: recipe.name.clone(),
                });
            }
        }

        let mut sorted: Vec<usize> = (0..recipes.len()).collect();
        sorted.sort_by(|&a, &b| recipes[a].name.cmp(&recipes[b].name));

        Ok(Self { recipes, sorted })
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(
            BUILTIN_RECIPES
                .iter()
                .map(|(name, ingredients)| Recipe::new(*name, ingredients.iter().copied()))
                .collect(),
        )
    }

    /// Drink names in lexicographic order. Each call starts a fresh pass.
    pub fn list(&self) -> impl Iterator<Item = &str> + '_ {
        self.sorted.iter().map(|&idx| self.recipes[idx].name.as_str())
    }

    /// Exact, case-sensitive lookup by drink name.
    pub fn find_by_name(&self, name: &str) -> Option<&Recipe> {
        let found = self.recipes.iter().find(|recipe| recipe.name == name);
        debug!(name, found = found.is_some(), "Lookup by name");
        found
    }

    /// First recipe, in catalog order, whose ingredient set equals the given
    /// ingredients. Order and repetition in the input are ignored.
    pub fn find_by_ingredients<I, S>(&self, ingredients: I) -> Option<&Recipe>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let wanted: BTreeSet<String> = ingredients
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        let found = self.recipes.iter().find(|recipe| recipe.matches(&wanted));
        debug!(
            ingredients = wanted.len(),
            drink = found.map(Recipe::name),
            "Lookup by ingredients"
        );
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = builtin();
        assert_eq!(catalog.list().count(), 4);
    }

    #[test]
    fn test_list_is_sorted() {
        let catalog = builtin();
        let names: Vec<_> = catalog.list().collect();
        assert_eq!(
            names,
            vec!["caipirinha", "gin tonic", "mojito", "vodka martini"]
        );
    }

    #[test]
    fn test_list_is_restartable() {
        let catalog = builtin();
        let first: Vec<_> = catalog.list().collect();
        let second: Vec<_> = catalog.list().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_find_by_name_renders_sorted_ingredients() {
        let catalog = builtin();
        let expected = [
            ("caipirinha", "cachaca, lime, sugar"),
            (
                "mojito",
                "lime juice, mint, soda water, sugar cane juice, white rum",
            ),
            ("gin tonic", "gin, ice, tonic water"),
            ("vodka martini", "ice, olives, vermouth, vodka"),
        ];
        for (name, ingredients) in expected {
            let recipe = catalog.find_by_name(name).unwrap();
            assert_eq!(recipe.name(), name);
            assert_eq!(recipe.ingredients_joined(), ingredients);
        }
    }

    #[test]
    fn test_find_by_name_missing() {
        assert!(builtin().find_by_name("nonexistent").is_none());
    }

    #[test]
    fn test_find_by_name_is_case_sensitive() {
        assert!(builtin().find_by_name("Mojito").is_none());
    }

    #[test]
    fn test_find_by_ingredients_exact_set() {
        let catalog = builtin();
        let recipe = catalog
            .find_by_ingredients(["gin", "tonic water", "ice"])
            .unwrap();
        assert_eq!(recipe.name(), "gin tonic");
    }

    #[test]
    fn test_find_by_ingredients_ignores_order_and_duplicates() {
        let catalog = builtin();
        let recipe = catalog
            .find_by_ingredients(["ice", "gin", "ice", "tonic water"])
            .unwrap();
        assert_eq!(recipe.name(), "gin tonic");
    }

    #[test]
    fn test_find_by_ingredients_no_match() {
        assert!(builtin().find_by_ingredients(["water"]).is_none());
    }

    #[test]
    fn test_find_by_ingredients_requires_full_set() {
        assert!(builtin().find_by_ingredients(["gin", "ice"]).is_none());
        assert!(builtin()
            .find_by_ingredients(["gin", "tonic water", "ice", "lime"])
            .is_none());
    }

    #[test]
    fn test_find_by_ingredients_first_match_wins() {
        let catalog = Catalog::new(vec![
            Recipe::new("zombie", ["rum", "lime"]),
            Recipe::new("daiquiri", ["lime", "rum"]),
        ])
        .unwrap();
        let recipe = catalog.find_by_ingredients(["rum", "lime"]).unwrap();
        assert_eq!(recipe.name(), "zombie");
    }

    #[test]
    fn test_new_rejects_empty_recipe() {
        let err = Catalog::new(vec![Recipe::new("water", Vec::<String>::new())]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::EmptyRecipe {
                name: "water".to_string()
            }
        );
    }

    #[test]
    fn test_new_rejects_duplicate_name() {
        let err = Catalog::new(vec![
            Recipe::new("mojito", ["mint"]),
            Recipe::new("mojito", ["rum"]),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName { name } if name == "mojito"));
    }
}
