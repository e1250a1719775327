//! Property tests for catalog lookups.

use drinks::Catalog;
use proptest::prelude::*;
use proptest::sample::subsequence;

fn builtin() -> Catalog {
    Catalog::builtin().unwrap()
}

fn drink_names() -> Vec<String> {
    builtin().list().map(str::to_string).collect()
}

proptest! {
    /// Shuffling and repeating a recipe's ingredients still finds that recipe.
    #[test]
    fn ingredient_order_and_repeats_are_ignored(
        drink in proptest::sample::select(drink_names()),
        repeats in proptest::collection::vec(0usize..8, 0..6),
        seed in any::<u64>(),
    ) {
        let catalog = builtin();
        let recipe = catalog.find_by_name(&drink).unwrap();
        let mut query: Vec<&str> = recipe.ingredients().collect();
        let len = query.len();
        for idx in repeats {
            query.push(query[idx % len]);
        }
        let shift = (seed as usize) % query.len();
        query.rotate_left(shift);

        let found = catalog.find_by_ingredients(&query).unwrap();
        prop_assert_eq!(found.name(), drink.as_str());
    }

    /// A strict subset of a recipe's ingredients never matches it.
    #[test]
    fn partial_ingredient_sets_do_not_match(
        (drink, subset) in proptest::sample::select(drink_names()).prop_flat_map(|drink| {
            let ingredients: Vec<String> = builtin()
                .find_by_name(&drink)
                .unwrap()
                .ingredients()
                .map(str::to_string)
                .collect();
            let max = ingredients.len() - 1;
            (Just(drink), subsequence(ingredients, 0..=max))
        }),
    ) {
        let catalog = builtin();
        let found = catalog.find_by_ingredients(&subset);
        prop_assert!(found.map(|r| r.name() != drink).unwrap_or(true));
    }

    /// Names outside the catalog always miss.
    #[test]
    fn unknown_names_miss(name in "[A-Z][a-z ]{0,12}") {
        prop_assert!(builtin().find_by_name(&name).is_none());
    }
}
