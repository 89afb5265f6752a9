//! Fixed catalog of coating recipes.
//!
//! Cycle times are static per recipe. Only the participation shares are
//! adjustable, and those live in [`super::ProductMix`], not here.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::{Error, Result};

/// Number of recipes in the catalog.
pub const RECIPE_COUNT: usize = 4;

/// A named production profile with a fixed per-chamber processing time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recipe {
    pub name: &'static str,
    /// Default participation share in percent (0-100).
    pub participation: f64,
    /// Processing time of one chamber cycle, in hours.
    pub cycle_time_hours: f64,
}

/// The recipe table, in the order every mix and CLI flag uses.
pub const RECIPES: [Recipe; RECIPE_COUNT] = [
    Recipe {
        name: "Sapphire",
        participation: 50.24,
        cycle_time_hours: 1.6,
    },
    Recipe {
        name: "Prevencia",
        participation: 21.47,
        cycle_time_hours: 1.2,
    },
    Recipe {
        name: "Rock",
        participation: 4.25,
        cycle_time_hours: 1.6,
    },
    Recipe {
        name: "Super Hidrofobico",
        participation: 24.04,
        cycle_time_hours: 1.1,
    },
];

/// Short names accepted in addition to the full recipe names.
const ALIASES: &[(&str, usize)] = &[("superh", 3), ("super_hidrofobico", 3)];

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

static RECIPE_INDEX: Lazy<HashMap<String, usize>> = Lazy::new(|| {
    let mut index: HashMap<String, usize> = RECIPES
        .iter()
        .enumerate()
        .map(|(i, recipe)| (normalize_name(recipe.name), i))
        .collect();
    for (alias, i) in ALIASES {
        index.insert(normalize_name(alias), *i);
    }
    index
});

/// Resolve a recipe name (case-insensitive, aliases allowed) to its catalog position.
///
/// Unknown names produce [`Error::UnknownRecipe`] with up to three suggestions.
pub fn recipe_index(name: &str) -> Result<usize> {
    RECIPE_INDEX
        .get(&normalize_name(name))
        .copied()
        .ok_or_else(|| Error::UnknownRecipe {
            name: name.to_string(),
            suggestions: fuzzy_recipe_matches(name, 3),
        })
}

/// Look up a recipe by name.
pub fn find_recipe(name: &str) -> Option<&'static Recipe> {
    RECIPE_INDEX
        .get(&normalize_name(name))
        .map(|&i| &RECIPES[i])
}

/// Catalog names most similar to `name`, best first.
pub fn fuzzy_recipe_matches(name: &str, limit: usize) -> Vec<String> {
    let needle = normalize_name(name);
    let mut scored: Vec<(f64, &'static str)> = Vec::new();

    for (key, &i) in RECIPE_INDEX.iter() {
        let score = strsim::jaro_winkler(&needle, key);
        if score < SUGGESTION_THRESHOLD {
            continue;
        }
        let display = RECIPES[i].name;
        match scored.iter_mut().find(|(_, n)| *n == display) {
            Some(entry) if entry.0 < score => entry.0 = score,
            Some(_) => {}
            None => scored.push((score, display)),
        }
    }

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, n)| n.to_string())
        .collect()
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_participations_sum_to_one_hundred() {
        let total: f64 = RECIPES.iter().map(|r| r.participation).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn lookup_is_case_insensitive_and_accepts_aliases() {
        assert_eq!(recipe_index("sapphire").unwrap(), 0);
        assert_eq!(recipe_index("  PREVENCIA ").unwrap(), 1);
        assert_eq!(recipe_index("SuperH").unwrap(), 3);
        assert_eq!(
            find_recipe("super hidrofobico").map(|r| r.cycle_time_hours),
            Some(1.1)
        );
    }

    #[test]
    fn typo_suggests_closest_recipe() {
        let err = recipe_index("Saphire").expect_err("typo should not resolve");
        match err {
            Error::UnknownRecipe { suggestions, .. } => {
                assert_eq!(suggestions.first().map(String::as_str), Some("Sapphire"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unrelated_name_has_no_suggestions() {
        assert!(fuzzy_recipe_matches("qqqqqq", 3).is_empty());
    }
}
