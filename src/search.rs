// ABOUTME: Recipe filtering by category alias and multi-term ingredient substring match
// ABOUTME: Annotates matches with favorite status and accumulates the fuzzy-hit count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette Contributors

//! Recipe search and filtering
//!
//! Category matching goes through a fixed alias table so "home" also finds
//! recipes tagged "家常菜". Ingredient matching is AND across query terms and
//! OR within a term against the recipe's ingredient list, using substring
//! containment ("fuzzy" matching: querying "飯" finds "白飯").

use crate::models::{Recipe, RecipeWithFavorite};
use std::collections::HashSet;

/// Fixed alias table: canonical category key to accepted raw values
const CATEGORY_ALIASES: &[(&str, &[&str])] = &[
    ("home", &["home", "家常菜"]),
    ("dessert", &["dessert", "甜點"]),
];

/// Result of a filter pass: annotated matches plus the diagnostic hit total
#[derive(Debug, Default)]
pub struct SearchOutcome {
    /// Matching recipes annotated with favorite status
    pub results: Vec<RecipeWithFavorite>,
    /// Total (term, recipe) substring hits across qualifying recipes.
    /// Diagnostic count, not a ranking score.
    pub fuzzy_match_count: usize,
}

/// Look up the accepted raw values for a canonical category key
#[must_use]
pub fn category_aliases(key: &str) -> Option<&'static [&'static str]> {
    CATEGORY_ALIASES
        .iter()
        .find(|(canonical, _)| *canonical == key)
        .map(|(_, aliases)| *aliases)
}

/// Case-insensitive category match through the alias table
///
/// The alias lookup key is the lowercased query. An unrecognized query
/// falls back to comparing the recipe's lowercased category against the
/// raw query string.
#[must_use]
pub fn category_matches(recipe_category: &str, query: &str) -> bool {
    let recipe_lower = recipe_category.to_lowercase();
    match category_aliases(&query.to_lowercase()) {
        Some(aliases) => aliases.contains(&recipe_lower.as_str()),
        None => recipe_lower == query,
    }
}

/// Number of query terms matching at least one ingredient by substring,
/// or `None` if any term matches nothing (AND across terms)
fn ingredient_hits(recipe: &Recipe, terms: &[String]) -> Option<usize> {
    let mut hits = 0;
    for term in terms {
        if recipe
            .ingredients
            .iter()
            .any(|ingredient| ingredient.contains(term.as_str()))
        {
            hits += 1;
        } else {
            return None;
        }
    }
    Some(hits)
}

/// Filter `recipes` by optional category and ingredient terms, annotating
/// each match with membership in `favorites`
///
/// With no ingredient terms the ingredient filter is skipped entirely: all
/// category-filtered (or all) recipes are returned annotated and the fuzzy
/// count stays zero.
#[must_use]
pub fn filter_recipes(
    recipes: &[Recipe],
    favorites: &HashSet<String>,
    category: Option<&str>,
    ingredients: &[String],
) -> SearchOutcome {
    let mut outcome = SearchOutcome::default();

    let categorized = recipes
        .iter()
        .filter(|r| category.map_or(true, |c| category_matches(&r.category, c)));

    if ingredients.is_empty() {
        outcome.results = categorized
            .map(|r| RecipeWithFavorite::annotate(r, favorites.contains(&r.name)))
            .collect();
        return outcome;
    }

    for recipe in categorized {
        if let Some(hits) = ingredient_hits(recipe, ingredients) {
            outcome.fuzzy_match_count += hits;
            outcome
                .results
                .push(RecipeWithFavorite::annotate(
                    recipe,
                    favorites.contains(&recipe.name),
                ));
        }
    }

    outcome
}
