// ABOUTME: Data models for recipes and shared API response bodies
// ABOUTME: Defines Recipe, the favorite-annotated wrapper, and the error-object body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette Contributors

//! Common data models for recipe data and API responses

use serde::{Deserialize, Serialize};

/// A recipe record, immutable after load
///
/// `name` is the unique key; `category` belongs to a small open set
/// ("dessert", "home", "家常菜", ...) compared case-insensitively through the
/// alias table in [`crate::search`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe name
    pub name: String,
    /// Category tag
    pub category: String,
    /// Ordered ingredient list
    pub ingredients: Vec<String>,
}

/// A recipe annotated with its favorite status at response time
///
/// Serializes flat:
/// `{ "name": ..., "category": ..., "ingredients": [...], "is_favorite": bool }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeWithFavorite {
    /// The underlying recipe, flattened into the response object
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Whether the recipe's name is in the favorites set
    pub is_favorite: bool,
}

impl RecipeWithFavorite {
    /// Annotate a recipe with its favorite status
    #[must_use]
    pub fn annotate(recipe: &Recipe, is_favorite: bool) -> Self {
        Self {
            recipe: recipe.clone(),
            is_favorite,
        }
    }
}

/// Body for domain "not found" conditions
///
/// Unknown recipe names and the empty-store random case are reported as
/// ordinary 200 responses carrying this object, not as HTTP error statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// Human-readable error string
    pub error: String,
}

impl ErrorMessage {
    /// Build an error body from any displayable message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// Standard body for an unknown recipe name
    #[must_use]
    pub fn recipe_not_found(name: &str) -> Self {
        Self::new(format!("no recipe named '{name}'"))
    }
}
