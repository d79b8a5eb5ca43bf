// ABOUTME: Read-only recipe store loaded once at startup from a JSON file
// ABOUTME: Provides full listing, exact-name lookup, and uniform random selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette Contributors

//! In-memory recipe store
//!
//! Recipes are loaded once from a JSON file and never mutated afterwards.
//! A missing or unparsable data file is fatal at startup.

use crate::errors::{AppError, AppResult};
use crate::models::Recipe;
use rand::seq::SliceRandom;
use std::path::Path;

/// Ordered, read-only sequence of recipes
#[derive(Debug, Clone)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Build a store from an in-process recipe list
    #[must_use]
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Load the store from a JSON file containing an array of recipes
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read and a
    /// serialization error if it is not a valid recipe array. Both are
    /// fatal at startup.
    pub async fn load(path: &Path) -> AppResult<Self> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            AppError::storage(format!("failed to read recipe data {}: {e}", path.display()))
                .with_resource_id(path.display().to_string())
                .with_source(e)
        })?;

        let recipes: Vec<Recipe> = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::serialization(format!(
                "invalid recipe data in {}: {e}",
                path.display()
            ))
            .with_resource_id(path.display().to_string())
            .with_source(e)
        })?;

        Ok(Self::from_recipes(recipes))
    }

    /// All recipes in load order
    #[must_use]
    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    /// First recipe whose name matches exactly
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    /// Uniformly random recipe, `None` when the store is empty
    #[must_use]
    pub fn random(&self) -> Option<&Recipe> {
        self.recipes.choose(&mut rand::thread_rng())
    }

    /// Number of loaded recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the store holds no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
