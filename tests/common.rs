// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides sample recipes, temp-backed favorites, and router construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette Contributors
#![allow(dead_code)]

//! Shared test utilities for `recette`
//!
//! Common setup to reduce duplication across integration tests.

use recette::{
    config::environment::{Environment, LogLevel, ServerConfig},
    favorites::FavoritesStore,
    models::Recipe,
    server::{RecipeServer, ServerResources},
    store::RecipeStore,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Sample recipes covering both alias spellings of each category
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            name: "白飯糰".into(),
            category: "home".into(),
            ingredients: vec!["白飯".into(), "海苔".into()],
        },
        Recipe {
            name: "番茄炒蛋".into(),
            category: "家常菜".into(),
            ingredients: vec!["番茄".into(), "雞蛋".into(), "蔥".into()],
        },
        Recipe {
            name: "草莓優格杯".into(),
            category: "dessert".into(),
            ingredients: vec!["草莓".into(), "優格".into(), "蜂蜜".into()],
        },
        Recipe {
            name: "芒果布丁".into(),
            category: "甜點".into(),
            ingredients: vec!["芒果".into(), "鮮奶".into(), "吉利丁".into()],
        },
    ]
}

/// Test configuration pointing at the given data paths
pub fn test_config(recipes_path: PathBuf, favorites_path: PathBuf) -> ServerConfig {
    ServerConfig {
        http_port: 0,
        recipes_path,
        favorites_path,
        environment: Environment::Testing,
        log_level: LogLevel::Info,
    }
}

/// Build server resources over the sample recipes with a temp-dir-backed
/// favorites file
///
/// The `TempDir` must be kept alive for the duration of the test.
pub fn test_resources() -> (Arc<ServerResources>, tempfile::TempDir) {
    test_resources_with(sample_recipes())
}

/// Build server resources over the given recipes
pub fn test_resources_with(recipes: Vec<Recipe>) -> (Arc<ServerResources>, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let favorites_path = dir.path().join("favorites.json");

    let store = RecipeStore::from_recipes(recipes);
    let favorites = FavoritesStore::empty(&favorites_path);
    let config = test_config(dir.path().join("recipes.json"), favorites_path);

    (
        Arc::new(ServerResources::new(store, favorites, config)),
        dir,
    )
}

/// Build the full application router over test resources
pub fn test_app(resources: Arc<ServerResources>) -> axum::Router {
    RecipeServer::router(resources)
}

/// Read a response body as JSON
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    serde_json::from_slice(&bytes).expect("parse response body as JSON")
}
