// ABOUTME: Route handlers for recipe search, listing, and lookup endpoints
// ABOUTME: Thin axum handlers delegating to the store and the search module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette Contributors

//! Recipe routes
//!
//! Handles `/search`, `/list`, `/random`, and `/detail`. Unknown recipe
//! names and the empty-store random case return 200 responses with an
//! `error` field, never HTTP error statuses.

use crate::{
    errors::AppError,
    models::{ErrorMessage, Recipe, RecipeWithFavorite},
    search,
    server::ServerResources,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_extra::extract::Query;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query parameters for `/search`
///
/// `ingredient` may repeat: `?ingredient=飯&ingredient=蛋`.
#[derive(Debug, Deserialize, Default)]
pub struct SearchQuery {
    /// Category filter, resolved through the alias table
    pub category: Option<String>,
    /// Ingredient query terms, AND-combined
    #[serde(default)]
    pub ingredient: Vec<String>,
}

/// Response for `/search`
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Echo of the category filter
    pub category: Option<String>,
    /// Echo of the ingredient terms, `null` when none were supplied
    pub ingredients_query: Option<Vec<String>>,
    /// Total (term, recipe) substring hits across qualifying recipes
    pub fuzzy_match_count: usize,
    /// Number of results
    pub count: usize,
    /// Matching recipes annotated with favorite status
    pub results: Vec<RecipeWithFavorite>,
}

/// Response for `/list`
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse {
    /// Number of recipes in the store
    pub count: usize,
    /// All recipes annotated with favorite status
    pub recipes: Vec<RecipeWithFavorite>,
}

/// Query parameters for `/detail`
#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    /// Full recipe name, matched exactly
    pub name: String,
}

/// Recipe routes handler
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/search", get(Self::handle_search))
            .route("/list", get(Self::handle_list))
            .route("/random", get(Self::handle_random))
            .route("/detail", get(Self::handle_detail))
            .with_state(resources)
    }

    /// Handle GET /search - filter by category and ingredient terms
    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<SearchQuery>,
    ) -> Result<Response, AppError> {
        let favorites = resources.favorites.snapshot().await;
        let outcome = search::filter_recipes(
            resources.store.all(),
            &favorites,
            query.category.as_deref(),
            &query.ingredient,
        );

        let response = SearchResponse {
            category: query.category,
            ingredients_query: if query.ingredient.is_empty() {
                None
            } else {
                Some(query.ingredient)
            },
            fuzzy_match_count: outcome.fuzzy_match_count,
            count: outcome.results.len(),
            results: outcome.results,
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /list - all recipes, favorite-annotated
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let favorites = resources.favorites.snapshot().await;
        let recipes: Vec<RecipeWithFavorite> = resources
            .store
            .all()
            .iter()
            .map(|r| RecipeWithFavorite::annotate(r, favorites.contains(&r.name)))
            .collect();

        let response = ListResponse {
            count: recipes.len(),
            recipes,
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /random - one uniformly random recipe
    async fn handle_random(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let Some(recipe) = resources.store.random().cloned() else {
            return Ok(Self::lookup_error(ErrorMessage::new("no recipes available")));
        };

        Ok(Self::annotated(&resources, recipe).await)
    }

    /// Handle GET /detail - exact-name lookup
    async fn handle_detail(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<DetailQuery>,
    ) -> Result<Response, AppError> {
        let Some(recipe) = resources.store.by_name(&query.name).cloned() else {
            return Ok(Self::lookup_error(ErrorMessage::recipe_not_found(
                &query.name,
            )));
        };

        Ok(Self::annotated(&resources, recipe).await)
    }

    /// Build a 200 response with a single annotated recipe
    async fn annotated(resources: &Arc<ServerResources>, recipe: Recipe) -> Response {
        let is_favorite = resources.favorites.contains(&recipe.name).await;
        let body = RecipeWithFavorite {
            recipe,
            is_favorite,
        };
        (StatusCode::OK, Json(body)).into_response()
    }

    /// Build a 200 response carrying an error-object body
    fn lookup_error(body: ErrorMessage) -> Response {
        (StatusCode::OK, Json(body)).into_response()
    }
}
