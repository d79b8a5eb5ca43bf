// ABOUTME: Route handlers for the favorites add/list/remove endpoints
// ABOUTME: Validates names against the store and persists every mutation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette Contributors

//! Favorites routes
//!
//! `POST /favorite` requires the name to exist in the store; `DELETE
//! /favorite` requires it to be favorited. Either miss is reported as a
//! 200 response with an `error` field, matching the lookup endpoints.

use crate::{
    errors::AppError,
    models::{ErrorMessage, Recipe},
    server::ServerResources,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query parameters naming a recipe
#[derive(Debug, Deserialize)]
pub struct NameQuery {
    /// Recipe name, matched exactly
    pub name: String,
}

/// Response for a successful add
#[derive(Debug, Serialize, Deserialize)]
pub struct AddFavoriteResponse {
    /// Confirmation message
    pub message: String,
    /// Favorites count after the add
    pub favorites_count: usize,
}

/// Response for listing favorites
#[derive(Debug, Serialize, Deserialize)]
pub struct ListFavoritesResponse {
    /// Number of favorited recipes still present in the store
    pub count: usize,
    /// The favorited recipes
    pub favorites: Vec<Recipe>,
}

/// Response for a successful remove
#[derive(Debug, Serialize, Deserialize)]
pub struct RemoveFavoriteResponse {
    /// Confirmation message
    pub message: String,
}

/// Favorites routes handler
pub struct FavoriteRoutes;

impl FavoriteRoutes {
    /// Create all favorites routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/favorite", post(Self::handle_add))
            .route("/favorite", get(Self::handle_list))
            .route("/favorite", delete(Self::handle_remove))
            .with_state(resources)
    }

    /// Handle POST /favorite - add a recipe to the favorites set
    async fn handle_add(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<NameQuery>,
    ) -> Result<Response, AppError> {
        if resources.store.by_name(&query.name).is_none() {
            let body = ErrorMessage::recipe_not_found(&query.name);
            return Ok((StatusCode::OK, Json(body)).into_response());
        }

        let favorites_count = resources.favorites.add(&query.name).await?;
        let response = AddFavoriteResponse {
            message: format!("added '{}' to favorites", query.name),
            favorites_count,
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /favorite - list favorited recipes
    ///
    /// Stale names with no matching recipe are silently dropped.
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let names = resources.favorites.snapshot().await;
        let favorites: Vec<Recipe> = resources
            .store
            .all()
            .iter()
            .filter(|r| names.contains(&r.name))
            .cloned()
            .collect();

        let response = ListFavoritesResponse {
            count: favorites.len(),
            favorites,
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle DELETE /favorite - remove a recipe from the favorites set
    async fn handle_remove(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<NameQuery>,
    ) -> Result<Response, AppError> {
        if !resources.favorites.remove(&query.name).await? {
            let body = ErrorMessage::new(format!("'{}' is not in the favorites list", query.name));
            return Ok((StatusCode::OK, Json(body)).into_response());
        }

        let response = RemoveFavoriteResponse {
            message: format!("removed '{}' from favorites", query.name),
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
