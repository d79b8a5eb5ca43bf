// ABOUTME: Server resource container, router assembly, and serve lifecycle
// ABOUTME: Holds shared state injected into handlers and runs the axum server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette Contributors

//! Server assembly and lifecycle
//!
//! [`ServerResources`] is the one shared-state container, passed to every
//! route handler through axum `State`. [`RecipeServer`] merges the domain
//! routers, layers tracing and CORS, and serves until ctrl-c.

use crate::config::environment::ServerConfig;
use crate::favorites::FavoritesStore;
use crate::routes::{FavoriteRoutes, HealthRoutes, RecipeRoutes};
use crate::store::RecipeStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Shared server state injected into request handlers
pub struct ServerResources {
    /// Read-only recipe store
    pub store: RecipeStore,
    /// Mutex-guarded favorites set mirrored to disk
    pub favorites: FavoritesStore,
    /// Server configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Create new server resources
    #[must_use]
    pub fn new(store: RecipeStore, favorites: FavoritesStore, config: ServerConfig) -> Self {
        Self {
            store,
            favorites,
            config,
        }
    }
}

/// The recette HTTP server
pub struct RecipeServer {
    resources: Arc<ServerResources>,
}

impl RecipeServer {
    /// Create a new server with centralized resource management
    #[must_use]
    pub fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the full application router
    ///
    /// CORS is permissive: the API is consumed by a browser front-end.
    #[must_use]
    pub fn router(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .merge(HealthRoutes::routes())
            .merge(RecipeRoutes::routes(resources.clone()))
            .merge(FavoriteRoutes::routes(resources))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }

    /// Run the server on the given port until ctrl-c
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server fails
    /// while serving.
    pub async fn run(self, port: u16) -> Result<()> {
        let app = Self::router(self.resources);

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
        info!("HTTP server listening on http://127.0.0.1:{port}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

/// Resolve when the process receives ctrl-c
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install ctrl-c handler: {e}");
        return;
    }
    info!("shutdown signal received");
}
