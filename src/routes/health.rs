// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides the root status banner and a health endpoint for monitoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette Contributors

//! Health check routes for service monitoring

use crate::constants::service;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the status banner and health check routes
    pub fn routes() -> axum::Router {
        use axum::{routing::get, Json, Router};

        async fn root_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "message": "recipe lookup API is ready"
            }))
        }

        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "service": service::SERVER_NAME,
                "version": service::SERVER_VERSION,
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        Router::new()
            .route("/", get(root_handler))
            .route("/health", get(health_handler))
    }
}
