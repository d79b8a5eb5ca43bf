// ABOUTME: Route module organization for the recette HTTP endpoints
// ABOUTME: Provides route definitions organized by domain with thin handler functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette Contributors

//! Route module for the recette server
//!
//! Routes are organized by domain. Each module contains only route
//! definitions and thin handler functions that delegate to the store,
//! search, and favorites layers.

/// Favorites management routes
pub mod favorites;
/// Health check and status banner routes
pub mod health;
/// Recipe search and lookup routes
pub mod recipes;

/// Favorites route handlers
pub use favorites::FavoriteRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// Recipe route handlers
pub use recipes::RecipeRoutes;
