// ABOUTME: Main library entry point for the recette recipe lookup service
// ABOUTME: Provides a JSON HTTP API for recipe search, lookup, and favorites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette Contributors

#![deny(unsafe_code)]

//! # Recette
//!
//! A small recipe lookup service. Recipes are loaded once at startup from a
//! JSON file and served through a JSON HTTP API: search by category and
//! ingredients (substring matching), list everything, fetch one at random or
//! by exact name, and keep a favorites list persisted to a flat file.
//!
//! ## Architecture
//!
//! - **Store**: read-only, in-memory recipe list loaded at startup
//! - **Favorites**: mutex-guarded name set mirrored to `favorites.json`
//! - **Search**: pure filtering over the store with favorite annotation
//! - **Routes**: thin axum handlers per domain, sharing `ServerResources`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recette::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Load configuration from environment variables
//!     let config = ServerConfig::from_env()?;
//!     println!("recette configured for port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants and environment-backed defaults
pub mod constants;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Favorites set persisted to a flat JSON file
pub mod favorites;

/// Production logging and structured output
pub mod logging;

/// Common data models for recipes and API responses
pub mod models;

/// `HTTP` routes for search, lookup, and favorites endpoints
pub mod routes;

/// Recipe search and filtering logic
pub mod search;

/// Server assembly and lifecycle
pub mod server;

/// Read-only recipe store loaded at startup
pub mod store;
