// ABOUTME: System-wide constants and configuration values for the recette API
// ABOUTME: Contains service identity, defaults, and environment variable accessors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette Contributors

//! # Constants Module
//!
//! Application constants and environment-based configuration values.
//! This module provides both hardcoded defaults and environment variable
//! accessors layered on top of them.

use std::env;

/// Service identity constants
pub mod service {
    /// Server name used in logs and the root banner
    pub const SERVER_NAME: &str = "recette-server";

    /// Server version from Cargo.toml
    pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Hardcoded defaults, overridable through `env_config`
pub mod defaults {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8080;

    /// Default path to the recipe data file
    pub const DEFAULT_RECIPES_PATH: &str = "data/recipes.json";

    /// Default path to the persisted favorites file
    pub const DEFAULT_FAVORITES_PATH: &str = "favorites.json";
}

/// Environment-based configuration
pub mod env_config {
    use super::env;

    /// Get `HTTP` server port from environment or default
    #[must_use]
    pub fn http_port() -> u16 {
        env::var("HTTP_PORT")
            .unwrap_or_else(|_| super::defaults::DEFAULT_HTTP_PORT.to_string())
            .parse()
            .unwrap_or(super::defaults::DEFAULT_HTTP_PORT)
    }

    /// Get recipe data file path from environment or default
    #[must_use]
    pub fn recipes_path() -> String {
        env::var("RECIPES_PATH").unwrap_or_else(|_| super::defaults::DEFAULT_RECIPES_PATH.into())
    }

    /// Get favorites file path from environment or default
    #[must_use]
    pub fn favorites_path() -> String {
        env::var("FAVORITES_PATH")
            .unwrap_or_else(|_| super::defaults::DEFAULT_FAVORITES_PATH.into())
    }
}
