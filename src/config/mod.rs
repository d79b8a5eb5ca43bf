// ABOUTME: Configuration module organization for the recette server
// ABOUTME: Exposes environment-based server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette Contributors

//! Configuration management

/// Environment-based configuration management
pub mod environment;

pub use environment::ServerConfig;
