// ABOUTME: Server binary for the recette recipe lookup API
// ABOUTME: Loads configuration and data, initializes logging, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette Contributors

//! # Recette Server Binary
//!
//! Starts the recipe lookup API: loads the recipe data file (fatal if
//! missing), loads the persisted favorites set, and serves the JSON HTTP
//! endpoints.

use anyhow::{Context, Result};
use clap::Parser;
use recette::{
    config::environment::ServerConfig,
    favorites::FavoritesStore,
    logging,
    server::{RecipeServer, ServerResources},
    store::RecipeStore,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "recette-server")]
#[command(about = "Recette - recipe lookup API with fuzzy search and favorites")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override recipe data file path
    #[arg(short, long)]
    recipes: Option<PathBuf>,

    /// Override favorites file path
    #[arg(long)]
    favorites: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment, then apply CLI overrides
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(recipes) = args.recipes {
        config.recipes_path = recipes;
    }
    if let Some(favorites) = args.favorites {
        config.favorites_path = favorites;
    }

    logging::init_from_env()?;

    info!("Starting recette server");
    info!("{}", config.summary());

    // Missing or invalid recipe data aborts startup
    let store = RecipeStore::load(&config.recipes_path)
        .await
        .with_context(|| {
            format!(
                "failed to load recipe data from {}",
                config.recipes_path.display()
            )
        })?;
    info!("Loaded {} recipes", store.len());
    if store.is_empty() {
        warn!("Recipe store is empty; /random will report no recipes available");
    }

    // Missing favorites file is fine; a corrupt one is fatal
    let favorites = FavoritesStore::load(&config.favorites_path)
        .await
        .with_context(|| {
            format!(
                "failed to load favorites from {}",
                config.favorites_path.display()
            )
        })?;
    info!("Loaded {} favorites", favorites.count().await);

    let port = config.http_port;
    let resources = Arc::new(ServerResources::new(store, favorites, config));
    let server = RecipeServer::new(resources);

    display_available_endpoints(port);
    info!("Ready to serve recipes");

    server.run(port).await
}

/// Display all available API endpoints
fn display_available_endpoints(port: u16) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

    info!("=== Available API Endpoints ===");
    info!("   Status Banner:     GET    http://{host}:{port}/");
    info!("   Health Check:      GET    http://{host}:{port}/health");
    info!("   Search Recipes:    GET    http://{host}:{port}/search?category=&ingredient=");
    info!("   List Recipes:      GET    http://{host}:{port}/list");
    info!("   Random Recipe:     GET    http://{host}:{port}/random");
    info!("   Recipe Detail:     GET    http://{host}:{port}/detail?name=");
    info!("   Add Favorite:      POST   http://{host}:{port}/favorite?name=");
    info!("   List Favorites:    GET    http://{host}:{port}/favorite");
    info!("   Remove Favorite:   DELETE http://{host}:{port}/favorite?name=");
    info!("=== End of Endpoint List ===");
}
