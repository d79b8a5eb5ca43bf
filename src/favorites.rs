// ABOUTME: Favorites set persisted to a flat JSON file on every mutation
// ABOUTME: Mutex-guarded read-modify-write-persist keeps concurrent updates from racing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette Contributors

//! Persisted favorites set
//!
//! The favorites file holds a JSON array of recipe names. It is read once
//! at startup (missing file means an empty set) and rewritten in full after
//! every mutation. All mutations happen under one mutex so the
//! read-modify-write-persist cycle is serialized within the process.

use crate::errors::{AppError, AppResult};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Favorite recipe names mirrored to a JSON file
#[derive(Debug)]
pub struct FavoritesStore {
    path: PathBuf,
    names: Mutex<HashSet<String>>,
}

impl FavoritesStore {
    /// Load the favorites set from `path`
    ///
    /// A missing file yields an empty set. An unreadable or unparsable file
    /// is an error, fatal at startup.
    ///
    /// # Errors
    ///
    /// Returns a storage error on read failure and a serialization error if
    /// the file is not a JSON array of strings.
    pub async fn load(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();

        let names = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let list: Vec<String> = serde_json::from_slice(&bytes).map_err(|e| {
                    AppError::serialization(format!(
                        "invalid favorites file {}: {e}",
                        path.display()
                    ))
                    .with_resource_id(path.display().to_string())
                    .with_source(e)
                })?;
                list.into_iter().collect()
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashSet::new(),
            Err(e) => {
                return Err(AppError::storage(format!(
                    "failed to read favorites file {}: {e}",
                    path.display()
                ))
                .with_resource_id(path.display().to_string())
                .with_source(e))
            }
        };

        Ok(Self {
            path,
            names: Mutex::new(names),
        })
    }

    /// Create an empty store backed by `path` without touching the disk
    #[must_use]
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            names: Mutex::new(HashSet::new()),
        }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Insert `name` and persist, returning the updated count
    ///
    /// Idempotent: re-adding an existing name rewrites the file and returns
    /// the unchanged count.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file rewrite fails; the in-memory set
    /// keeps the inserted name in that case.
    pub async fn add(&self, name: &str) -> AppResult<usize> {
        let mut names = self.names.lock().await;
        names.insert(name.to_owned());
        self.persist(&names).await?;
        Ok(names.len())
    }

    /// Remove `name` and persist, returning whether it was present
    ///
    /// When the name is absent the set and the file are left untouched.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file rewrite fails.
    pub async fn remove(&self, name: &str) -> AppResult<bool> {
        let mut names = self.names.lock().await;
        if !names.remove(name) {
            return Ok(false);
        }
        self.persist(&names).await?;
        Ok(true)
    }

    /// Whether `name` is currently favorited
    pub async fn contains(&self, name: &str) -> bool {
        self.names.lock().await.contains(name)
    }

    /// Number of favorited names
    pub async fn count(&self) -> usize {
        self.names.lock().await.len()
    }

    /// Cloned snapshot of the set, for annotating a batch of recipes
    pub async fn snapshot(&self) -> HashSet<String> {
        self.names.lock().await.clone()
    }

    /// Rewrite the whole file from the given set
    ///
    /// Names are written sorted so repeated rewrites of the same set are
    /// byte-identical.
    async fn persist(&self, names: &HashSet<String>) -> AppResult<()> {
        let mut sorted: Vec<&String> = names.iter().collect();
        sorted.sort();

        let json = serde_json::to_vec_pretty(&sorted)?;
        tokio::fs::write(&self.path, json).await.map_err(|e| {
            AppError::storage(format!(
                "failed to write favorites file {}: {e}",
                self.path.display()
            ))
            .with_resource_id(self.path.display().to_string())
            .with_source(e)
        })
    }
}
