// ABOUTME: Database connection pool and schema management for recipe storage
// ABOUTME: Opens the SQLite pool, creates tables idempotently and hands out managers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! The database is the sole owner of persisted state. [`Database`] wraps a
//! process-wide `SQLite` pool; request handlers obtain a [`RecipesManager`]
//! from it and never hold state between requests.

/// Recipe and ingredient persistence
pub mod recipes;

pub use recipes::{
    CreateRecipeRequest, Ingredient, Recipe, RecipesManager, UpdateRecipeRequest,
};

use crate::config::{DatabaseConfig, DatabaseUrl};
use crate::errors::{AppError, AppResult, ErrorCode};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// How long a connection waits on a locked database before failing
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database manager owning the connection pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open a pool for the given configuration and run migrations
    ///
    /// File databases are created if missing and run in WAL mode. Foreign
    /// keys are enforced on every connection so deleting a recipe cascades to
    /// its associations. Writers wait up to [`BUSY_TIMEOUT`] for the write lock.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be opened or migrations fail
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        let connection_string = config.url.to_connection_string();
        let options = SqliteConnectOptions::from_str(&connection_string)
            .map_err(|e| AppError::config(format!("Invalid database URL: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(BUSY_TIMEOUT);
        let options = if config.url.is_memory() {
            options
        } else {
            options.journal_mode(SqliteJournalMode::Wal)
        };

        // An in-memory database lives only as long as one of its connections.
        let min_connections = u32::from(config.url.is_memory());

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(min_connections)
            .connect_with(options)
            .await
            .map_err(|e| {
                AppError::database(format!("Failed to connect to {}: {e}", config.url))
            })?;

        let db = Self { pool };
        db.migrate().await?;

        info!(database = %config.url, "Database initialized");
        Ok(db)
    }

    /// Open an isolated in-memory database (tests and demos)
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot be created
    pub async fn in_memory() -> AppResult<Self> {
        Self::new(&DatabaseConfig {
            url: DatabaseUrl::Memory,
            max_connections: 1,
        })
        .await
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Recipe operations backed by this pool
    #[must_use]
    pub fn recipes(&self) -> RecipesManager {
        RecipesManager::new(self.pool.clone())
    }

    /// Verify the pool can answer a trivial query
    ///
    /// # Errors
    ///
    /// Returns a `ResourceUnavailable` error if no connection is available
    /// or the query fails
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::new(
                    ErrorCode::ResourceUnavailable,
                    format!("Database ping failed: {e}"),
                )
                .with_source(e)
            })?;
        Ok(())
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_recipes().await?;
        debug!("Database schema is up to date");
        Ok(())
    }

    /// Create recipe, ingredient and association tables
    async fn migrate_recipes(&self) -> AppResult<()> {
        let statements = [
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT,
                instructions TEXT,
                rating REAL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
            r"
            CREATE TABLE IF NOT EXISTS ingredients (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE
            )
            ",
            r"
            CREATE TABLE IF NOT EXISTS recipe_ingredients (
                recipe_id INTEGER NOT NULL REFERENCES recipes(id) ON DELETE CASCADE,
                ingredient_id INTEGER NOT NULL REFERENCES ingredients(id),
                position INTEGER NOT NULL,
                PRIMARY KEY (recipe_id, ingredient_id)
            )
            ",
            "CREATE INDEX IF NOT EXISTS idx_recipes_title ON recipes(title)",
            "CREATE INDEX IF NOT EXISTS idx_recipe_ingredients_ingredient ON recipe_ingredients(ingredient_id)",
        ];

        for statement in statements {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Migration failed: {e}")))?;
        }

        Ok(())
    }
}
