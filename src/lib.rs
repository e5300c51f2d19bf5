// ABOUTME: Main library entry point for the Smart Recipe API
// ABOUTME: Provides the recipe data layer, REST routes, server bootstrap and HTTP client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Smart Recipe API
//!
//! A REST service for managing recipes and the ingredients they share.
//! Ingredients are created on first reference by name and reused afterwards,
//! so two recipes that both list `Salt` point at the same ingredient row.
//!
//! ## Architecture
//!
//! - **Database**: `SQLite` pool, schema migration and the recipes manager
//! - **Routes**: recipe resource, welcome/help pages, health, `OpenAPI` docs
//! - **Middleware**: request id correlation and CORS
//! - **Client**: typed `reqwest` client used by `recipe-cli`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use smart_recipe_api::config::ServerConfig;
//! use smart_recipe_api::database::Database;
//! use smart_recipe_api::errors::AppResult;
//! use smart_recipe_api::server::{self, ServerResources};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let database = Database::new(&config.database).await?;
//!     server::run(Arc::new(ServerResources::new(database, config))).await
//! }
//! ```

/// Typed HTTP client for the API
pub mod client;

/// Environment configuration
pub mod config;

/// Application constants
pub mod constants;

/// Persistence layer
pub mod database;

/// Unified error handling
pub mod errors;

/// Logging configuration and structured log helpers
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// HTTP routes
pub mod routes;

/// Server bootstrap and shared resources
pub mod server;
