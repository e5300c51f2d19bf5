// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory database, server resources and router helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `smart_recipe_api`

use anyhow::Result;
use axum::Router;
use smart_recipe_api::{
    config::{DatabaseConfig, DatabaseUrl, Environment, ServerConfig},
    database::{CreateRecipeRequest, Database},
    routes,
    server::ServerResources,
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG raises verbosity when debugging a failing test
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::in_memory().await?)
}

/// Configuration pointing at an in-memory database
pub fn create_test_config() -> ServerConfig {
    ServerConfig {
        environment: Environment::Testing,
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
            max_connections: 1,
        },
        ..ServerConfig::default()
    }
}

/// Server resources backed by a fresh in-memory database
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    Ok(Arc::new(ServerResources::new(
        database,
        create_test_config(),
    )))
}

/// Complete application router plus the resources behind it
pub async fn create_test_app() -> Result<(Router, Arc<ServerResources>)> {
    let resources = create_test_resources().await?;
    Ok((routes::router(Arc::clone(&resources)), resources))
}

/// Minimal valid create request
pub fn recipe_request(title: &str, ingredients: &[&str]) -> CreateRecipeRequest {
    CreateRecipeRequest {
        title: title.to_owned(),
        description: Some(format!("{title} description")),
        instructions: Some("Combine and serve.".to_owned()),
        rating: Some(4.0),
        ingredient_names: ingredients.iter().map(|name| (*name).to_owned()).collect(),
    }
}
