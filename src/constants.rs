// ABOUTME: Application constants for the Smart Recipe API
// ABOUTME: Service identity, network defaults, route paths and validation limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain.

/// Service identity used in logs, `OpenAPI` info and the HTML pages
pub mod service_names {
    /// Human readable service title
    pub const SMART_RECIPE_API: &str = "Smart Recipe API";
    /// Service name used as the structured logging target
    pub const SMART_RECIPE_API_TARGET: &str = "smart_recipe_api";
}

/// Network and storage defaults
pub mod defaults {
    /// Default bind host
    pub const HOST: &str = "127.0.0.1";
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8000;
    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./recipes.db";
    /// Default pool size
    pub const DATABASE_MAX_CONNECTIONS: u32 = 5;
    /// Default base URL used by the command-line client
    pub const CLIENT_BASE_URL: &str = "http://127.0.0.1:8000";
}

/// Route paths exposed by the HTTP server
pub mod routes {
    /// Welcome page
    pub const WELCOME: &str = "/";
    /// Getting started guide
    pub const HELP: &str = "/help";
    /// Health check
    pub const HEALTH: &str = "/health";
    /// Swagger UI
    pub const DOCS: &str = "/docs";
    /// `ReDoc` documentation
    pub const REDOC: &str = "/redoc";
    /// Raw `OpenAPI` document
    pub const OPENAPI_JSON: &str = "/openapi.json";
    /// Recipe collection
    pub const RECIPES: &str = "/recipes/";
}

/// Input validation limits
pub mod limits {
    /// Lowest accepted rating
    pub const MIN_RATING: f64 = 0.0;
    /// Highest accepted rating
    pub const MAX_RATING: f64 = 5.0;
}

/// Name of the header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";
