// ABOUTME: Route module organization and router assembly for the recipe service
// ABOUTME: Merges resource, page, health and documentation routes and applies middleware
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP routes
//!
//! Each domain module exposes a `*Routes::routes()` constructor; [`router`]
//! merges them and wraps the result in the request id and CORS layers.

/// Health check route
pub mod health;
/// `OpenAPI` document, Swagger UI and `ReDoc`
pub mod openapi;
/// Welcome and help pages
pub mod pages;
/// Recipe REST resource
pub mod recipes;

pub use health::HealthRoutes;
pub use openapi::{ApiDoc, OpenApiRoutes};
pub use pages::PageRoutes;
pub use recipes::{
    CreateRecipeBody, DeleteRecipeResponse, IngredientResponse, RecipeResponse, RecipesRoutes,
    UpdateRecipeBody,
};

use crate::middleware::{request_id_middleware, setup_cors};
use crate::server::ServerResources;
use axum::{middleware, Router};
use std::sync::Arc;

/// Build the complete application router
pub fn router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(PageRoutes::routes())
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(RecipesRoutes::routes(resources))
        .merge(OpenApiRoutes::routes())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
}
