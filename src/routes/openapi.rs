// ABOUTME: OpenAPI documentation endpoints with Swagger UI and ReDoc for the recipe service
// ABOUTME: Serves the machine-readable document at /openapi.json, Swagger at /docs and ReDoc at /redoc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! `OpenAPI` documentation routes
//!
//! Generated from the `#[utoipa::path]` annotations on the recipe and health
//! handlers.

use axum::Router;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::constants::routes;
use crate::errors::{ErrorResponse, ErrorResponseDetails};
use crate::routes::health::{self, HealthResponse};
use crate::routes::recipes::{
    self, CreateRecipeBody, DeleteRecipeResponse, IngredientResponse, RecipeResponse,
    UpdateRecipeBody,
};

/// `OpenAPI` documentation for the Smart Recipe API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Smart Recipe API",
        version = "1.0.0",
        description = "A RESTful API for managing and discovering recipes. Use /help for a getting-started guide.",
        license(name = "MIT OR Apache-2.0")
    ),
    paths(
        recipes::handle_list,
        recipes::handle_create,
        recipes::handle_get,
        recipes::handle_update,
        recipes::handle_delete,
        health::handle_health,
    ),
    tags(
        (name = "recipes", description = "Recipe and ingredient management"),
        (name = "health", description = "Service monitoring")
    ),
    components(
        schemas(
            RecipeResponse,
            IngredientResponse,
            CreateRecipeBody,
            UpdateRecipeBody,
            DeleteRecipeResponse,
            HealthResponse,
            ErrorResponse,
            ErrorResponseDetails,
        )
    ),
    servers(
        (url = "http://127.0.0.1:8000", description = "Local development server")
    )
)]
pub struct ApiDoc;

/// `OpenAPI` routes provider
pub struct OpenApiRoutes;

impl OpenApiRoutes {
    /// Create `OpenAPI` documentation routes
    ///
    /// Provides:
    /// - `/docs` - Interactive Swagger UI documentation
    /// - `/redoc` - `ReDoc` documentation
    /// - `/openapi.json` - Raw `OpenAPI` 3 JSON document
    pub fn routes<S: Clone + Send + Sync + 'static>() -> Router<S> {
        Router::new()
            .merge(SwaggerUi::new(routes::DOCS).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
            .merge(Redoc::with_url(routes::REDOC, ApiDoc::openapi()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_recipe_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/recipes/"));
        assert!(doc.paths.paths.contains_key("/recipes/{recipe_id}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
