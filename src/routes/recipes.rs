// ABOUTME: Route handlers for the Recipes REST API
// ABOUTME: Validates payloads and maps list/create/get/update/delete onto the data layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipes routes
//!
//! Handlers are free functions so `utoipa` can document them. Request bodies
//! are validated here, before any database work, and converted into the data
//! layer's request types.

use crate::{
    constants::limits,
    database::{CreateRecipeRequest, Ingredient, Recipe, UpdateRecipeRequest},
    errors::{AppError, AppResult, ErrorResponse},
    server::ServerResources,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// Ingredient as exposed by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IngredientResponse {
    /// Canonical ingredient identifier
    pub id: i64,
    /// Ingredient name
    #[schema(example = "Salt")]
    pub name: String,
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id,
            name: ingredient.name,
        }
    }
}

/// Recipe as exposed by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipeResponse {
    /// Unique identifier
    pub id: i64,
    /// Display title
    #[schema(example = "Pancakes")]
    pub title: String,
    /// Short description
    pub description: Option<String>,
    /// Preparation steps
    pub instructions: Option<String>,
    /// Rating between 0 and 5
    #[schema(example = 4.5)]
    pub rating: Option<f64>,
    /// Associated ingredients in the order they were given
    pub ingredients: Vec<IngredientResponse>,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
    /// Last update timestamp (RFC 3339)
    pub updated_at: String,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            description: recipe.description,
            instructions: recipe.instructions,
            rating: recipe.rating,
            ingredients: recipe.ingredients.into_iter().map(Into::into).collect(),
            created_at: recipe.created_at.to_rfc3339(),
            updated_at: recipe.updated_at.to_rfc3339(),
        }
    }
}

/// Request body for creating a recipe
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateRecipeBody {
    /// Display title
    #[schema(example = "Pancakes")]
    pub title: String,
    /// Short description
    #[serde(default)]
    #[schema(example = "Fluffy breakfast pancakes")]
    pub description: Option<String>,
    /// Preparation steps
    #[serde(default)]
    #[schema(example = "Mix, rest for ten minutes, fry.")]
    pub instructions: Option<String>,
    /// Rating between 0 and 5
    #[serde(default)]
    #[schema(example = 4.5)]
    pub rating: Option<f64>,
    /// Ingredient names; unknown names create new ingredients
    #[serde(default)]
    #[schema(example = json!(["Flour", "Milk", "Eggs"]))]
    pub ingredient_names: Vec<String>,
}

impl CreateRecipeBody {
    /// Check field rules and convert into a data layer request
    ///
    /// # Errors
    ///
    /// Returns a validation error describing the first offending field
    pub fn validate(self) -> AppResult<CreateRecipeRequest> {
        validate_title(&self.title)?;
        validate_rating(self.rating)?;
        validate_ingredient_names(&self.ingredient_names)?;

        Ok(CreateRecipeRequest {
            title: self.title,
            description: self.description,
            instructions: self.instructions,
            rating: self.rating,
            ingredient_names: self.ingredient_names,
        })
    }
}

/// Request body for a partial recipe update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateRecipeBody {
    /// New title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// New rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 3.0)]
    pub rating: Option<f64>,
    /// Replacement ingredient set; an empty list clears it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient_names: Option<Vec<String>>,
}

impl UpdateRecipeBody {
    /// Check field rules and convert into a data layer request
    ///
    /// # Errors
    ///
    /// Returns a validation error describing the first offending field
    pub fn validate(self) -> AppResult<UpdateRecipeRequest> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        validate_rating(self.rating)?;
        if let Some(names) = &self.ingredient_names {
            validate_ingredient_names(names)?;
        }

        Ok(UpdateRecipeRequest {
            title: self.title,
            description: self.description,
            instructions: self.instructions,
            rating: self.rating,
            ingredient_names: self.ingredient_names,
        })
    }
}

/// Response for a successful delete
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteRecipeResponse {
    /// Confirmation message
    #[schema(example = "Recipe deleted")]
    pub detail: String,
    /// Identifier of the removed recipe
    pub id: i64,
}

fn validate_title(title: &str) -> AppResult<()> {
    if title.trim().is_empty() {
        return Err(AppError::invalid_input("Field 'title' must not be blank")
            .with_details(serde_json::json!({ "field": "title" })));
    }
    Ok(())
}

fn validate_rating(rating: Option<f64>) -> AppResult<()> {
    match rating {
        Some(value)
            if !value.is_finite() || !(limits::MIN_RATING..=limits::MAX_RATING).contains(&value) =>
        {
            Err(AppError::out_of_range(
                "rating",
                limits::MIN_RATING,
                limits::MAX_RATING,
            ))
        }
        _ => Ok(()),
    }
}

fn validate_ingredient_names(names: &[String]) -> AppResult<()> {
    if let Some(index) = names.iter().position(|name| name.trim().is_empty()) {
        return Err(
            AppError::invalid_input("Ingredient names must not be blank").with_details(
                serde_json::json!({ "field": "ingredient_names", "index": index }),
            ),
        );
    }
    Ok(())
}

fn recipe_not_found(recipe_id: i64) -> AppError {
    AppError::not_found(format!("Recipe {recipe_id}"))
        .with_details(serde_json::json!({ "id": recipe_id }))
}

/// List all recipes
#[utoipa::path(
    get,
    path = "/recipes/",
    tag = "recipes",
    responses(
        (status = 200, description = "All recipes ordered by id", body = Vec<RecipeResponse>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn handle_list(
    State(resources): State<Arc<ServerResources>>,
) -> Result<Response, AppError> {
    let recipes = resources.database.recipes().list().await?;
    let response: Vec<RecipeResponse> = recipes.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Create a recipe
#[utoipa::path(
    post,
    path = "/recipes/",
    tag = "recipes",
    request_body = CreateRecipeBody,
    responses(
        (status = 201, description = "Recipe created", body = RecipeResponse),
        (status = 400, description = "Malformed JSON", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn handle_create(
    State(resources): State<Arc<ServerResources>>,
    body: Result<Json<CreateRecipeBody>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(body) = body?;
    let request = body.validate()?;

    let recipe = resources.database.recipes().create(&request).await?;

    let response: RecipeResponse = recipe.into();
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// Get one recipe
#[utoipa::path(
    get,
    path = "/recipes/{recipe_id}",
    tag = "recipes",
    params(("recipe_id" = i64, Path, description = "Recipe identifier")),
    responses(
        (status = 200, description = "Recipe found", body = RecipeResponse),
        (status = 400, description = "Identifier is not an integer", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn handle_get(
    State(resources): State<Arc<ServerResources>>,
    recipe_id: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(recipe_id) = recipe_id?;

    let recipe = resources
        .database
        .recipes()
        .get(recipe_id)
        .await?
        .ok_or_else(|| recipe_not_found(recipe_id))?;

    let response: RecipeResponse = recipe.into();
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Partially update a recipe
#[utoipa::path(
    put,
    path = "/recipes/{recipe_id}",
    tag = "recipes",
    params(("recipe_id" = i64, Path, description = "Recipe identifier")),
    request_body = UpdateRecipeBody,
    responses(
        (status = 200, description = "Recipe updated", body = RecipeResponse),
        (status = 400, description = "Malformed JSON or identifier", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn handle_update(
    State(resources): State<Arc<ServerResources>>,
    recipe_id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateRecipeBody>, JsonRejection>,
) -> Result<Response, AppError> {
    let Path(recipe_id) = recipe_id?;
    let Json(body) = body?;
    let request = body.validate()?;

    let recipe = resources
        .database
        .recipes()
        .update(recipe_id, &request)
        .await?
        .ok_or_else(|| recipe_not_found(recipe_id))?;

    let response: RecipeResponse = recipe.into();
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Delete a recipe
#[utoipa::path(
    delete,
    path = "/recipes/{recipe_id}",
    tag = "recipes",
    params(("recipe_id" = i64, Path, description = "Recipe identifier")),
    responses(
        (status = 200, description = "Recipe deleted", body = DeleteRecipeResponse),
        (status = 400, description = "Identifier is not an integer", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn handle_delete(
    State(resources): State<Arc<ServerResources>>,
    recipe_id: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(recipe_id) = recipe_id?;

    if !resources.database.recipes().delete(recipe_id).await? {
        return Err(recipe_not_found(recipe_id));
    }

    let response = DeleteRecipeResponse {
        detail: "Recipe deleted".to_owned(),
        id: recipe_id,
    };
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Recipes routes
pub struct RecipesRoutes;

impl RecipesRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/recipes", get(handle_list).post(handle_create))
            .route("/recipes/", get(handle_list).post(handle_create))
            .route(
                "/recipes/:recipe_id",
                get(handle_get).put(handle_update).delete(handle_delete),
            )
            .with_state(resources)
    }
}
