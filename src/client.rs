// ABOUTME: Typed HTTP client for the Smart Recipe API
// ABOUTME: Wraps reqwest calls to every endpoint and decodes server errors back into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe API client
//!
//! Used by the `recipe-cli` binary and by integration tests that run a real
//! listener. Error bodies produced by the server are turned back into
//! [`AppError`] values carrying the server's [`ErrorCode`](crate::errors::ErrorCode).

use crate::constants::{routes, service_names};
use crate::errors::{AppError, AppResult, ErrorResponse};
use crate::routes::{CreateRecipeBody, DeleteRecipeResponse, RecipeResponse, UpdateRecipeBody};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Client for a running recipe server
#[derive(Debug, Clone)]
pub struct RecipeApiClient {
    client: Client,
    base_url: String,
}

impl RecipeApiClient {
    /// Create a client for the given base URL, e.g. `http://127.0.0.1:8000`
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn recipe_url(&self, recipe_id: i64) -> String {
        self.url(&format!("{}{recipe_id}", routes::RECIPES))
    }

    /// Fetch the welcome page
    ///
    /// # Errors
    ///
    /// Returns an error if the server is unreachable or answers with an error
    pub async fn welcome(&self) -> AppResult<String> {
        self.get_text(routes::WELCOME).await
    }

    /// Fetch the getting-started guide
    ///
    /// # Errors
    ///
    /// Returns an error if the server is unreachable or answers with an error
    pub async fn help(&self) -> AppResult<String> {
        self.get_text(routes::HELP).await
    }

    /// List all recipes
    ///
    /// # Errors
    ///
    /// Returns an error if the server is unreachable or answers with an error
    pub async fn list_recipes(&self) -> AppResult<Vec<RecipeResponse>> {
        let response = self
            .client
            .get(self.url(routes::RECIPES))
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    /// Fetch one recipe
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for unknown ids, or a transport error
    pub async fn get_recipe(&self, recipe_id: i64) -> AppResult<RecipeResponse> {
        let response = self
            .client
            .get(self.recipe_url(recipe_id))
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    /// Create a recipe
    ///
    /// # Errors
    ///
    /// Returns the server's validation error, or a transport error
    pub async fn create_recipe(&self, body: &CreateRecipeBody) -> AppResult<RecipeResponse> {
        let response = self
            .client
            .post(self.url(routes::RECIPES))
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    /// Partially update a recipe
    ///
    /// # Errors
    ///
    /// Returns the server's not-found or validation error, or a transport error
    pub async fn update_recipe(
        &self,
        recipe_id: i64,
        body: &UpdateRecipeBody,
    ) -> AppResult<RecipeResponse> {
        let response = self
            .client
            .put(self.recipe_url(recipe_id))
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    /// Delete a recipe
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for unknown ids, or a transport error
    pub async fn delete_recipe(&self, recipe_id: i64) -> AppResult<DeleteRecipeResponse> {
        let response = self
            .client
            .delete(self.recipe_url(recipe_id))
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    async fn get_text(&self, path: &str) -> AppResult<String> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        response.text().await.map_err(transport_error)
    }
}

/// Split a comma separated ingredient list, trimming and dropping blank entries
#[must_use]
pub fn parse_ingredient_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

fn transport_error(error: reqwest::Error) -> AppError {
    AppError::external_service(service_names::SMART_RECIPE_API, error.to_string())
        .with_source(error)
}

async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }
    response.json::<T>().await.map_err(transport_error)
}

async fn error_from_response(response: Response) -> AppError {
    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => return transport_error(e),
    };
    debug!(status = %status, "Server returned an error body");

    serde_json::from_str::<ErrorResponse>(&body).map_or_else(
        |_| {
            AppError::external_service(
                service_names::SMART_RECIPE_API,
                format!("HTTP {status}: {body}"),
            )
        },
        AppError::from,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ingredient_list_trims_and_drops_blanks() {
        assert_eq!(
            parse_ingredient_list(" Salt, Pepper ,, ,Olive Oil"),
            vec!["Salt", "Pepper", "Olive Oil"]
        );
        assert!(parse_ingredient_list("").is_empty());
    }

    #[test]
    fn test_base_url_trailing_slash_is_removed() {
        let client = RecipeApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.recipe_url(3), "http://localhost:8000/recipes/3");
    }
}
