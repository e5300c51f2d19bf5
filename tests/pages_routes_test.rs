// ABOUTME: Integration tests for the welcome, help, health and documentation routes
// ABOUTME: Verifies HTML pages render and the OpenAPI document, Swagger UI and ReDoc are served
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]

mod common;
mod helpers;

use helpers::axum_test::AxumTestRequest;
use serde_json::Value;

#[tokio::test]
async fn test_welcome_page_links_to_docs() {
    let (app, _) = common::create_test_app().await.unwrap();

    let response = AxumTestRequest::get("/").send(app).await;
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.header("content-type"),
        Some("text/html; charset=utf-8")
    );

    let page = response.text();
    assert!(page.contains("Welcome to the Smart Recipe API!"));
    assert!(page.contains("/docs"));
    assert!(page.contains("/redoc"));
    assert!(page.contains("/help"));
}

#[tokio::test]
async fn test_help_page_lists_endpoints_and_sample_payload() {
    let (app, _) = common::create_test_app().await.unwrap();

    let page = AxumTestRequest::get("/help").send(app).await.text();
    assert!(page.contains("POST /recipes/"));
    assert!(page.contains("DELETE /recipes/{recipe_id}"));
    assert!(page.contains("Spaghetti Bolognese"));
}

#[tokio::test]
async fn test_health_reports_connected_database() {
    let (app, _) = common::create_test_app().await.unwrap();

    let response = AxumTestRequest::get("/health").send(app).await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn test_health_reports_unavailable_after_pool_closed() {
    let (app, resources) = common::create_test_app().await.unwrap();
    resources.database.pool().close().await;

    let response = AxumTestRequest::get("/health").send(app).await;
    assert_eq!(response.status(), 503);
    let body: Value = response.json();
    assert_eq!(body["status"], "unhealthy");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (app, _) = common::create_test_app().await.unwrap();

    let response = AxumTestRequest::get("/openapi.json").send(app).await;
    assert_eq!(response.status(), 200);
    let doc: Value = response.json();
    assert_eq!(doc["info"]["title"], "Smart Recipe API");
    assert!(doc["paths"]["/recipes/"]["post"].is_object());
    assert!(doc["paths"]["/recipes/{recipe_id}"]["delete"].is_object());
    assert!(doc["components"]["schemas"]["RecipeResponse"].is_object());
}

#[tokio::test]
async fn test_interactive_docs_are_served() {
    let (app, _) = common::create_test_app().await.unwrap();

    let redoc = AxumTestRequest::get("/redoc").send(app.clone()).await;
    assert_eq!(redoc.status(), 200);
    assert!(redoc.text().to_lowercase().contains("redoc"));

    // Swagger UI redirects the bare path to its index page
    let docs = AxumTestRequest::get("/docs/").send(app).await;
    assert_eq!(docs.status(), 200);
}
