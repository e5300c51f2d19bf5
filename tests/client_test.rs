// ABOUTME: End-to-end tests for the typed recipe API client
// ABOUTME: Runs the server on an ephemeral port and drives it through RecipeApiClient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]

mod common;

use smart_recipe_api::{
    client::{parse_ingredient_list, RecipeApiClient},
    errors::ErrorCode,
    routes::{CreateRecipeBody, UpdateRecipeBody},
    server,
};
use tokio::net::TcpListener;

async fn spawn_server() -> RecipeApiClient {
    let resources = common::create_test_resources().await.unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(server::serve(listener, resources));

    RecipeApiClient::new(format!("http://{address}"))
}

fn body(title: &str, ingredients: &str) -> CreateRecipeBody {
    CreateRecipeBody {
        title: title.to_owned(),
        description: None,
        instructions: Some("Boil pasta. Prepare sauce. Combine and serve.".to_owned()),
        rating: Some(4.5),
        ingredient_names: parse_ingredient_list(ingredients),
    }
}

#[tokio::test]
async fn test_client_crud_round_trip() {
    let client = spawn_server().await;

    let created = client
        .create_recipe(&body("Spaghetti Bolognese", "Spaghetti, Tomato , ,Garlic"))
        .await
        .unwrap();
    let names: Vec<&str> = created.ingredients.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Spaghetti", "Tomato", "Garlic"]);

    let fetched = client.get_recipe(created.id).await.unwrap();
    assert_eq!(fetched.title, "Spaghetti Bolognese");

    let updated = client
        .update_recipe(
            created.id,
            &UpdateRecipeBody {
                rating: Some(5.0),
                ..UpdateRecipeBody::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.rating, Some(5.0));
    assert_eq!(updated.instructions, created.instructions);

    let listed = client.list_recipes().await.unwrap();
    assert_eq!(listed.len(), 1);

    let deleted = client.delete_recipe(created.id).await.unwrap();
    assert_eq!(deleted.detail, "Recipe deleted");
    assert_eq!(deleted.id, created.id);
}

#[tokio::test]
async fn test_client_decodes_server_errors() {
    let client = spawn_server().await;

    let missing = client.get_recipe(404).await.unwrap_err();
    assert_eq!(missing.code, ErrorCode::ResourceNotFound);
    assert_eq!(missing.message, "Recipe 404 not found");

    let mut invalid = body("Soup", "Water");
    invalid.rating = Some(10.0);
    let error = client.create_recipe(&invalid).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

#[tokio::test]
async fn test_client_fetches_pages() {
    let client = spawn_server().await;

    assert!(client.welcome().await.unwrap().contains("Welcome"));
    assert!(client.help().await.unwrap().contains("Getting Started"));
}

#[tokio::test]
async fn test_client_reports_unreachable_server() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let client = RecipeApiClient::new(format!("http://{address}"));
    let error = client.list_recipes().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceError);
}
