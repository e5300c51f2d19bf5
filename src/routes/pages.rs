// ABOUTME: Welcome and getting-started HTML pages for the recipe service
// ABOUTME: Renders the landing page and a guide listing endpoints with a sample payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{routes, service_names};
use axum::{response::Html, routing::get, Router};
use std::fmt::Write;

const PAGE_STYLE: &str = "font-family: 'Segoe UI', sans-serif; background-color: #f5f5f5; \
                          text-align: center; padding-top: 50px;";

/// Endpoints shown in the guide, as (method and path, summary)
const ENDPOINTS: [(&str, &str); 6] = [
    ("GET /recipes/", "Retrieve a list of recipes."),
    ("POST /recipes/", "Create a new recipe. (Requires JSON payload.)"),
    (
        "GET /recipes/{recipe_id}",
        "Retrieve details of a specific recipe.",
    ),
    ("PUT /recipes/{recipe_id}", "Update an existing recipe."),
    ("DELETE /recipes/{recipe_id}", "Delete a recipe."),
    ("GET /help", "View this help message."),
];

/// Sample body for `POST /recipes/`
pub const SAMPLE_PAYLOAD: &str = r#"{
  "title": "Spaghetti Bolognese",
  "description": "A classic Italian pasta dish",
  "instructions": "Boil pasta. Prepare sauce. Combine and serve.",
  "rating": 4.5,
  "ingredient_names": ["Spaghetti", "Tomato", "Ground Beef", "Onion", "Garlic"]
}"#;

/// Render the welcome page
#[must_use]
pub fn welcome_page() -> String {
    let title = service_names::SMART_RECIPE_API;
    format!(
        r#"<!DOCTYPE html>
<html>
  <head><title>{title} - Welcome</title></head>
  <body style="{PAGE_STYLE}">
    <h1>Welcome to the {title}! &#127858;</h1>
    <p>Manage and discover delicious recipes with ease.</p>
    <p>Visit <a href="{docs}">{docs}</a> for interactive API docs,
       <a href="{redoc}">{redoc}</a> for alternative docs,
       and <a href="{help}">{help}</a> for a getting started guide.</p>
  </body>
</html>
"#,
        docs = routes::DOCS,
        redoc = routes::REDOC,
        help = routes::HELP,
    )
}

/// Render the getting-started guide
#[must_use]
pub fn help_page() -> String {
    let mut rows = String::new();
    for (endpoint, summary) in ENDPOINTS {
        // Writing to a String cannot fail
        let _ = writeln!(
            rows,
            "        <tr><td><code>{endpoint}</code></td><td>{summary}</td></tr>"
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html>
  <head><title>{title} - Getting Started</title></head>
  <body style="{PAGE_STYLE}">
    <h1>Getting Started</h1>
    <h2>Endpoints</h2>
    <table style="margin: 0 auto; text-align: left;">
{rows}    </table>
    <h2>Sample POST Payload for /recipes/</h2>
    <pre style="display: inline-block; text-align: left;">{payload}</pre>
    <p>Send it with <code>Content-Type: application/json</code>.
       Unknown ingredient names are created; known names are reused.</p>
  </body>
</html>
"#,
        title = service_names::SMART_RECIPE_API,
        payload = SAMPLE_PAYLOAD,
    )
}

async fn handle_welcome() -> Html<String> {
    Html(welcome_page())
}

async fn handle_help() -> Html<String> {
    Html(help_page())
}

/// Static page routes
pub struct PageRoutes;

impl PageRoutes {
    /// Create the welcome and help routes
    pub fn routes() -> Router {
        Router::new()
            .route(routes::WELCOME, get(handle_welcome))
            .route(routes::HELP, get(handle_help))
    }
}
