// ABOUTME: Server binary for the Smart Recipe API
// ABOUTME: Loads configuration, opens the database and serves the REST API with docs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Smart Recipe API Server Binary
//!
//! Starts the recipe REST service. Configuration comes from environment
//! variables; `--http-port` and `--database-url` override them.

use anyhow::Result;
use clap::Parser;
use smart_recipe_api::{
    config::{DatabaseUrl, ServerConfig},
    constants::{routes, service_names},
    database::Database,
    logging,
    server::{self, ServerResources},
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "smart-recipe-api")]
#[command(about = "Smart Recipe API - manage and discover recipes over REST")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL (e.g. `sqlite:./recipes.db` or `sqlite::memory:`)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url.as_deref() {
        config.database.url = DatabaseUrl::parse_url(database_url)?;
    }

    logging::init_from_env()?;

    info!("{}", config.summary());

    let database = Database::new(&config.database).await?;

    display_startup_messages(&config);
    display_available_endpoints(&config);

    let resources = Arc::new(ServerResources::new(database, config));

    if let Err(e) = server::run(resources).await {
        error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}

fn display_startup_messages(config: &ServerConfig) {
    let base = config.base_url();
    info!("{} has started!", service_names::SMART_RECIPE_API);
    info!(
        "Visit {base}{} for the welcome page with instructions.",
        routes::WELCOME
    );
    info!("Visit {base}{} for interactive API docs.", routes::DOCS);
    info!(
        "Visit {base}{} for alternative documentation.",
        routes::REDOC
    );
    info!("Visit {base}{} for a getting started guide.", routes::HELP);
}

#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let base = config.base_url();
    info!("=== Available API Endpoints ===");
    info!("Recipes:");
    info!("   List Recipes:      GET    {base}/recipes/");
    info!("   Create Recipe:     POST   {base}/recipes/");
    info!("   Get Recipe:        GET    {base}/recipes/{{recipe_id}}");
    info!("   Update Recipe:     PUT    {base}/recipes/{{recipe_id}}");
    info!("   Delete Recipe:     DELETE {base}/recipes/{{recipe_id}}");
    info!("Monitoring & Docs:");
    info!("   Health:            GET    {base}{}", routes::HEALTH);
    info!("   OpenAPI Document:  GET    {base}{}", routes::OPENAPI_JSON);
    info!("=== End of Endpoint List ===");
}
