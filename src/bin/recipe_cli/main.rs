// ABOUTME: Recipe CLI - command-line client for a running Smart Recipe API server
// ABOUTME: Lists, shows, creates, updates and deletes recipes over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # List recipes as a table
//! recipe-cli list
//!
//! # Create a recipe
//! recipe-cli create --title "Spaghetti Bolognese" --rating 4.5 \
//!     --ingredients "Spaghetti, Tomato, Ground Beef"
//!
//! # Change only the rating
//! recipe-cli update 1 --rating 5
//!
//! # Talk to another server
//! recipe-cli --base-url http://10.0.0.5:8000 get 1
//! ```

mod display;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use smart_recipe_api::{
    client::{parse_ingredient_list, RecipeApiClient},
    constants::defaults,
    routes::{CreateRecipeBody, UpdateRecipeBody},
};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "recipe-cli",
    about = "Smart Recipe API client",
    long_about = "Command-line client for managing recipes on a running Smart Recipe API server.",
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Server base URL
    #[arg(long, global = true, env = "RECIPE_API_URL", default_value = defaults::CLIENT_BASE_URL)]
    base_url: String,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Check that the welcome page is reachable
    Welcome,

    /// Show the getting-started guide
    Help,

    /// List all recipes
    List,

    /// Show one recipe
    Get {
        /// Recipe ID
        id: i64,
    },

    /// Create a recipe
    Create {
        /// Recipe title (required)
        #[arg(long)]
        title: String,

        #[command(flatten)]
        fields: RecipeFields,
    },

    /// Update a recipe; only the given options change
    Update {
        /// Recipe ID
        id: i64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        fields: RecipeFields,
    },

    /// Delete a recipe
    Delete {
        /// Recipe ID
        id: i64,
    },
}

#[derive(Args)]
struct RecipeFields {
    /// Short description
    #[arg(long)]
    description: Option<String>,

    /// Preparation steps
    #[arg(long)]
    instructions: Option<String>,

    /// Rating between 0 and 5
    #[arg(long)]
    rating: Option<f64>,

    /// Comma separated ingredient names, e.g. "Salt, Pepper"
    #[arg(long)]
    ingredients: Option<String>,
}

impl RecipeFields {
    fn ingredient_names(&self) -> Option<Vec<String>> {
        self.ingredients.as_deref().map(parse_ingredient_list)
    }

    fn into_create_body(self, title: String) -> CreateRecipeBody {
        CreateRecipeBody {
            ingredient_names: self.ingredient_names().unwrap_or_default(),
            title,
            description: self.description,
            instructions: self.instructions,
            rating: self.rating,
        }
    }

    fn into_update_body(self, title: Option<String>) -> UpdateRecipeBody {
        UpdateRecipeBody {
            ingredient_names: self.ingredient_names(),
            title,
            description: self.description,
            instructions: self.instructions,
            rating: self.rating,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let client = RecipeApiClient::new(cli.base_url);
    debug!("Using server at {}", client.base_url());

    match cli.command {
        Command::Welcome => {
            client.welcome().await?;
            display::display_welcome(client.base_url());
        }
        Command::Help => {
            let page = client.help().await?;
            display::display_help(&page);
        }
        Command::List => {
            let recipes = client.list_recipes().await?;
            display::display_recipe_table(&recipes);
        }
        Command::Get { id } => {
            let recipe = client.get_recipe(id).await?;
            display::display_json(&format!("Details for Recipe ID {id}"), &recipe)?;
        }
        Command::Create { title, fields } => {
            let body = fields.into_create_body(title);
            let recipe = client.create_recipe(&body).await?;
            display::display_json("Created Recipe", &recipe)?;
        }
        Command::Update { id, title, fields } => {
            let body = fields.into_update_body(title);
            let recipe = client.update_recipe(id, &body).await?;
            display::display_json(&format!("Updated Recipe ID {id}"), &recipe)?;
        }
        Command::Delete { id } => {
            let result = client.delete_recipe(id).await?;
            display::display_json(&format!("Deleted Recipe ID {id}"), &result)?;
        }
    }

    Ok(())
}
