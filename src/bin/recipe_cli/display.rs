// ABOUTME: Output formatting helpers for recipe-cli
// ABOUTME: Prints recipe tables, pretty JSON and the help page as plain text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use serde::Serialize;
use smart_recipe_api::routes::RecipeResponse;

const RULE_WIDTH: usize = 60;

/// Confirm the welcome endpoint answered
pub fn display_welcome(base_url: &str) {
    println!("Welcome endpoint is up at {base_url}/");
    println!("Access {base_url}/docs for interactive API docs.");
}

/// Print the help page with markup removed
pub fn display_help(page: &str) {
    println!("Help Information:");
    println!("{}", "=".repeat(RULE_WIDTH));
    for line in strip_tags(page).lines() {
        let line = line.trim_end();
        if !line.trim().is_empty() {
            println!("{line}");
        }
    }
}

/// Print recipes as an aligned id/title/rating table
pub fn display_recipe_table(recipes: &[RecipeResponse]) {
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }

    let title_width = recipes
        .iter()
        .map(|recipe| recipe.title.chars().count())
        .max()
        .unwrap_or(0)
        .max("Title".len());

    println!("{:>6}  {:<title_width$}  {:>6}", "ID", "Title", "Rating");
    println!("{}", "-".repeat(6 + 2 + title_width + 2 + 6));
    for recipe in recipes {
        let rating = recipe
            .rating
            .map_or_else(|| "N/A".to_owned(), |rating| rating.to_string());
        println!("{:>6}  {:<title_width$}  {:>6}", recipe.id, recipe.title, rating);
    }
}

/// Print a heading followed by pretty JSON
pub fn display_json<T: Serialize>(heading: &str, value: &T) -> Result<()> {
    println!("{heading}:");
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}
