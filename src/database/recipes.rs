// ABOUTME: Database operations for recipes and their shared ingredients
// ABOUTME: Handles CRUD for recipes with lookup-or-create ingredient deduplication
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{
    sqlite::{SqliteConnection, SqliteRow},
    Row, SqlitePool,
};
use std::collections::HashMap;

const RECIPE_COLUMNS: &str =
    "id, title, description, instructions, rating, created_at, updated_at";

/// A canonical ingredient row, shared by every recipe that names it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique identifier
    pub id: i64,
    /// Exact name; unique across the table
    pub name: String,
}

/// A stored recipe with its ingredients in payload order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier assigned on insert
    pub id: i64,
    /// Display title
    pub title: String,
    /// Short description of the dish
    pub description: Option<String>,
    /// Preparation steps
    pub instructions: Option<String>,
    /// Rating between 0 and 5
    pub rating: Option<f64>,
    /// Associated ingredients
    pub ingredients: Vec<Ingredient>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Names of the associated ingredients, in order
    #[must_use]
    pub fn ingredient_names(&self) -> Vec<&str> {
        self.ingredients.iter().map(|i| i.name.as_str()).collect()
    }
}

/// Validated input for creating a recipe
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateRecipeRequest {
    /// Display title
    pub title: String,
    /// Optional description
    pub description: Option<String>,
    /// Optional instructions
    pub instructions: Option<String>,
    /// Optional rating
    pub rating: Option<f64>,
    /// Ingredient names; resolved to canonical rows on insert
    pub ingredient_names: Vec<String>,
}

/// Validated partial update; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateRecipeRequest {
    /// New title (if provided)
    pub title: Option<String>,
    /// New description (if provided)
    pub description: Option<String>,
    /// New instructions (if provided)
    pub instructions: Option<String>,
    /// New rating (if provided)
    pub rating: Option<f64>,
    /// Replacement ingredient set (if provided)
    pub ingredient_names: Option<Vec<String>>,
}

/// Recipe database operations manager
pub struct RecipesManager {
    pool: SqlitePool,
}

impl RecipesManager {
    /// Create a new recipes manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a recipe and associate its ingredients in one transaction
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn create(&self, request: &CreateRecipeRequest) -> AppResult<Recipe> {
        let now = Utc::now();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let result = sqlx::query(
            r"
            INSERT INTO recipes (title, description, instructions, rating, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            ",
        )
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.instructions)
        .bind(request.rating)
        .bind(now.to_rfc3339())
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to create recipe: {e}")))?;

        let id = result.last_insert_rowid();
        let ingredients = link_ingredients(&mut tx, id, &request.ingredient_names).await?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit recipe {id}: {e}")))?;

        AppLogger::log_recipe_event("created", id, ingredients.len());

        Ok(Recipe {
            id,
            title: request.title.clone(),
            description: request.description.clone(),
            instructions: request.instructions.clone(),
            rating: request.rating,
            ingredients,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a recipe by ID
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn get(&self, recipe_id: i64) -> AppResult<Option<Recipe>> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| AppError::database(format!("Failed to acquire connection: {e}")))?;

        fetch_recipe(&mut conn, recipe_id).await
    }

    /// List every recipe ordered by ID
    ///
    /// Ingredients for all recipes are loaded with a single joined query.
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn list(&self) -> AppResult<Vec<Recipe>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let rows = sqlx::query(&format!("SELECT {RECIPE_COLUMNS} FROM recipes ORDER BY id"))
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to list recipes: {e}")))?;

        let links = sqlx::query(
            r"
            SELECT ri.recipe_id, i.id, i.name
            FROM recipe_ingredients ri
            JOIN ingredients i ON i.id = ri.ingredient_id
            ORDER BY ri.recipe_id, ri.position
            ",
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to list recipe ingredients: {e}")))?;

        let mut by_recipe: HashMap<i64, Vec<Ingredient>> = HashMap::new();
        for link in &links {
            let recipe_id: i64 = link.try_get("recipe_id")?;
            by_recipe
                .entry(recipe_id)
                .or_default()
                .push(row_to_ingredient(link)?);
        }

        rows.iter()
            .map(|row| {
                let id: i64 = row.try_get("id")?;
                row_to_recipe(row, by_recipe.remove(&id).unwrap_or_default())
            })
            .collect()
    }

    /// Apply a partial update
    ///
    /// Absent fields keep their stored values. A provided ingredient list
    /// replaces the whole association set.
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn update(
        &self,
        recipe_id: i64,
        request: &UpdateRecipeRequest,
    ) -> AppResult<Option<Recipe>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let updated = sqlx::query(
            r"
            UPDATE recipes SET
                title = COALESCE($1, title),
                description = COALESCE($2, description),
                instructions = COALESCE($3, instructions),
                rating = COALESCE($4, rating),
                updated_at = $5
            WHERE id = $6
            ",
        )
        .bind(request.title.as_deref())
        .bind(request.description.as_deref())
        .bind(request.instructions.as_deref())
        .bind(request.rating)
        .bind(Utc::now().to_rfc3339())
        .bind(recipe_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to update recipe {recipe_id}: {e}")))?;

        if updated.rows_affected() == 0 {
            return Ok(None);
        }

        if let Some(names) = &request.ingredient_names {
            sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = $1")
                .bind(recipe_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::database(format!(
                        "Failed to clear ingredients of recipe {recipe_id}: {e}"
                    ))
                })?;
            link_ingredients(&mut tx, recipe_id, names).await?;
        }

        let recipe = fetch_recipe(&mut tx, recipe_id).await?;

        tx.commit().await.map_err(|e| {
            AppError::database(format!("Failed to commit recipe {recipe_id}: {e}"))
        })?;

        if let Some(recipe) = &recipe {
            AppLogger::log_recipe_event("updated", recipe_id, recipe.ingredients.len());
        }

        Ok(recipe)
    }

    /// Delete a recipe
    ///
    /// Association rows cascade; shared ingredient rows are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn delete(&self, recipe_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(recipe_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete recipe {recipe_id}: {e}")))?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            AppLogger::log_recipe_event("deleted", recipe_id, 0);
        }
        Ok(deleted)
    }

    /// List every canonical ingredient ordered by ID
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn list_ingredients(&self) -> AppResult<Vec<Ingredient>> {
        let rows = sqlx::query("SELECT id, name FROM ingredients ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list ingredients: {e}")))?;

        rows.iter().map(row_to_ingredient).collect()
    }
}

/// Load one recipe and its ordered ingredients on the given connection
async fn fetch_recipe(conn: &mut SqliteConnection, recipe_id: i64) -> AppResult<Option<Recipe>> {
    let row = sqlx::query(&format!(
        "SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = $1"
    ))
    .bind(recipe_id)
    .fetch_optional(&mut *conn)
    .await
    .map_err(|e| AppError::database(format!("Failed to get recipe {recipe_id}: {e}")))?;

    let Some(row) = row else {
        return Ok(None);
    };

    let ingredients = sqlx::query(
        r"
        SELECT i.id, i.name
        FROM recipe_ingredients ri
        JOIN ingredients i ON i.id = ri.ingredient_id
        WHERE ri.recipe_id = $1
        ORDER BY ri.position
        ",
    )
    .bind(recipe_id)
    .fetch_all(&mut *conn)
    .await
    .map_err(|e| {
        AppError::database(format!(
            "Failed to get ingredients of recipe {recipe_id}: {e}"
        ))
    })?
    .iter()
    .map(row_to_ingredient)
    .collect::<AppResult<Vec<_>>>()?;

    row_to_recipe(&row, ingredients).map(Some)
}

/// Resolve names to canonical ingredients and link them to the recipe
///
/// Repeated names within one list produce a single association; the first
/// occurrence decides the position.
async fn link_ingredients(
    conn: &mut SqliteConnection,
    recipe_id: i64,
    names: &[String],
) -> AppResult<Vec<Ingredient>> {
    let mut linked: Vec<Ingredient> = Vec::with_capacity(names.len());

    for name in names {
        if linked.iter().any(|ingredient| &ingredient.name == name) {
            continue;
        }

        let ingredient = resolve_ingredient(conn, name).await?;
        let position = i64::try_from(linked.len()).unwrap_or(i64::MAX);

        sqlx::query(
            "INSERT INTO recipe_ingredients (recipe_id, ingredient_id, position) VALUES ($1, $2, $3)",
        )
        .bind(recipe_id)
        .bind(ingredient.id)
        .bind(position)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            AppError::database(format!(
                "Failed to link ingredient '{name}' to recipe {recipe_id}: {e}"
            ))
        })?;

        linked.push(ingredient);
    }

    Ok(linked)
}

/// Look up an ingredient by exact name, inserting it on first reference
async fn resolve_ingredient(conn: &mut SqliteConnection, name: &str) -> AppResult<Ingredient> {
    sqlx::query("INSERT INTO ingredients (name) VALUES ($1) ON CONFLICT(name) DO NOTHING")
        .bind(name)
        .execute(&mut *conn)
        .await
        .map_err(|e| AppError::database(format!("Failed to create ingredient '{name}': {e}")))?;

    let row = sqlx::query("SELECT id, name FROM ingredients WHERE name = $1")
        .bind(name)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| AppError::database(format!("Failed to resolve ingredient '{name}': {e}")))?;

    row_to_ingredient(&row)
}

fn row_to_ingredient(row: &SqliteRow) -> AppResult<Ingredient> {
    Ok(Ingredient {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
    })
}

fn row_to_recipe(row: &SqliteRow, ingredients: Vec<Ingredient>) -> AppResult<Recipe> {
    let created_at: String = row.try_get("created_at")?;
    let updated_at: String = row.try_get("updated_at")?;

    Ok(Recipe {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        instructions: row.try_get("instructions")?,
        rating: row.try_get("rating")?,
        ingredients,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}

fn parse_timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::database(format!("Invalid timestamp '{value}': {e}")))
}
