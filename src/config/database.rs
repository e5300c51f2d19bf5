// ABOUTME: Database configuration types for SQLite connections
// ABOUTME: Parses DATABASE_URL into a typed location and carries pool settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::defaults;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Path to `SQLite` database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// Accepts `sqlite:<path>`, `sqlite://<path>`, `sqlite::memory:` and bare file
    /// paths. Other schemes are rejected: the data layer is built on `SQLite`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is empty or uses an unsupported scheme
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AppError::config("DATABASE_URL must not be empty"));
        }

        if let Some(rest) = trimmed.strip_prefix("sqlite:") {
            let path_str = rest.strip_prefix("//").unwrap_or(rest);
            if path_str == ":memory:" || path_str.is_empty() {
                return Ok(Self::Memory);
            }
            return Ok(Self::SQLite {
                path: PathBuf::from(path_str),
            });
        }

        if trimmed.contains("://") {
            return Err(AppError::config(format!(
                "Unsupported database URL '{trimmed}': only sqlite is available"
            )));
        }

        // Fallback: treat as SQLite file path
        Ok(Self::SQLite {
            path: PathBuf::from(trimmed),
        })
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".into(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./recipes.db"),
        }
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database connection and pool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
    /// Maximum number of pooled connections
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DatabaseUrl::default(),
            max_connections: defaults::DATABASE_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    /// Load database configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` or `DATABASE_MAX_CONNECTIONS` is invalid
    pub fn from_env() -> AppResult<Self> {
        let max_connections: u32 = env_var_or(
            "DATABASE_MAX_CONNECTIONS",
            &defaults::DATABASE_MAX_CONNECTIONS.to_string(),
        )
        .parse()
        .map_err(|e| AppError::config(format!("Invalid DATABASE_MAX_CONNECTIONS value: {e}")))?;

        if max_connections == 0 {
            return Err(AppError::config(
                "DATABASE_MAX_CONNECTIONS must be at least 1",
            ));
        }

        Ok(Self {
            url: DatabaseUrl::parse_url(&env_var_or("DATABASE_URL", defaults::DATABASE_URL))?,
            max_connections,
        })
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sqlite_variants() {
        assert_eq!(
            DatabaseUrl::parse_url("sqlite:./recipes.db").unwrap(),
            DatabaseUrl::SQLite {
                path: PathBuf::from("./recipes.db")
            }
        );
        assert_eq!(
            DatabaseUrl::parse_url("sqlite:///tmp/r.db").unwrap(),
            DatabaseUrl::SQLite {
                path: PathBuf::from("/tmp/r.db")
            }
        );
        assert!(DatabaseUrl::parse_url("sqlite::memory:").unwrap().is_memory());
        assert_eq!(
            DatabaseUrl::parse_url("data/recipes.db").unwrap(),
            DatabaseUrl::SQLite {
                path: PathBuf::from("data/recipes.db")
            }
        );
    }

    #[test]
    fn test_parse_rejects_other_schemes() {
        let error = DatabaseUrl::parse_url("postgres://user:pw@localhost/recipes").unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::ConfigInvalid);
        assert!(DatabaseUrl::parse_url("   ").is_err());
    }

    #[test]
    fn test_connection_string() {
        assert_eq!(DatabaseUrl::Memory.to_connection_string(), "sqlite::memory:");
        assert_eq!(DatabaseUrl::default().to_string(), "sqlite:./recipes.db");
    }
}
