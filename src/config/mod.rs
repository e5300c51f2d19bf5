// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Loads network, database, CORS and environment settings from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the Smart Recipe API
//!
//! - **Environment**: server configuration from environment variables
//! - **Database**: type-safe database URL and pool settings

/// Database connection configuration
pub mod database;
/// Environment and server configuration
pub mod environment;

pub use database::{DatabaseConfig, DatabaseUrl};
pub use environment::{CorsConfig, Environment, ServerConfig};
