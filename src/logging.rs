// ABOUTME: Logging configuration and structured logging setup for observability and debugging
// ABOUTME: Configures log levels, formatters, and output destinations for the recipe service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Production-ready logging configuration with structured output

use crate::config::Environment;
use crate::constants::service_names;
use anyhow::Result;
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, testing, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to pretty output
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }

    /// Format used when `LOG_FORMAT` is unset
    #[must_use]
    pub const fn default_for(environment: Environment) -> Self {
        if environment.is_production() {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            service_name: service_names::SMART_RECIPE_API_TARGET.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let environment = Environment::from_str_or_default(
            &env::var("ENVIRONMENT").unwrap_or_default(),
        );
        let mut config = Self::for_environment(environment);

        if let Ok(value) = env::var("LOG_FORMAT") {
            config.format = LogFormat::parse(&value);
        }
        if let Ok(level) = env::var("RUST_LOG") {
            config.level = level;
        }
        if env::var("LOG_INCLUDE_LOCATION").is_ok() {
            config.include_location = true;
        }
        if let Ok(service_name) = env::var("SERVICE_NAME") {
            config.service_name = service_name;
        }
        config
    }

    /// Defaults for an environment: production logs JSON with source locations
    #[must_use]
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            format: LogFormat::default_for(environment),
            include_location: environment.is_production(),
            environment: environment.to_string(),
            ..Self::default()
        }
    }

    /// Build the filter: the configured level plus noise reduction for dependencies
    fn env_filter(&self) -> EnvFilter {
        let mut filter = EnvFilter::new(&self.level);
        for directive in ["hyper=warn", "sqlx=warn", "tower_http=info"] {
            if let Ok(parsed) = directive.parse() {
                filter = filter.add_directive(parsed);
            }
        }
        filter
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .with_span_events(FmtSpan::NONE)
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stdout);

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(io::stdout);

                registry.with(compact_layer).try_init()?;
            }
        }

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "{} starting up",
            service_names::SMART_RECIPE_API
        );

        Ok(())
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Application-specific logging utilities
pub struct AppLogger;

impl AppLogger {
    /// Log a completed `API` request
    pub fn log_api_request(
        request_id: &str,
        method: &str,
        path: &str,
        status: u16,
        duration_ms: u64,
    ) {
        info!(
            request.id = %request_id,
            http.method = %method,
            http.path = %path,
            http.status = %status,
            http.duration_ms = %duration_ms,
            "HTTP request"
        );
    }

    /// Log a recipe mutation
    pub fn log_recipe_event(event: &str, recipe_id: i64, ingredient_count: usize) {
        info!(
            recipe.id = %recipe_id,
            recipe.event = %event,
            recipe.ingredients = %ingredient_count,
            "Recipe {event}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Pretty);
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.service_name, "smart_recipe_api");
    }

    #[test]
    fn test_production_aliases_select_json_output() {
        for name in ["production", "prod", "PROD", "Production"] {
            let config = LoggingConfig::for_environment(Environment::from_str_or_default(name));
            assert_eq!(config.format, LogFormat::Json, "environment {name}");
            assert!(config.include_location);
            assert_eq!(config.environment, "production");
        }
    }

    #[test]
    fn test_other_environments_select_pretty_output() {
        for name in ["development", "test", "", "staging"] {
            let config = LoggingConfig::for_environment(Environment::from_str_or_default(name));
            assert_eq!(config.format, LogFormat::Pretty, "environment {name}");
            assert!(!config.include_location);
        }
        assert_eq!(
            LoggingConfig::for_environment(Environment::Testing).environment,
            "testing"
        );
    }
}
