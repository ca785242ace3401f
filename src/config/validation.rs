//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, limits > 0)
//! - Check that enabled auth carries usable credentials
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::AppConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g., "server.bind_address").
    pub field: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn error(field: &str, message: impl Into<String>) -> ValidationError {
    ValidationError {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(error(
            "server.bind_address",
            format!("not a valid socket address: {:?}", config.server.bind_address),
        ));
    }

    if config.server.max_connections == 0 {
        errors.push(error("server.max_connections", "must be greater than zero"));
    }

    if config.server.request_timeout_secs == 0 {
        errors.push(error(
            "server.request_timeout_secs",
            "must be greater than zero",
        ));
    }

    if config.server.max_body_bytes == 0 {
        errors.push(error("server.max_body_bytes", "must be greater than zero"));
    }

    if config.auth.enabled {
        if config.auth.username.is_empty() {
            errors.push(error("auth.username", "required when auth is enabled"));
        }
        if config.auth.password.is_empty() {
            errors.push(error("auth.password", "required when auth is enabled"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
