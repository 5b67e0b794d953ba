//! Typed error handling for the BookEasy front end
//!
//! The presenter pipeline itself never fails: empty filters, unknown fields
//! and out-of-range pages all degrade to empty output. Errors only come from
//! the edges of the system.
//!
//! # Error Categories
//!
//! - [`ConfigError`]: configuration file loading and parsing
//! - [`FormError`]: client-side validation of submitted forms
//! - [`TransportError`]: network submissions and response decoding
//! - [`RenderError`]: HTML template rendering
//!
//! # Example
//!
//! ```rust,ignore
//! match FrontendConfig::from_yaml_file("bookeasy.yaml") {
//!     Ok(config) => serve(config).await?,
//!     Err(BookEasyError::Config(ConfigError::Io { path, .. })) => {
//!         tracing::warn!(%path, "no config file, using defaults");
//!         serve(FrontendConfig::default()).await?
//!     }
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type of the crate
#[derive(Debug, Error)]
pub enum BookEasyError {
    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Form validation errors
    #[error(transparent)]
    Form(#[from] FormError),

    /// Network / decoding errors
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Template rendering errors
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Error response body for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl BookEasyError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookEasyError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookEasyError::Form(_) => StatusCode::BAD_REQUEST,
            BookEasyError::Transport(_) => StatusCode::BAD_GATEWAY,
            BookEasyError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            BookEasyError::Config(_) => "CONFIG_ERROR",
            BookEasyError::Form(e) => e.error_code(),
            BookEasyError::Transport(e) => e.error_code(),
            BookEasyError::Render(_) => "RENDER_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for BookEasyError {
    fn into_response(self) -> Response {
        tracing::warn!(code = self.error_code(), error = %self, "request failed");
        let status = self.status_code();
        (status, Json(self.to_response())).into_response()
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors raised while loading a [`FrontendConfig`](crate::config::FrontendConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The YAML could not be parsed
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A value parsed but is not usable
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

// =============================================================================
// Form Errors
// =============================================================================

/// Client-side validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// One or more required fields were left empty
    #[error("Missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },
}

impl FormError {
    pub fn error_code(&self) -> &'static str {
        match self {
            FormError::MissingFields { .. } => "MISSING_FIELDS",
        }
    }
}

impl From<validator::ValidationErrors> for FormError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        FormError::MissingFields { fields }
    }
}

// =============================================================================
// Transport Errors
// =============================================================================

/// Failures while talking to the backend
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced a response
    #[error("Request to '{url}' failed: {message}")]
    Network { url: String, message: String },

    /// The response body was not valid JSON
    #[error("Response from '{url}' is not valid JSON: {message}")]
    Decode { url: String, message: String },
}

impl TransportError {
    pub fn error_code(&self) -> &'static str {
        match self {
            TransportError::Network { .. } => "NETWORK_ERROR",
            TransportError::Decode { .. } => "DECODE_ERROR",
        }
    }
}

// =============================================================================
// Render Errors
// =============================================================================

/// Template failures
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<tera::Error> for BookEasyError {
    fn from(err: tera::Error) -> Self {
        BookEasyError::Render(RenderError::Template(err))
    }
}

impl From<validator::ValidationErrors> for BookEasyError {
    fn from(err: validator::ValidationErrors) -> Self {
        BookEasyError::Form(err.into())
    }
}

impl From<serde_yaml::Error> for BookEasyError {
    fn from(err: serde_yaml::Error) -> Self {
        BookEasyError::Config(ConfigError::Parse(err))
    }
}

/// Result alias used across the crate
pub type Result<T, E = BookEasyError> = std::result::Result<T, E>;
