//! Error types for the NutriView CLI

use thiserror::Error;

/// Result type alias for NutriView operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure a view already phrased for the user
    #[error("{0}")]
    View(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

impl Error {
    /// Message to show in a view for this error.
    ///
    /// A server-provided message wins. Transport and server failures without
    /// one fall back to `fallback`. Client-side errors (missing session,
    /// validation) carry their own message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Error::Api(ApiError::Rejected {
                message: Some(msg), ..
            }) => msg.clone(),
            Error::Api(_) | Error::Json(_) | Error::Io(_) => {
                fallback.to_string()
            }
            other => other.to_string(),
        }
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status
    #[error("{}", rejected_message(*status, message.as_deref()))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

fn rejected_message(status: u16, message: Option<&str>) -> String {
    match message {
        Some(msg) => format!("{} (HTTP {})", msg, status),
        None => format!("Request failed with HTTP {}", status),
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration and session errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `nutriview login` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("You must be logged in. Run `nutriview login` first.")]
    MissingCredential,

    #[error("Your session has expired. Run `nutriview login` again.")]
    SessionExpired,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Input rejected before any request is made
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Quantity must be 1 or more.")]
    Quantity,

    #[error("Email and password are required.")]
    MissingCredentials,

    #[error("Product name is required.")]
    MissingProductName,
}
