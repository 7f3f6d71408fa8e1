use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Failures a season API request can end in. Every variant maps to a JSON
/// body of the form `{"error": ...}`.
#[derive(Debug)]
pub enum WebError {
    DriverNotFound(String),
    ConstructorNotFound(String),
    RoundNotFound(u32),
    InvalidQuery(ValidationErrors),
    Unauthorized,
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DriverNotFound(id) => write!(f, "Driver '{}' not found", id),
            Self::ConstructorNotFound(id) => write!(f, "Constructor '{}' not found", id),
            Self::RoundNotFound(round) => write!(f, "Round {} not found", round),
            Self::InvalidQuery(_) => write!(f, "Invalid query parameters"),
            Self::Unauthorized => write!(f, "A valid API key is required"),
        }
    }
}

impl WebError {
    fn status(&self) -> StatusCode {
        match self {
            Self::DriverNotFound(_) | Self::ConstructorNotFound(_) | Self::RoundNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let body = match &self {
            Self::InvalidQuery(errors) => {
                let details: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| match &e.message {
                            Some(message) => message.to_string(),
                            None => format!("{}: {}", field, e.code),
                        })
                    })
                    .collect();

                json!({
                    "error": self.to_string(),
                    "details": details
                })
            }
            _ => json!({ "error": self.to_string() }),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::InvalidQuery(error)
    }
}
