use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use std::fmt::Display;

/// Message reported for network and parse failures unless detail exposure is enabled
pub const GENERIC_LOOKUP_ERROR: &str = "unexpected error";

/// Why a movie lookup failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupErrorReason {
    /// The provider answered and reported no match (or another API-level failure)
    NotFound,
    /// The request never produced a readable response
    NetworkFailure,
    /// The response body was not a lookup record
    ParseFailure,
}

impl Display for LookupErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupErrorReason::NotFound => write!(f, "not found"),
            LookupErrorReason::NetworkFailure => write!(f, "network failure"),
            LookupErrorReason::ParseFailure => write!(f, "parse failure"),
        }
    }
}

/// Failed lookup: a reason code plus the message shown to the user
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{reason}: {message}")]
pub struct LookupError {
    pub reason: LookupErrorReason,
    pub message: String,
}

impl LookupError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            reason: LookupErrorReason::NotFound,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            reason: LookupErrorReason::NetworkFailure,
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            reason: LookupErrorReason::ParseFailure,
            message: message.into(),
        }
    }
}

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Lookup(e) => match e.reason {
                LookupErrorReason::NotFound => (StatusCode::NOT_FOUND, e.message),
                LookupErrorReason::NetworkFailure | LookupErrorReason::ParseFailure => {
                    (StatusCode::BAD_GATEWAY, e.message)
                }
            },
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
