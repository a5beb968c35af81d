//! Error-to-response mapping at the HTTP boundary.
//!
//! Every failure is converted here into a JSON body with an `error` string.
//! Client mistakes (empty parameters, unknown station, bad date) become 400;
//! everything else becomes a generic 500 with detail kept in the server log,
//! never serialized to the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use crate::Error;
use crate::constants::{MSG_INTERNAL_ERROR, MSG_INVALID_DATE, MSG_MISSING_PARAMETERS};

/// JSON body for every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Wrapper carrying a domain error across the handler boundary
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            Error::MissingParameters => {
                (StatusCode::BAD_REQUEST, MSG_MISSING_PARAMETERS.to_string())
            }
            Error::StationNotFound { station } => (
                StatusCode::BAD_REQUEST,
                format!("Invalid station: {}", station),
            ),
            Error::InvalidDate { .. } => (StatusCode::BAD_REQUEST, MSG_INVALID_DATE.to_string()),
            internal => {
                error!("Request failed: {}", internal);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MSG_INTERNAL_ERROR.to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
