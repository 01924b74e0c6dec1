use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The cocktail API answered with a non-success status.
    ///
    /// The same status code is returned to the client.
    #[error("Cocktail API responded with status {0}")]
    Status(StatusCode),

    /// The cocktail API could not be reached or its body could not be decoded.
    ///
    /// Results in 502 Bad Gateway.
    #[error("Cocktail API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A drink in the cocktail API response carried a missing or non-numeric field.
    ///
    /// Results in 502 Bad Gateway.
    #[error("Cocktail API returned malformed {field} for drink '{drink}': {value:?}")]
    MalformedField {
        /// Name of the drink the field belongs to
        drink: String,
        /// Upstream field name, e.g. `strABV`
        field: &'static str,
        /// The raw value, if one was present
        value: Option<String>,
    },
}

/// Converts upstream errors into HTTP responses.
///
/// A non-success upstream status is propagated as-is. Transport failures and malformed
/// payloads become 502 Bad Gateway. Every case is logged at warn level.
impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        let status = match self {
            Self::Status(status) => status,
            Self::Transport(_) | Self::MalformedField { .. } => StatusCode::BAD_GATEWAY,
        };

        (
            status,
            Json(ErrorDto {
                error: "Failed to fetch alcohol saturation levels".to_string(),
            }),
        )
            .into_response()
    }
}
