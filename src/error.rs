use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request path looked like a known route but failed its pattern.
    #[error("no route matches the request path")]
    NoRoute,
    #[error("game id {0} is out of range")]
    IdOutOfRange(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Indistinguishable from an unmatched path.
            ApiError::NoRoute => StatusCode::NOT_FOUND.into_response(),
            ApiError::IdOutOfRange(_) => {
                let body = Json(json!({
                    "error": self.to_string(),
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_route_is_a_plain_not_found() {
        let response = ApiError::NoRoute.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn out_of_range_is_a_client_error() {
        let err = ApiError::IdOutOfRange("99999999999999999999".to_string());
        assert_eq!(err.to_string(), "game id 99999999999999999999 is out of range");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
    }
}
