use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use tracing::warn;

use crate::error::ApiError;

/// Game id captured from `/getgamebyid/:id`.
///
/// The segment must be one or more ASCII digits. It is read straight from the
/// request URI, so percent-encoded digits do not count. Anything else is
/// answered exactly like an unknown path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameId(pub u64);

impl GameId {
    pub fn parse(segment: &str) -> Result<Self, ApiError> {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ApiError::NoRoute);
        }
        // Only overflow can fail here.
        segment
            .parse::<u64>()
            .map(GameId)
            .map_err(|_| ApiError::IdOutOfRange(segment.to_string()))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for GameId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Path params are percent-decoded; the id is the last raw segment
        // of the matched `/getgamebyid/:id`.
        let segment = parts
            .uri
            .path()
            .rsplit('/')
            .next()
            .ok_or(ApiError::NoRoute)?;

        GameId::parse(segment).inspect_err(|err| {
            if let ApiError::IdOutOfRange(_) = err {
                warn!(%segment, "rejecting game id that does not fit in u64");
            }
        })
    }
}
