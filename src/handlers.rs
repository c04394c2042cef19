use axum::{extract::State, Json};
use tracing::debug;

use crate::{
    routes::GameId,
    types::{GameResponse, VersionResponse},
    AppState,
};

pub async fn version(State(state): State<AppState>) -> Json<VersionResponse> {
    let response = VersionResponse::new(state.clock.today());
    debug!(version = response.version, last_build = %response.last_build, "serving version");
    Json(response)
}

pub async fn game_by_id(
    State(state): State<AppState>,
    GameId(id): GameId,
) -> Json<GameResponse> {
    debug!(id, "serving placeholder game");
    Json(GameResponse::placeholder(id, state.clock.today()))
}
