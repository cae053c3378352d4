//! Axum route handlers for the Ideas API.

use axum::{extract::State, http::StatusCode, Json};
use bytes::Bytes;
use tracing::Instrument;
use uuid::Uuid;

use crate::errors::AppError;
use crate::ideas::generator::generate_ideas;
use crate::ideas::models::IdeaSet;
use crate::ideas::validation::parse_profile;
use crate::state::AppState;

/// POST /ideas
///
/// Validates the profile, runs the generation pipeline, and returns three
/// sanitized, clamped, de-duplicated ideas.
pub async fn handle_generate_ideas(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<IdeaSet>, AppError> {
    let profile = parse_profile(&body)?;

    let request_id = Uuid::new_v4();
    let ideas = generate_ideas(state.generator.as_ref(), &profile)
        .instrument(tracing::info_span!("generate_ideas", %request_id))
        .await?;

    Ok(Json(ideas))
}

/// OPTIONS /ideas — CORS preflight. Headers come from the CORS middleware.
pub async fn handle_preflight() -> StatusCode {
    StatusCode::OK
}

/// Any other method on /ideas.
pub async fn handle_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
