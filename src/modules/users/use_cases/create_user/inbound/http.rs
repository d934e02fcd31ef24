use axum::{Json, body::Bytes, extract::State, http::StatusCode, response::IntoResponse};

use crate::shared::http::error::ApiError;
use crate::shared::http::payload::parse_attributes;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let attributes = parse_attributes(&body)?;
    let user = state.create_user.handle(attributes).await;
    Ok((StatusCode::CREATED, Json(user)))
}
