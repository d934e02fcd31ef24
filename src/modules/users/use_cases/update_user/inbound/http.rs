use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::shared::http::error::ApiError;
use crate::shared::http::payload::{parse_attributes, parse_user_id};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_user_id(&id)?;
    let patch = parse_attributes(&body)?;
    let user = state.update_user.handle(id, patch).await?;
    Ok(Json(user))
}
