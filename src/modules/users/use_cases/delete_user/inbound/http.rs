use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::shared::http::error::ApiError;
use crate::shared::http::payload::parse_user_id;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_user_id(&id)?;
    let deleted = state.delete_user.handle(id).await?;
    Ok(Json(deleted))
}
