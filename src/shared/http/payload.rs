// Request payload helpers shared by the inbound HTTP adapters.
//
// Bodies are read as raw bytes so a request without a body (or without a
// content type) still counts as an empty attribute mapping. Only the outer
// shape is checked: the body must be a JSON object. Field names and value
// types are never validated.

use axum::body::Bytes;

use crate::modules::users::core::user::Attributes;
use crate::shared::http::error::ApiError;

pub fn parse_attributes(body: &Bytes) -> Result<Attributes, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Attributes::new());
    }
    serde_json::from_slice::<Attributes>(body).map_err(|_| ApiError::MalformedPayload)
}

/// A path id that is not a positive integer can never match a user.
pub fn parse_user_id(raw: &str) -> Result<u64, ApiError> {
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::NotFound),
    }
}
