use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, Method, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::shared::http::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Anything that is not a read is treated as a mutation.
    pub fn from_method(method: &Method) -> Self {
        match *method {
            Method::GET | Method::HEAD => Operation::List,
            Method::POST => Operation::Create,
            Method::PUT | Method::PATCH => Operation::Update,
            _ => Operation::Delete,
        }
    }
}

/// One shared static secret. Mutations always require it; listing only when
/// `protect_list` is set.
#[derive(Debug, Clone)]
pub struct AuthPolicy {
    token: String,
    protect_list: bool,
}

impl AuthPolicy {
    pub fn new(token: impl Into<String>, protect_list: bool) -> Self {
        Self {
            token: token.into(),
            protect_list,
        }
    }

    pub fn requires_credential(&self, operation: Operation) -> bool {
        match operation {
            Operation::List => self.protect_list,
            Operation::Create | Operation::Update | Operation::Delete => true,
        }
    }

    pub fn admit(&self, operation: Operation, headers: &HeaderMap) -> Result<(), ApiError> {
        if !self.requires_credential(operation) {
            return Ok(());
        }
        let token = extract_bearer_token(headers)?;
        if token != self.token {
            tracing::warn!(?operation, "rejected bearer token");
            return Err(ApiError::Unauthorized);
        }
        Ok(())
    }
}

pub async fn require_bearer(
    State(policy): State<Arc<AuthPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let operation = Operation::from_method(request.method());
    match policy.admit(operation, request.headers()) {
        Ok(()) => next.run(request).await,
        Err(error) => error.into_response(),
    }
}

fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing authorization header");
            ApiError::Unauthorized
        })?;

    value.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("authorization header is not a bearer token");
        ApiError::Unauthorized
    })
}
