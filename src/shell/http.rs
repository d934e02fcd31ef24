use axum::{
    Router,
    http::{StatusCode, header},
    middleware,
    response::IntoResponse,
    routing::{get, put},
};
use tower_http::trace::TraceLayer;

use crate::modules::users::use_cases::create_user::inbound::http as create_http;
use crate::modules::users::use_cases::delete_user::inbound::http as delete_http;
use crate::modules::users::use_cases::list_users::inbound::http as list_http;
use crate::modules::users::use_cases::update_user::inbound::http as update_http;
use crate::shared::http::auth::require_bearer;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    // route_layer keeps the gate off "/" and off unmatched paths.
    let users = Router::new()
        .route("/users", get(list_http::handle).post(create_http::handle))
        .route(
            "/users/{id}",
            put(update_http::handle).delete(delete_http::handle),
        )
        .route_layer(middleware::from_fn_with_state(
            state.auth.clone(),
            require_bearer,
        ));

    Router::new()
        .route("/", get(redirect_to_users))
        .merge(users)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn redirect_to_users() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/users")])
}
