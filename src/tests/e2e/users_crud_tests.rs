// Drives the full router: bearer gate, inbound adapters, handlers and the
// in memory store together.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::users::adapters::outbound::user_store_in_memory::InMemoryUserStore;
use crate::shared::http::auth::AuthPolicy;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::{TEST_TOKEN, make_test_state, read_json};

const BEARER: &str = "Bearer mysecrettoken";

#[fixture]
fn app() -> Router {
    router(make_test_state())
}

async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    authorization: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(authorization) = authorization {
        request = request.header(header::AUTHORIZATION, authorization);
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

#[rstest]
#[tokio::test]
async fn it_should_walk_through_create_update_delete_and_list(app: Router) {
    let (status, created) = call(
        &app,
        Method::POST,
        "/users",
        Some(BEARER),
        Some(json!({ "name": "Alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({ "id": 1, "name": "Alice" }));

    let (status, updated) = call(
        &app,
        Method::PUT,
        "/users/1",
        Some(BEARER),
        Some(json!({ "age": 30 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({ "id": 1, "name": "Alice", "age": 30 }));

    let (status, deleted) = call(&app, Method::DELETE, "/users/1", Some(BEARER), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        deleted,
        json!({
            "message": "User deleted successfully",
            "user": [{ "id": 1, "name": "Alice", "age": 30 }]
        })
    );

    let (status, listed) = call(&app, Method::GET, "/users", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));
}

#[rstest]
#[case(Method::POST, "/users", Some(json!({ "name": "Mallory" })))]
#[case(Method::PUT, "/users/1", Some(json!({ "name": "Mallory" })))]
#[case(Method::DELETE, "/users/1", None)]
#[tokio::test]
async fn it_should_reject_mutations_without_credential_and_keep_the_store(
    app: Router,
    #[case] method: Method,
    #[case] uri: &str,
    #[case] body: Option<Value>,
) {
    call(
        &app,
        Method::POST,
        "/users",
        Some(BEARER),
        Some(json!({ "name": "Alice" })),
    )
    .await;
    let (_, before) = call(&app, Method::GET, "/users", None, None).await;

    for authorization in [None, Some("Bearer wrongtoken"), Some("mysecrettoken")] {
        let (status, error) = call(&app, method.clone(), uri, authorization, body.clone()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(error, json!({ "error": "Unauthorized" }));
    }

    let (_, after) = call(&app, Method::GET, "/users", None, None).await;
    assert_eq!(after, before);
}

#[rstest]
#[tokio::test]
async fn it_should_check_the_credential_before_the_id(app: Router) {
    let (status, _) = call(
        &app,
        Method::PUT,
        "/users/9999",
        None,
        Some(json!({ "name": "Nobody" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[rstest]
#[case(Method::PUT, Some(json!({ "name": "Nobody" })))]
#[case(Method::DELETE, None)]
#[tokio::test]
async fn it_should_return_404_for_unknown_ids_without_mutating(
    app: Router,
    #[case] method: Method,
    #[case] body: Option<Value>,
) {
    call(
        &app,
        Method::POST,
        "/users",
        Some(BEARER),
        Some(json!({ "name": "Alice" })),
    )
    .await;

    let (status, error) = call(&app, method, "/users/9999", Some(BEARER), body).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error, json!({ "error": "User not found" }));

    let (_, listed) = call(&app, Method::GET, "/users", None, None).await;
    assert_eq!(listed, json!([{ "id": 1, "name": "Alice" }]));
}

#[rstest]
#[tokio::test]
async fn it_should_never_reuse_ids_after_deletes(app: Router) {
    let mut ids = Vec::new();
    for name in ["Alice", "Bob", "Carol", "Dave"] {
        let (_, created) = call(
            &app,
            Method::POST,
            "/users",
            Some(BEARER),
            Some(json!({ "name": name })),
        )
        .await;
        let id = created["id"].as_u64().unwrap();
        ids.push(id);
        let (status, _) = call(
            &app,
            Method::DELETE,
            &format!("/users/{id}"),
            Some(BEARER),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[rstest]
#[tokio::test]
async fn it_should_ignore_an_id_sent_in_the_payload(app: Router) {
    let (_, created) = call(
        &app,
        Method::POST,
        "/users",
        Some(BEARER),
        Some(json!({ "id": 77, "name": "Eve" })),
    )
    .await;
    assert_eq!(created, json!({ "id": 1, "name": "Eve" }));

    let (status, updated) = call(
        &app,
        Method::PUT,
        "/users/1",
        Some(BEARER),
        Some(json!({ "id": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({ "id": 1, "name": "Eve" }));
}

#[rstest]
#[tokio::test]
async fn it_should_gate_listing_when_the_policy_protects_it() {
    let state = AppState::new(
        Arc::new(InMemoryUserStore::new()),
        AuthPolicy::new(TEST_TOKEN, true),
    );
    let app = router(state);

    let (status, _) = call(&app, Method::GET, "/users", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, listed) = call(&app, Method::GET, "/users", Some(BEARER), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));
}
