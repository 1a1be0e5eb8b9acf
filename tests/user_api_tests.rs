// SPDX-License-Identifier: MIT

//! User CRUD over the HTTP surface.

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_user_crud_round_trip() {
    let app = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/api/users",
            json!({"name": "Alice"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = common::body_json(response).await;
    let id = created["id"].as_u64().unwrap();

    let response = app
        .clone()
        .oneshot(common::request("GET", &format!("/api/users/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_json(response).await, created);

    let response = app
        .clone()
        .oneshot(common::json_request(
            "PUT",
            &format!("/api/users/{}", id),
            json!({"name": "Alice B"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_json(response).await["name"], "Alice B");

    let response = app
        .clone()
        .oneshot(common::request("DELETE", &format!("/api/users/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(common::request("GET", &format!("/api/users/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_with_empty_name_is_bad_request() {
    let app = common::create_test_app();

    let response = app
        .oneshot(common::json_request("POST", "/api/users", json!({"name": ""})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_deleting_user_leaves_workouts_in_place() {
    let app = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/api/users",
            json!({"name": "Alice"}),
        ))
        .await
        .unwrap();
    let user_id = common::body_json(response).await["id"].as_u64().unwrap();

    let response = app
        .clone()
        .oneshot(common::json_request(
            "POST",
            "/api/workouts",
            json!({"name": "Push Day", "user_id": user_id}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(common::request("DELETE", &format!("/api/users/{}", user_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Deletes never cascade: the workout keeps its user reference.
    let response = app
        .oneshot(common::request(
            "GET",
            &format!("/api/workouts/user/{}", user_id),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}
