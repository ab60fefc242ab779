//! Router tests that never reach the database
//!
//! Every request here is rejected (or answered) before a query runs, so the
//! router is built over a lazy pool pointing nowhere.

mod common;

use axum::http::{Method, StatusCode};
use common::{get, offline_app, send};
use serde_json::json;

fn message(body: &serde_json::Value) -> &str {
    body["message"].as_str().unwrap_or_default()
}

#[tokio::test]
async fn unmatched_route_is_json_404() {
    let app = offline_app();
    let (status, body) = get(&app, "/api/not-a-route").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), "not found");
}

#[tokio::test]
async fn health_reports_ok() {
    let app = offline_app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn api_lists_endpoints() {
    let app = offline_app();
    let (status, body) = get(&app, "/api").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["endpoints"]["GET /api/reviews"].is_object());
}

#[tokio::test]
async fn rejects_unknown_sort_column() {
    let app = offline_app();
    for value in ["bananas", "review_body", "votes%3BDROP%20TABLE%20reviews", "VOTES"] {
        let (status, body) = get(&app, &format!("/api/reviews?sort_by={value}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{value}");
        assert_eq!(message(&body), "invalid sort query", "{value}");
    }
}

#[tokio::test]
async fn rejects_unknown_order() {
    let app = offline_app();
    for value in ["up", "asc", "desc", "ASCENDING"] {
        let (status, body) = get(&app, &format!("/api/reviews?order={value}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{value}");
        assert_eq!(message(&body), "invalid sort order", "{value}");
    }
}

#[tokio::test]
async fn rejects_malformed_pagination() {
    let app = offline_app();
    let cases = [
        ("/api/reviews?limit=abc", "invalid input type"),
        ("/api/reviews?limit=0", "input must be positive"),
        ("/api/reviews?limit=-5", "input must be positive"),
        ("/api/reviews?page=-1", "input must be positive"),
        ("/api/reviews?page=two", "invalid input type"),
        ("/api/reviews/1/comments?limit=nope", "invalid input type"),
        ("/api/reviews/1/comments?page=0", "input must be positive"),
    ];
    for (uri, expected) in cases {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(message(&body), expected, "{uri}");
    }
}

#[tokio::test]
async fn duplicated_query_keys_are_json_errors() {
    let app = offline_app();
    for uri in [
        "/api/reviews?limit=1&limit=2",
        "/api/reviews?sort_by=votes&sort_by=title",
        "/api/reviews/1/comments?page=1&page=2",
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(message(&body), "invalid input type", "{uri}");
    }
}

#[tokio::test]
async fn undecodable_username_is_json_error() {
    let app = offline_app();
    let (status, body) = get(&app, "/api/users/%FF").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), "invalid input type");
}

#[tokio::test]
async fn rejects_non_numeric_ids() {
    let app = offline_app();
    let requests = [
        (Method::GET, "/api/reviews/abc", None),
        (Method::GET, "/api/reviews/abc/comments", None),
        (Method::DELETE, "/api/reviews/1.5", None),
        (Method::DELETE, "/api/comments/xyz", None),
        (Method::PATCH, "/api/comments/xyz", Some(json!({ "inc_votes": 1 }))),
    ];
    for (method, uri, body) in requests {
        let (status, response) = send(&app, method.clone(), uri, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
        assert_eq!(message(&response), "invalid input type", "{method} {uri}");
    }
}

#[tokio::test]
async fn vote_patch_requires_inc_votes() {
    let app = offline_app();
    for uri in ["/api/reviews/1", "/api/comments/1"] {
        let (status, body) = send(&app, Method::PATCH, uri, Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(message(&body), "object missing required keys", "{uri}");
    }
}

#[tokio::test]
async fn vote_patch_rejects_non_integer_delta() {
    let app = offline_app();
    for inc in [json!("ten"), json!(1.5), json!(null), json!(i64::MAX)] {
        let payload = json!({ "inc_votes": inc });
        let (status, body) = send(&app, Method::PATCH, "/api/reviews/1", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{inc}");
        assert_ne!(message(&body), "", "{inc}");
    }
}

#[tokio::test]
async fn create_review_requires_keys() {
    let app = offline_app();
    let payload = json!({ "owner": "mallionaire", "title": "Azul" });
    let (status, body) = send(&app, Method::POST, "/api/reviews", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), "object missing required keys");
}

#[tokio::test]
async fn create_comment_requires_keys() {
    let app = offline_app();
    let payload = json!({ "username": "mallionaire" });
    let (status, body) = send(&app, Method::POST, "/api/reviews/1/comments", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), "object missing required keys");
}

#[tokio::test]
async fn create_category_requires_description() {
    let app = offline_app();
    let payload = json!({ "slug": "party" });
    let (status, body) = send(&app, Method::POST, "/api/categories", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), "object missing required keys");
}

#[tokio::test]
async fn malformed_json_is_invalid_input_type() {
    let app = offline_app();
    let (status, body) = send(&app, Method::POST, "/api/reviews", Some(json!("not an object"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), "invalid input type");
}
