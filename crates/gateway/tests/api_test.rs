//! HTTP tests for the gateway router.
//!
//! The router is driven with `oneshot`, so no listener is bound.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use gateway_lib::build_app;
use gateway_lib::config::GatewayConfig;
use user_service_lib::config::UserServiceConfig;

fn app() -> Router {
    build_app(GatewayConfig::default(), &UserServiceConfig::default()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn graphql_request(query: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "query": query }).to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_reports_seeded_users() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!({"status": "healthy", "users": 4}));
}

#[tokio::test]
async fn test_health_without_seed() {
    let user_config = UserServiceConfig { seed: false };
    let app = build_app(GatewayConfig::default(), &user_config).unwrap();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(body_json(response).await["users"], 0);
}

#[tokio::test]
async fn test_graphql_post_get_users() {
    let response = app()
        .oneshot(graphql_request("query GetUsers { getUsers { id name age isMarried } }"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["getUsers"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_graphql_post_with_variables() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "query": "query ($id: ID) { getUserById(id: $id) { name } }",
                "variables": { "id": "4" }
            })
            .to_string(),
        ))
        .unwrap();

    let body = body_json(app().oneshot(request).await.unwrap()).await;
    assert_eq!(body["data"]["getUserById"], json!({"name": "Ginny"}));
}

#[tokio::test]
async fn test_graphql_not_found_has_code() {
    let response = app()
        .oneshot(graphql_request(r#"{ getUserById(id: "99") { id } }"#))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_graphiql_page_served() {
    let response = app()
        .oneshot(Request::builder().uri("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn test_graphiql_disabled() {
    let config = GatewayConfig {
        graphiql_enabled: false,
        ..GatewayConfig::default()
    };
    let app = build_app(config, &UserServiceConfig::default()).unwrap();

    let response = app
        .oneshot(Request::builder().uri("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_graphql_unsupported_method() {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/graphql")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_graphql_malformed_body() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .starts_with("malformed GraphQL request"));
}

#[tokio::test]
async fn test_unknown_route_not_found() {
    let response = app()
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_cors_preflight_allowed() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/graphql")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[test]
fn test_invalid_cors_origin_rejected() {
    let config = GatewayConfig {
        cors_allowed_origin: Some("bad\norigin".to_string()),
        ..GatewayConfig::default()
    };

    assert!(build_app(config, &UserServiceConfig::default()).is_err());
}
