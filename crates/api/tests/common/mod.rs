#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use commute_api::auth::jwt::{generate_access_token, JwtConfig};
use commute_api::config::ServerConfig;
use commute_api::router::build_app_router;
use commute_api::state::AppState;
use commute_core::types::DbId;
use commute_db::models::car::CreateCar;
use commute_db::models::user::CreateUser;
use commute_db::repositories::{CarRepo, UserRepo};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8081".to_string()],
        request_timeout_secs: 30,
        seed_demo_data: false,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router (same middleware stack as `main.rs`)
/// on top of the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Mint a bearer token for `user_id` signed with the test secret.
pub fn token_for(user_id: DbId) -> String {
    generate_access_token(user_id, &test_config().jwt).unwrap()
}

/// Insert a driver with one car, returning `(driver_id, car_id)`.
pub async fn driver_with_car(pool: &PgPool, name: &str) -> (DbId, DbId) {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            name: Some(name.to_string()),
            email: format!("{}@example.com", name.to_lowercase()),
            photo_url: Some(format!("https://img.example.com/{name}.png")),
            is_driver: true,
        },
    )
    .await
    .unwrap();
    let car = CarRepo::create(
        pool,
        &CreateCar {
            user_id: user.id,
            make: "Toyota".to_string(),
            model: "Prius".to_string(),
            color: Some("White".to_string()),
            license_plate: Some("ABC123".to_string()),
        },
    )
    .await
    .unwrap();
    (user.id, car.id)
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, empty_request(Method::GET, uri, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, empty_request(Method::GET, uri, Some(token))).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, None, body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, json_request(Method::POST, uri, Some(token), body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, Some(token), body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, empty_request(Method::DELETE, uri, Some(token))).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
