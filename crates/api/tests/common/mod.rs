//! Shared helpers for API integration tests.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use aevio_api::config::ServerConfig;
use aevio_api::routes;
use aevio_api::state::AppState;
use aevio_db::models::user::CreateUser;
use aevio_db::repositories::UserRepo;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:3001".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::app_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Send a GET request and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and return the raw response.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Insert a user fixture, returning its id.
pub async fn seed_user(pool: &PgPool, name: &str, email: &str) -> i64 {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            name: name.to_string(),
            email: email.to_string(),
        },
    )
    .await
    .unwrap();
    user.id
}

/// A canonical valid onboarding payload.
pub fn sample_onboarding_data() -> serde_json::Value {
    serde_json::json!({
        "basicProfile": {
            "name": "Jordan Avery",
            "dateOfBirth": "2000-06-15",
            "gender": "female"
        },
        "healthWellness": {
            "heightCm": 168.0,
            "weightKg": 62.5,
            "activityLevel": "moderately_active",
            "primaryGoal": "improve_fitness",
            "dietaryPreference": "vegetarian"
        },
        "journaling": {
            "style": "guided",
            "timeOfDay": "evening",
            "moodTrackingEnabled": true
        },
        "habits": [
            { "name": "Drink water", "type": "hydration", "target": 8.0, "unit": "glasses", "enabled": true },
            null,
            { "name": "Evening walk", "type": "movement", "target": 30.0, "unit": "minutes", "enabled": true }
        ],
        "healthConditions": ["asthma"],
        "consentGiven": true,
        "goal": "Journal every evening for 30 days"
    })
}

/// A canonical valid workout-planner payload.
pub fn sample_workout_planner_data() -> serde_json::Value {
    serde_json::json!({
        "trainingExperience": "intermediate",
        "motivationStyle": "coach",
        "trainingDaysPerWeek": 4,
        "sessionLengthMinutes": 45,
        "equipment": ["dumbbells"],
        "injuries": []
    })
}

/// Initialize the status row for a user via the skip endpoint (the
/// documented way a status row comes into existence before completion).
pub async fn init_status(app: &Router, user_id: i64) {
    let response = post_json(
        app.clone(),
        "/onboarding/skip",
        serde_json::json!({ "userId": user_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
