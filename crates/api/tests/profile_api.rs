//! Integration tests for the profile read model.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, init_status, post_json, sample_onboarding_data, seed_user};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Read-model symmetry
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn completed_submission_reads_back_field_for_field(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let user_id = seed_user(&pool, "Old Name", "ada@example.com").await;
    init_status(&app, user_id).await;

    let submitted = sample_onboarding_data();
    let response = post_json(
        app.clone(),
        "/onboarding/complete",
        json!({ "userId": user_id, "onBoardingData": submitted.clone() }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, &format!("/profile?userId={user_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let profile = body_json(response).await;

    // The read model is the submitted shape with null habit entries dropped.
    let mut expected = submitted;
    let habits = expected["habits"].as_array().unwrap().clone();
    expected["habits"] = json!(habits
        .into_iter()
        .filter(|h| !h.is_null())
        .collect::<Vec<_>>());

    assert_eq!(profile, expected);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn submitted_name_overwrites_user_name(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let user_id = seed_user(&pool, "Old Name", "ada@example.com").await;
    init_status(&app, user_id).await;

    let response = post_json(
        app.clone(),
        "/onboarding/complete",
        json!({ "userId": user_id, "onBoardingData": sample_onboarding_data() }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let profile = body_json(get(app, &format!("/profile?userId={user_id}")).await).await;
    assert_eq!(profile["basicProfile"]["name"], "Jordan Avery");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn omitted_name_leaves_user_name_untouched(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let user_id = seed_user(&pool, "Old Name", "ada@example.com").await;
    init_status(&app, user_id).await;

    let mut data = sample_onboarding_data();
    data["basicProfile"]["name"] = json!(null);

    let response = post_json(
        app.clone(),
        "/onboarding/complete",
        json!({ "userId": user_id, "onBoardingData": data }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let profile = body_json(get(app, &format!("/profile?userId={user_id}")).await).await;
    assert_eq!(profile["basicProfile"]["name"], "Old Name");
}

// ---------------------------------------------------------------------------
// Not-found distinction
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_user_and_missing_profile_are_distinct_404s(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    // A user id that does not exist at all.
    let response = get(app.clone(), "/profile?userId=999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let unknown_user = body_json(response).await;
    assert!(
        unknown_user["error"].as_str().unwrap().starts_with("User "),
        "got: {}",
        unknown_user["error"]
    );

    // A user that exists but never completed onboarding.
    let user_id = seed_user(&pool, "Ada", "ada@example.com").await;
    let response = get(app, &format!("/profile?userId={user_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let no_profile = body_json(response).await;
    assert!(
        no_profile["error"].as_str().unwrap().starts_with("UserProfile "),
        "got: {}",
        no_profile["error"]
    );

    assert_ne!(unknown_user["error"], no_profile["error"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_user_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/profile").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "userId is required");
}
