//! Handlers for the onboarding flow.
//!
//! Completion runs the all-or-nothing transaction in
//! [`OnboardingRepo`]; skip and status are thin status-row operations.
//! Identity is supplied as `userId` in the request body (authentication is
//! owned by an upstream gateway).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use aevio_core::onboarding::{self, OnboardingData, OnboardingState};
use aevio_core::types::DbId;
use aevio_core::workout_planner::{self, WorkoutPlannerData};
use aevio_db::repositories::{OnboardingRepo, OnboardingStatusRepo};

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

/// Body for `POST /onboarding/complete`.
///
/// Both fields are checked by hand so that a missing field produces a 400
/// with a specific message rather than a generic deserialization rejection.
/// `onBoardingData` is deserialized in the handler for the same reason.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteOnboardingRequest {
    pub user_id: Option<DbId>,
    pub on_boarding_data: Option<serde_json::Value>,
}

/// Body for `POST /onboarding/skip` and `POST /onboarding/status`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdRequest {
    pub user_id: Option<DbId>,
}

/// Body for `POST /onboarding/workout-planner/complete`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteWorkoutPlannerRequest {
    pub user_id: Option<DbId>,
    pub workout_planner_data: Option<serde_json::Value>,
}

/// Response for `POST /onboarding/status`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    #[serde(rename = "onBoardingStatus")]
    pub on_boarding_status: OnboardingState,
}

fn require_user_id(user_id: Option<DbId>) -> AppResult<DbId> {
    user_id.ok_or_else(|| AppError::BadRequest("userId is required".to_string()))
}

// ---------------------------------------------------------------------------
// POST /onboarding/complete
// ---------------------------------------------------------------------------

/// Complete onboarding for a user.
///
/// Validates the payload against the central schema, then runs the
/// completion transaction. The status row must already exist (initialized
/// by a skip action or a prior partial flow); completion never creates it.
pub async fn complete_onboarding(
    State(state): State<AppState>,
    Json(body): Json<CompleteOnboardingRequest>,
) -> AppResult<impl IntoResponse> {
    let user_id = require_user_id(body.user_id)?;
    let raw = body
        .on_boarding_data
        .ok_or_else(|| AppError::BadRequest("onBoardingData is required".to_string()))?;
    let data: OnboardingData = serde_json::from_value(raw)
        .map_err(|e| AppError::BadRequest(format!("Invalid onBoardingData: {e}")))?;

    let today = Utc::now().date_naive();
    onboarding::validate(&data, today)?;

    OnboardingRepo::complete(&state.pool, user_id, &data, today).await?;

    tracing::info!(user_id, "Onboarding completed");

    Ok(Json(MessageResponse::new("Onboarding completed successfully")))
}

// ---------------------------------------------------------------------------
// POST /onboarding/skip
// ---------------------------------------------------------------------------

/// Skip onboarding for a user.
///
/// If no status row exists, one is created as `incomplete`, not `skipped`;
/// the first skip only initializes the record. An already-completed row is
/// left untouched. Otherwise the row is set to `skipped`. Each outcome
/// reports its own message.
pub async fn skip_onboarding(
    State(state): State<AppState>,
    Json(body): Json<UserIdRequest>,
) -> AppResult<impl IntoResponse> {
    let user_id = require_user_id(body.user_id)?;

    let existing = OnboardingStatusRepo::find_by_user(&state.pool, user_id).await?;

    let message = match existing {
        None => {
            OnboardingStatusRepo::insert(&state.pool, user_id, OnboardingState::Incomplete)
                .await?;
            tracing::info!(user_id, "Onboarding status initialized");
            "Onboarding status initialized"
        }
        Some(row) if row.status == OnboardingState::Completed.as_str() => {
            "Onboarding already completed"
        }
        Some(_) => {
            OnboardingStatusRepo::set_status(&state.pool, user_id, OnboardingState::Skipped)
                .await?;
            tracing::info!(user_id, "Onboarding skipped");
            "Onboarding skipped"
        }
    };

    Ok(Json(MessageResponse::new(message)))
}

// ---------------------------------------------------------------------------
// POST /onboarding/status
// ---------------------------------------------------------------------------

/// Look up a user's onboarding status. A missing row reads as `incomplete`.
pub async fn onboarding_status(
    State(state): State<AppState>,
    Json(body): Json<UserIdRequest>,
) -> AppResult<impl IntoResponse> {
    let user_id = require_user_id(body.user_id)?;

    let status = match OnboardingStatusRepo::find_by_user(&state.pool, user_id).await? {
        Some(row) => OnboardingState::from_str_db(&row.status)?,
        None => OnboardingState::Incomplete,
    };

    tracing::debug!(user_id, status = status.as_str(), "Fetched onboarding status");

    Ok(Json(StatusResponse {
        on_boarding_status: status,
    }))
}

// ---------------------------------------------------------------------------
// POST /onboarding/workout-planner/complete
// ---------------------------------------------------------------------------

/// Complete the workout-planner setup for a user.
///
/// Requires an existing profile; rejects if the planner step already ran.
pub async fn complete_workout_planner(
    State(state): State<AppState>,
    Json(body): Json<CompleteWorkoutPlannerRequest>,
) -> AppResult<impl IntoResponse> {
    let user_id = require_user_id(body.user_id)?;
    let raw = body
        .workout_planner_data
        .ok_or_else(|| AppError::BadRequest("workoutPlannerData is required".to_string()))?;
    let data: WorkoutPlannerData = serde_json::from_value(raw)
        .map_err(|e| AppError::BadRequest(format!("Invalid workoutPlannerData: {e}")))?;

    workout_planner::validate(&data)?;

    OnboardingRepo::complete_workout_planner(&state.pool, user_id, &data).await?;

    tracing::info!(user_id, "Workout planner setup completed");

    Ok(Json(MessageResponse::new(
        "Workout planner setup completed successfully",
    )))
}
