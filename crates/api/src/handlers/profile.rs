//! Handler for the profile read model.
//!
//! Joins user + profile + ordered habits and reshapes them into the same
//! nested structure the completion endpoint accepts, so a submission reads
//! back field-for-field.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use aevio_core::error::CoreError;
use aevio_core::onboarding::{
    BasicProfile, HabitInput, HealthWellness, JournalingPrefs, OnboardingData,
};
use aevio_core::types::DbId;
use aevio_db::models::habit::Habit;
use aevio_db::models::profile::UserProfile;
use aevio_db::models::user::User;
use aevio_db::repositories::{HabitRepo, ProfileRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /profile`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileQuery {
    pub user_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// GET /profile
// ---------------------------------------------------------------------------

/// Get the profile read model for a user.
///
/// A user that does not exist and a user that exists but never completed
/// onboarding are distinct 404s.
pub async fn get_profile(
    State(state): State<AppState>,
    Query(params): Query<ProfileQuery>,
) -> AppResult<impl IntoResponse> {
    let user_id = params
        .user_id
        .ok_or_else(|| AppError::BadRequest("userId is required".to_string()))?;

    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    let profile = ProfileRepo::find_by_user(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "UserProfile",
            id: user_id,
        }))?;

    let habits = HabitRepo::list_by_profile(&state.pool, profile.id).await?;

    tracing::debug!(user_id, habit_count = habits.len(), "Fetched profile");

    Ok(Json(read_model(user, profile, habits)))
}

/// Reassemble stored rows into the nested onboarding shape.
fn read_model(user: User, profile: UserProfile, habits: Vec<Habit>) -> OnboardingData {
    OnboardingData {
        basic_profile: BasicProfile {
            name: Some(user.name),
            date_of_birth: profile.date_of_birth,
            gender: profile.gender,
        },
        health_wellness: HealthWellness {
            height_cm: profile.height_cm,
            weight_kg: profile.weight_kg,
            activity_level: profile.activity_level,
            primary_goal: profile.primary_goal,
            dietary_preference: profile.dietary_preference,
        },
        journaling: JournalingPrefs {
            style: profile.journaling_style,
            time_of_day: profile.journaling_time,
            mood_tracking_enabled: profile.mood_tracking_enabled,
        },
        habits: habits
            .into_iter()
            .map(|h| {
                Some(HabitInput {
                    name: h.name,
                    habit_type: h.habit_type,
                    target: h.target,
                    unit: h.unit,
                    enabled: h.enabled,
                })
            })
            .collect(),
        health_conditions: profile.health_conditions,
        consent_given: profile.consent_given,
        goal: profile.thirty_day_goal,
    }
}
