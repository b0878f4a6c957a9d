//! User profile entity model.

use aevio_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `user_profiles` table.
///
/// The onboarding field group is written as a whole by the completion
/// transaction. The workout-planner field group stays `None` until the
/// separate planner completion step runs.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    pub user_id: DbId,

    pub date_of_birth: NaiveDate,
    pub age: i32,
    pub gender: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: String,
    pub primary_goal: String,
    pub dietary_preference: Option<String>,
    pub journaling_style: String,
    pub journaling_time: String,
    pub mood_tracking_enabled: bool,
    pub health_conditions: Vec<String>,
    pub thirty_day_goal: String,
    pub consent_given: bool,
    pub onboarding_completed: bool,

    pub training_experience: Option<String>,
    pub motivation_style: Option<String>,
    pub training_days_per_week: Option<i32>,
    pub session_length_minutes: Option<i32>,
    pub equipment: Option<Vec<String>>,
    pub injuries: Option<Vec<String>>,
    pub workout_planner_completed: bool,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
