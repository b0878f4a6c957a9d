//! Workout-planner payload and validation.
//!
//! The planner setup is a second, later completion step writing its own
//! disjoint field group on the user profile. Validation follows the same
//! first-violation-wins contract as the onboarding schema.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Training days per week, inclusive.
pub const MIN_TRAINING_DAYS: i32 = 1;
pub const MAX_TRAINING_DAYS: i32 = 7;

/// Session length in minutes, inclusive.
pub const MIN_SESSION_MINUTES: i32 = 10;
pub const MAX_SESSION_MINUTES: i32 = 240;

/// The payload submitted at workout-planner completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlannerData {
    pub training_experience: String,
    pub motivation_style: String,
    pub training_days_per_week: i32,
    pub session_length_minutes: i32,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub injuries: Vec<String>,
}

/// Validate a workout-planner payload.
pub fn validate(data: &WorkoutPlannerData) -> Result<(), CoreError> {
    if data.training_experience.trim().is_empty() {
        return Err(CoreError::Validation(
            "Training experience is required".to_string(),
        ));
    }
    if data.motivation_style.trim().is_empty() {
        return Err(CoreError::Validation(
            "Motivation style is required".to_string(),
        ));
    }
    if !(MIN_TRAINING_DAYS..=MAX_TRAINING_DAYS).contains(&data.training_days_per_week) {
        return Err(CoreError::Validation(format!(
            "Training days per week must be between {MIN_TRAINING_DAYS} and {MAX_TRAINING_DAYS}"
        )));
    }
    if !(MIN_SESSION_MINUTES..=MAX_SESSION_MINUTES).contains(&data.session_length_minutes) {
        return Err(CoreError::Validation(format!(
            "Session length must be between {MIN_SESSION_MINUTES} and {MAX_SESSION_MINUTES} minutes"
        )));
    }
    for item in data.equipment.iter().chain(&data.injuries) {
        if item.trim().is_empty() {
            return Err(CoreError::Validation(
                "Equipment and injury entries must be non-empty".to_string(),
            ));
        }
    }
    Ok(())
}
