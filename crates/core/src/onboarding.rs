//! Onboarding status, payload types, and validation.
//!
//! Defines the onboarding status enumeration, the nested payload submitted
//! at onboarding completion, and the single authoritative validation schema
//! used at the API boundary. Validation stops at the first violated
//! constraint and returns one descriptive message; errors are never
//! accumulated.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Onboarding status
// ---------------------------------------------------------------------------

/// Status values for a user's onboarding record.
///
/// A user with no status row at all reads as `Incomplete` by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingState {
    Incomplete,
    Skipped,
    Completed,
}

impl OnboardingState {
    /// Parse a status string from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "incomplete" => Ok(Self::Incomplete),
            "skipped" => Ok(Self::Skipped),
            "completed" => Ok(Self::Completed),
            _ => Err(CoreError::Validation(format!(
                "Invalid onboarding status '{s}'. Must be one of: incomplete, skipped, completed"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Incomplete => "incomplete",
            Self::Skipped => "skipped",
            Self::Completed => "completed",
        }
    }
}

// ---------------------------------------------------------------------------
// Validation bounds
// ---------------------------------------------------------------------------

/// Maximum display name length in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Minimum age in whole years at submission.
pub const MIN_AGE_YEARS: i32 = 13;

/// Height bounds in centimeters, inclusive.
pub const MIN_HEIGHT_CM: f64 = 120.0;
pub const MAX_HEIGHT_CM: f64 = 220.0;

/// Weight bounds in kilograms, inclusive.
pub const MIN_WEIGHT_KG: f64 = 30.0;
pub const MAX_WEIGHT_KG: f64 = 200.0;

/// Maximum number of habits per submission (after filtering empty entries).
pub const MAX_HABITS: usize = 3;

/// Maximum 30-day goal length in characters.
pub const MAX_GOAL_LEN: usize = 200;

// ---------------------------------------------------------------------------
// Payload types
// ---------------------------------------------------------------------------

/// The full nested payload submitted at onboarding completion.
///
/// The same shape is returned by the profile read model, so a completed
/// submission reads back field-for-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingData {
    pub basic_profile: BasicProfile,
    pub health_wellness: HealthWellness,
    pub journaling: JournalingPrefs,
    /// Entries may arrive as `null` from partially-filled client forms and
    /// are filtered out before validation and persistence.
    #[serde(default)]
    pub habits: Vec<Option<HabitInput>>,
    #[serde(default)]
    pub health_conditions: Vec<String>,
    #[serde(default)]
    pub consent_given: bool,
    pub goal: String,
}

impl OnboardingData {
    /// The submitted habits with empty entries filtered out, in submission
    /// order.
    pub fn submitted_habits(&self) -> Vec<&HabitInput> {
        self.habits.iter().flatten().collect()
    }
}

/// Identity section of the onboarding payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicProfile {
    /// Optional display name; when present it overwrites the user's name.
    pub name: Option<String>,
    pub date_of_birth: NaiveDate,
    pub gender: String,
}

/// Body metrics and goal selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthWellness {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: String,
    pub primary_goal: String,
    pub dietary_preference: Option<String>,
}

/// Journaling preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalingPrefs {
    pub style: String,
    pub time_of_day: String,
    #[serde(default)]
    pub mood_tracking_enabled: bool,
}

/// A single habit entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitInput {
    pub name: String,
    #[serde(rename = "type")]
    pub habit_type: String,
    pub target: f64,
    pub unit: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Age computation
// ---------------------------------------------------------------------------

/// Age in whole years on `today`, using calendar-aware truncation: the year
/// difference, minus one if today's month/day precedes the birth month/day.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years -= 1;
    }
    years
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a required selection field (non-empty after trimming).
fn validate_selection(value: &str, label: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{label} is required")));
    }
    Ok(())
}

/// Validate the full onboarding payload against the authoritative schema.
///
/// `today` is the submission date; it drives the minimum-age check and is
/// also the date the persisted age is computed against.
pub fn validate(data: &OnboardingData, today: NaiveDate) -> Result<(), CoreError> {
    if let Some(ref name) = data.basic_profile.name {
        let len = name.chars().count();
        if len == 0 || len > MAX_NAME_LEN {
            return Err(CoreError::Validation(format!(
                "Name must be between 1 and {MAX_NAME_LEN} characters"
            )));
        }
    }

    let age = age_on(data.basic_profile.date_of_birth, today);
    if age < MIN_AGE_YEARS {
        return Err(CoreError::Validation(format!(
            "You must be at least {MIN_AGE_YEARS} years old"
        )));
    }

    let height = data.health_wellness.height_cm;
    if !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&height) {
        return Err(CoreError::Validation(format!(
            "Height must be between {MIN_HEIGHT_CM} and {MAX_HEIGHT_CM} cm"
        )));
    }

    let weight = data.health_wellness.weight_kg;
    if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight) {
        return Err(CoreError::Validation(format!(
            "Weight must be between {MIN_WEIGHT_KG} and {MAX_WEIGHT_KG} kg"
        )));
    }

    validate_selection(&data.health_wellness.activity_level, "Activity level")?;
    validate_selection(&data.health_wellness.primary_goal, "Primary goal")?;
    validate_selection(&data.journaling.style, "Journaling style")?;
    validate_selection(&data.journaling.time_of_day, "Journaling time of day")?;
    validate_selection(&data.basic_profile.gender, "Gender")?;

    let habits = data.submitted_habits();
    if habits.len() > MAX_HABITS {
        return Err(CoreError::Validation(format!(
            "At most {MAX_HABITS} habits can be selected"
        )));
    }
    for habit in habits {
        validate_habit(habit)?;
    }

    for condition in &data.health_conditions {
        if condition.trim().is_empty() {
            return Err(CoreError::Validation(
                "Health conditions must be non-empty".to_string(),
            ));
        }
    }

    if !data.consent_given {
        return Err(CoreError::Validation(
            "Consent is required to complete onboarding".to_string(),
        ));
    }

    let goal_len = data.goal.chars().count();
    if goal_len == 0 || goal_len > MAX_GOAL_LEN {
        return Err(CoreError::Validation(format!(
            "Goal must be between 1 and {MAX_GOAL_LEN} characters"
        )));
    }

    Ok(())
}

/// Validate a single habit entry.
fn validate_habit(habit: &HabitInput) -> Result<(), CoreError> {
    let name_len = habit.name.chars().count();
    if name_len == 0 || name_len > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Habit name must be between 1 and {MAX_NAME_LEN} characters"
        )));
    }
    validate_selection(&habit.habit_type, "Habit type")?;
    validate_selection(&habit.unit, "Habit unit")?;
    if !habit.target.is_finite() || habit.target <= 0.0 {
        return Err(CoreError::Validation(
            "Habit target must be a positive number".to_string(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
