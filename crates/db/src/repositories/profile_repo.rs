//! Repository for the `user_profiles` table.

use aevio_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::UserProfile;

/// Column list for `user_profiles` queries.
const COLUMNS: &str = "\
    id, user_id, date_of_birth, age, gender, height_cm, weight_kg, \
    activity_level, primary_goal, dietary_preference, journaling_style, \
    journaling_time, mood_tracking_enabled, health_conditions, \
    thirty_day_goal, consent_given, onboarding_completed, \
    training_experience, motivation_style, training_days_per_week, \
    session_length_minutes, equipment, injuries, workout_planner_completed, \
    created_at, updated_at";

/// Read access to user profiles.
///
/// Profile writes happen inside the completion transactions in
/// [`crate::repositories::OnboardingRepo`].
pub struct ProfileRepo;

impl ProfileRepo {
    /// Find the profile belonging to a user, if one exists.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_profiles WHERE user_id = $1");
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
