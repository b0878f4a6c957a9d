//! The onboarding completion transactions.
//!
//! Both completion steps are all-or-nothing units: every statement runs on
//! one transaction handle, and any error propagated with `?` drops the
//! uncommitted transaction, rolling back every prior statement in the call.

use aevio_core::onboarding::{self, OnboardingData, OnboardingState};
use aevio_core::types::DbId;
use aevio_core::workout_planner::WorkoutPlannerData;
use chrono::NaiveDate;
use sqlx::PgPool;

/// Failures of the completion transactions.
///
/// The precondition variants indicate the caller is out of sequence and map
/// to 4xx responses; `Database` covers everything the storage layer throws.
#[derive(Debug, thiserror::Error)]
pub enum OnboardingError {
    #[error("Onboarding status not found for user {0}")]
    StatusNotFound(DbId),

    #[error("Onboarding already completed")]
    AlreadyCompleted,

    #[error("Profile not found for user {0}")]
    ProfileNotFound(DbId),

    #[error("Workout planner setup already completed")]
    WorkoutPlannerAlreadyCompleted,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Runs the multi-statement onboarding completion flows.
pub struct OnboardingRepo;

impl OnboardingRepo {
    /// Complete onboarding for a user, atomically:
    ///
    /// 1. row-lock the status record (absent -> `StatusNotFound`; the row is
    ///    never auto-created here),
    /// 2. reject if already completed (no mutation),
    /// 3. upsert the profile keyed by `user_id` with age recomputed from the
    ///    date of birth as of `today` (full replace of the onboarding field
    ///    group),
    /// 4. overwrite the user's name if the payload carries one,
    /// 5. delete all habits for the profile and insert the submitted list
    ///    (filtered, in submission order),
    /// 6. flip the status to `completed`.
    ///
    /// The `FOR UPDATE` lock on the status row serializes concurrent
    /// completions for the same user; the loser of the race observes
    /// `completed` and is rejected.
    pub async fn complete(
        pool: &PgPool,
        user_id: DbId,
        data: &OnboardingData,
        today: NaiveDate,
    ) -> Result<(), OnboardingError> {
        let mut tx = pool.begin().await?;

        let status: Option<(String,)> =
            sqlx::query_as("SELECT status FROM onboarding_status WHERE user_id = $1 FOR UPDATE")
                .bind(user_id)
                .fetch_optional(&mut *tx)
                .await?;

        let (status,) = status.ok_or(OnboardingError::StatusNotFound(user_id))?;
        if status == OnboardingState::Completed.as_str() {
            return Err(OnboardingError::AlreadyCompleted);
        }

        let age = onboarding::age_on(data.basic_profile.date_of_birth, today);

        let (profile_id,): (DbId,) = sqlx::query_as(
            "INSERT INTO user_profiles (
                user_id, date_of_birth, age, gender, height_cm, weight_kg,
                activity_level, primary_goal, dietary_preference,
                journaling_style, journaling_time, mood_tracking_enabled,
                health_conditions, thirty_day_goal, consent_given,
                onboarding_completed
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, TRUE)
             ON CONFLICT (user_id) DO UPDATE SET
                date_of_birth = EXCLUDED.date_of_birth,
                age = EXCLUDED.age,
                gender = EXCLUDED.gender,
                height_cm = EXCLUDED.height_cm,
                weight_kg = EXCLUDED.weight_kg,
                activity_level = EXCLUDED.activity_level,
                primary_goal = EXCLUDED.primary_goal,
                dietary_preference = EXCLUDED.dietary_preference,
                journaling_style = EXCLUDED.journaling_style,
                journaling_time = EXCLUDED.journaling_time,
                mood_tracking_enabled = EXCLUDED.mood_tracking_enabled,
                health_conditions = EXCLUDED.health_conditions,
                thirty_day_goal = EXCLUDED.thirty_day_goal,
                consent_given = EXCLUDED.consent_given,
                onboarding_completed = TRUE,
                updated_at = NOW()
             RETURNING id",
        )
        .bind(user_id)
        .bind(data.basic_profile.date_of_birth)
        .bind(age)
        .bind(&data.basic_profile.gender)
        .bind(data.health_wellness.height_cm)
        .bind(data.health_wellness.weight_kg)
        .bind(&data.health_wellness.activity_level)
        .bind(&data.health_wellness.primary_goal)
        .bind(&data.health_wellness.dietary_preference)
        .bind(&data.journaling.style)
        .bind(&data.journaling.time_of_day)
        .bind(data.journaling.mood_tracking_enabled)
        .bind(&data.health_conditions)
        .bind(&data.goal)
        .bind(data.consent_given)
        .fetch_one(&mut *tx)
        .await?;

        if let Some(ref name) = data.basic_profile.name {
            sqlx::query("UPDATE users SET name = $2, updated_at = NOW() WHERE id = $1")
                .bind(user_id)
                .bind(name)
                .execute(&mut *tx)
                .await?;
        }

        // Destructive replace: the submitted list is the new habit set.
        sqlx::query("DELETE FROM habits WHERE profile_id = $1")
            .bind(profile_id)
            .execute(&mut *tx)
            .await?;

        for habit in data.submitted_habits() {
            sqlx::query(
                "INSERT INTO habits (profile_id, name, habit_type, target, unit, enabled)
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(profile_id)
            .bind(&habit.name)
            .bind(&habit.habit_type)
            .bind(habit.target)
            .bind(&habit.unit)
            .bind(habit.enabled)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query(
            "UPDATE onboarding_status SET status = $2, updated_at = NOW() WHERE user_id = $1",
        )
        .bind(user_id)
        .bind(OnboardingState::Completed.as_str())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(user_id, profile_id, "Onboarding completion committed");
        Ok(())
    }

    /// Complete the workout-planner setup for a user.
    ///
    /// A single guarded update on `user_profiles`: requires an existing
    /// profile (the onboarding step creates it) and rejects if the planner
    /// flag is already set.
    pub async fn complete_workout_planner(
        pool: &PgPool,
        user_id: DbId,
        data: &WorkoutPlannerData,
    ) -> Result<(), OnboardingError> {
        let mut tx = pool.begin().await?;

        let row: Option<(bool,)> = sqlx::query_as(
            "SELECT workout_planner_completed FROM user_profiles WHERE user_id = $1 FOR UPDATE",
        )
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        let (already_completed,) = row.ok_or(OnboardingError::ProfileNotFound(user_id))?;
        if already_completed {
            return Err(OnboardingError::WorkoutPlannerAlreadyCompleted);
        }

        sqlx::query(
            "UPDATE user_profiles SET
                training_experience = $2,
                motivation_style = $3,
                training_days_per_week = $4,
                session_length_minutes = $5,
                equipment = $6,
                injuries = $7,
                workout_planner_completed = TRUE,
                updated_at = NOW()
             WHERE user_id = $1",
        )
        .bind(user_id)
        .bind(&data.training_experience)
        .bind(&data.motivation_style)
        .bind(data.training_days_per_week)
        .bind(data.session_length_minutes)
        .bind(&data.equipment)
        .bind(&data.injuries)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(user_id, "Workout planner completion committed");
        Ok(())
    }
}
