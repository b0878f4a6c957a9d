//! Repository for the `onboarding_status` table.

use aevio_core::onboarding::OnboardingState;
use aevio_core::types::DbId;
use sqlx::PgPool;

use crate::models::onboarding_status::OnboardingStatus;

/// Column list for `onboarding_status` queries.
const COLUMNS: &str = "id, user_id, status, created_at, updated_at";

/// Provides lookups and status flips for per-user onboarding records.
///
/// The completion transition itself lives in
/// [`crate::repositories::OnboardingRepo`], which updates the status row
/// inside the completion transaction.
pub struct OnboardingStatusRepo;

impl OnboardingStatusRepo {
    /// Find the status row for a user, if one exists.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<OnboardingStatus>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM onboarding_status WHERE user_id = $1");
        sqlx::query_as::<_, OnboardingStatus>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a status row for a user.
    pub async fn insert(
        pool: &PgPool,
        user_id: DbId,
        state: OnboardingState,
    ) -> Result<OnboardingStatus, sqlx::Error> {
        let query = format!(
            "INSERT INTO onboarding_status (user_id, status)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OnboardingStatus>(&query)
            .bind(user_id)
            .bind(state.as_str())
            .fetch_one(pool)
            .await
    }

    /// Set the status for a user's existing row.
    ///
    /// Returns `None` if the user has no status row.
    pub async fn set_status(
        pool: &PgPool,
        user_id: DbId,
        state: OnboardingState,
    ) -> Result<Option<OnboardingStatus>, sqlx::Error> {
        let query = format!(
            "UPDATE onboarding_status SET status = $2, updated_at = NOW()
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OnboardingStatus>(&query)
            .bind(user_id)
            .bind(state.as_str())
            .fetch_optional(pool)
            .await
    }
}
