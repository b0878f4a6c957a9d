//! Repository for the `habits` table.

use aevio_core::types::DbId;
use sqlx::PgPool;

use crate::models::habit::Habit;

/// Column list for `habits` queries.
const COLUMNS: &str = "id, profile_id, name, habit_type, target, unit, enabled, created_at";

/// Read access to habits.
///
/// Habit writes are destructive-replace only and happen inside the
/// onboarding completion transaction.
pub struct HabitRepo;

impl HabitRepo {
    /// List a profile's habits in insertion order.
    pub async fn list_by_profile(
        pool: &PgPool,
        profile_id: DbId,
    ) -> Result<Vec<Habit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM habits WHERE profile_id = $1 ORDER BY id");
        sqlx::query_as::<_, Habit>(&query)
            .bind(profile_id)
            .fetch_all(pool)
            .await
    }
}
