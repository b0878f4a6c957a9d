//! Habit entity model.

use aevio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `habits` table.
///
/// The set belonging to a profile is replaced wholesale on every onboarding
/// completion; `id` order is insertion order.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Habit {
    pub id: DbId,
    pub profile_id: DbId,
    pub name: String,
    pub habit_type: String,
    pub target: f64,
    pub unit: String,
    pub enabled: bool,
    pub created_at: Timestamp,
}
