//! Onboarding status entity model.

use aevio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `onboarding_status` table.
///
/// `status` holds one of the [`aevio_core::onboarding::OnboardingState`]
/// database strings. A user with no row reads as incomplete.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OnboardingStatus {
    pub id: DbId,
    pub user_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
