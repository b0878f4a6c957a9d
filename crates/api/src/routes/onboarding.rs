//! Route definitions for the onboarding flow.
//!
//! Mounted at `/onboarding` by `app_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::onboarding;
use crate::state::AppState;

/// Onboarding routes.
///
/// ```text
/// POST   /complete                   -> complete_onboarding
/// POST   /skip                       -> skip_onboarding
/// POST   /status                     -> onboarding_status
/// POST   /workout-planner/complete   -> complete_workout_planner
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/complete", post(onboarding::complete_onboarding))
        .route("/skip", post(onboarding::skip_onboarding))
        .route("/status", post(onboarding::onboarding_status))
        .route(
            "/workout-planner/complete",
            post(onboarding::complete_workout_planner),
        )
}
