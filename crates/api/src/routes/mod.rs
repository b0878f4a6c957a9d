pub mod health;
pub mod onboarding;
pub mod profile;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (everything except `/health`).
///
/// Route hierarchy:
///
/// ```text
/// /onboarding/complete                  complete onboarding (POST)
/// /onboarding/skip                      skip onboarding (POST)
/// /onboarding/status                    onboarding status lookup (POST)
/// /onboarding/workout-planner/complete  complete workout-planner setup (POST)
///
/// /profile?userId=                      profile read model (GET)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .nest("/onboarding", onboarding::router())
        .merge(profile::router())
}
