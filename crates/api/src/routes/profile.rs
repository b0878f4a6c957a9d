//! Route definition for the profile read model.

use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Profile routes.
///
/// ```text
/// GET    /profile?userId=   -> get_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/profile", get(profile::get_profile))
}
