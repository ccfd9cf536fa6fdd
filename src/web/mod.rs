pub mod routes;

use axum::{
    routing::{get, post, put},
    Router,
};
use sqlx::SqlitePool;
use tower_http::catch_panic::CatchPanicLayer;

use crate::web::routes::{attendees, peer_scans, scans};

/// Assembles the application router. Kept separate from `main` so tests
/// can drive it directly.
pub fn build_router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/scan/:badge_code", put(scans::add_scan_handler))
        .route("/scans", get(scans::scan_aggregates_handler))
        .route(
            "/scan_count_by_time_period",
            get(scans::scan_count_by_time_period_handler),
        )
        .route("/users", get(attendees::list_attendees_handler))
        .route(
            "/users/:id",
            get(attendees::attendee_handler).put(attendees::update_attendee_handler),
        )
        .route(
            "/users/badge/:badge_code",
            get(attendees::attendee_by_badge_handler),
        )
        .route("/scan-badge", post(peer_scans::scan_badge_handler))
        .route(
            "/scanned-users/:badge_code",
            get(peer_scans::scanned_users_handler),
        )
        .route(
            "/users-who-scanned/:badge_code",
            get(peer_scans::users_who_scanned_handler),
        )
        .layer(CatchPanicLayer::new())
        .with_state(pool)
}
