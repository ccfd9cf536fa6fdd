use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::services::peer_scan_service;

#[derive(Debug, Deserialize)]
pub struct ScanBadgeBody {
    scanner_badge: Option<String>,
    scanned_badge: Option<String>,
}

pub async fn scan_badge_handler(
    State(pool): State<SqlitePool>,
    Json(body): Json<ScanBadgeBody>,
) -> Result<Json<peer_scan_service::PeerScanView>, ApiError> {
    let (Some(scanner_badge), Some(scanned_badge)) = (
        body.scanner_badge.as_deref(),
        body.scanned_badge.as_deref(),
    ) else {
        return Err(ApiError::InvalidArgument(
            "both scanner_badge and scanned_badge are required".to_string(),
        ));
    };

    let view = peer_scan_service::scan_badge(&pool, scanner_badge, scanned_badge).await?;
    tracing::info!(
        scanner = %view.scanner.badge_code,
        scanned = %view.scanned.badge_code,
        "peer scan recorded"
    );
    Ok(Json(view))
}

pub async fn scanned_users_handler(
    Path(badge_code): Path<String>,
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<peer_scan_service::PeerView>>, ApiError> {
    let views = peer_scan_service::scanned_users(&pool, &badge_code).await?;
    Ok(Json(views))
}

pub async fn users_who_scanned_handler(
    Path(badge_code): Path<String>,
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<peer_scan_service::PeerView>>, ApiError> {
    let views = peer_scan_service::users_who_scanned(&pool, &badge_code).await?;
    Ok(Json(views))
}
