use serde::Serialize;
use sqlx::SqlitePool;

use crate::database::{attendee_repo, peer_scan_repo};
use crate::error::ApiError;
use crate::models::AttendeeRow;

#[derive(Debug, Serialize)]
pub struct PeerView {
    pub id: i64,
    pub name: String,
    pub badge_code: String,
}

#[derive(Debug, Serialize)]
pub struct PeerScanView {
    pub scanner: PeerView,
    pub scanned: PeerView,
    pub scanned_at: String,
}

/// Records one attendee scanning another's badge. Self-scans are rejected.
pub async fn scan_badge(
    pool: &SqlitePool,
    scanner_badge: &str,
    scanned_badge: &str,
) -> Result<PeerScanView, ApiError> {
    let scanner = attendee_repo::find_attendee_by_badge(pool, scanner_badge).await?;
    let scanned = attendee_repo::find_attendee_by_badge(pool, scanned_badge).await?;

    let (Some(scanner), Some(scanned)) = (scanner, scanned) else {
        return Err(ApiError::NotFound(
            "one or both attendees not found".to_string(),
        ));
    };

    if scanner.id == scanned.id {
        return Err(ApiError::InvalidArgument(
            "attendees cannot scan themselves".to_string(),
        ));
    }

    let scan = peer_scan_repo::create_peer_scan(pool, scanner.id, scanned.id).await?;

    Ok(PeerScanView {
        scanner: to_peer_view(scanner),
        scanned: to_peer_view(scanned),
        scanned_at: scan.scanned_at,
    })
}

/// Attendees this badge holder has scanned.
pub async fn scanned_users(
    pool: &SqlitePool,
    badge_code: &str,
) -> Result<Vec<PeerView>, ApiError> {
    let Some(attendee) = attendee_repo::find_attendee_by_badge(pool, badge_code).await? else {
        return Err(ApiError::NotFound("attendee not found".to_string()));
    };

    let rows = peer_scan_repo::list_scanned_by(pool, attendee.id).await?;
    Ok(rows.into_iter().map(to_peer_view).collect())
}

/// Attendees who have scanned this badge holder.
pub async fn users_who_scanned(
    pool: &SqlitePool,
    badge_code: &str,
) -> Result<Vec<PeerView>, ApiError> {
    let Some(attendee) = attendee_repo::find_attendee_by_badge(pool, badge_code).await? else {
        return Err(ApiError::NotFound("attendee not found".to_string()));
    };

    let rows = peer_scan_repo::list_scanners_of(pool, attendee.id).await?;
    Ok(rows.into_iter().map(to_peer_view).collect())
}

fn to_peer_view(row: AttendeeRow) -> PeerView {
    PeerView {
        id: row.id,
        name: row.name,
        badge_code: row.badge_code,
    }
}
