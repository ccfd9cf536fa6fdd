use sqlx::SqlitePool;

use crate::models::{AttendeeRow, PeerScanRow};

const SQL_INSERT_PEER_SCAN: &str = r#"
INSERT INTO peer_scans (scanner_id, scanned_id)
VALUES (?1, ?2)
RETURNING
  id,
  scanner_id,
  scanned_id,
  scanned_at
"#;

pub async fn create_peer_scan(
    pool: &SqlitePool,
    scanner_id: i64,
    scanned_id: i64,
) -> sqlx::Result<PeerScanRow> {
    sqlx::query_as::<_, PeerScanRow>(SQL_INSERT_PEER_SCAN)
        .bind(scanner_id)
        .bind(scanned_id)
        .fetch_one(pool)
        .await
}

const SQL_LIST_SCANNED_BY: &str = r#"
SELECT
  u.id,
  u.name,
  u.email,
  u.phone,
  u.badge_code,
  u.updated_at
FROM attendees u
JOIN peer_scans p ON p.scanned_id = u.id
WHERE p.scanner_id = ?1
ORDER BY p.scanned_at
"#;

/// Attendees that the given attendee has scanned.
pub async fn list_scanned_by(
    pool: &SqlitePool,
    attendee_id: i64,
) -> sqlx::Result<Vec<AttendeeRow>> {
    sqlx::query_as::<_, AttendeeRow>(SQL_LIST_SCANNED_BY)
        .bind(attendee_id)
        .fetch_all(pool)
        .await
}

const SQL_LIST_SCANNERS_OF: &str = r#"
SELECT
  u.id,
  u.name,
  u.email,
  u.phone,
  u.badge_code,
  u.updated_at
FROM attendees u
JOIN peer_scans p ON p.scanner_id = u.id
WHERE p.scanned_id = ?1
ORDER BY p.scanned_at
"#;

/// Attendees that have scanned the given attendee.
pub async fn list_scanners_of(
    pool: &SqlitePool,
    attendee_id: i64,
) -> sqlx::Result<Vec<AttendeeRow>> {
    sqlx::query_as::<_, AttendeeRow>(SQL_LIST_SCANNERS_OF)
        .bind(attendee_id)
        .fetch_all(pool)
        .await
}
