use sqlx::SqlitePool;

use crate::models::{ActivityRow, ActivityScanRow};

#[derive(Debug, sqlx::FromRow)]
pub struct AttendeeScanRow {
    pub attendee_id: i64,
    pub activity_name: String,
    pub activity_category: String,
    pub scanned_at: String,
}

#[derive(Debug, sqlx::FromRow)]
pub struct ScanCountRow {
    pub activity_name: String,
    pub activity_category: String,
    pub scan_count: i64,
}

#[derive(Debug, sqlx::FromRow)]
pub struct HourCountRow {
    pub hour: i64,
    pub scan_count: i64,
}

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (activity_name, activity_category)
VALUES (?1, ?2)
ON CONFLICT (activity_name) DO NOTHING
"#;

const SQL_FIND_ACTIVITY_BY_NAME: &str = r#"
SELECT
  id,
  activity_name,
  activity_category
FROM activities
WHERE activity_name = ?1
LIMIT 1
"#;

/// Looks up an activity by name, inserting it first when absent. The
/// conflict-ignoring insert makes concurrent creators of the same name
/// converge on one row instead of faulting on the unique constraint.
pub async fn get_or_create_activity(
    pool: &SqlitePool,
    activity_name: &str,
    activity_category: &str,
) -> sqlx::Result<ActivityRow> {
    sqlx::query(SQL_INSERT_ACTIVITY)
        .bind(activity_name)
        .bind(activity_category)
        .execute(pool)
        .await?;

    sqlx::query_as::<_, ActivityRow>(SQL_FIND_ACTIVITY_BY_NAME)
        .bind(activity_name)
        .fetch_one(pool)
        .await
}

const SQL_INSERT_ACTIVITY_SCAN: &str = r#"
INSERT INTO activity_scans (attendee_id, activity_id)
VALUES (?1, ?2)
RETURNING
  id,
  attendee_id,
  activity_id,
  scanned_at
"#;

const SQL_TOUCH_ATTENDEE: &str = r#"
UPDATE attendees
SET updated_at = strftime('%Y-%m-%d %H:%M:%f', 'now')
WHERE id = ?1
"#;

/// Inserts the scan and refreshes the attendee's updated_at in one
/// transaction.
pub async fn create_activity_scan(
    pool: &SqlitePool,
    attendee_id: i64,
    activity_id: i64,
) -> sqlx::Result<ActivityScanRow> {
    let mut tx = pool.begin().await?;

    let scan = sqlx::query_as::<_, ActivityScanRow>(SQL_INSERT_ACTIVITY_SCAN)
        .bind(attendee_id)
        .bind(activity_id)
        .fetch_one(&mut *tx)
        .await?;

    sqlx::query(SQL_TOUCH_ATTENDEE)
        .bind(attendee_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(scan)
}

const SQL_LIST_SCANS_FOR_ATTENDEE: &str = r#"
SELECT
  s.attendee_id,
  a.activity_name,
  a.activity_category,
  s.scanned_at
FROM activity_scans s
JOIN activities a ON a.id = s.activity_id
WHERE s.attendee_id = ?1
ORDER BY s.scanned_at
"#;

pub async fn list_scans_for_attendee(
    pool: &SqlitePool,
    attendee_id: i64,
) -> sqlx::Result<Vec<AttendeeScanRow>> {
    sqlx::query_as::<_, AttendeeScanRow>(SQL_LIST_SCANS_FOR_ATTENDEE)
        .bind(attendee_id)
        .fetch_all(pool)
        .await
}

// One joined query for the full attendee listing; rows are grouped per
// attendee in the service layer.
const SQL_LIST_SCANS_FOR_ALL_ATTENDEES: &str = r#"
SELECT
  s.attendee_id,
  a.activity_name,
  a.activity_category,
  s.scanned_at
FROM activity_scans s
JOIN activities a ON a.id = s.activity_id
ORDER BY s.attendee_id, s.scanned_at
"#;

pub async fn list_scans_for_all_attendees(
    pool: &SqlitePool,
) -> sqlx::Result<Vec<AttendeeScanRow>> {
    sqlx::query_as::<_, AttendeeScanRow>(SQL_LIST_SCANS_FOR_ALL_ATTENDEES)
        .fetch_all(pool)
        .await
}

// Category filters before grouping, frequency bounds filter after.
const SQL_AGGREGATE_SCAN_COUNTS: &str = r#"
SELECT
  a.activity_name,
  a.activity_category,
  COUNT(s.id) AS scan_count
FROM activities a
JOIN activity_scans s ON s.activity_id = a.id
WHERE ?3 IS NULL OR a.activity_category = ?3
GROUP BY a.id, a.activity_name, a.activity_category
HAVING (?1 IS NULL OR COUNT(s.id) >= ?1)
   AND (?2 IS NULL OR COUNT(s.id) <= ?2)
ORDER BY a.activity_name
"#;

pub async fn aggregate_scan_counts(
    pool: &SqlitePool,
    min_frequency: Option<i64>,
    max_frequency: Option<i64>,
    activity_category: Option<&str>,
) -> sqlx::Result<Vec<ScanCountRow>> {
    sqlx::query_as::<_, ScanCountRow>(SQL_AGGREGATE_SCAN_COUNTS)
        .bind(min_frequency)
        .bind(max_frequency)
        .bind(activity_category)
        .fetch_all(pool)
        .await
}

// Time-of-day window on the named activity, grouped by hour (0-23, date
// ignored). A start after the end wraps past midnight: the row matches
// when its time-of-day is >= start OR <= end. Bounds are inclusive.
const SQL_SCAN_COUNTS_BY_HOUR: &str = r#"
SELECT
  CAST(strftime('%H', s.scanned_at) AS INTEGER) AS hour,
  COUNT(s.id) AS scan_count
FROM activity_scans s
JOIN activities a ON a.id = s.activity_id
WHERE a.activity_name = ?1
  AND (
    (?2 <= ?3 AND time(s.scanned_at) BETWEEN ?2 AND ?3)
    OR (?2 > ?3 AND (time(s.scanned_at) >= ?2 OR time(s.scanned_at) <= ?3))
  )
GROUP BY hour
ORDER BY hour
"#;

/// `start_time` and `end_time` must be `HH:MM:SS` strings.
pub async fn scan_counts_by_hour(
    pool: &SqlitePool,
    activity_name: &str,
    start_time: &str,
    end_time: &str,
) -> sqlx::Result<Vec<HourCountRow>> {
    sqlx::query_as::<_, HourCountRow>(SQL_SCAN_COUNTS_BY_HOUR)
        .bind(activity_name)
        .bind(start_time)
        .bind(end_time)
        .fetch_all(pool)
        .await
}
