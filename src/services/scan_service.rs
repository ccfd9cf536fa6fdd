use chrono::NaiveTime;
use serde::Serialize;
use sqlx::SqlitePool;

use crate::database::{attendee_repo, scan_repo};
use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct ScanRecordView {
    pub user: ScanAttendeeView,
    pub activity: ScanActivityView,
    pub scanned_at: String,
}

#[derive(Debug, Serialize)]
pub struct ScanAttendeeView {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub badge_code: String,
}

#[derive(Debug, Serialize)]
pub struct ScanActivityView {
    pub activity_name: String,
    pub activity_category: String,
}

#[derive(Debug, Serialize)]
pub struct ScanCountView {
    pub activity_name: String,
    pub activity_category: String,
    pub scan_count: i64,
}

#[derive(Debug, Serialize)]
pub struct HourCountView {
    pub hour: i64,
    pub count: i64,
}

/// Records an activity scan for the badge holder. The activity is created
/// on first reference.
pub async fn add_scan(
    pool: &SqlitePool,
    badge_code: &str,
    activity_name: &str,
    activity_category: &str,
) -> Result<ScanRecordView, ApiError> {
    let Some(attendee) = attendee_repo::find_attendee_by_badge(pool, badge_code).await? else {
        return Err(ApiError::NotFound("attendee not found".to_string()));
    };

    let activity =
        scan_repo::get_or_create_activity(pool, activity_name, activity_category).await?;
    let scan = scan_repo::create_activity_scan(pool, attendee.id, activity.id).await?;

    Ok(ScanRecordView {
        user: ScanAttendeeView {
            name: attendee.name,
            email: attendee.email,
            phone: attendee.phone,
            badge_code: attendee.badge_code,
        },
        activity: ScanActivityView {
            activity_name: activity.activity_name,
            activity_category: activity.activity_category,
        },
        scanned_at: scan.scanned_at,
    })
}

pub async fn scan_aggregates(
    pool: &SqlitePool,
    min_frequency: Option<i64>,
    max_frequency: Option<i64>,
    activity_category: Option<&str>,
) -> Result<Vec<ScanCountView>, ApiError> {
    let rows =
        scan_repo::aggregate_scan_counts(pool, min_frequency, max_frequency, activity_category)
            .await?;

    Ok(rows
        .into_iter()
        .map(|row| ScanCountView {
            activity_name: row.activity_name,
            activity_category: row.activity_category,
            scan_count: row.scan_count,
        })
        .collect())
}

/// Hourly scan distribution for one activity inside a wall-clock window.
/// Both bounds are `"HH:MM"` strings; the date part of the scans is
/// ignored.
pub async fn scan_count_by_time_period(
    pool: &SqlitePool,
    activity_name: &str,
    start_time: &str,
    end_time: &str,
) -> Result<Vec<HourCountView>, ApiError> {
    let start = parse_wall_clock(start_time)?;
    let end = parse_wall_clock(end_time)?;

    let rows = scan_repo::scan_counts_by_hour(
        pool,
        activity_name,
        &start.format("%H:%M:%S").to_string(),
        &end.format("%H:%M:%S").to_string(),
    )
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| HourCountView {
            hour: row.hour,
            count: row.scan_count,
        })
        .collect())
}

fn parse_wall_clock(raw: &str) -> Result<NaiveTime, ApiError> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|_| ApiError::InvalidArgument("invalid time format, use HH:MM".to_string()))
}
