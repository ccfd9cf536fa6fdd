use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;
use sqlx::SqlitePool;

use crate::database::attendee_repo::{self, AttendeeChanges};
use crate::database::scan_repo::{self, AttendeeScanRow};
use crate::error::ApiError;
use crate::models::AttendeeRow;

#[derive(Debug, Serialize)]
pub struct AttendeeView {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub badge_code: String,
    pub updated_at: String,
    pub scans: Vec<AttendeeScanView>,
}

#[derive(Debug, Serialize)]
pub struct AttendeeScanView {
    pub activity_name: String,
    pub activity_category: String,
    pub scanned_at: String,
}

/// Update responses carry the attendee without the scans array.
#[derive(Debug, Serialize)]
pub struct AttendeeUpdateView {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub badge_code: String,
    pub updated_at: String,
}

/// All attendees with their scans. Scans are batch-loaded with a single
/// joined query and grouped here, instead of one query per attendee.
pub async fn list_attendees(pool: &SqlitePool) -> Result<Vec<AttendeeView>, ApiError> {
    let attendees = attendee_repo::list_attendees(pool).await?;
    let scans = scan_repo::list_scans_for_all_attendees(pool).await?;

    let mut scans_by_attendee: HashMap<i64, Vec<AttendeeScanView>> = HashMap::new();
    for scan in scans {
        scans_by_attendee
            .entry(scan.attendee_id)
            .or_default()
            .push(to_scan_view(scan));
    }

    Ok(attendees
        .into_iter()
        .map(|row| {
            let scans = scans_by_attendee.remove(&row.id).unwrap_or_default();
            to_view(row, scans)
        })
        .collect())
}

pub async fn get_attendee(pool: &SqlitePool, id: i64) -> Result<AttendeeView, ApiError> {
    let Some(row) = attendee_repo::find_attendee_by_id(pool, id).await? else {
        return Err(ApiError::NotFound("attendee not found".to_string()));
    };
    with_scans(pool, row).await
}

pub async fn get_attendee_by_badge(
    pool: &SqlitePool,
    badge_code: &str,
) -> Result<AttendeeView, ApiError> {
    let Some(row) = attendee_repo::find_attendee_by_badge(pool, badge_code).await? else {
        return Err(ApiError::NotFound("attendee not found".to_string()));
    };
    with_scans(pool, row).await
}

/// Applies a partial update from a JSON object. Only `name`, `email`,
/// `phone` and `badge_code` are recognized; anything else in the payload
/// is ignored, and a payload with nothing recognized is rejected.
pub async fn update_attendee(
    pool: &SqlitePool,
    id: i64,
    body: &Value,
) -> Result<AttendeeUpdateView, ApiError> {
    let Some(fields) = body.as_object() else {
        return Err(ApiError::InvalidArgument(
            "expected a JSON object".to_string(),
        ));
    };

    let changes = AttendeeChanges {
        name: fields.get("name").and_then(Value::as_str),
        email: fields.get("email").and_then(Value::as_str),
        phone: fields.get("phone").and_then(Value::as_str),
        badge_code: fields.get("badge_code").and_then(Value::as_str),
    };
    if changes.is_empty() {
        return Err(ApiError::InvalidArgument(
            "no valid fields provided for the update".to_string(),
        ));
    }

    let Some(row) = attendee_repo::update_attendee(pool, id, changes).await? else {
        return Err(ApiError::NotFound("attendee not found".to_string()));
    };

    Ok(AttendeeUpdateView {
        id: row.id,
        name: row.name,
        email: row.email,
        phone: row.phone,
        badge_code: row.badge_code,
        updated_at: row.updated_at,
    })
}

async fn with_scans(pool: &SqlitePool, row: AttendeeRow) -> Result<AttendeeView, ApiError> {
    let scans = scan_repo::list_scans_for_attendee(pool, row.id)
        .await?
        .into_iter()
        .map(to_scan_view)
        .collect();
    Ok(to_view(row, scans))
}

fn to_view(row: AttendeeRow, scans: Vec<AttendeeScanView>) -> AttendeeView {
    AttendeeView {
        id: row.id,
        name: row.name,
        email: row.email,
        phone: row.phone,
        badge_code: row.badge_code,
        updated_at: row.updated_at,
        scans,
    }
}

fn to_scan_view(scan: AttendeeScanRow) -> AttendeeScanView {
    AttendeeScanView {
        activity_name: scan.activity_name,
        activity_category: scan.activity_category,
        scanned_at: scan.scanned_at,
    }
}
