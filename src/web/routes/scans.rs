use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::services::scan_service;

#[derive(Debug, Deserialize)]
pub struct AddScanBody {
    activity_name: Option<String>,
    activity_category: Option<String>,
}

pub async fn add_scan_handler(
    Path(badge_code): Path<String>,
    State(pool): State<SqlitePool>,
    Json(body): Json<AddScanBody>,
) -> Result<Json<scan_service::ScanRecordView>, ApiError> {
    let (Some(activity_name), Some(activity_category)) = (
        body.activity_name.as_deref(),
        body.activity_category.as_deref(),
    ) else {
        return Err(ApiError::InvalidArgument(
            "missing activity fields".to_string(),
        ));
    };

    let view =
        scan_service::add_scan(&pool, &badge_code, activity_name, activity_category).await?;
    tracing::info!(badge_code = %badge_code, activity = %view.activity.activity_name, "activity scan recorded");
    Ok(Json(view))
}

#[derive(Debug, Deserialize)]
pub struct ScanAggregatesQuery {
    min_frequency: Option<i64>,
    max_frequency: Option<i64>,
    activity_category: Option<String>,
}

pub async fn scan_aggregates_handler(
    State(pool): State<SqlitePool>,
    Query(q): Query<ScanAggregatesQuery>,
) -> Result<Json<Vec<scan_service::ScanCountView>>, ApiError> {
    let views = scan_service::scan_aggregates(
        &pool,
        q.min_frequency,
        q.max_frequency,
        q.activity_category.as_deref(),
    )
    .await?;
    Ok(Json(views))
}

#[derive(Debug, Deserialize)]
pub struct TimePeriodQuery {
    activity_name: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
}

pub async fn scan_count_by_time_period_handler(
    State(pool): State<SqlitePool>,
    Query(q): Query<TimePeriodQuery>,
) -> Result<Json<Value>, ApiError> {
    let (Some(activity_name), Some(start_time), Some(end_time)) =
        (q.activity_name, q.start_time, q.end_time)
    else {
        return Err(ApiError::InvalidArgument(
            "missing required parameters".to_string(),
        ));
    };

    let distribution =
        scan_service::scan_count_by_time_period(&pool, &activity_name, &start_time, &end_time)
            .await?;
    Ok(Json(json!({ "time_distribution": distribution })))
}
