use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::services::attendee_service;

pub async fn list_attendees_handler(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<attendee_service::AttendeeView>>, ApiError> {
    let views = attendee_service::list_attendees(&pool).await?;
    Ok(Json(views))
}

pub async fn attendee_handler(
    Path(id): Path<i64>,
    State(pool): State<SqlitePool>,
) -> Result<Json<attendee_service::AttendeeView>, ApiError> {
    let view = attendee_service::get_attendee(&pool, id).await?;
    Ok(Json(view))
}

pub async fn attendee_by_badge_handler(
    Path(badge_code): Path<String>,
    State(pool): State<SqlitePool>,
) -> Result<Json<attendee_service::AttendeeView>, ApiError> {
    let view = attendee_service::get_attendee_by_badge(&pool, &badge_code).await?;
    Ok(Json(view))
}

pub async fn update_attendee_handler(
    Path(id): Path<i64>,
    State(pool): State<SqlitePool>,
    Json(body): Json<Value>,
) -> Result<Json<attendee_service::AttendeeUpdateView>, ApiError> {
    let view = attendee_service::update_attendee(&pool, id, &body).await?;
    tracing::info!(attendee_id = id, "attendee updated");
    Ok(Json(view))
}
