#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivityScanRow {
    pub id: i64,
    pub attendee_id: i64,
    pub activity_id: i64,
    pub scanned_at: String,
}
