#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PeerScanRow {
    pub id: i64,
    pub scanner_id: i64,
    pub scanned_id: i64,
    pub scanned_at: String,
}
