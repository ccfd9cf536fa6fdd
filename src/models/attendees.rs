#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AttendeeRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub badge_code: String,
    pub updated_at: String,
}
