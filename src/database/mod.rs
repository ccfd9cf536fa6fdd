pub mod attendee_repo;
pub mod peer_scan_repo;
pub mod scan_repo;

pub async fn run_migrations(
    pool: &sqlx::SqlitePool,
) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
