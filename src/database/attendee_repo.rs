use sqlx::SqlitePool;

use crate::models::AttendeeRow;

/// Field changes for a partial attendee update. `None` means "leave as is".
pub struct AttendeeChanges<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub badge_code: Option<&'a str>,
}

impl AttendeeChanges<'_> {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.badge_code.is_none()
    }
}

const SQL_FIND_ATTENDEE_BY_BADGE: &str = r#"
SELECT
  id,
  name,
  email,
  phone,
  badge_code,
  updated_at
FROM attendees
WHERE badge_code = ?1
LIMIT 1
"#;

pub async fn find_attendee_by_badge(
    pool: &SqlitePool,
    badge_code: &str,
) -> sqlx::Result<Option<AttendeeRow>> {
    sqlx::query_as::<_, AttendeeRow>(SQL_FIND_ATTENDEE_BY_BADGE)
        .bind(badge_code)
        .fetch_optional(pool)
        .await
}

const SQL_FIND_ATTENDEE_BY_ID: &str = r#"
SELECT
  id,
  name,
  email,
  phone,
  badge_code,
  updated_at
FROM attendees
WHERE id = ?1
LIMIT 1
"#;

pub async fn find_attendee_by_id(
    pool: &SqlitePool,
    id: i64,
) -> sqlx::Result<Option<AttendeeRow>> {
    sqlx::query_as::<_, AttendeeRow>(SQL_FIND_ATTENDEE_BY_ID)
        .bind(id)
        .fetch_optional(pool)
        .await
}

const SQL_LIST_ATTENDEES: &str = r#"
SELECT
  id,
  name,
  email,
  phone,
  badge_code,
  updated_at
FROM attendees
ORDER BY id
"#;

pub async fn list_attendees(pool: &SqlitePool) -> sqlx::Result<Vec<AttendeeRow>> {
    sqlx::query_as::<_, AttendeeRow>(SQL_LIST_ATTENDEES)
        .fetch_all(pool)
        .await
}

// Absent fields keep their current value via COALESCE; updated_at always
// moves forward when a row matches.
const SQL_UPDATE_ATTENDEE: &str = r#"
UPDATE attendees
SET
  name = COALESCE(?2, name),
  email = COALESCE(?3, email),
  phone = COALESCE(?4, phone),
  badge_code = COALESCE(?5, badge_code),
  updated_at = strftime('%Y-%m-%d %H:%M:%f', 'now')
WHERE id = ?1
RETURNING
  id,
  name,
  email,
  phone,
  badge_code,
  updated_at
"#;

pub async fn update_attendee(
    pool: &SqlitePool,
    id: i64,
    changes: AttendeeChanges<'_>,
) -> sqlx::Result<Option<AttendeeRow>> {
    sqlx::query_as::<_, AttendeeRow>(SQL_UPDATE_ATTENDEE)
        .bind(id)
        .bind(changes.name)
        .bind(changes.email)
        .bind(changes.phone)
        .bind(changes.badge_code)
        .fetch_optional(pool)
        .await
}
