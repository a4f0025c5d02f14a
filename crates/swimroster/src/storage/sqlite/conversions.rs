//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::{DateTime, Utc};
use rusqlite::Row;
use uuid::Uuid;

use swimroster_core::roster::{Student, SwimClass};

/// Convert a SQLite row to a SwimClass.
///
/// Expected columns: id, session, time, level, created_at, updated_at
pub fn row_to_class(row: &Row) -> rusqlite::Result<SwimClass> {
    let id: String = row.get(0)?;
    let session: String = row.get(1)?;
    let time: String = row.get(2)?;
    let level: String = row.get(3)?;
    let created_at: String = row.get(4)?;
    let updated_at: String = row.get(5)?;

    Ok(SwimClass {
        id: parse_uuid(&id)?,
        session,
        time,
        level,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

/// Convert a SQLite row to a Student.
///
/// Expected columns: id, name, age, class_id, created_at, updated_at
pub fn row_to_student(row: &Row) -> rusqlite::Result<Student> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;
    let age: i32 = row.get(2)?;
    let class_id: Option<String> = row.get(3)?;
    let created_at: String = row.get(4)?;
    let updated_at: String = row.get(5)?;

    Ok(Student {
        id: parse_uuid(&id)?,
        name,
        age,
        class_id: class_id.as_deref().map(parse_uuid).transpose()?,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

/// Format a datetime for storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

fn parse_uuid(s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_datetime_round_trip() {
        let dt = Utc.with_ymd_and_hms(2024, 9, 2, 9, 0, 0).unwrap();

        let formatted = format_datetime(&dt);
        let parsed = parse_datetime(&formatted).unwrap();

        assert_eq!(parsed, dt);
    }

    #[test]
    fn test_parse_uuid_valid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_uuid(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_uuid_invalid() {
        assert!(parse_uuid("not-a-uuid").is_err());
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert!(parse_datetime("not-a-date").is_err());
    }
}
