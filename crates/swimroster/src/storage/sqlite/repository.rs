//! SQLite repository implementation.
//!
//! Implements the repository traits from `swimroster_core::storage` using SQLite.

use async_trait::async_trait;
use chrono::Utc;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use swimroster_core::roster::{Student, SwimClass};
use swimroster_core::storage::{ClassRepository, RepositoryError, Result, StudentRepository};

use super::conversions::{format_datetime, row_to_class, row_to_student};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage for classes and students. All
/// statements run on the connection's single worker thread, so the
/// conditional enrollment update cannot interleave with another write.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// ClassRepository implementation
// ============================================================================

#[async_trait]
impl ClassRepository for SqliteRepository {
    async fn get_class(&self, id: Uuid) -> Result<Option<SwimClass>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_CLASS_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([&id_str], row_to_class) {
                    Ok(class) => Ok(Some(class)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "SwimClass", id.to_string()))
    }

    async fn get_classes_by_session(&self, session: &str) -> Result<Vec<SwimClass>> {
        let session = session.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_CLASSES_BY_SESSION)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([&session], row_to_class).map_err(wrap_err)?;

                let mut classes = Vec::new();
                for row_result in rows {
                    classes.push(row_result.map_err(wrap_err)?);
                }
                Ok(classes)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "SwimClass"))
    }

    async fn save_class(&self, class: &SwimClass) -> Result<()> {
        let id = class.id.to_string();
        let session = class.session.clone();
        let time = class.time.clone();
        let level = class.level.clone();
        let created_at = format_datetime(&class.created_at);
        let updated_at = format_datetime(&class.updated_at);
        let class_id = class.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::UPSERT_CLASS,
                    rusqlite::params![id, session, time, level, created_at, updated_at],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "SwimClass", class_id))
    }
}

// ============================================================================
// StudentRepository implementation
// ============================================================================

#[async_trait]
impl StudentRepository for SqliteRepository {
    async fn get_student(&self, id: Uuid) -> Result<Option<Student>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_STUDENT_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([&id_str], row_to_student) {
                    Ok(student) => Ok(Some(student)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Student", id.to_string()))
    }

    async fn get_students_by_class(&self, class_id: Uuid) -> Result<Vec<Student>> {
        let class_id_str = class_id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_STUDENTS_BY_CLASS)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([&class_id_str], row_to_student)
                    .map_err(wrap_err)?;

                let mut students = Vec::new();
                for row_result in rows {
                    students.push(row_result.map_err(wrap_err)?);
                }
                Ok(students)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Student"))
    }

    async fn count_students_in_class(&self, class_id: Uuid) -> Result<usize> {
        let class_id_str = class_id.to_string();

        self.conn
            .call(move |conn| {
                let count: i64 = conn
                    .query_row(schema::COUNT_STUDENTS_BY_CLASS, [&class_id_str], |row| {
                        row.get(0)
                    })
                    .map_err(wrap_err)?;
                Ok(count as usize)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Student"))
    }

    async fn save_student(&self, student: &Student) -> Result<()> {
        let id = student.id.to_string();
        let name = student.name.clone();
        let age = student.age;
        let class_id = student.class_id.map(|c| c.to_string());
        let created_at = format_datetime(&student.created_at);
        let updated_at = format_datetime(&student.updated_at);
        let student_id = student.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::UPSERT_STUDENT,
                    rusqlite::params![id, name, age, class_id, created_at, updated_at],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Student", student_id))
    }

    async fn try_assign_class(&self, student_id: Uuid, class_id: Uuid) -> Result<Option<Student>> {
        let student_id_str = student_id.to_string();
        let class_id_str = class_id.to_string();
        let updated_at = format_datetime(&Utc::now());

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::ASSIGN_STUDENT_CLASS,
                        rusqlite::params![student_id_str, class_id_str, updated_at],
                    )
                    .map_err(wrap_err)?;

                if rows == 0 {
                    // Distinguish a missing student from a refused write.
                    let exists: std::result::Result<i64, rusqlite::Error> = conn.query_row(
                        schema::SELECT_STUDENT_EXISTS,
                        [&student_id_str],
                        |row| row.get(0),
                    );
                    return match exists {
                        Ok(_) => Ok(None),
                        Err(rusqlite::Error::QueryReturnedNoRows) => {
                            Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                        }
                        Err(e) => Err(wrap_err(e)),
                    };
                }

                let mut stmt = conn
                    .prepare(schema::SELECT_STUDENT_BY_ID)
                    .map_err(wrap_err)?;
                let student = stmt
                    .query_row([&student_id_str], row_to_student)
                    .map_err(wrap_err)?;
                Ok(Some(student))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Student", student_id.to_string()))
    }
}
