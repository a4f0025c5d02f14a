//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Classes table
CREATE TABLE IF NOT EXISTS classes (
    id TEXT PRIMARY KEY,
    session TEXT NOT NULL,
    time TEXT NOT NULL,
    level TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Students table
-- class_id is the single source of truth for class membership; rosters
-- are derived by querying this column.
CREATE TABLE IF NOT EXISTS students (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    age INTEGER NOT NULL,
    class_id TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (class_id) REFERENCES classes(id)
);

-- Indexes for efficient queries
CREATE INDEX IF NOT EXISTS idx_classes_session ON classes(session);
CREATE INDEX IF NOT EXISTS idx_students_class_id ON students(class_id);
"#;

// Class queries
pub const UPSERT_CLASS: &str = r#"
INSERT INTO classes (id, session, time, level, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
ON CONFLICT(id) DO UPDATE SET
    session = excluded.session,
    time = excluded.time,
    level = excluded.level,
    updated_at = excluded.updated_at
"#;

pub const SELECT_CLASS_BY_ID: &str = r#"
SELECT id, session, time, level, created_at, updated_at
FROM classes
WHERE id = ?1
"#;

pub const SELECT_CLASSES_BY_SESSION: &str = r#"
SELECT id, session, time, level, created_at, updated_at
FROM classes
WHERE session = ?1
"#;

// Student queries
pub const UPSERT_STUDENT: &str = r#"
INSERT INTO students (id, name, age, class_id, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
ON CONFLICT(id) DO UPDATE SET
    name = excluded.name,
    age = excluded.age,
    class_id = excluded.class_id,
    updated_at = excluded.updated_at
"#;

pub const SELECT_STUDENT_BY_ID: &str = r#"
SELECT id, name, age, class_id, created_at, updated_at
FROM students
WHERE id = ?1
"#;

pub const SELECT_STUDENTS_BY_CLASS: &str = r#"
SELECT id, name, age, class_id, created_at, updated_at
FROM students
WHERE class_id = ?1
"#;

pub const COUNT_STUDENTS_BY_CLASS: &str = r#"
SELECT COUNT(*)
FROM students
WHERE class_id = ?1
"#;

/// Conditional enrollment: only touches the row when the student is
/// unassigned or already in the target class, so the membership check and
/// the write are one atomic statement.
pub const ASSIGN_STUDENT_CLASS: &str = r#"
UPDATE students
SET class_id = ?2, updated_at = ?3
WHERE id = ?1 AND (class_id IS NULL OR class_id = ?2)
"#;

pub const SELECT_STUDENT_EXISTS: &str = r#"
SELECT 1
FROM students
WHERE id = ?1
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_valid_sql() {
        // Verify the SQL contains expected table names
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS classes"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS students"));
        assert!(CREATE_TABLES.contains("idx_students_class_id"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        // Class queries
        assert!(UPSERT_CLASS.contains("ON CONFLICT(id) DO UPDATE"));
        assert!(SELECT_CLASS_BY_ID.contains("SELECT"));
        assert!(SELECT_CLASSES_BY_SESSION.contains("session = ?1"));

        // Student queries
        assert!(UPSERT_STUDENT.contains("ON CONFLICT(id) DO UPDATE"));
        assert!(SELECT_STUDENT_BY_ID.contains("SELECT"));
        assert!(SELECT_STUDENTS_BY_CLASS.contains("class_id = ?1"));
        assert!(COUNT_STUDENTS_BY_CLASS.contains("COUNT(*)"));

        // The conditional write must re-check membership inside the statement
        assert!(ASSIGN_STUDENT_CLASS.contains("class_id IS NULL OR class_id = ?2"));
    }
}
