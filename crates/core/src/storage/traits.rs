use async_trait::async_trait;
use uuid::Uuid;

use crate::roster::{Student, SwimClass};

use super::Result;

/// Repository for class operations.
#[async_trait]
pub trait ClassRepository: Send + Sync {
    /// Gets a class by its ID.
    async fn get_class(&self, id: Uuid) -> Result<Option<SwimClass>>;

    /// Gets all classes offered in a session. No ordering is guaranteed.
    async fn get_classes_by_session(&self, session: &str) -> Result<Vec<SwimClass>>;

    /// Saves a class (upsert).
    async fn save_class(&self, class: &SwimClass) -> Result<()>;
}

/// Repository for student operations.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Gets a student by their ID.
    async fn get_student(&self, id: Uuid) -> Result<Option<Student>>;

    /// Gets all students enrolled in a class (the derived roster).
    async fn get_students_by_class(&self, class_id: Uuid) -> Result<Vec<Student>>;

    /// Counts the students enrolled in a class.
    async fn count_students_in_class(&self, class_id: Uuid) -> Result<usize>;

    /// Saves a student (upsert).
    async fn save_student(&self, student: &Student) -> Result<()>;

    /// Conditionally enrolls a student in a class.
    ///
    /// The write succeeds only when the student's membership is currently
    /// unset or already equals `class_id`; backends must make the check and
    /// the write a single atomic step, so concurrent attempts for the same
    /// student cannot both observe "unset". Returns the updated student, or
    /// `None` when the student belongs to a different class.
    async fn try_assign_class(&self, student_id: Uuid, class_id: Uuid)
        -> Result<Option<Student>>;
}
