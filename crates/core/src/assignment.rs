//! Enrollment of students into classes.
//!
//! The one invariant in the system lives here: a student is a member of at
//! most one class at any time. The service resolves both records, runs the
//! pure membership precheck, and then delegates the actual mutation to the
//! repository's conditional write so the invariant also holds under
//! concurrent attempts (the precheck alone could race).

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::roster::{check_membership, MembershipCheck, Student};
use crate::storage::{
    repository_error_to_status_code, ClassRepository, RepositoryError, StudentRepository,
};

/// Errors that can occur when assigning a student to a class.
#[derive(Debug, Error)]
pub enum AssignmentError {
    #[error("Class not found: {0}")]
    ClassNotFound(Uuid),
    #[error("Student not found: {0}")]
    StudentNotFound(Uuid),
    #[error("Student {student_id} is already assigned to class {class_id}")]
    AlreadyAssigned { student_id: Uuid, class_id: Uuid },
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

/// Maps an [`AssignmentError`] to an HTTP status code.
///
/// Both not-found variants map to 404 and the invariant violation to 409;
/// storage failures reuse the repository mapping.
pub fn assignment_error_to_status_code(error: &AssignmentError) -> u16 {
    match error {
        AssignmentError::ClassNotFound(_) => 404,
        AssignmentError::StudentNotFound(_) => 404,
        AssignmentError::AlreadyAssigned { .. } => 409,
        AssignmentError::Storage(e) => repository_error_to_status_code(e),
    }
}

/// Service enforcing the single-class-membership rule.
#[derive(Clone)]
pub struct AssignmentService {
    class_repo: Arc<dyn ClassRepository>,
    student_repo: Arc<dyn StudentRepository>,
}

impl AssignmentService {
    /// Creates a new service over the given repositories.
    pub fn new(
        class_repo: Arc<dyn ClassRepository>,
        student_repo: Arc<dyn StudentRepository>,
    ) -> Self {
        Self {
            class_repo,
            student_repo,
        }
    }

    /// Assigns a student to a class.
    ///
    /// Re-assigning a student to the class they are already in is an
    /// idempotent success. Assigning a student who belongs to a different
    /// class fails with [`AssignmentError::AlreadyAssigned`] and mutates
    /// nothing. Because the roster is derived from `Student::class_id`,
    /// the student record is the only write.
    pub async fn assign(
        &self,
        class_id: Uuid,
        student_id: Uuid,
    ) -> Result<Student, AssignmentError> {
        self.class_repo
            .get_class(class_id)
            .await?
            .ok_or(AssignmentError::ClassNotFound(class_id))?;

        let student = self
            .student_repo
            .get_student(student_id)
            .await?
            .ok_or(AssignmentError::StudentNotFound(student_id))?;

        if let MembershipCheck::OtherClass(current) = check_membership(&student, class_id) {
            return Err(AssignmentError::AlreadyAssigned {
                student_id,
                class_id: current,
            });
        }

        // The conditional write re-verifies the membership atomically; a
        // concurrent assignment that won the race surfaces as None here.
        let updated = self
            .student_repo
            .try_assign_class(student_id, class_id)
            .await?;

        match updated {
            Some(student) => Ok(student),
            None => {
                let current = self
                    .student_repo
                    .get_student(student_id)
                    .await?
                    .and_then(|s| s.class_id)
                    .unwrap_or(class_id);
                Err(AssignmentError::AlreadyAssigned {
                    student_id,
                    class_id: current,
                })
            }
        }
    }
}
