use uuid::Uuid;

use super::error::ClassValidationError;
use super::types::Student;

/// Validates the raw fields of a class creation request.
///
/// Returns the list of missing/blank field names so the caller can report
/// them all at once rather than one per round trip.
pub fn validate_new_class(session: &str, time: &str, level: &str) -> Result<(), ClassValidationError> {
    let mut missing = Vec::new();
    if session.trim().is_empty() {
        missing.push("session".to_string());
    }
    if time.trim().is_empty() {
        missing.push("time".to_string());
    }
    if level.trim().is_empty() {
        missing.push("level".to_string());
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ClassValidationError::MissingFields(missing))
    }
}

/// Outcome of checking a student's membership against a target class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipCheck {
    /// The student has no current class.
    Unassigned,
    /// The student is already in the target class; assigning again is a no-op.
    AlreadyMember,
    /// The student belongs to a different class; assignment must be refused.
    OtherClass(Uuid),
}

/// Checks a student's current membership against the class being assigned.
///
/// Pure precheck for the assignment flow: the decision happens before any
/// mutation, and the conditional write re-verifies it under storage
/// atomicity.
pub fn check_membership(student: &Student, class_id: Uuid) -> MembershipCheck {
    match student.class_id {
        None => MembershipCheck::Unassigned,
        Some(current) if current == class_id => MembershipCheck::AlreadyMember,
        Some(current) => MembershipCheck::OtherClass(current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Student;

    #[test]
    fn test_validate_new_class_success() {
        assert!(validate_new_class("Fall2024", "Mon 9am", "Beginner").is_ok());
    }

    #[test]
    fn test_validate_new_class_reports_all_missing_fields() {
        let result = validate_new_class("", "Mon 9am", "   ");

        assert_eq!(
            result,
            Err(ClassValidationError::MissingFields(vec![
                "session".to_string(),
                "level".to_string(),
            ]))
        );
    }

    #[test]
    fn test_validate_new_class_all_blank() {
        let result = validate_new_class("", "", "");

        assert_eq!(
            result,
            Err(ClassValidationError::MissingFields(vec![
                "session".to_string(),
                "time".to_string(),
                "level".to_string(),
            ]))
        );
    }

    #[test]
    fn test_check_membership_unassigned() {
        let student = Student::new("Alice", 9);
        let class_id = Uuid::new_v4();

        assert_eq!(check_membership(&student, class_id), MembershipCheck::Unassigned);
    }

    #[test]
    fn test_check_membership_already_member() {
        let class_id = Uuid::new_v4();
        let student = Student::new("Alice", 9).with_class_id(class_id);

        assert_eq!(
            check_membership(&student, class_id),
            MembershipCheck::AlreadyMember
        );
    }

    #[test]
    fn test_check_membership_other_class() {
        let current = Uuid::new_v4();
        let target = Uuid::new_v4();
        let student = Student::new("Alice", 9).with_class_id(current);

        assert_eq!(
            check_membership(&student, target),
            MembershipCheck::OtherClass(current)
        );
    }
}
