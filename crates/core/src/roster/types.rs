use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A swimming class offered within a session.
///
/// The roster is not stored on the class: membership is derived from
/// [`Student::class_id`], so the two sides of the relationship cannot
/// drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwimClass {
    pub id: Uuid,
    /// Grouping label for the term the class belongs to (e.g. "Fall2024").
    pub session: String,
    /// Schedule slot (e.g. "Mon 9am").
    pub time: String,
    /// Skill tier (e.g. "Beginner").
    pub level: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SwimClass {
    /// Creates a new class with a generated identity and an empty roster.
    pub fn new(
        session: impl Into<String>,
        time: impl Into<String>,
        level: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            session: session.into(),
            time: time.into(),
            level: level.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets a specific ID for this class (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

/// A student known to the system.
///
/// Students are created outside the class-management API; only their
/// class membership is mutated here. `class_id` is the single source of
/// truth for which class (if any) the student is enrolled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    /// The class this student is currently enrolled in, if any.
    pub class_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    /// Creates a new unassigned student with a generated identity.
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            age,
            class_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the class membership for this student.
    pub fn with_class_id(mut self, class_id: Uuid) -> Self {
        self.class_id = Some(class_id);
        self
    }

    /// Sets a specific ID for this student (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_class_has_empty_membership() {
        let class = SwimClass::new("Fall2024", "Mon 9am", "Beginner");

        assert_eq!(class.session, "Fall2024");
        assert_eq!(class.time, "Mon 9am");
        assert_eq!(class.level, "Beginner");
    }

    #[test]
    fn test_new_classes_get_distinct_ids() {
        let a = SwimClass::new("Fall2024", "Mon 9am", "Beginner");
        let b = SwimClass::new("Fall2024", "Mon 9am", "Beginner");

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_new_student_is_unassigned() {
        let student = Student::new("Alice", 9);

        assert_eq!(student.name, "Alice");
        assert_eq!(student.age, 9);
        assert!(student.class_id.is_none());
    }

    #[test]
    fn test_student_builder() {
        let class_id = Uuid::new_v4();
        let student = Student::new("Bob", 11).with_class_id(class_id);

        assert_eq!(student.class_id, Some(class_id));
    }
}
