use serde::{Deserialize, Serialize};
use uuid::Uuid;

use swimroster_core::roster::{validate_new_class, ClassValidationError, Student, SwimClass};

use super::StudentDto;

/// Request payload for creating a new class.
///
/// Fields default to empty strings so a request with missing keys still
/// deserializes; validation then reports every missing field by name in a
/// single response.
#[derive(Debug, Deserialize)]
pub struct CreateClass {
    #[serde(default)]
    pub session: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub level: String,
}

impl CreateClass {
    /// Validates field presence without consuming the request.
    pub fn validate(&self) -> Result<(), ClassValidationError> {
        validate_new_class(&self.session, &self.time, &self.level)
    }

    /// Converts the create request into a SwimClass.
    pub fn into_class(self) -> SwimClass {
        SwimClass::new(self.session, self.time, self.level)
    }
}

/// Class summary returned by list and create responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSummary {
    pub id: Uuid,
    pub session: String,
    pub time: String,
    pub level: String,
    pub student_count: usize,
}

impl ClassSummary {
    /// Builds a summary from a class and its roster size.
    pub fn from_class(class: &SwimClass, student_count: usize) -> Self {
        Self {
            id: class.id,
            session: class.session.clone(),
            time: class.time.clone(),
            level: class.level.clone(),
            student_count,
        }
    }
}

/// Full class detail including the roster.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDetail {
    pub id: Uuid,
    pub session: String,
    pub time: String,
    pub level: String,
    pub students: Vec<StudentDto>,
}

impl ClassDetail {
    /// Builds a detail payload from a class and its roster.
    pub fn from_class(class: &SwimClass, roster: &[Student]) -> Self {
        Self {
            id: class.id,
            session: class.session.clone(),
            time: class.time.clone(),
            level: class.level.clone(),
            students: roster.iter().map(StudentDto::from_student).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_class_validate_missing_fields() {
        let payload = CreateClass {
            session: String::new(),
            time: "Mon 9am".to_string(),
            level: String::new(),
        };

        let err = payload.validate().unwrap_err();
        assert_eq!(
            err,
            ClassValidationError::MissingFields(vec![
                "session".to_string(),
                "level".to_string(),
            ])
        );
    }

    #[test]
    fn test_create_class_into_class() {
        let payload = CreateClass {
            session: "Fall2024".to_string(),
            time: "Mon 9am".to_string(),
            level: "Beginner".to_string(),
        };

        let class = payload.into_class();
        assert_eq!(class.session, "Fall2024");
        assert_eq!(class.time, "Mon 9am");
        assert_eq!(class.level, "Beginner");
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let class = SwimClass::new("Fall2024", "Mon 9am", "Beginner");
        let summary = ClassSummary::from_class(&class, 0);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["session"], "Fall2024");
        assert_eq!(json["studentCount"], 0);
    }

    #[test]
    fn test_detail_includes_roster() {
        let class = SwimClass::new("Fall2024", "Mon 9am", "Beginner");
        let roster = vec![Student::new("Alice", 9).with_class_id(class.id)];

        let detail = ClassDetail::from_class(&class, &roster);
        assert_eq!(detail.students.len(), 1);
        assert_eq!(detail.students[0].name, "Alice");
    }
}
