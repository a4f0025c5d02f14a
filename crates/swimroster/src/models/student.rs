use serde::{Deserialize, Serialize};
use uuid::Uuid;

use swimroster_core::roster::Student;

/// Request payload for enrolling a student into a class.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddStudent {
    #[serde(default)]
    pub student_id: Option<Uuid>,
}

/// Student as exposed in class rosters and enrollment responses.
#[derive(Debug, Clone, Serialize)]
pub struct StudentDto {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
}

impl StudentDto {
    pub fn from_student(student: &Student) -> Self {
        Self {
            id: student.id,
            name: student.name.clone(),
            age: student.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_student_parses_camel_case() {
        let id = Uuid::new_v4();
        let payload: AddStudent =
            serde_json::from_value(serde_json::json!({ "studentId": id })).unwrap();
        assert_eq!(payload.student_id, Some(id));
    }

    #[test]
    fn test_add_student_missing_id_is_none() {
        let payload: AddStudent = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(payload.student_id.is_none());
    }

    #[test]
    fn test_student_dto_from_student() {
        let student = Student::new("Alice", 9);
        let dto = StudentDto::from_student(&student);

        assert_eq!(dto.id, student.id);
        assert_eq!(dto.name, "Alice");
        assert_eq!(dto.age, 9);
    }
}
