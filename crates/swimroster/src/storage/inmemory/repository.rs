//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use swimroster_core::roster::{Student, SwimClass};
use swimroster_core::storage::{ClassRepository, RepositoryError, Result, StudentRepository};

/// In-memory storage backend.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    classes: Arc<RwLock<HashMap<Uuid, SwimClass>>>,
    students: Arc<RwLock<HashMap<Uuid, Student>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            classes: Arc::new(RwLock::new(HashMap::new())),
            students: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ClassRepository for InMemoryRepository {
    async fn get_class(&self, id: Uuid) -> Result<Option<SwimClass>> {
        let classes = self.classes.read().await;
        Ok(classes.get(&id).cloned())
    }

    async fn get_classes_by_session(&self, session: &str) -> Result<Vec<SwimClass>> {
        let classes = self.classes.read().await;
        Ok(classes
            .values()
            .filter(|c| c.session == session)
            .cloned()
            .collect())
    }

    async fn save_class(&self, class: &SwimClass) -> Result<()> {
        let mut classes = self.classes.write().await;
        classes.insert(class.id, class.clone());
        Ok(())
    }
}

#[async_trait]
impl StudentRepository for InMemoryRepository {
    async fn get_student(&self, id: Uuid) -> Result<Option<Student>> {
        let students = self.students.read().await;
        Ok(students.get(&id).cloned())
    }

    async fn get_students_by_class(&self, class_id: Uuid) -> Result<Vec<Student>> {
        let students = self.students.read().await;
        Ok(students
            .values()
            .filter(|s| s.class_id == Some(class_id))
            .cloned()
            .collect())
    }

    async fn count_students_in_class(&self, class_id: Uuid) -> Result<usize> {
        let students = self.students.read().await;
        Ok(students
            .values()
            .filter(|s| s.class_id == Some(class_id))
            .count())
    }

    async fn save_student(&self, student: &Student) -> Result<()> {
        let mut students = self.students.write().await;
        students.insert(student.id, student.clone());
        Ok(())
    }

    async fn try_assign_class(&self, student_id: Uuid, class_id: Uuid) -> Result<Option<Student>> {
        // Check and write happen under the same write lock, so two
        // concurrent attempts for one student serialize here.
        let mut students = self.students.write().await;
        let student = students
            .get_mut(&student_id)
            .ok_or_else(|| RepositoryError::NotFound {
                entity_type: "Student",
                id: student_id.to_string(),
            })?;

        match student.class_id {
            Some(current) if current != class_id => Ok(None),
            _ => {
                student.class_id = Some(class_id);
                student.updated_at = chrono::Utc::now();
                Ok(Some(student.clone()))
            }
        }
    }
}
