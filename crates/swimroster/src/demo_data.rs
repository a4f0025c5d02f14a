//! Demo data seeding.
//!
//! Students are created outside the class-management API, so a fresh
//! database has nothing to enroll. Seeding populates a handful of students
//! and one class to make the assignment flow exercisable.

use swimroster_core::roster::{Student, SwimClass};

use crate::state::AppState;

/// Seeds demo students and a starter class.
pub async fn seed(state: &AppState) -> anyhow::Result<()> {
    let class = SwimClass::new("Fall2024", "Mon 9am", "Beginner");
    state.class_repo.save_class(&class).await?;
    tracing::info!(class_id = %class.id, session = %class.session, "Seeded demo class");

    let students = [
        ("Mia Torres", 8),
        ("Noah Kim", 9),
        ("Olivia Brand", 10),
        ("Liam Porter", 7),
        ("Emma Castillo", 11),
    ];

    for (name, age) in students {
        let student = Student::new(name, age);
        state.student_repo.save_student(&student).await?;
        tracing::info!(student_id = %student.id, name, "Seeded demo student");
    }

    Ok(())
}
