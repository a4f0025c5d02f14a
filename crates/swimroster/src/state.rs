//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It uses repository trait objects for storage abstraction
//! and supports different backends via feature flags.

use std::sync::Arc;

use swimroster_core::assignment::AssignmentService;
use swimroster_core::storage::{ClassRepository, StudentRepository};

use crate::config::Config;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!("Cannot enable both 'sqlite' and 'inmemory' storage features");

#[cfg(not(any(feature = "inmemory", feature = "sqlite")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'sqlite'");

/// Shared application state.
///
/// This is cloned for each request handler and contains shared resources
/// including repository trait objects for database access.
#[derive(Clone)]
pub struct AppState {
    /// Class repository.
    pub class_repo: Arc<dyn ClassRepository>,
    /// Student repository.
    pub student_repo: Arc<dyn StudentRepository>,
    /// Assignment service enforcing single-class membership.
    pub assignments: AssignmentService,
}

impl AppState {
    /// Creates a new AppState with the given repositories.
    fn build(
        class_repo: Arc<dyn ClassRepository>,
        student_repo: Arc<dyn StudentRepository>,
    ) -> Self {
        let assignments = AssignmentService::new(class_repo.clone(), student_repo.clone());
        Self {
            class_repo,
            student_repo,
            assignments,
        }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory_factory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for demos and testing without any external dependencies.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::new());
            Ok(Self::build(repo.clone(), repo))
        }
    }
}

#[cfg(feature = "sqlite")]
mod sqlite_factory {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            Ok(Self::build(repo.clone(), repo))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================
