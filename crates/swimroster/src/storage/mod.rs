//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `swimroster_core::storage`. The implementations are selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): HashMap-backed storage, nothing persisted
//! - `sqlite`: SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! # Examples
//!
//! Build with the in-memory backend (default):
//! ```bash
//! cargo build -p swimroster
//! ```
//!
//! Build with SQLite:
//! ```bash
//! cargo build -p swimroster --no-default-features --features sqlite
//! ```

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
