//! External collaborators module
//!
//! This module contains the storage backend the widget reads exercises from
//! and appends logs to, and the notifier that signals timer completion.

pub mod memory_store;
pub mod notifier;
pub mod rest_store;
pub mod store;

// Re-export main types
pub use memory_store::MemoryStore;
pub use notifier::{CompletionNotifier, LogNotifier, COMPLETION_MESSAGE, COMPLETION_TITLE};
pub use rest_store::RestStore;
pub use store::{Exercise, ExerciseStore, NewExerciseLog};
