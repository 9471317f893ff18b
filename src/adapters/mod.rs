//! Adapters: concrete implementations of the ports.

mod json_file_store;
mod memory_store;
mod notifier;

pub use json_file_store::JsonFileStore;
pub use memory_store::InMemoryStateStore;
pub use notifier::{AlertNotification, NoopNotifier, RecordingNotifier};
