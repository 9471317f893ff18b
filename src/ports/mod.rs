//! Ports: the interfaces this core exposes to and consumes from its
//! collaborators.

mod alert_notifier;
mod state_store;

pub use alert_notifier::AlertNotifier;
pub use state_store::{StateSnapshot, StateStore, StateStoreError};
