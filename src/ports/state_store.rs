//! State store port - interface for persisting the tenant snapshot.
//!
//! The snapshot is an opaque blob to everything outside this crate;
//! collaborators must go through the session API, never parse it
//! directly.

use serde::{Deserialize, Serialize};

use crate::domain::plan::PlanState;
use crate::domain::usage::UsageState;

/// The full persisted state for one tenant session.
///
/// Saved as a single record: persistence is always a full-state
/// overwrite, never an incremental patch, so a crash between compute
/// and persist loses at most one mutation and can never leave partial
/// state behind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Plan, status, trial, and overrides.
    pub plan: PlanState,
    /// Counters, alerts, and the period tag.
    pub usage: UsageState,
}

/// Errors from the state store.
#[derive(Debug, thiserror::Error)]
pub enum StateStoreError {
    /// The stored snapshot could not be decoded.
    ///
    /// Callers recover by reinitializing to defaults rather than
    /// failing the session.
    #[error("corrupt snapshot: {0}")]
    Corrupt(String),

    /// Underlying storage failed.
    #[error("storage error: {0}")]
    Io(String),
}

/// Port for persisting and loading the tenant snapshot.
///
/// Implementations back onto local key-value storage (a JSON file, an
/// in-memory map for tests). All operations are synchronous and
/// complete or fail in one step; `save` must be atomic from the
/// caller's perspective.
pub trait StateStore: Send + Sync {
    /// Persists the full snapshot, replacing any previous one.
    fn save(&self, snapshot: &StateSnapshot) -> Result<(), StateStoreError>;

    /// Loads the last saved snapshot, or `Ok(None)` when nothing was
    /// ever saved.
    fn load(&self) -> Result<Option<StateSnapshot>, StateStoreError>;
}
