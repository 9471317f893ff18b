//! In-memory state store implementation.
//!
//! Backs the `StateStore` port with a mutex-guarded slot. Useful for
//! tests, demos, and ephemeral sessions that do not need to survive a
//! restart.

use std::sync::Mutex;

use crate::ports::{StateSnapshot, StateStore, StateStoreError};

/// In-memory implementation of the `StateStore` port.
///
/// Thread-safe via internal `Mutex`. Does not persist across restarts.
#[derive(Default)]
pub struct InMemoryStateStore {
    snapshot: Mutex<Option<StateSnapshot>>,
}

impl InMemoryStateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with a snapshot, as if it had been saved before.
    ///
    /// Useful for testing load paths (stale periods, prior sessions).
    pub fn seeded(snapshot: StateSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(Some(snapshot)),
        }
    }

    /// Drops any stored snapshot.
    pub fn clear(&self) {
        *self.snapshot.lock().unwrap() = None;
    }

    /// Returns true if nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.snapshot.lock().unwrap().is_none()
    }
}

impl StateStore for InMemoryStateStore {
    fn save(&self, snapshot: &StateSnapshot) -> Result<(), StateStoreError> {
        *self.snapshot.lock().unwrap() = Some(snapshot.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<StateSnapshot>, StateStoreError> {
        Ok(self.snapshot.lock().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{BillingPeriod, Timestamp};
    use crate::domain::plan::{PlanState, PlanTier};
    use crate::domain::usage::UsageState;

    fn snapshot() -> StateSnapshot {
        StateSnapshot {
            plan: PlanState::new_trial(Timestamp::now()),
            usage: UsageState::new_for(PlanTier::Free, BillingPeriod::current()),
        }
    }

    #[test]
    fn empty_store_loads_none() {
        let store = InMemoryStateStore::new();
        assert!(store.load().unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let store = InMemoryStateStore::new();
        let snap = snapshot();

        store.save(&snap).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, snap);
    }

    #[test]
    fn save_replaces_previous_snapshot() {
        let store = InMemoryStateStore::new();
        let first = snapshot();
        let mut second = snapshot();
        second.plan.upgrade_plan(PlanTier::Pro);

        store.save(&first).unwrap();
        store.save(&second).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.plan.current_plan(), PlanTier::Pro);
    }

    #[test]
    fn clear_empties_the_store() {
        let store = InMemoryStateStore::seeded(snapshot());
        assert!(!store.is_empty());

        store.clear();
        assert!(store.is_empty());
    }
}
