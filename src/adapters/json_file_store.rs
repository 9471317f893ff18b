//! JSON-file state store implementation.
//!
//! Persists the tenant snapshot as a single JSON document on disk, the
//! library analog of the browser's key-value storage. Saves are atomic:
//! the snapshot is written to a sibling temp file and renamed over the
//! target, so readers never observe a half-written document.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::ports::{StateSnapshot, StateStore, StateStoreError};

/// File-backed implementation of the `StateStore` port.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store writing to the given path.
    ///
    /// The file is created on first save; a missing file loads as
    /// `None`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl StateStore for JsonFileStore {
    fn save(&self, snapshot: &StateSnapshot) -> Result<(), StateStoreError> {
        let json = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| StateStoreError::Io(e.to_string()))?;

        let tmp = self.temp_path();
        let mut file = fs::File::create(&tmp).map_err(|e| StateStoreError::Io(e.to_string()))?;
        file.write_all(&json)
            .map_err(|e| StateStoreError::Io(e.to_string()))?;
        file.sync_all()
            .map_err(|e| StateStoreError::Io(e.to_string()))?;
        drop(file);

        fs::rename(&tmp, &self.path).map_err(|e| StateStoreError::Io(e.to_string()))
    }

    fn load(&self) -> Result<Option<StateSnapshot>, StateStoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StateStoreError::Io(e.to_string())),
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| StateStoreError::Corrupt(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{BillingPeriod, Timestamp};
    use crate::domain::plan::{FeatureKey, PlanState, PlanTier};
    use crate::domain::usage::UsageState;

    fn snapshot() -> StateSnapshot {
        let mut plan = PlanState::new_trial(Timestamp::now());
        plan.upgrade_plan(PlanTier::Starter);
        plan.set_override(FeatureKey::CrmExport, true, None);

        let mut usage = UsageState::new_for(PlanTier::Starter, BillingPeriod::current());
        usage.increment(
            crate::domain::usage::UsageMetricKey::MessagesSent,
            850,
            PlanTier::Starter,
        );

        StateSnapshot { plan, usage }
    }

    #[test]
    fn missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("flyn_state.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("flyn_state.json"));
        let snap = snapshot();

        store.save(&snap).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, snap);
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flyn_state.json");
        let store = JsonFileStore::new(&path);

        store.save(&snapshot()).unwrap();

        assert!(path.exists());
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn corrupt_file_loads_as_corrupt_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flyn_state.json");
        fs::write(&path, b"{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        let err = store.load().unwrap_err();
        assert!(matches!(err, StateStoreError::Corrupt(_)));
    }

    #[test]
    fn save_replaces_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("flyn_state.json"));

        let first = snapshot();
        store.save(&first).unwrap();

        let mut second = first.clone();
        second.plan.upgrade_plan(PlanTier::Enterprise);
        store.save(&second).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.plan.current_plan(), PlanTier::Enterprise);
    }
}
