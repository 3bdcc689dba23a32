use splitpot_application::{Split, SplitId, SplitStore, StoreError};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// One pretty-printed JSON file per split under a data directory.
///
/// Split ids double as file names, so only ids made of alphanumerics,
/// `.`, `_` and `-` are accepted; anything else is rejected with
/// `StoreError::InvalidId` before touching the filesystem.
pub struct JsonSplitStore {
    root: PathBuf,
}

impl JsonSplitStore {
    /// Opens the store, creating the data directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, id: &SplitId) -> Result<PathBuf, StoreError> {
        if id.as_str().is_empty()
            || !id
                .as_str()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        {
            return Err(StoreError::InvalidId(id.as_str().to_string()));
        }
        Ok(self.root.join(format!("{id}.json")))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SplitStore for JsonSplitStore {
    fn load(&self, id: &SplitId) -> Result<Option<Split>, StoreError> {
        let path = self.path_for(id)?;
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let split = serde_json::from_str(&raw).map_err(|err| StoreError::Serde(err.to_string()))?;
        Ok(Some(split))
    }

    fn save(&self, split: &Split) -> Result<(), StoreError> {
        let path = self.path_for(&split.id)?;
        let raw = serde_json::to_string_pretty(split)
            .map_err(|err| StoreError::Serde(err.to_string()))?;
        fs::write(&path, raw)?;
        tracing::debug!(split = %split.id, path = %path.display(), "saved split record");
        Ok(())
    }

    fn delete(&self, id: &SplitId) -> Result<bool, StoreError> {
        let path = self.path_for(id)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn list_ids(&self) -> Result<Vec<SplitId>, StoreError> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem().and_then(|stem| stem.to_str())
            {
                ids.push(SplitId::new(stem));
            }
        }
        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use splitpot_application::{CurrencyCode, SettlementEntry};
    use splitpot_domain::Contributor;
    use std::sync::atomic::{AtomicU64, Ordering};

    static DIR_SEQ: AtomicU64 = AtomicU64::new(0);

    fn scratch_dir() -> PathBuf {
        let seq = DIR_SEQ.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "splitpot-json-store-{}-{seq}",
            std::process::id()
        ))
    }

    fn sample(id: &str) -> Split {
        Split {
            id: SplitId::new(id),
            contributors: vec![
                Contributor::new("Alice", 100.0),
                Contributor::new("Bob", 0.0),
            ],
            settlements: vec![SettlementEntry {
                from: "Bob".to_string(),
                to: "Alice".to_string(),
                amount: 50.0,
            }],
            currency: CurrencyCode::new("eur"),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn round_trips_a_split_record() {
        let dir = scratch_dir();
        let store = JsonSplitStore::open(&dir).expect("open should succeed");

        let split = sample("ski-trip");
        store.save(&split).expect("save should succeed");
        let loaded = store
            .load(&SplitId::new("ski-trip"))
            .expect("load should succeed")
            .expect("record should exist");
        assert_eq!(loaded, split);

        assert_eq!(
            store.list_ids().expect("list should succeed"),
            vec![SplitId::new("ski-trip")]
        );

        assert!(store.delete(&split.id).expect("delete should succeed"));
        assert!(
            store
                .load(&split.id)
                .expect("load should succeed")
                .is_none()
        );

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_record_loads_as_none() {
        let dir = scratch_dir();
        let store = JsonSplitStore::open(&dir).expect("open should succeed");
        assert!(
            store
                .load(&SplitId::new("nope"))
                .expect("load should succeed")
                .is_none()
        );
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn path_hostile_ids_are_rejected() {
        let dir = scratch_dir();
        let store = JsonSplitStore::open(&dir).expect("open should succeed");

        for id in ["../escape", "a/b", ""] {
            let err = store
                .load(&SplitId::new(id))
                .expect_err("hostile id should be rejected");
            assert!(matches!(err, StoreError::InvalidId(_)), "id {id:?}");
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn corrupt_file_reports_serde_error() {
        let dir = scratch_dir();
        let store = JsonSplitStore::open(&dir).expect("open should succeed");
        fs::write(dir.join("bad.json"), "{ not json").expect("write should succeed");

        let err = store
            .load(&SplitId::new("bad"))
            .expect_err("corrupt record should fail");
        assert!(matches!(err, StoreError::Serde(_)));
        let _ = fs::remove_dir_all(&dir);
    }
}
