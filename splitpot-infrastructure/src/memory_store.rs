use dashmap::DashMap;
use splitpot_application::{Split, SplitId, SplitStore, StoreError};

/// In-process store backed by a concurrent map. Used by tests and by
/// embedding callers that manage persistence themselves.
#[derive(Default)]
pub struct MemorySplitStore {
    splits: DashMap<SplitId, Split>,
}

impl MemorySplitStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SplitStore for MemorySplitStore {
    fn load(&self, id: &SplitId) -> Result<Option<Split>, StoreError> {
        Ok(self.splits.get(id).map(|entry| entry.value().clone()))
    }

    fn save(&self, split: &Split) -> Result<(), StoreError> {
        self.splits.insert(split.id.clone(), split.clone());
        Ok(())
    }

    fn delete(&self, id: &SplitId) -> Result<bool, StoreError> {
        Ok(self.splits.remove(id).is_some())
    }

    fn list_ids(&self) -> Result<Vec<SplitId>, StoreError> {
        let mut ids: Vec<SplitId> = self.splits.iter().map(|entry| entry.key().clone()).collect();
        ids.sort();
        Ok(ids)
    }
}
