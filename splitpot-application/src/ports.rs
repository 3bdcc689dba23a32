use crate::{
    error::StoreError,
    model::{Split, SplitId},
};

/// Persistence port for split records. Adapters live in the infrastructure
/// crate; tests use lightweight in-process doubles.
pub trait SplitStore: Send + Sync {
    fn load(&self, id: &SplitId) -> Result<Option<Split>, StoreError>;
    fn save(&self, split: &Split) -> Result<(), StoreError>;
    /// Returns whether a record existed.
    fn delete(&self, id: &SplitId) -> Result<bool, StoreError>;
    fn list_ids(&self) -> Result<Vec<SplitId>, StoreError>;
}
