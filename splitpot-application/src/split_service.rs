use crate::{
    error::{ContributionError, SplitServiceError},
    model::{CurrencyCode, SettlementEntry, SettlementReport, Split, SplitId},
    ports::SplitStore,
    validation::{validate_amount, validate_contributions, validate_new_name},
};
use chrono::Utc;
use splitpot_domain::{Contributor, SettlementEngine};

/// Orchestrates split mutations against the store. Owns the
/// recompute-on-change policy: every contributor mutation re-derives the
/// settlement list before the record is saved, so a persisted split's
/// settlements never go stale. The engine itself has no implicit triggers.
pub struct SplitService<'a> {
    store: &'a dyn SplitStore,
}

impl<'a> SplitService<'a> {
    pub fn new(store: &'a dyn SplitStore) -> Self {
        Self { store }
    }

    pub fn create_split(
        &self,
        id: SplitId,
        currency: CurrencyCode,
    ) -> Result<Split, SplitServiceError> {
        if self.store.load(&id)?.is_some() {
            return Err(SplitServiceError::SplitExists(id));
        }

        let split = Split {
            id,
            contributors: Vec::new(),
            settlements: Vec::new(),
            currency,
            created_at: Utc::now(),
        };
        self.store.save(&split)?;
        tracing::info!(split = %split.id, "created split");
        Ok(split)
    }

    /// Creates a split from an already-assembled contributor list.
    pub fn import_split(
        &self,
        id: SplitId,
        currency: CurrencyCode,
        contributors: Vec<Contributor>,
    ) -> Result<Split, SplitServiceError> {
        validate_contributions(&contributors)?;
        if self.store.load(&id)?.is_some() {
            return Err(SplitServiceError::SplitExists(id));
        }

        let mut split = Split {
            id,
            contributors,
            settlements: Vec::new(),
            currency,
            created_at: Utc::now(),
        };
        Self::recompute(&mut split);
        self.store.save(&split)?;
        tracing::info!(
            split = %split.id,
            contributors = split.contributors.len(),
            "imported split"
        );
        Ok(split)
    }

    pub fn add_contribution(
        &self,
        id: &SplitId,
        name: &str,
        amount: f64,
    ) -> Result<Split, SplitServiceError> {
        self.mutate(id, |split| {
            let name = validate_new_name(&split.contributors, name)?;
            validate_amount(name, amount)?;
            split.contributors.push(Contributor::new(name, amount));
            Ok(())
        })
    }

    pub fn update_contribution(
        &self,
        id: &SplitId,
        name: &str,
        amount: f64,
    ) -> Result<Split, SplitServiceError> {
        self.mutate(id, |split| {
            validate_amount(name, amount)?;
            let contributor = find_mut(&mut split.contributors, name)
                .ok_or_else(|| ContributionError::UnknownContributor(name.to_string()))?;
            contributor.amount_paid = amount;
            Ok(())
        })
    }

    pub fn remove_contribution(&self, id: &SplitId, name: &str) -> Result<Split, SplitServiceError> {
        self.mutate(id, |split| {
            let before = split.contributors.len();
            split
                .contributors
                .retain(|contributor| !names_match(&contributor.name, name));
            if split.contributors.len() == before {
                return Err(ContributionError::UnknownContributor(name.to_string()));
            }
            Ok(())
        })
    }

    pub fn delete_split(&self, id: &SplitId) -> Result<(), SplitServiceError> {
        if !self.store.delete(id)? {
            return Err(SplitServiceError::UnknownSplit(id.clone()));
        }
        tracing::info!(split = %id, "deleted split");
        Ok(())
    }

    /// Fresh balances and transfers for display; nothing is persisted.
    pub fn review(&self, id: &SplitId) -> Result<SettlementReport, SplitServiceError> {
        let split = self.load_existing(id)?;
        Ok(SettlementReport::compute(&split.contributors))
    }

    pub fn list_splits(&self) -> Result<Vec<SplitId>, SplitServiceError> {
        Ok(self.store.list_ids()?)
    }

    fn mutate(
        &self,
        id: &SplitId,
        op: impl FnOnce(&mut Split) -> Result<(), ContributionError>,
    ) -> Result<Split, SplitServiceError> {
        let mut split = self.load_existing(id)?;
        op(&mut split)?;
        Self::recompute(&mut split);
        self.store.save(&split)?;
        tracing::debug!(
            split = %split.id,
            contributors = split.contributors.len(),
            transfers = split.settlements.len(),
            "recomputed settlements"
        );
        Ok(split)
    }

    fn load_existing(&self, id: &SplitId) -> Result<Split, SplitServiceError> {
        self.store
            .load(id)?
            .ok_or_else(|| SplitServiceError::UnknownSplit(id.clone()))
    }

    fn recompute(split: &mut Split) {
        split.settlements = SettlementEngine::settle(&split.contributors)
            .into_iter()
            .map(SettlementEntry::from)
            .collect();
    }
}

fn names_match(stored: &str, requested: &str) -> bool {
    stored.to_lowercase() == requested.trim().to_lowercase()
}

fn find_mut<'c>(contributors: &'c mut [Contributor], name: &str) -> Option<&'c mut Contributor> {
    contributors
        .iter_mut()
        .find(|contributor| names_match(&contributor.name, name))
}
