use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use splitpot_domain::{BalanceCalculator, Contributor, SettlementEngine, Transfer};
use std::fmt;

/// Key under which a split record is stored.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SplitId(String);

impl SplitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SplitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display currency for a split (ISO-4217-style code). Never enters the
/// engine; amounts are bare numbers in whatever unit the caller implied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self("USD".to_string())
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Owned counterpart of a domain transfer, persisted inside a split record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementEntry {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

impl From<Transfer<'_>> for SettlementEntry {
    fn from(transfer: Transfer<'_>) -> Self {
        Self {
            from: transfer.from.to_string(),
            to: transfer.to.to_string(),
            amount: transfer.amount,
        }
    }
}

/// One persisted expense pool: its contributors, the settlements derived
/// from them, and display metadata. `settlements` is always the engine's
/// output for the current contributor list; `SplitService` recomputes it on
/// every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    pub id: SplitId,
    pub contributors: Vec<Contributor>,
    pub settlements: Vec<SettlementEntry>,
    pub currency: CurrencyCode,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonBalance {
    pub name: String,
    pub net: f64,
}

/// Everything a caller needs to display one settlement: fair share,
/// per-contributor balances, and the transfer list. Computed fresh on every
/// request.
#[derive(Debug, Clone, PartialEq)]
pub struct SettlementReport {
    pub fair_share: f64,
    pub balances: Vec<PersonBalance>,
    pub transfers: Vec<SettlementEntry>,
}

impl SettlementReport {
    pub fn compute(contributors: &[Contributor]) -> Self {
        let fair_share = BalanceCalculator::fair_share(contributors);
        let balances = BalanceCalculator::balances(contributors)
            .into_iter()
            .map(|balance| PersonBalance {
                name: balance.name.to_string(),
                net: balance.net,
            })
            .collect();
        let transfers = SettlementEngine::settle(contributors)
            .into_iter()
            .map(SettlementEntry::from)
            .collect();

        Self {
            fair_share,
            balances,
            transfers,
        }
    }
}
