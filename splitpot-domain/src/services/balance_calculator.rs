use crate::model::{Balance, Contributor};

/// Fair-share and per-contributor net computation.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Total paid divided by contributor count, or zero for an empty pool.
    pub fn fair_share(contributors: &[Contributor]) -> f64 {
        if contributors.is_empty() {
            return 0.0;
        }
        let total: f64 = contributors.iter().map(|c| c.amount_paid).sum();
        total / contributors.len() as f64
    }

    /// One balance per contributor, input order preserved.
    pub fn balances(contributors: &[Contributor]) -> Vec<Balance<'_>> {
        let fair_share = Self::fair_share(contributors);
        contributors
            .iter()
            .map(|contributor| Balance {
                name: &contributor.name,
                net: contributor.amount_paid - fair_share,
            })
            .collect()
    }
}
