use crate::{
    model::{Contributor, Transfer},
    services::{
        BalanceCalculator,
        rounding::{CENT_EPSILON, round_to_cents},
    },
};

/// Working copy of one side of the ledger during matching. Remaining
/// amounts are tracked here, never in the caller's records.
struct Party<'a> {
    name: &'a str,
    remaining: f64,
}

/// Greedy settlement matching over contributor balances.
pub struct SettlementEngine;

impl SettlementEngine {
    /// Compute the transfer list that settles every contributor to fair
    /// share.
    ///
    /// Fewer than two contributors means there is nothing to settle and the
    /// result is empty; surfacing that to a user is the caller's concern.
    /// Output is deterministic for a given input sequence: both sides are
    /// stable-sorted by owed amount descending, so equal amounts keep their
    /// relative input order.
    pub fn settle(contributors: &[Contributor]) -> Vec<Transfer<'_>> {
        if contributors.len() < 2 {
            return Vec::new();
        }

        let fair_share = BalanceCalculator::fair_share(contributors);

        let mut creditors: Vec<Party<'_>> = Vec::new();
        let mut debtors: Vec<Party<'_>> = Vec::new();
        for contributor in contributors {
            let net = contributor.amount_paid - fair_share;
            if net > CENT_EPSILON {
                creditors.push(Party {
                    name: &contributor.name,
                    remaining: net,
                });
            } else if net < -CENT_EPSILON {
                debtors.push(Party {
                    name: &contributor.name,
                    remaining: -net,
                });
            }
        }

        // Vec::sort_by is stable; ties keep input order.
        creditors.sort_by(|a, b| b.remaining.total_cmp(&a.remaining));
        debtors.sort_by(|a, b| b.remaining.total_cmp(&a.remaining));

        let mut transfers = Vec::with_capacity(creditors.len() + debtors.len());
        let mut debtor_idx = 0;
        let mut creditor_idx = 0;

        while debtor_idx < debtors.len() && creditor_idx < creditors.len() {
            let debtor = &mut debtors[debtor_idx];
            let creditor = &mut creditors[creditor_idx];
            let amount = debtor.remaining.min(creditor.remaining);

            if amount > CENT_EPSILON {
                transfers.push(Transfer {
                    from: debtor.name,
                    to: creditor.name,
                    amount: round_to_cents(amount),
                });
            }

            // Remaining balances shrink by the raw amount; rounding applies
            // only to the emitted figure.
            debtor.remaining -= amount;
            creditor.remaining -= amount;

            if debtor.remaining < CENT_EPSILON {
                debtor_idx += 1;
            }
            if creditor.remaining < CENT_EPSILON {
                creditor_idx += 1;
            }
        }

        transfers
    }
}
