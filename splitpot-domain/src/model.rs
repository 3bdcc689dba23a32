use serde::{Deserialize, Serialize};

/// One participant in an expense pool and the total they have paid in.
///
/// The name is expected to be non-empty and unique within its pool
/// (case-insensitively); both are enforced at the data-entry boundary,
/// not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,
    pub amount_paid: f64,
}

impl Contributor {
    pub fn new(name: impl Into<String>, amount_paid: f64) -> Self {
        Self {
            name: name.into(),
            amount_paid,
        }
    }
}

/// A contributor's position relative to fair share (positive: overpaid,
/// owed money by the group; negative: underpaid, owes money).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Balance<'a> {
    pub name: &'a str,
    pub net: f64,
}

/// One directed payment instruction: `from` (a debtor) pays `to` (a
/// creditor) `amount`, rounded to two decimal places.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transfer<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub amount: f64,
}
