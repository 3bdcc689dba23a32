/// One cent in currency-decimal terms.
///
/// Every comparison against zero inside the engine goes through this
/// tolerance, so binary-float division error never manufactures a phantom
/// creditor or debtor.
pub const CENT_EPSILON: f64 = 0.01;

/// Round to two decimal places, half away from zero upward (0.125 -> 0.13).
///
/// Only meaningful for non-negative amounts; the engine never emits a
/// negative transfer.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0 + 0.5).floor() / 100.0
}
