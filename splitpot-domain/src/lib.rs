#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{Balance, Contributor, Transfer};
pub use services::{BalanceCalculator, CENT_EPSILON, SettlementEngine, round_to_cents};
