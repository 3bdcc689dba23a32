pub mod balance_calculator;
pub mod rounding;
pub mod settlement_engine;

pub use balance_calculator::BalanceCalculator;
pub use rounding::{CENT_EPSILON, round_to_cents};
pub use settlement_engine::SettlementEngine;
