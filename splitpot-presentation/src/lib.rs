#![warn(clippy::uninlined_format_args)]

mod currency;
mod settlement_presenter;

pub use currency::{currency_symbol, format_amount};
pub use settlement_presenter::{SettlementPresenter, SettlementView};
