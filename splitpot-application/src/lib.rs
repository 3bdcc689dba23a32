#![warn(clippy::uninlined_format_args)]

mod error;
mod model;
mod ports;
mod split_service;
mod validation;

pub use error::{ContributionError, FailureKind, SplitServiceError, StoreError};
pub use model::{CurrencyCode, PersonBalance, SettlementEntry, SettlementReport, Split, SplitId};
pub use ports::SplitStore;
pub use split_service::SplitService;
pub use validation::{validate_amount, validate_contributions, validate_new_name};
