use crate::model::SplitId;
use thiserror::Error;

/// Failure of the persistence adapter behind the `SplitStore` port.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("split store I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode or decode split record: {0}")]
    Serde(String),
    #[error("split id '{0}' cannot be used as a storage key")]
    InvalidId(String),
}

/// Rejection of a contributor entry at the data-entry boundary. Local and
/// correctable; never reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContributionError {
    #[error("contributor name must not be empty")]
    EmptyName,
    #[error("contributor '{0}' already exists in this split")]
    DuplicateName(String),
    #[error("amount for '{name}' must be a non-negative number")]
    InvalidAmount { name: String },
    #[error("no contributor named '{0}' in this split")]
    UnknownContributor(String),
}

/// Coarse classification of a service failure, used by callers to pick a
/// log level and a message channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    UserInput,
    Misconfiguration,
    InternalBug,
}

#[derive(Debug, Error)]
pub enum SplitServiceError {
    #[error("split '{0}' does not exist")]
    UnknownSplit(SplitId),
    #[error("split '{0}' already exists")]
    SplitExists(SplitId),
    #[error(transparent)]
    Contribution(#[from] ContributionError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SplitServiceError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::UnknownSplit(_) | Self::SplitExists(_) | Self::Contribution(_) => {
                FailureKind::UserInput
            }
            Self::Store(_) => FailureKind::Misconfiguration,
        }
    }
}
