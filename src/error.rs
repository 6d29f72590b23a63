//! Error types for signatures, parts and wallets

use thiserror::Error;

/// Invariant violations reported by [`Validate`](crate::domain::Validate)
///
/// Only the first failing rule is ever reported, so callers can show the
/// message verbatim.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("total cannot be less than one")]
    TotalBelowOne,

    #[error("threshold cannot be less than one")]
    ThresholdBelowOne,

    #[error("threshold cannot be greater than total")]
    ThresholdAboveTotal,

    #[error("data is null or empty")]
    BlankData,

    #[error("wallet holds neither a secret nor parts")]
    EmptyWallet,
}

/// Failures of the secret-sharing primitive
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharingError {
    /// Parameters outside what the primitive can represent
    #[error("unsupported sharing parameters: {0}")]
    Unsupported(String),

    /// Share text does not follow the `<index>-<payload>-<checksum>` layout
    #[error("malformed share: {0}")]
    Malformed(String),

    #[error("checksum mismatch: expected 0x{expected:08x}, got 0x{actual:08x}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    /// Shares decode individually but cannot be interpolated together
    #[error("inconsistent shares: {0}")]
    Inconsistent(String),

    #[error("recovered secret is not valid UTF-8")]
    InvalidSecret,
}

impl SharingError {
    /// Whether this failure means the supplied shares are damaged or do not belong together
    #[must_use]
    pub fn is_integrity(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

/// Failures while generating or reconstructing a [`Wallet`](crate::wallet::Wallet)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("argument '{0}' is missing or blank")]
    MissingArgument(&'static str),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("invalid part #{position}: {source}")]
    InvalidPart {
        position: usize,
        source: ValidationError,
    },

    #[error("shares have different signatures")]
    SignatureMismatch,

    #[error("insufficient shares: need at least {required}, but only {available} distinct provided")]
    InsufficientShares { required: usize, available: usize },

    #[error("shares are corrupt")]
    CorruptShares,

    #[error(transparent)]
    Sharing(#[from] SharingError),
}
