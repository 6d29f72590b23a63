//! The shared cold wallet aggregate
//!
//! A [`Wallet`] is built exactly once, either by splitting a secret into parts
//! ([`Wallet::generate`]) or by recombining parts into the secret
//! ([`Wallet::reconstruct`]). It is never mutated afterwards.
//!
//! # Examples
//!
//! ```rust
//! use coldshare::domain::{Part, ShortNotation, Signature};
//! use coldshare::wallet::Wallet;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let signature = Signature::try_new(1, 2, 4)?;
//! let wallet = Wallet::generate(signature, "ExampleOfPrivateKey")?;
//!
//! // Hand out the parts as short notations, then collect any two of them
//! let notations: Vec<String> = wallet
//!     .parts()
//!     .iter()
//!     .filter_map(Part::to_short_notation)
//!     .collect();
//!
//! let collected = [&notations[3], &notations[1]]
//!     .into_iter()
//!     .filter_map(|n| Part::from_short_notation(n));
//!
//! let recovered = Wallet::reconstruct(collected)?;
//! assert_eq!(recovered.secret(), "ExampleOfPrivateKey");
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::domain::{Part, Signature, Validate};
use crate::error::{ValidationError, WalletError};
use crate::sharing::{SecretSharing, ShamirSharing};

/// How a wallet came into existence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Secret supplied, parts derived from it
    Generated,
    /// Parts supplied, secret derived from them
    Reconstructed,
}

/// A secret together with the parts it is divided into
pub struct Wallet {
    signature: Signature,
    secret: Zeroizing<String>,
    parts: Vec<Part>,
    origin: Origin,
}

impl Wallet {
    /// Splits `secret` into `signature.total()` parts using [`ShamirSharing`]
    ///
    /// # Errors
    /// See [`Wallet::generate_with`]
    pub fn generate(signature: Signature, secret: &str) -> Result<Self, WalletError> {
        Self::generate_with(&ShamirSharing, signature, secret)
    }

    /// Splits `secret` into `signature.total()` parts using the given primitive
    ///
    /// # Errors
    /// - [`WalletError::Validation`] if the signature is invalid
    /// - [`WalletError::MissingArgument`] if the secret is blank
    /// - [`WalletError::Sharing`] if the primitive cannot handle the scheme
    pub fn generate_with<S>(
        sharing: &S,
        signature: Signature,
        secret: &str,
    ) -> Result<Self, WalletError>
    where
        S: SecretSharing + ?Sized,
    {
        signature.validate()?;

        if secret.trim().is_empty() {
            return Err(WalletError::MissingArgument("secret"));
        }

        let shares = sharing.split(
            secret,
            signature.required_parts(),
            signature.total_parts(),
        )?;

        debug!(
            threshold = signature.threshold(),
            total = signature.total(),
            parts = shares.len(),
            "generated wallet parts"
        );

        let parts = shares
            .into_iter()
            .map(|data| Part::new(signature, data))
            .collect();

        Ok(Self {
            signature,
            secret: Zeroizing::new(secret.to_owned()),
            parts,
            origin: Origin::Generated,
        })
    }

    /// Recovers the secret from `parts` using [`ShamirSharing`]
    ///
    /// # Errors
    /// See [`Wallet::reconstruct_with`]
    pub fn reconstruct<I>(parts: I) -> Result<Self, WalletError>
    where
        I: IntoIterator<Item = Part>,
    {
        Self::reconstruct_with(&ShamirSharing, parts)
    }

    /// Recovers the secret from `parts` using the given primitive
    ///
    /// Parts with identical data are collapsed to their first occurrence.
    /// Only the first `threshold` distinct parts are combined; any extra parts
    /// must merely be valid and carry the same signature.
    ///
    /// # Errors
    /// Checks run in this order, reporting the first failure:
    /// - [`WalletError::MissingArgument`] if no parts are given
    /// - [`WalletError::Validation`] if the first part's signature is invalid
    /// - [`WalletError::SignatureMismatch`] if any signature differs from the first
    /// - [`WalletError::InsufficientShares`] if fewer distinct parts than the threshold remain
    /// - [`WalletError::InvalidPart`] for the first distinct part that fails validation
    /// - [`WalletError::CorruptShares`] if the selected parts do not combine
    pub fn reconstruct_with<S, I>(sharing: &S, parts: I) -> Result<Self, WalletError>
    where
        S: SecretSharing + ?Sized,
        I: IntoIterator<Item = Part>,
    {
        let parts: Vec<Part> = parts.into_iter().collect();

        let Some(first) = parts.first() else {
            return Err(WalletError::MissingArgument("parts"));
        };
        let signature = *first.signature();
        signature.validate()?;

        if parts.iter().any(|part| *part.signature() != signature) {
            return Err(WalletError::SignatureMismatch);
        }

        let supplied = parts.len();
        let mut seen = HashSet::new();
        let distinct: Vec<Part> = parts
            .into_iter()
            .filter(|part| seen.insert(part.data().to_owned()))
            .collect();

        let required = signature.required_parts();
        if distinct.len() < required {
            return Err(WalletError::InsufficientShares {
                required,
                available: distinct.len(),
            });
        }

        for (idx, part) in distinct.iter().enumerate() {
            part.validate().map_err(|source| WalletError::InvalidPart {
                position: idx + 1,
                source,
            })?;
        }

        debug!(
            supplied,
            distinct = distinct.len(),
            combined = required,
            "reconstructing wallet"
        );

        let shares: Vec<&str> = distinct.iter().take(required).map(Part::data).collect();
        let secret = sharing.combine(&shares).map_err(|e| {
            if e.is_integrity() {
                warn!(error = %e, "selected shares failed to combine");
                WalletError::CorruptShares
            } else {
                WalletError::Sharing(e)
            }
        })?;

        Ok(Self {
            signature,
            secret,
            parts: distinct,
            origin: Origin::Reconstructed,
        })
    }

    #[must_use]
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// The protected secret, either supplied or recovered
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Generated parts, or the distinct parts used for reconstruction
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    #[must_use]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Consumes the wallet, keeping only its parts
    #[must_use]
    pub fn into_parts(self) -> Vec<Part> {
        self.parts
    }
}

impl Validate for Wallet {
    fn validate(&self) -> Result<(), ValidationError> {
        self.signature.validate()?;
        if self.secret.is_empty() && self.parts.is_empty() {
            return Err(ValidationError::EmptyWallet);
        }
        Ok(())
    }
}

/// Generated wallets compare by secret, reconstructed wallets by their set of parts
impl PartialEq for Wallet {
    fn eq(&self, other: &Self) -> bool {
        if self.signature != other.signature {
            return false;
        }
        match (self.origin, other.origin) {
            (Origin::Generated, Origin::Generated) => *self.secret == *other.secret,
            (Origin::Reconstructed, Origin::Reconstructed) => {
                let ours: HashSet<&Part> = self.parts.iter().collect();
                let theirs: HashSet<&Part> = other.parts.iter().collect();
                ours == theirs
            }
            _ => false,
        }
    }
}

impl Eq for Wallet {}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("signature", &self.signature)
            .field("secret", &"<redacted>")
            .field("parts", &self.parts.len())
            .field("origin", &self.origin)
            .finish()
    }
}
