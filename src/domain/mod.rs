//! Domain types for shared cold wallets
//!
//! This module contains the value objects that travel between custodians:
//! - [`Signature`] - Sharing scheme metadata (version, threshold, total)
//! - [`Part`] - One share of a secret together with its signature
//!
//! Both implement the two capabilities defined here:
//! - [`Validate`] - Ordered invariant checks reporting the first failure
//! - [`ShortNotation`] - Compact pipe-delimited text form, suitable for QR codes

mod part;
mod signature;

pub use part::Part;
pub use signature::Signature;

use crate::error::ValidationError;

/// Field delimiter of the short notation
pub const DELIMITER: char = '|';

/// Ordered invariant checks
pub trait Validate {
    /// Checks the invariants in their documented order
    ///
    /// # Errors
    /// Returns the first violated rule
    fn validate(&self) -> Result<(), ValidationError>;

    /// Shorthand for `validate().is_ok()`
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Compact text encoding with the least text possible
pub trait ShortNotation: Sized {
    /// Encodes the value, or `None` when it is not in a valid state
    fn to_short_notation(&self) -> Option<String>;

    /// Parses a short notation, returning `None` unless it yields a valid value
    fn from_short_notation(text: &str) -> Option<Self>;
}
