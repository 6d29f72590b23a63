//! `Signature` value object describing a sharing scheme

use serde::Serialize;

use super::{DELIMITER, ShortNotation, Validate};
use crate::error::ValidationError;

/// Sharing scheme shared identically by every part of one secret
///
/// Fields are private and there are no setters: a signature is fixed once
/// built. [`Signature::new`] stores raw values so that invalid schemes can
/// still be described and rejected; [`Signature::try_new`] validates eagerly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Signature {
    version: i32,
    threshold: i32,
    total: i32,
}

impl Signature {
    /// Version written by this crate
    pub const CURRENT_VERSION: i32 = 1;

    /// Creates a signature without checking its invariants
    #[must_use]
    pub const fn new(version: i32, threshold: i32, total: i32) -> Self {
        Self {
            version,
            threshold,
            total,
        }
    }

    /// Creates a validated signature
    ///
    /// # Errors
    /// Returns the first violated invariant
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coldshare::domain::Signature;
    ///
    /// let signature = Signature::try_new(1, 2, 4).unwrap();
    /// assert_eq!(signature.threshold(), 2);
    ///
    /// // Threshold above total
    /// assert!(Signature::try_new(1, 5, 3).is_err());
    /// ```
    pub fn try_new(version: i32, threshold: i32, total: i32) -> Result<Self, ValidationError> {
        let signature = Self::new(version, threshold, total);
        signature.validate()?;
        Ok(signature)
    }

    #[must_use]
    pub fn version(&self) -> i32 {
        self.version
    }

    /// Number of parts required to recompose the secret
    #[must_use]
    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    /// Number of parts generated from the secret
    #[must_use]
    pub fn total(&self) -> i32 {
        self.total
    }

    /// Threshold as a count, zero when negative
    pub(crate) fn required_parts(&self) -> usize {
        usize::try_from(self.threshold).unwrap_or(0)
    }

    /// Total as a count, zero when negative
    pub(crate) fn total_parts(&self) -> usize {
        usize::try_from(self.total).unwrap_or(0)
    }
}

impl Validate for Signature {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.total < 1 {
            return Err(ValidationError::TotalBelowOne);
        }
        if self.threshold < 1 {
            return Err(ValidationError::ThresholdBelowOne);
        }
        if self.threshold > self.total {
            return Err(ValidationError::ThresholdAboveTotal);
        }
        Ok(())
    }
}

impl ShortNotation for Signature {
    fn to_short_notation(&self) -> Option<String> {
        self.validate().ok()?;
        Some(format!(
            "{}{DELIMITER}{}{DELIMITER}{}",
            self.version, self.threshold, self.total
        ))
    }

    fn from_short_notation(text: &str) -> Option<Self> {
        let fields: Vec<&str> = text.split(DELIMITER).collect();
        let [version, threshold, total] = fields.as_slice() else {
            return None;
        };

        let signature = Self::new(
            parse_field(version)?,
            parse_field(threshold)?,
            parse_field(total)?,
        );
        signature.is_valid().then_some(signature)
    }
}

/// Parses one integer field, tolerating a sign and surrounding ASCII whitespace
fn parse_field(field: &str) -> Option<i32> {
    field.trim_ascii().parse().ok()
}
