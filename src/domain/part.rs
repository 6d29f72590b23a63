//! `Part` value object: one share of a secret

use serde::Serialize;

use super::{DELIMITER, ShortNotation, Signature, Validate};
use crate::error::ValidationError;

/// Number of delimiters in a part notation once outer pipes are stripped
const PART_DELIMITERS: usize = 3;

/// One share of a secret plus the signature needed to recompose it
///
/// The share payload is opaque to this type; only its presence is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Part {
    signature: Signature,
    data: String,
}

impl Part {
    /// Creates a part without checking its invariants
    pub fn new(signature: Signature, data: impl Into<String>) -> Self {
        Self {
            signature,
            data: data.into(),
        }
    }

    /// Creates a validated part
    ///
    /// # Errors
    /// Returns the signature's first violated invariant, or
    /// [`ValidationError::BlankData`] when the payload is blank
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coldshare::domain::{Part, ShortNotation, Signature};
    ///
    /// let part = Part::try_new(Signature::new(1, 2, 4), "f00d").unwrap();
    /// assert_eq!(part.to_short_notation().as_deref(), Some("1|2|4|f00d"));
    ///
    /// assert!(Part::try_new(Signature::new(1, 2, 4), "   ").is_err());
    /// ```
    pub fn try_new(signature: Signature, data: impl Into<String>) -> Result<Self, ValidationError> {
        let part = Self::new(signature, data);
        part.validate()?;
        Ok(part)
    }

    #[must_use]
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Opaque share payload
    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }
}

impl Validate for Part {
    fn validate(&self) -> Result<(), ValidationError> {
        self.signature.validate()?;
        if self.data.trim().is_empty() {
            return Err(ValidationError::BlankData);
        }
        Ok(())
    }
}

impl ShortNotation for Part {
    fn to_short_notation(&self) -> Option<String> {
        self.validate().ok()?;
        let signature = self.signature.to_short_notation()?;
        Some(format!("{signature}{DELIMITER}{}", self.data))
    }

    /// Parses `<version>|<threshold>|<total>|<data>`
    ///
    /// Outer whitespace and pipes are stripped first. The data segment starts
    /// after the last pipe, so it can never contain one.
    fn from_short_notation(raw: &str) -> Option<Self> {
        let notation = raw.trim().trim_matches(DELIMITER);

        if notation.matches(DELIMITER).count() != PART_DELIMITERS {
            return None;
        }

        let last = notation.rfind(DELIMITER)?;
        let (signature_notation, data) = notation.split_at(last);

        let signature = Signature::from_short_notation(signature_notation.trim_matches(DELIMITER))?;

        let data = data.trim().trim_matches(DELIMITER);
        if data.is_empty() {
            return None;
        }

        Some(Self::new(signature, data))
    }
}
