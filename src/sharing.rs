//! Threshold secret sharing primitive
//!
//! [`SecretSharing`] is the seam between the wallet orchestration and the
//! actual mathematics. [`ShamirSharing`] implements it with Shamir's scheme
//! over GF(256) from the `blahaj` crate.
//!
//! # Share text format
//!
//! Each share is rendered as `<index>-<payload>-<checksum>`:
//! - `index` - the share's x coordinate in decimal (1..=255)
//! - `payload` - the y bytes in lowercase hex, one byte per secret byte
//! - `checksum` - CRC32 of the raw share bytes (index followed by payload), 8 hex digits
//!
//! The text never contains `|` or whitespace, so it can be embedded in a part's
//! short notation as is.
//!
//! # Examples
//!
//! ```rust
//! use coldshare::sharing::{SecretSharing, ShamirSharing};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let shares = ShamirSharing.split("ExampleOfPrivateKey", 2, 3)?;
//! assert_eq!(shares.len(), 3);
//!
//! let recovered = ShamirSharing.combine(&[shares[2].as_str(), shares[0].as_str()])?;
//! assert_eq!(recovered.as_str(), "ExampleOfPrivateKey");
//! # Ok(())
//! # }
//! ```

use blahaj::{Share, Sharks};
use crc::{CRC_32_ISO_HDLC, Crc};
use zeroize::Zeroizing;

use crate::error::SharingError;

/// CRC32 algorithm for share integrity checking
const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Separator between the fields of a share
const SEPARATOR: char = '-';

/// Largest threshold or share count GF(256) can address
pub const MAX_SHARES: usize = u8::MAX as usize;

/// Splits a secret into shares and combines shares back into the secret
///
/// Implementations are pure apart from the randomness used when splitting.
pub trait SecretSharing {
    /// Splits `secret` into exactly `total` shares, any `threshold` of which recover it
    ///
    /// # Errors
    /// Returns [`SharingError::Unsupported`] when the parameters cannot be represented
    fn split(&self, secret: &str, threshold: usize, total: usize)
    -> Result<Vec<String>, SharingError>;

    /// Recovers the secret from the given shares
    ///
    /// The caller is responsible for supplying at least as many shares as the
    /// threshold the secret was split with.
    ///
    /// # Errors
    /// Returns an integrity error (see [`SharingError::is_integrity`]) when the
    /// shares are damaged or do not belong together
    fn combine(&self, shares: &[&str]) -> Result<Zeroizing<String>, SharingError>;
}

/// Shamir's secret sharing over GF(256)
#[derive(Debug, Clone, Copy, Default)]
pub struct ShamirSharing;

impl SecretSharing for ShamirSharing {
    fn split(
        &self,
        secret: &str,
        threshold: usize,
        total: usize,
    ) -> Result<Vec<String>, SharingError> {
        let threshold = u8::try_from(threshold)
            .ok()
            .filter(|t| *t > 0)
            .ok_or_else(|| {
                SharingError::Unsupported(format!("threshold must be 1..={MAX_SHARES}"))
            })?;
        if total == 0 || total > MAX_SHARES {
            return Err(SharingError::Unsupported(format!(
                "share count must be 1..={MAX_SHARES}"
            )));
        }

        let sharks = Sharks(threshold);
        let dealer = sharks.dealer(secret.as_bytes());

        Ok(dealer
            .take(total)
            .map(|share| encode_share(&Zeroizing::new(Vec::from(&share))))
            .collect())
    }

    fn combine(&self, shares: &[&str]) -> Result<Zeroizing<String>, SharingError> {
        let count = u8::try_from(shares.len())
            .ok()
            .filter(|c| *c > 0)
            .ok_or_else(|| {
                SharingError::Inconsistent(format!(
                    "expected 1..={MAX_SHARES} shares, got {}",
                    shares.len()
                ))
            })?;

        let decoded = shares
            .iter()
            .map(|text| decode_share(text))
            .collect::<Result<Vec<_>, _>>()?;

        let sharks = Sharks(count);
        let recovered = Zeroizing::new(
            sharks
                .recover(&decoded)
                .map_err(|e| SharingError::Inconsistent(format!("{e:?}")))?,
        );

        let secret = std::str::from_utf8(&recovered).map_err(|_| SharingError::InvalidSecret)?;
        Ok(Zeroizing::new(secret.to_owned()))
    }
}

/// Renders raw share bytes (index followed by payload) as share text
fn encode_share(bytes: &[u8]) -> String {
    let checksum = CRC32.checksum(bytes);
    match bytes.split_first() {
        Some((index, payload)) => format!(
            "{index}{SEPARATOR}{}{SEPARATOR}{checksum:08x}",
            hex::encode(payload)
        ),
        None => format!("{SEPARATOR}{SEPARATOR}{checksum:08x}"),
    }
}

/// Parses share text and verifies its checksum
fn decode_share(text: &str) -> Result<Share, SharingError> {
    let fields: Vec<&str> = text.trim().split(SEPARATOR).collect();
    let [index, payload, checksum] = fields.as_slice() else {
        return Err(SharingError::Malformed(
            "expected <index>-<payload>-<checksum>".to_string(),
        ));
    };

    let index: u8 = index
        .parse()
        .map_err(|_| SharingError::Malformed(format!("invalid share index '{index}'")))?;

    let payload = Zeroizing::new(
        hex::decode(payload)
            .map_err(|e| SharingError::Malformed(format!("invalid payload: {e}")))?,
    );
    if payload.is_empty() {
        return Err(SharingError::Malformed("empty payload".to_string()));
    }

    if checksum.len() != 8 {
        return Err(SharingError::Malformed(format!(
            "checksum must be 8 hex digits, got '{checksum}'"
        )));
    }
    let actual = u32::from_str_radix(checksum, 16)
        .map_err(|_| SharingError::Malformed(format!("invalid checksum '{checksum}'")))?;

    let mut bytes = Zeroizing::new(Vec::with_capacity(1 + payload.len()));
    bytes.push(index);
    bytes.extend_from_slice(&payload);

    let expected = CRC32.checksum(&bytes);
    if expected != actual {
        return Err(SharingError::ChecksumMismatch { expected, actual });
    }

    Share::try_from(bytes.as_slice())
        .map_err(|e| SharingError::Malformed(format!("unusable share: {e:?}")))
}
