use anyhow::{Context, Result};
use zeroize::Zeroizing;

use crate::domain::{Part, ShortNotation, Signature};
use crate::wallet::Wallet;

/// Split a secret into wallet parts rendered in short notation
///
/// Returns one short notation per part, in generation order.
///
/// # Errors
/// Returns an error if the signature is invalid, the secret is blank, or the
/// scheme cannot be split
pub fn generate_parts(signature: Signature, secret: &str) -> Result<Vec<String>> {
    let wallet = Wallet::generate(signature, secret).context("Failed to generate wallet")?;

    wallet
        .parts()
        .iter()
        .enumerate()
        .map(|(idx, part)| {
            part.to_short_notation()
                .with_context(|| format!("Part #{} has no short notation", idx + 1))
        })
        .collect()
}

/// Parse raw short notations into parts
///
/// # Errors
/// Returns an error naming the first part that does not parse
pub fn parse_parts(raw_parts: &[String]) -> Result<Vec<Part>> {
    raw_parts
        .iter()
        .enumerate()
        .map(|(idx, raw)| {
            Part::from_short_notation(raw)
                .with_context(|| format!("Failed to parse part #{}", idx + 1))
        })
        .collect()
}

/// Recover the secret from parts given in short notation
///
/// # Errors
/// Returns an error if any part fails to parse or the wallet cannot be reconstructed
pub fn recover_secret(raw_parts: &[String]) -> Result<Zeroizing<String>> {
    if raw_parts.is_empty() {
        anyhow::bail!("No parts provided");
    }

    recover_from_parts(parse_parts(raw_parts)?)
}

/// Recover the secret from already parsed parts
///
/// # Errors
/// Returns an error if the wallet cannot be reconstructed
pub fn recover_from_parts(parts: Vec<Part>) -> Result<Zeroizing<String>> {
    let wallet = Wallet::reconstruct(parts).context("Failed to recover secret")?;

    Ok(Zeroizing::new(wallet.secret().to_owned()))
}
