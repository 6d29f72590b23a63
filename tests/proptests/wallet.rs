//! Property tests for generate/reconstruct workflows

use coldshare::domain::{Part, ShortNotation, Signature};
use coldshare::error::WalletError;
use coldshare::wallet::Wallet;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// Wrapper for non-blank secrets
#[derive(Clone, Debug)]
struct Secret(String);

impl Arbitrary for Secret {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut secret = String::arbitrary(g);
        if secret.trim().is_empty() {
            secret.push_str("key");
        }
        Secret(secret)
    }
}

/// Wrapper for valid threshold and total pairs
#[derive(Clone, Copy, Debug)]
struct Scheme {
    threshold: i32,
    total: i32,
}

impl Arbitrary for Scheme {
    fn arbitrary(g: &mut Gen) -> Self {
        // Keep it small enough for fast property runs
        let total = i32::from(u8::arbitrary(g) % 8) + 1; // 1..=8
        let threshold = i32::from(u8::arbitrary(g)) % total + 1; // 1..=total
        Scheme { threshold, total }
    }
}

impl Scheme {
    fn signature(self) -> Signature {
        Signature::new(1, self.threshold, self.total)
    }
}

/// Deterministically shuffles indices using a seed
fn shuffled(len: usize, seed: u64) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    let mut seed = seed;
    for i in 0..indices.len() {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let range = (indices.len() - i) as u64;
        let offset = usize::try_from(seed % range).unwrap_or_else(|_| unreachable!("offset < len"));
        indices.swap(i, i + offset);
    }
    indices
}

/// Any threshold-sized subset, passed through short notation, recovers the secret
#[quickcheck]
fn prop_any_threshold_subset_recovers(secret: Secret, scheme: Scheme, seed: u64) -> bool {
    let Ok(wallet) = Wallet::generate(scheme.signature(), &secret.0) else {
        return false;
    };
    if wallet.parts().len() != scheme.total as usize {
        return false;
    }

    let selected: Option<Vec<Part>> = shuffled(wallet.parts().len(), seed)
        .into_iter()
        .take(scheme.threshold as usize)
        .map(|idx| {
            let notation = wallet.parts()[idx].to_short_notation()?;
            Part::from_short_notation(&notation)
        })
        .collect();
    let Some(selected) = selected else {
        return false;
    };

    match Wallet::reconstruct(selected) {
        Ok(recovered) => recovered.secret() == secret.0,
        Err(_) => false,
    }
}

/// Fewer distinct parts than the threshold are always rejected
#[quickcheck]
fn prop_below_threshold_rejected(secret: Secret, scheme: Scheme) -> bool {
    let Ok(wallet) = Wallet::generate(scheme.signature(), &secret.0) else {
        return false;
    };
    let available = scheme.threshold as usize - 1;
    if available == 0 {
        return true; // Nothing to supply below a threshold of one
    }

    // Repeat the supplied parts so that only distinct ones are counted
    let mut parts = wallet.parts()[..available].to_vec();
    parts.extend_from_slice(&wallet.parts()[..available]);

    Wallet::reconstruct(parts)
        == Err(WalletError::InsufficientShares {
            required: scheme.threshold as usize,
            available,
        })
}

/// Duplicates collapse to a single part each
#[quickcheck]
fn prop_duplicates_collapse(secret: Secret, scheme: Scheme, copies: u8) -> bool {
    let Ok(wallet) = Wallet::generate(scheme.signature(), &secret.0) else {
        return false;
    };

    let extra = usize::from(copies % 4);
    let mut parts = wallet.parts().to_vec();
    for _ in 0..extra {
        parts.push(wallet.parts()[0].clone());
    }

    match Wallet::reconstruct(parts) {
        Ok(recovered) => recovered.parts() == wallet.parts(),
        Err(_) => false,
    }
}

/// A part from another scheme is rejected regardless of the data it carries
#[quickcheck]
fn prop_signature_mismatch_rejected(secret: Secret, scheme: Scheme, version: i32) -> bool {
    let Ok(wallet) = Wallet::generate(scheme.signature(), &secret.0) else {
        return false;
    };
    if version == 1 {
        return true;
    }

    let mut parts = wallet.parts().to_vec();
    let foreign = Signature::new(version, scheme.threshold, scheme.total);
    parts.push(Part::new(foreign, wallet.parts()[0].data()));

    Wallet::reconstruct(parts) == Err(WalletError::SignatureMismatch)
}
