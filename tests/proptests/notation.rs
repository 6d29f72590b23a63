//! Property tests for short notation encoding/decoding

use coldshare::domain::{Part, ShortNotation, Signature, Validate};
use coldshare::error::ValidationError;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// Wrapper for valid signatures (1 <= threshold <= total)
#[derive(Clone, Debug)]
struct ValidSignature(Signature);

impl Arbitrary for ValidSignature {
    fn arbitrary(g: &mut Gen) -> Self {
        let total = i32::from(u8::arbitrary(g) % 50) + 1; // 1..=50
        let threshold = i32::from(u8::arbitrary(g)) % total + 1; // 1..=total
        ValidSignature(Signature::new(i32::arbitrary(g), threshold, total))
    }
}

/// Wrapper for share data that survives the notation unchanged
#[derive(Clone, Debug)]
struct CleanData(String);

impl Arbitrary for CleanData {
    fn arbitrary(g: &mut Gen) -> Self {
        const ALPHABET: &[u8] = b"0123456789abcdef-";
        let len = usize::arbitrary(g) % 64 + 1;
        let mut data: String = (0..len)
            .map(|_| char::from(*g.choose(ALPHABET).unwrap_or(&b'a')))
            .collect();
        if data.trim().is_empty() {
            data.push('a');
        }
        CleanData(data)
    }
}

/// Signature notation round trips for every valid signature
#[quickcheck]
fn prop_signature_round_trip(signature: ValidSignature) -> bool {
    let ValidSignature(signature) = signature;
    let Some(notation) = signature.to_short_notation() else {
        return false;
    };
    Signature::from_short_notation(&notation) == Some(signature)
}

/// Invalid signatures never produce a notation
#[quickcheck]
fn prop_invalid_signature_has_no_notation(version: i32, threshold: i32, total: i32) -> bool {
    let signature = Signature::new(version, threshold, total);
    signature.is_valid() == signature.to_short_notation().is_some()
}

/// Validation reports the first applicable rule
#[quickcheck]
fn prop_validation_order(threshold: i32, total: i32) -> bool {
    let expected = if total < 1 {
        Err(ValidationError::TotalBelowOne)
    } else if threshold < 1 {
        Err(ValidationError::ThresholdBelowOne)
    } else if threshold > total {
        Err(ValidationError::ThresholdAboveTotal)
    } else {
        Ok(())
    };
    Signature::new(1, threshold, total).validate() == expected
}

/// Part notation round trips when data has no surrounding whitespace or pipes
#[quickcheck]
fn prop_part_round_trip(signature: ValidSignature, data: CleanData) -> bool {
    let part = Part::new(signature.0, data.0);
    let Some(notation) = part.to_short_notation() else {
        return false;
    };
    Part::from_short_notation(&notation) == Some(part)
}

/// Wrapping a notation in whitespace and pipes does not change the parsed part
#[quickcheck]
fn prop_part_parse_ignores_outer_padding(
    signature: ValidSignature,
    data: CleanData,
    pipes: u8,
) -> bool {
    let part = Part::new(signature.0, data.0);
    let Some(notation) = part.to_short_notation() else {
        return false;
    };
    let pad = "|".repeat(usize::from(pipes % 4));
    let padded = format!(" \t{pad}{notation}{pad}\n");
    Part::from_short_notation(&padded) == Some(part)
}

/// Arbitrary text never panics the parser, and anything it accepts is valid
#[quickcheck]
fn prop_part_parse_total(text: String) -> bool {
    match Part::from_short_notation(&text) {
        Some(part) => part.is_valid(),
        None => true,
    }
}
