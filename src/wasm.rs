//! WASM bindings for coldshare
//!
//! This module provides JavaScript-friendly bindings for generating and
//! recovering wallet parts. Each export is a thin wrapper over a plain Rust
//! function so the logic stays testable off the browser.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::commands;
use crate::domain::{Part, ShortNotation, Signature};

/// Initialize panic hook for better error messages in the browser console
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Result of a generate operation (for JSON serialization)
#[derive(Serialize, Deserialize)]
pub struct GenerateResult {
    /// The generated parts in short notation
    pub parts: Vec<String>,
    /// Threshold required to reconstruct
    pub threshold: i32,
    /// Number of parts generated
    pub total: i32,
}

/// Generates parts and renders them as a JSON [`GenerateResult`]
///
/// # Errors
/// Returns an error if the scheme is invalid or the secret is blank
pub fn generate_json(secret: &str, threshold: i32, total: i32) -> Result<String> {
    let signature = Signature::try_new(Signature::CURRENT_VERSION, threshold, total)
        .context("Invalid scheme")?;

    let parts = commands::generate_parts(signature, secret)?;

    let result = GenerateResult {
        parts,
        threshold,
        total,
    };

    serde_json::to_string(&result).context("Serialization failed")
}

/// Parses a part, returning `None` for invalid notations
#[must_use]
pub fn parse_part(part: &str) -> Option<Part> {
    Part::from_short_notation(part)
}

/// Split a private key into cold wallet parts
///
/// # Returns
/// JSON string containing the parts and scheme, or an error message
///
/// # Example (JavaScript)
/// ```javascript
/// const result = JSON.parse(wasm_generate("ExampleOfPrivateKey", 2, 4));
/// for (const part of result.parts) {
///     console.log(part); // "1|2|4|..."
/// }
/// ```
#[wasm_bindgen]
pub fn wasm_generate(secret: &str, threshold: i32, total: i32) -> Result<String, JsValue> {
    generate_json(secret, threshold, total)
        .map_err(|e| JsValue::from_str(&format!("Generate failed: {e:#}")))
}

/// Recover the private key from parts in short notation
///
/// # Example (JavaScript)
/// ```javascript
/// const key = wasm_recover(["1|2|4|...", "1|2|4|..."]);
/// ```
#[wasm_bindgen]
pub fn wasm_recover(parts: Vec<String>) -> Result<String, JsValue> {
    commands::recover_secret(&parts)
        .map(|secret| secret.as_str().to_owned())
        .map_err(|e| JsValue::from_str(&format!("Recover failed: {e:#}")))
}

/// Parse a part to inspect its signature and data
///
/// # Returns
/// An object `{ signature: { version, threshold, total }, data }`
#[wasm_bindgen]
pub fn wasm_parse_part(part: &str) -> Result<JsValue, JsValue> {
    let part = parse_part(part).ok_or_else(|| JsValue::from_str("Parse failed: invalid part"))?;

    serde_wasm_bindgen::to_value(&part)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {e}")))
}
