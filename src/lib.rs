//! Split a private key into cold wallet parts and recover it from them
//!
//! - [`domain`] - `Signature` and `Part` value objects with their short notation
//! - [`wallet`] - the `Wallet` aggregate driving generation and reconstruction
//! - [`sharing`] - the threshold secret sharing primitive

pub mod commands;
pub mod domain;
pub mod error;
pub mod sharing;
pub mod wallet;
pub mod wasm;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod logging;

pub use domain::{Part, ShortNotation, Signature, Validate};
pub use error::{SharingError, ValidationError, WalletError};
pub use wallet::Wallet;
