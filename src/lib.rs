#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation
)]

//! Versioned Base58Check codec for node key and address text.
//!
//! Layers, leaf first:
//!
//! - [`base58`]: big-endian base-256 <-> base-58, leading zeros kept as `'1'`
//! - [`check`]: 4-byte double-SHA256 suffix
//! - [`payload`]: `version || data` container with scoped erasure of decode buffers
//! - [`address`], [`wif`], [`extkey58`]: typed codecs choosing prefixes from a
//!   [`NetworkParams`] profile passed into every call
//!
//! Nothing here logs or keeps state between calls; every failure comes back as
//! a [`Base58Error`].

pub mod address;
pub mod base58;
pub mod check;
pub mod errors;
pub mod extkey;
pub mod extkey58;
pub mod hashers;
pub mod params;
pub mod payload;
pub mod secret;
pub mod types;
pub mod wif;

// Re-export commonly used types and functions
pub use address::Address;
pub use check::{decode_checked, encode_checked};
pub use errors::{Base58Error, ParamsError};
pub use extkey::ExtKeyPair;
pub use extkey58::ExtKey58;
pub use params::{Base58Type, Network, NetworkParams, VersionBytes};
pub use payload::{PrefixWidth, VersionedPayload};
pub use secret::PrivKey;
pub use types::*;
pub use wif::WifSecret;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
