use core::fmt;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{errors::Base58Error, extkey::derive_public, types::{PUBKEY_LEN, SECRET_KEY_LEN}};

/// A secp256k1 secret scalar plus the flag saying whether its public key is
/// used in compressed form. Erased on drop.
#[derive(Clone, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivKey {
    bytes: [u8; SECRET_KEY_LEN],
    #[zeroize(skip)]
    compressed: bool,
}

impl PrivKey {
    /// # Errors
    ///
    /// `InvalidKey` if the scalar is zero or not below the curve order.
    pub fn new(bytes: &[u8; SECRET_KEY_LEN], compressed: bool) -> Result<Self, Base58Error> {
        derive_public(bytes)?;
        Ok(Self { bytes: *bytes, compressed })
    }

    /// # Errors
    ///
    /// `InvalidLength` unless `bytes` is 32 bytes, then as [`PrivKey::new`].
    pub fn from_slice(bytes: &[u8], compressed: bool) -> Result<Self, Base58Error> {
        let arr: &[u8; SECRET_KEY_LEN] = bytes
            .try_into()
            .map_err(|_| Base58Error::InvalidLength { expected: SECRET_KEY_LEN, got: bytes.len() })?;
        Self::new(arr, compressed)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SECRET_KEY_LEN] {
        &self.bytes
    }

    #[must_use]
    pub const fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Compressed public key. Validity was checked at construction.
    ///
    /// # Errors
    ///
    /// `InvalidKey` only if the scalar was corrupted after construction.
    pub fn public_key(&self) -> Result<[u8; PUBKEY_LEN], Base58Error> {
        derive_public(&self.bytes)
    }
}

impl PartialEq for PrivKey {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.bytes[..].ct_eq(&other.bytes[..])) && self.compressed == other.compressed
    }
}

impl fmt::Debug for PrivKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivKey")
            .field("compressed", &self.compressed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_scalars() {
        assert_eq!(PrivKey::new(&[0u8; 32], true), Err(Base58Error::InvalidKey));
        assert_eq!(PrivKey::new(&[0xff; 32], true), Err(Base58Error::InvalidKey));
        assert!(PrivKey::new(&[0x01; 32], false).is_ok());
    }

    #[test]
    fn from_slice_checks_width() {
        assert_eq!(
            PrivKey::from_slice(&[1u8; 31], true),
            Err(Base58Error::InvalidLength { expected: 32, got: 31 })
        );
    }

    #[test]
    fn equality_checks_scalar_and_flag() {
        let k = PrivKey::new(&[0x42; 32], true).unwrap();
        assert_eq!(k, PrivKey::new(&[0x42; 32], true).unwrap());
        assert_ne!(k, PrivKey::new(&[0x43; 32], true).unwrap());
        assert_ne!(k, PrivKey::new(&[0x42; 32], false).unwrap());
    }

    #[test]
    fn debug_is_redacted() {
        let k = PrivKey::new(&[0x42; 32], true).unwrap();
        let shown = format!("{k:?}");
        assert!(!shown.contains("66"));
        assert!(shown.contains("compressed: true"));
    }
}
