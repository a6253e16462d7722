//! Versioned payload container: `version || data`, Base58Check text form.
//!
//! Decoding goes through a caller-visible scratch buffer wrapped in
//! [`ScratchGuard`], which zeroes the buffer when it leaves scope on every
//! return path. Payload data itself is zeroed on drop.

use core::{
    cmp::Ordering,
    fmt,
    ops::{Deref, DerefMut},
};

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    check,
    errors::Base58Error,
    extkey::ExtKeyPair,
    params::{Base58Type, NetworkParams, VersionBytes},
    types::{EXT_KEY_LEN, EXT_PREFIX_LEN},
};

/// Scoped view over a decode buffer; zeroes every byte it holds on drop.
///
/// The length is kept so callers can inspect the buffer afterwards.
pub struct ScratchGuard<'a>(&'a mut Vec<u8>);

impl<'a> ScratchGuard<'a> {
    #[must_use]
    pub fn new(buf: &'a mut Vec<u8>) -> Self {
        Self(buf)
    }
}

impl Deref for ScratchGuard<'_> {
    type Target = Vec<u8>;
    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl DerefMut for ScratchGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0
    }
}

impl Drop for ScratchGuard<'_> {
    fn drop(&mut self) {
        self.0.as_mut_slice().zeroize();
    }
}

/// Width of the version prefix expected by a plain (non-BIP32) decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixWidth {
    One,
    Four,
}

impl PrefixWidth {
    #[must_use]
    pub const fn byte_len(self) -> usize {
        match self {
            Self::One => 1,
            Self::Four => EXT_PREFIX_LEN,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct VersionedPayload {
    #[zeroize(skip)]
    version: VersionBytes,
    data: Vec<u8>,
}

impl VersionedPayload {
    #[must_use]
    pub fn new(version: VersionBytes, data: &[u8]) -> Self {
        Self { version, data: data.to_vec() }
    }

    /// Payload under the registered prefix of `kind`.
    #[must_use]
    pub fn for_kind(params: &NetworkParams, kind: Base58Type, data: &[u8]) -> Self {
        Self::new(*params.prefix(kind), data)
    }

    #[must_use]
    pub const fn version(&self) -> &VersionBytes {
        &self.version
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Base58Check text; deterministic and always round-trips.
    #[must_use]
    pub fn to_text(&self) -> String {
        check::encode_checked(self.version.as_bytes(), &self.data)
    }

    /// Parse checked text, splitting the version at `width` bytes.
    ///
    /// A 78-byte payload under the extended secret prefix is never kept as
    /// is: it is re-encoded in public form under the extended public prefix.
    ///
    /// # Errors
    ///
    /// Base58Check failures, `Truncated` when fewer than `width` bytes decode,
    /// `InvalidKey` when an extended secret payload does not hold a valid key.
    pub fn from_text(text: &str, width: PrefixWidth, params: &NetworkParams) -> Result<Self, Base58Error> {
        let mut scratch = Vec::new();
        Self::from_text_with_scratch(text, width, params, &mut scratch)
    }

    /// As [`VersionedPayload::from_text`], decoding through `scratch`.
    ///
    /// Every byte of `scratch` is zero when this returns, whatever the outcome.
    ///
    /// # Errors
    ///
    /// See [`VersionedPayload::from_text`].
    pub fn from_text_with_scratch(
        text: &str,
        width: PrefixWidth,
        params: &NetworkParams,
        scratch: &mut Vec<u8>,
    ) -> Result<Self, Base58Error> {
        let mut raw = ScratchGuard::new(scratch);
        check::decode_checked_into(text, &mut raw)?;

        let mut width = width.byte_len();
        if raw.len() == EXT_PREFIX_LEN + EXT_KEY_LEN {
            if params.prefix(Base58Type::ExtPublicKey).is_prefix_of(&raw) {
                width = EXT_PREFIX_LEN;
            } else if params.prefix(Base58Type::ExtSecretKey).is_prefix_of(&raw) {
                let code: &[u8; EXT_KEY_LEN] = raw[EXT_PREFIX_LEN..]
                    .try_into()
                    .map_err(|_| Base58Error::InvalidKey)?;
                let pair = ExtKeyPair::decode_v(code)?;
                return Ok(Self::for_kind(params, Base58Type::ExtPublicKey, &pair.encode_p()));
            }
        }

        if raw.len() < width {
            return Err(Base58Error::Truncated { expected: width, got: raw.len() });
        }
        let (version, data) = raw.split_at(width);
        let version = VersionBytes::from_slice(version)
            .ok_or(Base58Error::Truncated { expected: width, got: raw.len() })?;
        Ok(Self::new(version, data))
    }
}

impl PartialOrd for VersionedPayload {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionedPayload {
    fn cmp(&self, other: &Self) -> Ordering {
        self.version
            .cmp(&other.version)
            .then_with(|| self.data.cmp(&other.data))
    }
}

impl fmt::Display for VersionedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

// Data may be secret; only its length is shown.
impl fmt::Debug for VersionedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VersionedPayload")
            .field("version", &self.version)
            .field("data_len", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Network, MAINNET};

    #[test]
    fn text_round_trip() {
        let p = VersionedPayload::for_kind(&MAINNET, Base58Type::PubkeyAddress, &[0xab; 20]);
        let back = VersionedPayload::from_text(&p.to_text(), PrefixWidth::One, &MAINNET).unwrap();
        assert_eq!(back, p);
        assert_eq!(p.to_string(), p.to_text());
    }

    #[test]
    fn four_byte_width_splits_correctly() {
        let v = VersionBytes::four([1, 2, 3, 4]);
        let p = VersionedPayload::new(v, &[9; 5]);
        let back = VersionedPayload::from_text(&p.to_text(), PrefixWidth::Four, &MAINNET).unwrap();
        assert_eq!(back.version(), &v);
        assert_eq!(back.data(), &[9; 5]);
    }

    #[test]
    fn truncated_when_shorter_than_width() {
        let text = check::encode_checked(&[7, 7], &[]);
        assert_eq!(
            VersionedPayload::from_text(&text, PrefixWidth::Four, &MAINNET),
            Err(Base58Error::Truncated { expected: 4, got: 2 })
        );
        let empty = check::encode_checked(&[], &[]);
        assert_eq!(
            VersionedPayload::from_text(&empty, PrefixWidth::One, &MAINNET),
            Err(Base58Error::Truncated { expected: 1, got: 0 })
        );
    }

    #[test]
    fn ordering_is_version_then_data() {
        let a = VersionedPayload::new(VersionBytes::one(1), &[9, 9]);
        let b = VersionedPayload::new(VersionBytes::one(2), &[0]);
        let c = VersionedPayload::new(VersionBytes::one(2), &[0, 0]);
        assert!(a < b);
        assert!(b < c);
        let mut v = vec![c.clone(), a.clone(), b.clone(), a.clone()];
        v.sort();
        v.dedup();
        assert_eq!(v, vec![a, b, c]);
    }

    #[test]
    fn scratch_is_zeroed_on_success_and_failure() {
        let p = VersionedPayload::for_kind(Network::Main.params(), Base58Type::SecretKey, &[0x5a; 33]);
        let mut scratch = Vec::new();
        VersionedPayload::from_text_with_scratch(&p.to_text(), PrefixWidth::One, &MAINNET, &mut scratch).unwrap();
        assert_eq!(scratch.len(), 34);
        assert!(scratch.iter().all(|&b| b == 0));

        let mut scratch = vec![0x5a; 16];
        let bad = check::encode_checked(&[], &[]);
        assert!(VersionedPayload::from_text_with_scratch(&bad, PrefixWidth::One, &MAINNET, &mut scratch).is_err());
        assert!(scratch.iter().all(|&b| b == 0));
    }

    #[test]
    fn debug_shows_length_only() {
        let p = VersionedPayload::new(VersionBytes::one(0x6c), &[0x11; 32]);
        assert_eq!(format!("{p:?}"), "VersionedPayload { version: VersionBytes(6c), data_len: 32 }");
    }
}
