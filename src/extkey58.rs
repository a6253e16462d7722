//! Extended-key-pair codec.
//!
//! Encoding takes an explicit kind. Decoding ([`ExtKey58::set58`]) infers
//! the kind from the prefix alone, trying secret, public, legacy secret and
//! legacy public in that order. Secret material found this way is returned
//! as a secret node; it lives in erasing storage for its whole life.

use core::fmt;

use crate::{
    base58, check,
    errors::Base58Error,
    extkey::ExtKeyPair,
    params::{Base58Type, NetworkParams},
    payload::{ScratchGuard, VersionedPayload},
    types::{BIP32_KEY_LEN, EXT_KEY_LEN, EXT_PREFIX_LEN},
};

/// Candidate kinds for auto-detection, in match order.
pub const CANDIDATES: [Base58Type; 4] = [
    Base58Type::ExtSecretKey,
    Base58Type::ExtPublicKey,
    Base58Type::ExtSecretKeyBtc,
    Base58Type::ExtPublicKeyBtc,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtKey58 {
    kind: Base58Type,
    payload: VersionedPayload,
}

impl ExtKey58 {
    /// Serialize `key` under `kind`'s prefix, in secret form for secret kinds.
    ///
    /// # Errors
    ///
    /// `WrongVersion` if `kind` is not an extended kind, `InvalidKey` if a
    /// secret kind is requested for a public-only node.
    pub fn new(key: &ExtKeyPair, kind: Base58Type, params: &NetworkParams) -> Result<Self, Base58Error> {
        if !kind.is_extended() {
            return Err(Base58Error::WrongVersion);
        }
        let payload = if kind.is_extended_secret() {
            let code = key.encode_v().ok_or(Base58Error::InvalidKey)?;
            VersionedPayload::for_kind(params, kind, &code[..])
        } else {
            VersionedPayload::for_kind(params, kind, &key.encode_p())
        };
        Ok(Self { kind, payload })
    }

    /// # Errors
    ///
    /// `InvalidKey` if `key` has no secret half.
    pub fn with_secret(key: &ExtKeyPair, params: &NetworkParams) -> Result<Self, Base58Error> {
        Self::new(key, Base58Type::ExtSecretKey, params)
    }

    #[must_use]
    pub fn with_public(key: &ExtKeyPair, params: &NetworkParams) -> Self {
        Self {
            kind: Base58Type::ExtPublicKey,
            payload: VersionedPayload::for_kind(params, Base58Type::ExtPublicKey, &key.encode_p()),
        }
    }

    /// Auto-detecting decode over [`CANDIDATES`].
    ///
    /// # Errors
    ///
    /// `InvalidCharacter`, `InvalidLength` unless exactly 82 bytes decode,
    /// `ChecksumMismatch`, or `UnrecognizedPrefix`.
    pub fn set58(text: &str, params: &NetworkParams) -> Result<Self, Base58Error> {
        let mut scratch = Vec::new();
        let raw = decode_bip32(text, &mut scratch)?;
        let kind = CANDIDATES
            .into_iter()
            .find(|k| params.prefix(*k).is_prefix_of(&raw))
            .ok_or(Base58Error::UnrecognizedPrefix)?;
        Ok(Self::from_raw(kind, &raw, params))
    }

    /// Decode accepting only `kind`'s prefix.
    ///
    /// # Errors
    ///
    /// As [`ExtKey58::set58`], with `WrongVersion` in place of
    /// `UnrecognizedPrefix`.
    pub fn set58_as(text: &str, kind: Base58Type, params: &NetworkParams) -> Result<Self, Base58Error> {
        if !kind.is_extended() {
            return Err(Base58Error::WrongVersion);
        }
        let mut scratch = Vec::new();
        let raw = decode_bip32(text, &mut scratch)?;
        if !params.prefix(kind).is_prefix_of(&raw) {
            return Err(Base58Error::WrongVersion);
        }
        Ok(Self::from_raw(kind, &raw, params))
    }

    fn from_raw(kind: Base58Type, raw: &[u8], params: &NetworkParams) -> Self {
        let data = &raw[EXT_PREFIX_LEN..EXT_PREFIX_LEN + EXT_KEY_LEN];
        Self { kind, payload: VersionedPayload::for_kind(params, kind, data) }
    }

    /// Which kind's prefix this value carries.
    #[must_use]
    pub const fn kind(&self) -> Base58Type {
        self.kind
    }

    #[must_use]
    pub const fn payload(&self) -> &VersionedPayload {
        &self.payload
    }

    /// # Errors
    ///
    /// `InvalidKey` if the key field does not hold valid key material.
    pub fn key(&self) -> Result<ExtKeyPair, Base58Error> {
        let data = self.payload.data();
        let code: &[u8; EXT_KEY_LEN] = data
            .try_into()
            .map_err(|_| Base58Error::InvalidLength { expected: EXT_KEY_LEN, got: data.len() })?;
        if self.kind.is_extended_secret() {
            ExtKeyPair::decode_v(code)
        } else {
            ExtKeyPair::decode_p(code)
        }
    }

    #[must_use]
    pub fn is_valid(&self, kind: Base58Type, params: &NetworkParams) -> bool {
        self.payload.version() == params.prefix(kind) && self.payload.data().len() == EXT_KEY_LEN
    }

    #[must_use]
    pub fn to_text(&self) -> String {
        self.payload.to_text()
    }
}

impl fmt::Display for ExtKey58 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.payload, f)
    }
}

/// Length, then checksum, then nothing else: the prefix is the caller's job.
fn decode_bip32<'a>(text: &str, scratch: &'a mut Vec<u8>) -> Result<ScratchGuard<'a>, Base58Error> {
    let mut raw = ScratchGuard::new(scratch);
    base58::decode_into(text, &mut raw)?;
    if raw.len() != BIP32_KEY_LEN {
        return Err(Base58Error::InvalidLength { expected: BIP32_KEY_LEN, got: raw.len() });
    }
    if !check::verify_checksum(&raw) {
        return Err(Base58Error::ChecksumMismatch);
    }
    Ok(raw)
}
