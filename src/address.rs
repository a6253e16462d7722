//! Address codec: key hashes, script hashes and extended public keys.
//!
//! Public-key-hash addresses carry RIPEMD160(SHA256(pubkey)) under the
//! one-byte `PUBKEY_ADDRESS` prefix, script-hash addresses RIPEMD160(SHA256(script))
//! under `SCRIPT_ADDRESS`. Extended key pairs are always shown in public form.

use core::fmt;

use crate::{
    errors::Base58Error,
    extkey::ExtKeyPair,
    params::{Base58Type, NetworkParams},
    payload::{PrefixWidth, VersionedPayload},
    types::{Destination, KeyId, ScriptId, EXT_KEY_LEN, HASH160_LEN},
};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Address {
    payload: VersionedPayload,
}

impl Address {
    /// Encode any destination that has a Base58 form.
    ///
    /// # Errors
    ///
    /// `UnsupportedDestinationKind` for stealth, witness and "no destination" variants.
    pub fn from_destination(dest: &Destination, params: &NetworkParams) -> Result<Self, Base58Error> {
        match dest {
            Destination::KeyId(id) => Ok(Self::from_key_id(id, params)),
            Destination::ScriptId(id) => Ok(Self::from_script_id(id, params)),
            Destination::ExtKeyPair(ek) => Ok(Self::from_ext_key(ek, params)),
            other => Err(Base58Error::UnsupportedDestinationKind(other.kind_name())),
        }
    }

    #[must_use]
    pub fn from_key_id(id: &KeyId, params: &NetworkParams) -> Self {
        Self::from_key_id_with_prefix(id, Base58Type::PubkeyAddress, params)
    }

    /// Key hash under an explicitly chosen kind's prefix.
    #[must_use]
    pub fn from_key_id_with_prefix(id: &KeyId, kind: Base58Type, params: &NetworkParams) -> Self {
        Self { payload: VersionedPayload::for_kind(params, kind, &id.0) }
    }

    #[must_use]
    pub fn from_script_id(id: &ScriptId, params: &NetworkParams) -> Self {
        Self { payload: VersionedPayload::for_kind(params, Base58Type::ScriptAddress, &id.0) }
    }

    /// Never reveals the secret half, even when `ek` holds one.
    #[must_use]
    pub fn from_ext_key(ek: &ExtKeyPair, params: &NetworkParams) -> Self {
        Self { payload: VersionedPayload::for_kind(params, Base58Type::ExtPublicKey, &ek.encode_p()) }
    }

    /// Parse address text. Shape is not checked here; see [`Address::is_valid`].
    ///
    /// # Errors
    ///
    /// See [`VersionedPayload::from_text`].
    pub fn from_text(text: &str, params: &NetworkParams) -> Result<Self, Base58Error> {
        VersionedPayload::from_text(text, PrefixWidth::One, params).map(|payload| Self { payload })
    }

    #[must_use]
    pub const fn payload(&self) -> &VersionedPayload {
        &self.payload
    }

    #[must_use]
    pub fn to_text(&self) -> String {
        self.payload.to_text()
    }

    fn has_version(&self, kind: Base58Type, params: &NetworkParams) -> bool {
        self.payload.version() == params.prefix(kind)
    }

    /// Known version with the data width that version requires.
    #[must_use]
    pub fn is_valid(&self, params: &NetworkParams) -> bool {
        if self.is_bip32(params) {
            return self.payload.data().len() == EXT_KEY_LEN;
        }
        let known = self.has_version(Base58Type::PubkeyAddress, params)
            || self.has_version(Base58Type::ScriptAddress, params);
        known && self.payload.data().len() == HASH160_LEN
    }

    #[must_use]
    pub fn is_valid_for(&self, kind: Base58Type, params: &NetworkParams) -> bool {
        let width = if matches!(kind, Base58Type::ExtPublicKey | Base58Type::ExtSecretKey) {
            EXT_KEY_LEN
        } else {
            HASH160_LEN
        };
        self.has_version(kind, params) && self.payload.data().len() == width
    }

    #[must_use]
    pub fn is_bip32(&self, params: &NetworkParams) -> bool {
        self.has_version(Base58Type::ExtPublicKey, params)
            || self.has_version(Base58Type::ExtSecretKey, params)
    }

    #[must_use]
    pub fn is_script(&self, params: &NetworkParams) -> bool {
        self.is_valid(params) && self.has_version(Base58Type::ScriptAddress, params)
    }

    /// Back to a destination; `NoDestination` when invalid or undecodable.
    #[must_use]
    pub fn get(&self, params: &NetworkParams) -> Destination {
        if !self.is_valid(params) {
            return Destination::NoDestination;
        }
        let data = self.payload.data();
        let decoded = match params.kind_of(self.payload.version().as_bytes()) {
            Some(Base58Type::PubkeyAddress) => KeyId::try_from(data).map(Destination::KeyId),
            Some(Base58Type::ScriptAddress) => ScriptId::try_from(data).map(Destination::ScriptId),
            Some(Base58Type::ExtSecretKey) => ext_code(data)
                .and_then(ExtKeyPair::decode_v)
                .map(Destination::ExtKeyPair),
            Some(Base58Type::ExtPublicKey) => ext_code(data)
                .and_then(ExtKeyPair::decode_p)
                .map(Destination::ExtKeyPair),
            _ => Ok(Destination::NoDestination),
        };
        decoded.unwrap_or(Destination::NoDestination)
    }

    #[must_use]
    pub fn key_id(&self, params: &NetworkParams) -> Option<KeyId> {
        if !self.is_valid(params) || !self.has_version(Base58Type::PubkeyAddress, params) {
            return None;
        }
        KeyId::try_from(self.payload.data()).ok()
    }

    /// Key hash stored under `kind`'s prefix.
    #[must_use]
    pub fn key_id_for(&self, kind: Base58Type, params: &NetworkParams) -> Option<KeyId> {
        if !self.is_valid_for(kind, params) {
            return None;
        }
        KeyId::try_from(self.payload.data()).ok()
    }
}

fn ext_code(data: &[u8]) -> Result<&[u8; EXT_KEY_LEN], Base58Error> {
    data.try_into()
        .map_err(|_| Base58Error::InvalidLength { expected: EXT_KEY_LEN, got: data.len() })
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.payload, f)
    }
}
