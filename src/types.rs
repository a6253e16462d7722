use crate::{errors::Base58Error, extkey::ExtKeyPair};

pub const HASH160_LEN: usize = 20;             // RIPEMD160(SHA256(x))
pub const SECRET_KEY_LEN: usize = 32;          // secp256k1 scalar
pub const COMPRESSED_FLAG: u8 = 0x01;          // trailing WIF byte for compressed keys
pub const PUBKEY_LEN: usize = 33;              // compressed point
pub const CHAIN_CODE_LEN: usize = 32;
pub const EXT_KEY_LEN: usize = 74;             // depth(1) fp(4) child(4) cc(32) key(33)
pub const EXT_PREFIX_LEN: usize = 4;
pub const BIP32_KEY_LEN: usize = EXT_PREFIX_LEN + EXT_KEY_LEN + 4; // 82, checksum included

// Fixed-size newtypes prevent misuse
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct KeyId(pub [u8; HASH160_LEN]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ScriptId(pub [u8; HASH160_LEN]);

// Exact-sized decode helpers
macro_rules! impl_tryfrom_slice {
    ($t:ty, $len:expr) => {
        impl TryFrom<&[u8]> for $t {
            type Error = Base58Error;
            fn try_from(b: &[u8]) -> Result<Self, Self::Error> {
                if b.len() != $len {
                    return Err(Base58Error::InvalidLength { expected: $len, got: b.len() });
                }
                let mut arr = [0u8; $len];
                arr.copy_from_slice(b);
                Ok(Self(arr))
            }
        }
    };
}
impl_tryfrom_slice!(KeyId, HASH160_LEN);
impl_tryfrom_slice!(ScriptId, HASH160_LEN);

/// Payment target. Only some variants have a Base58 form; the rest are
/// carried so callers can hand any destination to the address codec and get
/// an explicit refusal back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    NoDestination,
    KeyId(KeyId),
    ScriptId(ScriptId),
    ExtKeyPair(ExtKeyPair),
    Stealth(Vec<u8>),
    WitnessV0ScriptHash([u8; 32]),
    WitnessV0KeyHash([u8; HASH160_LEN]),
    WitnessUnknown { version: u8, program: Vec<u8> },
}

impl Destination {
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::NoDestination => "no destination",
            Self::KeyId(_) => "key hash",
            Self::ScriptId(_) => "script hash",
            Self::ExtKeyPair(_) => "extended key pair",
            Self::Stealth(_) => "stealth address",
            Self::WitnessV0ScriptHash(_) => "witness v0 script hash",
            Self::WitnessV0KeyHash(_) => "witness v0 key hash",
            Self::WitnessUnknown { .. } => "unknown witness program",
        }
    }
}

impl From<KeyId> for Destination {
    fn from(id: KeyId) -> Self {
        Self::KeyId(id)
    }
}

impl From<ScriptId> for Destination {
    fn from(id: ScriptId) -> Self {
        Self::ScriptId(id)
    }
}

impl From<ExtKeyPair> for Destination {
    fn from(ek: ExtKeyPair) -> Self {
        Self::ExtKeyPair(ek)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_ids_require_exact_width() {
        assert!(KeyId::try_from(&[7u8; 20][..]).is_ok());
        assert_eq!(
            ScriptId::try_from(&[7u8; 19][..]),
            Err(Base58Error::InvalidLength { expected: 20, got: 19 })
        );
    }

    #[test]
    fn bip32_raw_width() {
        assert_eq!(BIP32_KEY_LEN, 82);
    }
}
