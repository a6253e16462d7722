//! BIP32 extended key pair and its fixed 74-byte serialisations.
//!
//! Layout (both forms):
//! `depth(1) || parent_fingerprint(4) || child(4, BE) || chain_code(32) || key(33)`
//! where `key` is `0x00 || secret` in the secret form and the compressed
//! point in the public form. Curve arithmetic is delegated to `secp256k1`.

use core::fmt;

use secp256k1::{PublicKey, SecretKey};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::{
    errors::Base58Error,
    types::{CHAIN_CODE_LEN, EXT_KEY_LEN, PUBKEY_LEN, SECRET_KEY_LEN},
};

const KEY_OFFSET: usize = 41;

/// Compressed public key for a secret scalar.
///
/// # Errors
///
/// `InvalidKey` if the scalar is zero or not below the curve order.
pub(crate) fn derive_public(secret: &[u8; SECRET_KEY_LEN]) -> Result<[u8; PUBKEY_LEN], Base58Error> {
    let mut sk = SecretKey::from_slice(secret).map_err(|_| Base58Error::InvalidKey)?;
    let pk = PublicKey::from_secret_key_global(&sk).serialize();
    sk.non_secure_erase();
    Ok(pk)
}

#[derive(Clone, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ExtKeyPair {
    depth: u8,
    fingerprint: [u8; 4],
    child: u32,
    chain_code: [u8; CHAIN_CODE_LEN],
    secret: Option<[u8; SECRET_KEY_LEN]>,
    public: [u8; PUBKEY_LEN],
}

impl ExtKeyPair {
    /// Node holding a secret; the public half is derived.
    ///
    /// # Errors
    ///
    /// `InvalidKey` if `secret` is not a valid secp256k1 scalar.
    pub fn from_secret(
        depth: u8,
        fingerprint: [u8; 4],
        child: u32,
        chain_code: [u8; CHAIN_CODE_LEN],
        secret: &[u8; SECRET_KEY_LEN],
    ) -> Result<Self, Base58Error> {
        let public = derive_public(secret)?;
        Ok(Self { depth, fingerprint, child, chain_code, secret: Some(*secret), public })
    }

    /// Public-only node.
    ///
    /// # Errors
    ///
    /// `InvalidKey` if `public` is not a valid compressed point.
    pub fn from_public(
        depth: u8,
        fingerprint: [u8; 4],
        child: u32,
        chain_code: [u8; CHAIN_CODE_LEN],
        public: [u8; PUBKEY_LEN],
    ) -> Result<Self, Base58Error> {
        PublicKey::from_slice(&public).map_err(|_| Base58Error::InvalidKey)?;
        Ok(Self { depth, fingerprint, child, chain_code, secret: None, public })
    }

    #[must_use]
    pub const fn depth(&self) -> u8 {
        self.depth
    }

    #[must_use]
    pub const fn fingerprint(&self) -> [u8; 4] {
        self.fingerprint
    }

    #[must_use]
    pub const fn child(&self) -> u32 {
        self.child
    }

    #[must_use]
    pub const fn chain_code(&self) -> &[u8; CHAIN_CODE_LEN] {
        &self.chain_code
    }

    #[must_use]
    pub const fn public_key(&self) -> &[u8; PUBKEY_LEN] {
        &self.public
    }

    #[must_use]
    pub const fn secret(&self) -> Option<&[u8; SECRET_KEY_LEN]> {
        self.secret.as_ref()
    }

    #[must_use]
    pub const fn has_secret(&self) -> bool {
        self.secret.is_some()
    }

    /// Copy of this node without the secret half.
    #[must_use]
    pub fn neutered(&self) -> Self {
        Self {
            depth: self.depth,
            fingerprint: self.fingerprint,
            child: self.child,
            chain_code: self.chain_code,
            secret: None,
            public: self.public,
        }
    }

    fn encode_header(&self, code: &mut [u8; EXT_KEY_LEN]) {
        code[0] = self.depth;
        code[1..5].copy_from_slice(&self.fingerprint);
        code[5..9].copy_from_slice(&self.child.to_be_bytes());
        code[9..KEY_OFFSET].copy_from_slice(&self.chain_code);
    }

    /// Secret form, or `None` for a public-only node.
    #[must_use]
    pub fn encode_v(&self) -> Option<Zeroizing<[u8; EXT_KEY_LEN]>> {
        let secret = self.secret.as_ref()?;
        let mut code = Zeroizing::new([0u8; EXT_KEY_LEN]);
        self.encode_header(&mut code);
        code[KEY_OFFSET] = 0x00;
        code[KEY_OFFSET + 1..].copy_from_slice(secret);
        Some(code)
    }

    /// Public form.
    #[must_use]
    pub fn encode_p(&self) -> [u8; EXT_KEY_LEN] {
        let mut code = [0u8; EXT_KEY_LEN];
        self.encode_header(&mut code);
        code[KEY_OFFSET..].copy_from_slice(&self.public);
        code
    }

    fn decode_header(code: &[u8; EXT_KEY_LEN]) -> (u8, [u8; 4], u32, [u8; CHAIN_CODE_LEN]) {
        let mut fingerprint = [0u8; 4];
        fingerprint.copy_from_slice(&code[1..5]);
        let mut child = [0u8; 4];
        child.copy_from_slice(&code[5..9]);
        let mut chain_code = [0u8; CHAIN_CODE_LEN];
        chain_code.copy_from_slice(&code[9..KEY_OFFSET]);
        (code[0], fingerprint, u32::from_be_bytes(child), chain_code)
    }

    /// Parse the secret form.
    ///
    /// # Errors
    ///
    /// `InvalidKey` if the key field is not `0x00 || valid scalar`.
    pub fn decode_v(code: &[u8; EXT_KEY_LEN]) -> Result<Self, Base58Error> {
        if code[KEY_OFFSET] != 0x00 {
            return Err(Base58Error::InvalidKey);
        }
        let (depth, fingerprint, child, chain_code) = Self::decode_header(code);
        let mut secret = Zeroizing::new([0u8; SECRET_KEY_LEN]);
        secret.copy_from_slice(&code[KEY_OFFSET + 1..]);
        Self::from_secret(depth, fingerprint, child, chain_code, &secret)
    }

    /// Parse the public form.
    ///
    /// # Errors
    ///
    /// `InvalidKey` if the key field is not a valid compressed point.
    pub fn decode_p(code: &[u8; EXT_KEY_LEN]) -> Result<Self, Base58Error> {
        let (depth, fingerprint, child, chain_code) = Self::decode_header(code);
        let mut public = [0u8; PUBKEY_LEN];
        public.copy_from_slice(&code[KEY_OFFSET..]);
        Self::from_public(depth, fingerprint, child, chain_code, public)
    }
}

// Secret scalars are compared in constant time.
impl PartialEq for ExtKeyPair {
    fn eq(&self, other: &Self) -> bool {
        let secrets_eq = match (&self.secret, &other.secret) {
            (Some(a), Some(b)) => bool::from(a[..].ct_eq(&b[..])),
            (None, None) => true,
            _ => false,
        };
        secrets_eq
            && self.depth == other.depth
            && self.fingerprint == other.fingerprint
            && self.child == other.child
            && self.chain_code == other.chain_code
            && self.public == other.public
    }
}

impl fmt::Debug for ExtKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtKeyPair")
            .field("depth", &self.depth)
            .field("fingerprint", &self.fingerprint)
            .field("child", &self.child)
            .field("has_secret", &self.secret.is_some())
            .finish_non_exhaustive()
    }
}
