//! Secret-key (WIF) codec.
//!
//! `SECRET_KEY prefix || secret(32) [|| 0x01 if compressed]`

use zeroize::Zeroizing;

use crate::{
    errors::Base58Error,
    params::{Base58Type, NetworkParams},
    payload::{PrefixWidth, VersionedPayload},
    secret::PrivKey,
    types::{COMPRESSED_FLAG, SECRET_KEY_LEN},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifSecret {
    payload: VersionedPayload,
}

fn well_formed(data: &[u8]) -> bool {
    data.len() == SECRET_KEY_LEN
        || (data.len() == SECRET_KEY_LEN + 1 && data[SECRET_KEY_LEN] == COMPRESSED_FLAG)
}

impl WifSecret {
    #[must_use]
    pub fn from_key(key: &PrivKey, params: &NetworkParams) -> Self {
        // Sized up front: growing a buffer would free a copy of the scalar.
        let mut data = Zeroizing::new(Vec::with_capacity(SECRET_KEY_LEN + 1));
        data.extend_from_slice(key.as_bytes());
        if key.is_compressed() {
            data.push(COMPRESSED_FLAG);
        }
        Self { payload: VersionedPayload::for_kind(params, Base58Type::SecretKey, &data) }
    }

    /// Parse WIF text.
    ///
    /// # Errors
    ///
    /// Base58Check failures, `WrongVersion` when the prefix is not the
    /// network's secret-key prefix, `InvalidSecretKeyEncoding` for any data
    /// shape other than 32 bytes or 32 bytes plus `0x01`.
    pub fn from_text(text: &str, params: &NetworkParams) -> Result<Self, Base58Error> {
        let payload = VersionedPayload::from_text(text, PrefixWidth::One, params)?;
        if payload.version() != params.prefix(Base58Type::SecretKey) {
            return Err(Base58Error::WrongVersion);
        }
        if !well_formed(payload.data()) {
            return Err(Base58Error::InvalidSecretKeyEncoding);
        }
        Ok(Self { payload })
    }

    #[must_use]
    pub fn is_valid(&self, params: &NetworkParams) -> bool {
        well_formed(self.payload.data()) && self.payload.version() == params.prefix(Base58Type::SecretKey)
    }

    /// # Errors
    ///
    /// `InvalidSecretKeyEncoding` for a malformed payload, `InvalidKey` if the
    /// scalar is out of range.
    pub fn key(&self) -> Result<PrivKey, Base58Error> {
        let data = self.payload.data();
        if !well_formed(data) {
            return Err(Base58Error::InvalidSecretKeyEncoding);
        }
        PrivKey::from_slice(&data[..SECRET_KEY_LEN], data.len() > SECRET_KEY_LEN)
    }

    #[must_use]
    pub const fn payload(&self) -> &VersionedPayload {
        &self.payload
    }

    #[must_use]
    pub fn to_text(&self) -> String {
        self.payload.to_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{check, params::{MAINNET, TESTNET}};

    #[test]
    fn compressed_flag_round_trip() {
        for compressed in [false, true] {
            let key = PrivKey::new(&[0x21; 32], compressed).unwrap();
            let wif = WifSecret::from_key(&key, &MAINNET);
            assert_eq!(wif.payload().data().len(), 32 + usize::from(compressed));
            let back = WifSecret::from_text(&wif.to_text(), &MAINNET).unwrap();
            assert!(back.is_valid(&MAINNET));
            assert_eq!(back.key().unwrap(), key);
        }
    }

    #[test]
    fn rejects_bad_flag_and_lengths() {
        let v = MAINNET.prefix(Base58Type::SecretKey).as_bytes();
        let mut data = vec![0x21; 32];
        data.push(0x02);
        let text = check::encode_checked(v, &data);
        assert_eq!(WifSecret::from_text(&text, &MAINNET), Err(Base58Error::InvalidSecretKeyEncoding));

        for len in [0usize, 31, 34] {
            let text = check::encode_checked(v, &vec![0x21; len]);
            assert_eq!(WifSecret::from_text(&text, &MAINNET), Err(Base58Error::InvalidSecretKeyEncoding));
        }
    }

    #[test]
    fn rejects_other_networks() {
        let key = PrivKey::new(&[0x21; 32], true).unwrap();
        let text = WifSecret::from_key(&key, &TESTNET).to_text();
        assert_eq!(WifSecret::from_text(&text, &MAINNET), Err(Base58Error::WrongVersion));
    }

    #[test]
    fn out_of_range_scalar_is_caught_on_key() {
        let v = MAINNET.prefix(Base58Type::SecretKey).as_bytes();
        let text = check::encode_checked(v, &[0u8; 32]);
        let wif = WifSecret::from_text(&text, &MAINNET).unwrap();
        assert_eq!(wif.key(), Err(Base58Error::InvalidKey));
    }
}
