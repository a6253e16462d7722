//! Base58Check: the raw engine wrapped with a 4-byte double-SHA256 suffix.
//!
//! The checksum only catches transcription errors. It is not an
//! authentication tag.

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use crate::{
    base58,
    errors::Base58Error,
    hashers::{checksum, CHECKSUM_LEN},
};

/// `base58(version || data || checksum(version || data))`
#[must_use]
pub fn encode_checked(version: &[u8], data: &[u8]) -> String {
    let mut full = Zeroizing::new(Vec::with_capacity(version.len() + data.len() + CHECKSUM_LEN));
    full.extend_from_slice(version);
    full.extend_from_slice(data);
    let sum = checksum(&full);
    full.extend_from_slice(&sum);
    base58::encode(&full)
}

/// True when the trailing four bytes of `raw` are the checksum of the rest.
#[must_use]
pub fn verify_checksum(raw: &[u8]) -> bool {
    if raw.len() < CHECKSUM_LEN {
        return false;
    }
    let (body, sum) = raw.split_at(raw.len() - CHECKSUM_LEN);
    checksum(body)[..].ct_eq(sum).into()
}

/// Decode checked text, returning `version || data` without the checksum.
///
/// # Errors
///
/// `InvalidCharacter`, `TooShort` when fewer than four bytes decode, or
/// `ChecksumMismatch`.
pub fn decode_checked(text: &str) -> Result<Vec<u8>, Base58Error> {
    let mut out = Vec::new();
    decode_checked_into(text, &mut out)?;
    Ok(out)
}

/// As [`decode_checked`], writing into `out`. `out` is erased and left empty on failure.
///
/// # Errors
///
/// See [`decode_checked`].
pub fn decode_checked_into(text: &str, out: &mut Vec<u8>) -> Result<(), Base58Error> {
    base58::decode_into(text, out)?;
    if out.len() < CHECKSUM_LEN {
        let len = out.len();
        out.zeroize();
        return Err(Base58Error::TooShort { len });
    }
    if !verify_checksum(out) {
        out.zeroize();
        return Err(Base58Error::ChecksumMismatch);
    }
    let body = out.len() - CHECKSUM_LEN;
    out[body..].zeroize();
    out.truncate(body);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_p2pkh_vector() {
        let data = hex::decode("62e907b15cbf27d5425399ebf6f0fb50ebb88f18").unwrap();
        let text = encode_checked(&[0x00], &data);
        assert_eq!(text, "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa");

        let raw = decode_checked(&text).unwrap();
        assert_eq!(raw[0], 0x00);
        assert_eq!(&raw[1..], data.as_slice());
    }

    #[test]
    fn empty_text_is_too_short() {
        assert_eq!(decode_checked(""), Err(Base58Error::TooShort { len: 0 }));
        assert_eq!(decode_checked("2g"), Err(Base58Error::TooShort { len: 1 }));
    }

    #[test]
    fn empty_payload_round_trips() {
        let text = encode_checked(&[], &[]);
        assert_eq!(decode_checked(&text).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn tampered_text_fails() {
        let text = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNb";
        assert_eq!(decode_checked(text), Err(Base58Error::ChecksumMismatch));
    }

    #[test]
    fn verify_checksum_short_input() {
        assert!(!verify_checksum(&[1, 2, 3]));
    }
}
