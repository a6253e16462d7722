use sha2::{Digest, Sha256};

/// Length of the Base58Check checksum suffix.
pub const CHECKSUM_LEN: usize = 4;

/// H = SHA256( SHA256(data) )
#[must_use]
pub fn hash256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut out = [0u8; 32];
    out.copy_from_slice(&second);
    out
}

/// First four bytes of `hash256(data)`.
#[must_use]
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let h = hash256(data);
    [h[0], h[1], h[2], h[3]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_digest() {
        // Well-known double SHA-256 of the empty string.
        assert_eq!(
            hex::encode(hash256(b"")),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
        assert_eq!(checksum(b""), [0x5d, 0xf6, 0xe0, 0xe2]);
    }
}
