use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Base58Error {
    #[error("invalid base58 character {ch:?} at position {pos}")]
    InvalidCharacter { ch: char, pos: usize },

    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("decoded payload too short: {len} bytes")]
    TooShort { len: usize },

    #[error("truncated payload: need {expected} version bytes, got {got}")]
    Truncated { expected: usize, got: usize },

    #[error("invalid length: expected {expected} got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("unrecognized version prefix")]
    UnrecognizedPrefix,

    #[error("version prefix does not match the expected kind")]
    WrongVersion,

    #[error("destination kind has no base58 encoding: {0}")]
    UnsupportedDestinationKind(&'static str),

    #[error("invalid secret key encoding")]
    InvalidSecretKeyEncoding,

    // Deliberately silent about which key form was attempted.
    #[error("invalid key material")]
    InvalidKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamsError {
    #[error("prefix for {0} must be 1 or 4 bytes")]
    BadPrefixLength(&'static str),

    #[error("{0} and {1} share the same prefix")]
    DuplicatePrefix(&'static str, &'static str),

    #[error("unknown network: {0}")]
    UnknownNetwork(String),
}
