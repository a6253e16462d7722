//! Version-byte registry: one immutable profile per network.
//!
//! Every codec call takes a `&NetworkParams`; there is no ambient global
//! profile, so "profile selected before use" is enforced by the signature.

use core::{cmp::Ordering, fmt, str::FromStr};

use crate::errors::ParamsError;

/// Logical kinds that carry a registered Base58 prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
    ExtPublicKeyBtc,
    ExtSecretKeyBtc,
}

impl Base58Type {
    pub const ALL: [Self; 7] = [
        Self::PubkeyAddress,
        Self::ScriptAddress,
        Self::SecretKey,
        Self::ExtPublicKey,
        Self::ExtSecretKey,
        Self::ExtPublicKeyBtc,
        Self::ExtSecretKeyBtc,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PubkeyAddress => "PUBKEY_ADDRESS",
            Self::ScriptAddress => "SCRIPT_ADDRESS",
            Self::SecretKey => "SECRET_KEY",
            Self::ExtPublicKey => "EXT_PUBLIC_KEY",
            Self::ExtSecretKey => "EXT_SECRET_KEY",
            Self::ExtPublicKeyBtc => "EXT_PUBLIC_KEY_BTC",
            Self::ExtSecretKeyBtc => "EXT_SECRET_KEY_BTC",
        }
    }

    /// BIP32 kinds use 4-byte prefixes, everything else a single byte.
    #[must_use]
    pub const fn is_extended(self) -> bool {
        matches!(
            self,
            Self::ExtPublicKey | Self::ExtSecretKey | Self::ExtPublicKeyBtc | Self::ExtSecretKeyBtc
        )
    }

    #[must_use]
    pub const fn is_extended_secret(self) -> bool {
        matches!(self, Self::ExtSecretKey | Self::ExtSecretKeyBtc)
    }

    #[must_use]
    pub const fn prefix_len(self) -> usize {
        if self.is_extended() { 4 } else { 1 }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Base58Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A 1- or 4-byte version prefix.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionBytes {
    len: u8,
    bytes: [u8; 4],
}

impl VersionBytes {
    #[must_use]
    pub const fn one(b: u8) -> Self {
        Self { len: 1, bytes: [b, 0, 0, 0] }
    }

    #[must_use]
    pub const fn four(b: [u8; 4]) -> Self {
        Self { len: 4, bytes: b }
    }

    /// `None` unless `raw` is exactly 1 or 4 bytes long.
    #[must_use]
    pub fn from_slice(raw: &[u8]) -> Option<Self> {
        match *raw {
            [x] => Some(Self::one(x)),
            [a, b, c, d] => Some(Self::four([a, b, c, d])),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when `raw` starts with these bytes.
    #[must_use]
    pub fn is_prefix_of(&self, raw: &[u8]) -> bool {
        raw.starts_with(self.as_bytes())
    }
}

impl PartialOrd for VersionBytes {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionBytes {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl AsRef<[u8]> for VersionBytes {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for VersionBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VersionBytes(")?;
        for b in self.as_bytes() {
            write!(f, "{b:02x}")?;
        }
        write!(f, ")")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Main,
    Test,
    Regtest,
}

impl Network {
    #[must_use]
    pub fn params(self) -> &'static NetworkParams {
        match self {
            Self::Main => &MAINNET,
            Self::Test => &TESTNET,
            Self::Regtest => &REGTEST,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Main => "main",
            Self::Test => "test",
            Self::Regtest => "regtest",
        })
    }
}

impl FromStr for Network {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(Self::Main),
            "test" | "testnet" => Ok(Self::Test),
            "regtest" => Ok(Self::Regtest),
            _ => Err(ParamsError::UnknownNetwork(s.to_owned())),
        }
    }
}

/// The prefix table of one network profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkParams {
    network: Network,
    prefixes: [VersionBytes; 7],
}

// Order follows `Base58Type::ALL`.
pub static MAINNET: NetworkParams = NetworkParams {
    network: Network::Main,
    prefixes: [
        VersionBytes::one(0x38),
        VersionBytes::one(0x3c),
        VersionBytes::one(0x6c),
        VersionBytes::four([0x69, 0x6e, 0x82, 0xd1]),
        VersionBytes::four([0x8f, 0x1d, 0xae, 0xb8]),
        VersionBytes::four([0x04, 0x88, 0xb2, 0x1e]),
        VersionBytes::four([0x04, 0x88, 0xad, 0xe4]),
    ],
};

const TEST_PREFIXES: [VersionBytes; 7] = [
    VersionBytes::one(0x76),
    VersionBytes::one(0x7a),
    VersionBytes::one(0x2e),
    VersionBytes::four([0xe1, 0x42, 0x78, 0x00]),
    VersionBytes::four([0x04, 0x88, 0x94, 0x78]),
    VersionBytes::four([0x04, 0x35, 0x87, 0xcf]),
    VersionBytes::four([0x04, 0x35, 0x83, 0x94]),
];

pub static TESTNET: NetworkParams = NetworkParams {
    network: Network::Test,
    prefixes: TEST_PREFIXES,
};

pub static REGTEST: NetworkParams = NetworkParams {
    network: Network::Regtest,
    prefixes: TEST_PREFIXES,
};

impl NetworkParams {
    #[must_use]
    pub const fn network(&self) -> Network {
        self.network
    }

    /// The registered prefix for `kind`.
    #[must_use]
    pub const fn prefix(&self, kind: Base58Type) -> &VersionBytes {
        &self.prefixes[kind.index()]
    }

    /// Which kind, if any, is registered under exactly `version`.
    #[must_use]
    pub fn kind_of(&self, version: &[u8]) -> Option<Base58Type> {
        Base58Type::ALL
            .into_iter()
            .find(|k| self.prefix(*k).as_bytes() == version)
    }

    /// Start a custom profile from the built-in table of `network`.
    #[must_use]
    pub fn builder(network: Network) -> NetworkParamsBuilder {
        NetworkParamsBuilder {
            params: network.params().clone(),
            error: None,
        }
    }
}

/// Builds a custom profile; prefix shape and uniqueness are checked in `build`.
#[derive(Debug, Clone)]
pub struct NetworkParamsBuilder {
    params: NetworkParams,
    error: Option<ParamsError>,
}

impl NetworkParamsBuilder {
    #[must_use]
    pub fn prefix(mut self, kind: Base58Type, bytes: &[u8]) -> Self {
        if self.error.is_some() {
            return self;
        }
        match VersionBytes::from_slice(bytes) {
            Some(v) if v.len() == kind.prefix_len() => self.params.prefixes[kind.index()] = v,
            _ => self.error = Some(ParamsError::BadPrefixLength(kind.name())),
        }
        self
    }

    /// # Errors
    ///
    /// `BadPrefixLength` for a wrongly sized prefix, `DuplicatePrefix` when two
    /// kinds share the same bytes.
    pub fn build(self) -> Result<NetworkParams, ParamsError> {
        if let Some(e) = self.error {
            return Err(e);
        }
        let p = self.params;
        for (i, a) in Base58Type::ALL.iter().enumerate() {
            for b in &Base58Type::ALL[i + 1..] {
                if p.prefix(*a) == p.prefix(*b) {
                    return Err(ParamsError::DuplicatePrefix(a.name(), b.name()));
                }
            }
        }
        Ok(p)
    }
}
