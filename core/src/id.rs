//! Identity types for cograph entities.
//!
//! Node identifiers and caller identities are opaque fixed-size byte strings.
//! The all-zero value of either is a sentinel meaning "unset": a zero
//! `NodeId` can never be registered and a zero `Identity` never owns anything.
//!
//! Both render as `0x`-prefixed lower-case hex and parse from hex with or
//! without the prefix.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::IdParseError;

/// Seconds since the Unix epoch, as supplied by the environment clock.
pub type Timestamp = u64;

macro_rules! byte_id {
    ($(#[$meta:meta])* $name:ident, $len:expr, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name(pub [u8; $len]);

        impl $name {
            /// Width of the identifier in bytes.
            pub const LEN: usize = $len;

            /// The zero sentinel.
            pub const ZERO: Self = Self([0u8; $len]);

            /// Create from raw bytes.
            pub fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Build an identifier whose trailing bytes hold `n` big-endian.
            /// Mostly useful for fixtures and tooling.
            pub fn from_low_u64(n: u64) -> Self {
                let mut bytes = [0u8; $len];
                bytes[$len - 8..].copy_from_slice(&n.to_be_bytes());
                Self(bytes)
            }

            /// Returns true if this is the zero sentinel.
            pub fn is_zero(&self) -> bool {
                self.0.iter().all(|b| *b == 0)
            }

            /// Get the raw bytes.
            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self)
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let digits = s
                    .strip_prefix("0x")
                    .or_else(|| s.strip_prefix("0X"))
                    .unwrap_or(s);
                if digits.len() != $len * 2 {
                    return Err(IdParseError::length($kind, $len * 2, digits.len()));
                }
                let mut bytes = [0u8; $len];
                hex::decode_to_slice(digits, &mut bytes)
                    .map_err(|e| IdParseError::hex($kind, e.to_string()))?;
                Ok(Self(bytes))
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

byte_id!(
    /// Content-addressed identifier of a node (32 bytes).
    NodeId,
    32,
    "node id"
);

byte_id!(
    /// Authenticated identity of a caller (20 bytes, address-like).
    Identity,
    20,
    "identity"
);

/// Identifier of a link, assigned in creation order starting at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(pub u64);

impl LinkId {
    /// Create a new LinkId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "l{}", self.0)
    }
}
