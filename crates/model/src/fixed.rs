//! Fixed length byte sequences exchanged as `0x` prefixed hex strings.

use {
    crate::error::InvalidFormatError,
    std::{fmt, str::FromStr},
};

/// Defines a newtype around `[u8; $len]` that can only be built from exactly
/// `$len` bytes and renders as canonical lowercase hex.
macro_rules! fixed_bytes {
    ($(#[$attr:meta])* $name:ident, $len:literal) => {
        $(#[$attr])*
        #[derive(
            Copy,
            Clone,
            Default,
            Eq,
            PartialEq,
            Hash,
            Ord,
            PartialOrd,
            serde_with::SerializeDisplay,
            serde_with::DeserializeFromStr,
        )]
        pub struct $name(pub [u8; $len]);

        impl $name {
            /// Number of bytes in the value.
            pub const LEN: usize = $len;

            pub fn from_slice(bytes: &[u8]) -> Result<Self, InvalidFormatError> {
                <[u8; $len]>::try_from(bytes)
                    .map(Self)
                    .map_err(|_| InvalidFormatError::Length {
                        expected: $len,
                        actual: bytes.len(),
                    })
            }

            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = InvalidFormatError;

            /// Accepts the hex digits with or without the `0x` prefix.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let digits = s
                    .strip_prefix("0x")
                    .or_else(|| s.strip_prefix("0X"))
                    .unwrap_or(s);
                if digits.len() % 2 != 0 {
                    return Err(InvalidFormatError::OddLength);
                }
                if digits.len() != 2 * $len {
                    return Err(InvalidFormatError::Length {
                        expected: $len,
                        actual: digits.len() / 2,
                    });
                }
                let mut bytes = [0_u8; $len];
                hex::decode_to_slice(digits, &mut bytes)?;
                Ok(Self(bytes))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self, f)
            }
        }

        impl fmt::LowerHex for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if f.alternate() {
                    f.write_str("0x")?;
                }
                f.write_str(&hex::encode(self.0))
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl From<$name> for [u8; $len] {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = InvalidFormatError;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                Self::from_slice(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }
    };
}

/// Defines a newtype over [`Hex32`] so that block hashes, transaction ids and
/// plain digests can't be mixed up.
macro_rules! hex32_newtype {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(
            Copy,
            Clone,
            Default,
            Eq,
            PartialEq,
            Hash,
            Ord,
            PartialOrd,
            derive_more::From,
            derive_more::Into,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub Hex32);

        impl $name {
            pub fn from_slice(bytes: &[u8]) -> Result<Self, InvalidFormatError> {
                Hex32::from_slice(bytes).map(Self)
            }

            pub fn as_hex32(&self) -> &Hex32 {
                &self.0
            }

            pub fn as_bytes(&self) -> &[u8; 32] {
                self.0.as_bytes()
            }
        }

        impl From<[u8; 32]> for $name {
            fn from(bytes: [u8; 32]) -> Self {
                Self(Hex32(bytes))
            }
        }

        impl FromStr for $name {
            type Err = InvalidFormatError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

fixed_bytes! {
    /// A 20 byte account or contract address.
    Address, 20
}

fixed_bytes! {
    /// A generic 32 byte hash or digest.
    Hex32, 32
}

fixed_bytes! {
    /// The 8 byte proof-of-work nonce of a block header.
    Nonce, 8
}

hex32_newtype! {
    /// Hash identifying a block.
    BlockHash
}

hex32_newtype! {
    /// Hash identifying a transaction.
    TransactionId
}

impl Address {
    /// The all zero address. Sending a transaction *to* it is a plain call
    /// and not a contract creation.
    pub const ZERO: Self = Self([0; 20]);
}

impl Nonce {
    pub fn from_u64(value: u64) -> Self {
        Self(value.to_be_bytes())
    }

    pub fn to_u64(self) -> u64 {
        u64::from_be_bytes(self.0)
    }
}
