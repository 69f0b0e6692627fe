//! Arbitrary precision integers in the RPC quantity encoding.
//!
//! Quantities are `0x` followed by the hex digits of the value without
//! leading zeros, with zero encoded as `0x0`. Nodes are not always strict
//! about this so leading zeros are tolerated when parsing.

use {
    crate::error::{InvalidFormatError, strip_prefix},
    num::{BigUint, Num, ToPrimitive, Zero},
    serde_with::{DeserializeFromStr, SerializeDisplay},
    std::{fmt, str::FromStr},
};

/// A non-negative integer of unbounded size.
#[derive(
    Clone,
    Default,
    Eq,
    PartialEq,
    Hash,
    Ord,
    PartialOrd,
    derive_more::From,
    derive_more::Into,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub struct HexQuantity(BigUint);

impl HexQuantity {
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn into_biguint(self) -> BigUint {
        self.0
    }

    /// Returns the value if it fits into 64 bits.
    pub fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }
}

impl FromStr for HexQuantity {
    type Err = InvalidFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = strip_prefix(s)?;
        if digits.is_empty() {
            return Err(InvalidFormatError::Empty);
        }
        if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(InvalidFormatError::InvalidDigit(c));
        }
        BigUint::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| InvalidFormatError::Empty)
    }
}

impl fmt::Display for HexQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl fmt::Debug for HexQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<u64> for HexQuantity {
    fn from(value: u64) -> Self {
        Self(value.into())
    }
}

impl From<u128> for HexQuantity {
    fn from(value: u128) -> Self {
        Self(value.into())
    }
}

impl From<u32> for HexQuantity {
    fn from(value: u32) -> Self {
        Self(value.into())
    }
}

impl TryFrom<&HexQuantity> for u64 {
    type Error = InvalidFormatError;

    fn try_from(value: &HexQuantity) -> Result<Self, Self::Error> {
        value.to_u64().ok_or(InvalidFormatError::Overflow(64))
    }
}

/// An amount of wei, the smallest denomination of Ether.
#[derive(
    Clone,
    Default,
    Eq,
    PartialEq,
    Hash,
    Ord,
    PartialOrd,
    derive_more::From,
    derive_more::Into,
    derive_more::Add,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub struct Wei(BigUint);

const GWEI: u64 = 1_000_000_000;
const ETHER: u64 = 1_000_000_000_000_000_000;

impl Wei {
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn from_gwei(gwei: u64) -> Self {
        Self(BigUint::from(gwei) * GWEI)
    }

    pub fn from_ether(ether: u64) -> Self {
        Self(BigUint::from(ether) * ETHER)
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn into_biguint(self) -> BigUint {
        self.0
    }
}

impl FromStr for Wei {
    type Err = InvalidFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HexQuantity::from_str(s).map(Self::from)
    }
}

impl fmt::Display for Wei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl fmt::Debug for Wei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wei", self.0)
    }
}

impl From<u64> for Wei {
    fn from(value: u64) -> Self {
        Self(value.into())
    }
}

impl From<u128> for Wei {
    fn from(value: u128) -> Self {
        Self(value.into())
    }
}

impl From<HexQuantity> for Wei {
    fn from(value: HexQuantity) -> Self {
        Self(value.0)
    }
}

impl From<Wei> for HexQuantity {
    fn from(value: Wei) -> Self {
        Self(value.0)
    }
}
