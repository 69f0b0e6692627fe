use thiserror::Error;

/// Input rejected by one of the value type constructors.
///
/// Raised synchronously while building a value, so a malformed address or
/// quantity never makes it into a request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidFormatError {
    #[error("expected {expected} bytes but got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("hex string is missing the 0x prefix")]
    MissingPrefix,

    #[error("hex string has an odd number of digits")]
    OddLength,

    #[error("hex quantity has no digits")]
    Empty,

    #[error("invalid hex character {0:?}")]
    InvalidDigit(char),

    #[error("quantity does not fit into {0} bits")]
    Overflow(u32),

    #[error("unknown block tag {0:?}")]
    UnknownTag(String),
}

impl From<hex::FromHexError> for InvalidFormatError {
    fn from(err: hex::FromHexError) -> Self {
        match err {
            hex::FromHexError::InvalidHexCharacter { c, .. } => Self::InvalidDigit(c),
            hex::FromHexError::OddLength => Self::OddLength,
            // Only returned by the `decode_to_slice` family, which checks
            // lengths before decoding anyway.
            hex::FromHexError::InvalidStringLength => Self::OddLength,
        }
    }
}

/// Strips the mandatory `0x` prefix of an RPC hex string.
pub(crate) fn strip_prefix(s: &str) -> Result<&str, InvalidFormatError> {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .ok_or(InvalidFormatError::MissingPrefix)
}
