use std::fmt;

/// Errors produced while hashing a message or decoding its textual form.
#[derive(Debug, Clone, PartialEq)]
pub enum Sha256Error {
    /// The hex text handed to the codec could not be decoded into bytes.
    InvalidInputEncoding(hex::FromHexError),
    /// The message holds `len` bytes, whose bit length does not fit the 64-bit length field.
    InputTooLarge { len: usize },
    /// A message schedule word was requested outside of 0..63.
    InternalRange { index: usize },
}

impl fmt::Display for Sha256Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInputEncoding(err) => write!(f, "invalid hex input: {}", err),
            Self::InputTooLarge { len } => {
                write!(f, "message of {} bytes exceeds the 2^64 - 1 bit limit", len)
            }
            Self::InternalRange { index } => {
                write!(f, "message schedule index {} is outside 0..63", index)
            }
        }
    }
}

impl std::error::Error for Sha256Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInputEncoding(err) => Some(err),
            _ => None,
        }
    }
}

impl From<hex::FromHexError> for Sha256Error {
    fn from(err: hex::FromHexError) -> Self {
        Self::InvalidInputEncoding(err)
    }
}
