use serde::{Deserialize, Serialize};
use std::fmt;

pub type BitResult<T> = Result<T, BitError>;

/// Rejected bit operation input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BitError {
    /// position is not below the width of the value
    OutOfRange { position: u32, width: u32 },
    /// mask size exceeds the width of the value
    InvalidSize { size: u32, width: u32 },
}

impl BitError {
    #[inline]
    pub fn out_of_range(position: u32, width: u32) -> Self {
        Self::OutOfRange { position, width }
    }
    #[inline]
    pub fn invalid_size(size: u32, width: u32) -> Self {
        Self::InvalidSize { size, width }
    }
    #[inline]
    pub fn width(&self) -> u32 {
        match self {
            BitError::OutOfRange { width, .. } | BitError::InvalidSize { width, .. } => *width,
        }
    }
}

impl fmt::Display for BitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitError::OutOfRange { position, width } => write!(
                f,
                "bit position {} is out of range for a {}-bit value",
                position, width
            ),
            BitError::InvalidSize { size, width } => write!(
                f,
                "bitmask size {} exceeds the {}-bit value width",
                size, width
            ),
        }
    }
}

impl std::error::Error for BitError {}

impl From<BitError> for eva_common::Error {
    fn from(e: BitError) -> Self {
        eva_common::Error::invalid_params(e.to_string())
    }
}
