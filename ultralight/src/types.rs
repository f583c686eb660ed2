// ultralight/src/types.rs

use crate::Error;
use std::convert::TryFrom;

/// Tag UID - Newtype Pattern (4, 7 or 10 bytes per ISO 14443-3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid {
    bytes: [u8; 10],
    len: u8,
}

impl Uid {
    /// Longest UID defined by the triple-size cascade
    pub const MAX_LEN: usize = 10;

    /// UID bytes actually present on the tag.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        // Single, double, and triple size UIDs only
        if !matches!(bytes.len(), 4 | 7 | 10) {
            return Err(Error::InvalidLength {
                expected: 7,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; Self::MAX_LEN];
        arr[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: arr,
            len: bytes.len() as u8,
        })
    }
}

impl Default for Uid {
    fn default() -> Self {
        // Double-size UID with the NXP manufacturer byte, the common case
        // for Ultralight family tags.
        Self {
            bytes: [0x04, 0x68, 0x95, 0x71, 0xFA, 0x5C, 0x64, 0x00, 0x00, 0x00],
            len: 7,
        }
    }
}
