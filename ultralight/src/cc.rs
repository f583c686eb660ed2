// ultralight/src/cc.rs

//! Capability Container handling for NFC Forum Type 2 tags.
//!
//! The CC is the fixed 4-byte record at page 3: magic byte, version,
//! data area size in 8-byte units, and the access byte.

use crate::constants::{CC_MAGIC, CC_SIZE_UNIT, PAGE_SIZE, TLV_SHORT_LENGTH_MAX};
use crate::{Error, Result};

/// Parsed Capability Container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityContainer {
    version: u8,
    size: u8,
    access: u8,
}

impl CapabilityContainer {
    /// Parse the CC page. A magic byte other than `0xE1` means the tag is
    /// not NDEF formatted (or not a Type 2 tag at all); that is surfaced
    /// rather than defaulted because writing over an incompatible tag can
    /// corrupt a vendor-specific layout.
    pub fn parse(page: &[u8; PAGE_SIZE]) -> Result<Self> {
        if page[0] != CC_MAGIC {
            return Err(Error::InvalidCapabilityContainer { magic: page[0] });
        }
        Ok(Self {
            version: page[1],
            size: page[2],
            access: page[3],
        })
    }

    /// Mapping version as (major, minor).
    pub fn version(&self) -> (u8, u8) {
        (self.version >> 4, self.version & 0x0F)
    }

    /// Total bytes of the TLV-structured user area described by the size
    /// field. Always a page multiple.
    pub fn data_area_len(&self) -> usize {
        self.size as usize * CC_SIZE_UNIT
    }

    /// Largest NDEF message payload that fits in the data area once the
    /// TLV tag byte, the short or extended length field, and the
    /// terminator TLV are accounted for.
    pub fn max_message_len(&self) -> usize {
        let area = self.data_area_len();
        // tag byte + 1-byte length + terminator
        let short = area.saturating_sub(3).min(TLV_SHORT_LENGTH_MAX);
        // tag byte + 3-byte length + terminator
        let extended = area.saturating_sub(5);
        short.max(extended)
    }

    /// Write access nibble is all-ones when the tag is write protected.
    pub fn is_read_only(&self) -> bool {
        self.access & 0x0F == 0x0F
    }

    /// Raw CC bytes, e.g. for re-serializing into a tag image.
    pub fn to_bytes(&self) -> [u8; PAGE_SIZE] {
        [CC_MAGIC, self.version, self.size, self.access]
    }
}
