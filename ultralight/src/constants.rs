// ultralight/src/constants.rs
//! Tag memory layout and TLV constants used across the crate

/// Atomic unit of Ultralight tag I/O in bytes
pub const PAGE_SIZE: usize = 4;

/// Page holding the Capability Container on a Type 2 tag
pub const CC_PAGE: u8 = 3;

/// First page of the TLV-structured user area
pub const DATA_START_PAGE: u8 = 4;

/// Capability Container magic byte marking an NDEF-formatted tag
pub const CC_MAGIC: u8 = 0xE1;

/// The CC size field counts the user area in units of 8 bytes
pub const CC_SIZE_UNIT: usize = 8;

/// NULL TLV: single padding byte, no length or value
pub const TLV_NULL: u8 = 0x00;
/// Lock control TLV
pub const TLV_LOCK_CONTROL: u8 = 0x01;
/// Memory control TLV
pub const TLV_MEMORY_CONTROL: u8 = 0x02;
/// NDEF message TLV
pub const TLV_NDEF_MESSAGE: u8 = 0x03;
/// Proprietary TLV
pub const TLV_PROPRIETARY: u8 = 0xFD;
/// Terminator TLV: last TLV in the user area
pub const TLV_TERMINATOR: u8 = 0xFE;

/// Length byte announcing a 2-byte big-endian extended length field
pub const TLV_EXTENDED_LENGTH_MARKER: u8 = 0xFF;

/// Largest value length expressible in the 1-byte short length form
pub const TLV_SHORT_LENGTH_MAX: usize = 0xFE;
