// ultralight/src/tlv.rs

//! TLV framing of the Type 2 tag user area.
//!
//! The user area is a sequence of tag/length/value blocks. Lengths come in
//! a 1-byte short form and, when the first length byte is `0xFF`, a 2-byte
//! big-endian extended form. Scanning stops at the first NDEF message TLV
//! or at the terminator TLV.

use derive_more::Display;
use log::trace;

use crate::constants::{
    TLV_EXTENDED_LENGTH_MARKER, TLV_LOCK_CONTROL, TLV_MEMORY_CONTROL, TLV_NDEF_MESSAGE, TLV_NULL,
    TLV_PROPRIETARY, TLV_SHORT_LENGTH_MAX, TLV_TERMINATOR,
};
use crate::{Error, Result};

/// Kind of a TLV block, from its tag byte.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum TlvKind {
    #[display(fmt = "null")]
    Null,
    #[display(fmt = "lock control")]
    LockControl,
    #[display(fmt = "memory control")]
    MemoryControl,
    #[display(fmt = "ndef message")]
    NdefMessage,
    #[display(fmt = "proprietary")]
    Proprietary,
    #[display(fmt = "terminator")]
    Terminator,
    #[display(fmt = "unknown")]
    Unknown,
}

impl TlvKind {
    pub fn from_tag(tag: u8) -> Self {
        match tag {
            TLV_NULL => TlvKind::Null,
            TLV_LOCK_CONTROL => TlvKind::LockControl,
            TLV_MEMORY_CONTROL => TlvKind::MemoryControl,
            TLV_NDEF_MESSAGE => TlvKind::NdefMessage,
            TLV_PROPRIETARY => TlvKind::Proprietary,
            TLV_TERMINATOR => TlvKind::Terminator,
            _ => TlvKind::Unknown,
        }
    }
}

/// Parsed TLV length field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlvLength {
    /// Value length in bytes.
    pub value: usize,
    /// Bytes the length field itself occupies (1 or 3).
    pub field_len: usize,
}

/// Where the NDEF message TLV sits in the user area, if anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NdefLocation {
    /// NDEF message TLV found. `tlv_offset` is the tag byte, `value_offset`
    /// the first value byte, both relative to the user-area start.
    Found {
        tlv_offset: usize,
        value_offset: usize,
        value_len: usize,
    },
    /// Terminator reached before any NDEF TLV: the tag is formatted but
    /// holds no message.
    Empty,
}

enum ScanState {
    Scanning,
    FoundNdef(NdefLocation),
    FoundTerminator,
    Exhausted,
}

/// Walk the user area TLV by TLV until the NDEF message TLV or the
/// terminator turns up. `read_byte` is indexed from the user-area start
/// and `limit` is the data area length from the Capability Container.
///
/// NULL TLVs and lock/memory-control TLVs before the NDEF TLV are skipped.
/// Running off the end of the area, including through a length field that
/// claims more bytes than remain, is `NdefNotFound`.
pub fn scan<F>(mut read_byte: F, limit: usize) -> Result<NdefLocation>
where
    F: FnMut(usize) -> Result<u8>,
{
    let mut offset = 0usize;
    let mut state = ScanState::Scanning;

    while let ScanState::Scanning = state {
        if offset >= limit {
            state = ScanState::Exhausted;
            break;
        }
        let kind = TlvKind::from_tag(read_byte(offset)?);
        match kind {
            TlvKind::Null => offset += 1,
            TlvKind::Terminator => state = ScanState::FoundTerminator,
            TlvKind::NdefMessage => {
                let length = read_length(&mut read_byte, offset + 1, limit)?;
                let value_offset = offset + 1 + length.field_len;
                if value_offset + length.value > limit {
                    return Err(Error::NdefNotFound);
                }
                state = ScanState::FoundNdef(NdefLocation::Found {
                    tlv_offset: offset,
                    value_offset,
                    value_len: length.value,
                });
            }
            _ => {
                // Lock control, memory control, proprietary: skip the value
                let length = read_length(&mut read_byte, offset + 1, limit)?;
                trace!("skipping {} tlv at offset {}", kind, offset);
                offset += 1 + length.field_len + length.value;
            }
        }
    }

    match state {
        ScanState::FoundNdef(location) => Ok(location),
        ScanState::FoundTerminator => Ok(NdefLocation::Empty),
        ScanState::Exhausted => Err(Error::NdefNotFound),
        ScanState::Scanning => unreachable!("scan loop exits only in a terminal state"),
    }
}

fn read_length<F>(read_byte: &mut F, at: usize, limit: usize) -> Result<TlvLength>
where
    F: FnMut(usize) -> Result<u8>,
{
    if at >= limit {
        return Err(Error::NdefNotFound);
    }
    let first = read_byte(at)?;
    if first == TLV_EXTENDED_LENGTH_MARKER {
        if at + 2 >= limit {
            return Err(Error::NdefNotFound);
        }
        let hi = read_byte(at + 1)?;
        let lo = read_byte(at + 2)?;
        Ok(TlvLength {
            value: u16::from_be_bytes([hi, lo]) as usize,
            field_len: 3,
        })
    } else {
        Ok(TlvLength {
            value: first as usize,
            field_len: 1,
        })
    }
}

/// Serialize a TLV length field, choosing the short form for values up to
/// 254 bytes and the extended form above that.
pub fn encode_length(value_len: usize) -> Vec<u8> {
    if value_len <= TLV_SHORT_LENGTH_MAX {
        vec![value_len as u8]
    } else {
        let len = value_len as u16;
        vec![
            TLV_EXTENDED_LENGTH_MARKER,
            (len >> 8) as u8,
            (len & 0xFF) as u8,
        ]
    }
}

/// Bytes a TLV header (tag byte plus length field) occupies for a value of
/// the given length.
pub fn header_len(value_len: usize) -> usize {
    if value_len <= TLV_SHORT_LENGTH_MAX {
        2
    } else {
        4
    }
}
