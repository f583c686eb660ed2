// ultralight/src/driver/operations/write.rs

use log::debug;

use crate::constants::{TLV_NDEF_MESSAGE, TLV_TERMINATOR};
use crate::driver::{buffer_len, MifareUltralight};
use crate::ndef::MessageCodec;
use crate::tlv::{self, NdefLocation};
use crate::transport::TagTransport;
use crate::{Error, Result};

/// Write `message` over the tag's NDEF TLV region.
///
/// An existing NDEF TLV is overwritten in place so lock-control and
/// memory-control TLVs before it survive; a tag holding only a terminator
/// gets the message at the start of the user area. The capacity check
/// happens before the first page write, because a half-written tag is
/// unusable until rewritten.
pub fn write<T, C>(driver: &mut MifareUltralight<T, C>, message: &C::Message) -> Result<()>
where
    T: TagTransport,
    C: MessageCodec,
{
    if driver.is_unformatted()? {
        return Err(Error::UnformattedTag);
    }

    let cc = driver.read_capability_container()?;
    let data_area_len = cc.data_area_len();
    let encoded = driver.codec.encode(message)?;

    let tlv_offset = match driver.find_ndef(data_area_len)? {
        NdefLocation::Found { tlv_offset, .. } => tlv_offset,
        NdefLocation::Empty => 0,
    };

    let needed = buffer_len(tlv_offset, encoded.len());
    if needed > data_area_len {
        return Err(Error::CapacityExceeded {
            needed,
            capacity: data_area_len,
        });
    }
    debug!(
        "writing {} message bytes at user offset {} ({} of {} area bytes)",
        encoded.len(),
        tlv_offset,
        needed,
        data_area_len
    );

    let mut frame = Vec::with_capacity(needed - tlv_offset);
    frame.push(TLV_NDEF_MESSAGE);
    frame.extend_from_slice(&tlv::encode_length(encoded.len()));
    frame.extend_from_slice(&encoded);
    frame.push(TLV_TERMINATOR);

    driver.write_user_bytes(tlv_offset, &frame)
}
