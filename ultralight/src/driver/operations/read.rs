// ultralight/src/driver/operations/read.rs

use log::debug;

use crate::driver::MifareUltralight;
use crate::ndef::MessageCodec;
use crate::tag::NdefTag;
use crate::tlv::NdefLocation;
use crate::transport::TagTransport;
use crate::Result;

/// Read the tag in front of the reader.
///
/// An unformatted tag is reported as such rather than as an error;
/// a formatted tag with only a terminator (or a zero-length NDEF TLV)
/// comes back as an empty tag.
pub fn read<T, C>(driver: &mut MifareUltralight<T, C>) -> Result<NdefTag<C::Message>>
where
    T: TagTransport,
    C: MessageCodec,
{
    let uid = driver.transport.uid()?;

    if driver.is_unformatted()? {
        debug!("first user page blank, reporting tag {} unformatted", uid.to_hex());
        return Ok(NdefTag::unformatted(uid));
    }

    let cc = driver.read_capability_container()?;
    match driver.find_ndef(cc.data_area_len())? {
        NdefLocation::Empty => Ok(NdefTag::empty(uid)),
        NdefLocation::Found { value_len: 0, .. } => Ok(NdefTag::empty(uid)),
        NdefLocation::Found {
            value_offset,
            value_len,
            ..
        } => {
            debug!("ndef message: {} bytes at user offset {}", value_len, value_offset);
            let bytes = driver.read_user_bytes(value_offset, value_len)?;
            let message = driver.codec.decode(&bytes)?;
            Ok(NdefTag::with_message(uid, message))
        }
    }
}
