// ultralight/src/driver/operations/clean.rs

use log::debug;

use crate::constants::{TLV_NDEF_MESSAGE, TLV_TERMINATOR};
use crate::driver::MifareUltralight;
use crate::ndef::MessageCodec;
use crate::transport::TagTransport;
use crate::{Error, Result};

/// Reset the tag to an empty message.
///
/// Writes a zero-length NDEF TLV followed by a terminator at the start of
/// the user area and zero-fills the rest of the data area. The CC is left
/// untouched, so the tag stays NDEF-formatted.
pub fn clean<T, C>(driver: &mut MifareUltralight<T, C>) -> Result<()>
where
    T: TagTransport,
    C: MessageCodec,
{
    if driver.is_unformatted()? {
        return Err(Error::UnformattedTag);
    }

    let cc = driver.read_capability_container()?;
    let data_area_len = cc.data_area_len();
    debug!("cleaning {} byte data area", data_area_len);

    let mut image = vec![TLV_NDEF_MESSAGE, 0x00, TLV_TERMINATOR];
    image.resize(data_area_len, 0x00);
    driver.write_user_bytes(0, &image)
}
