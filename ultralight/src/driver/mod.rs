// ultralight/src/driver/mod.rs

//! The Ultralight tag driver: locates, sizes, and frames an NDEF message
//! inside the page-addressed TLV user area of a Type 2 tag.

use crate::cc::CapabilityContainer;
use crate::constants::{CC_PAGE, DATA_START_PAGE, PAGE_SIZE};
use crate::ndef::MessageCodec;
use crate::tag::NdefTag;
use crate::tlv::{self, NdefLocation};
use crate::transport::TagTransport;
use crate::{Error, Result};

pub mod operations;

/// Driver for Mifare Ultralight family NDEF tags.
///
/// All working state (capacity, NDEF location) is derived from the tag on
/// every operation; the driver itself only holds its two collaborators.
/// A driver instance is still scoped to one tag-presence session: do not
/// keep using it across tag removal without re-reading.
pub struct MifareUltralight<T, C> {
    transport: T,
    codec: C,
}

impl<T, C> MifareUltralight<T, C>
where
    T: TagTransport,
    C: MessageCodec,
{
    pub fn new(transport: T, codec: C) -> Self {
        Self { transport, codec }
    }

    /// Access the underlying transport, e.g. for inspection in tests.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Tear the driver apart into its collaborators.
    pub fn into_parts(self) -> (T, C) {
        (self.transport, self.codec)
    }

    /// Read the tag: UID, formatting state, and the stored message if any.
    pub fn read(&mut self) -> Result<NdefTag<C::Message>> {
        operations::read::read(self)
    }

    /// Write `message` over the tag's NDEF TLV region.
    pub fn write(&mut self, message: &C::Message) -> Result<()> {
        operations::write::write(self, message)
    }

    /// Reset the tag to an empty message, leaving the CC intact.
    pub fn clean(&mut self) -> Result<()> {
        operations::clean::clean(self)
    }

    /// A tag whose first user page is blank (all zero, or all ones on an
    /// erased tag) never received a CC or TLV structure. Checked before
    /// every operation so empty memory is never TLV-scanned.
    pub fn is_unformatted(&mut self) -> Result<bool> {
        let first = self.transport.read_page(DATA_START_PAGE)?;
        Ok(first.iter().all(|&b| b == 0x00) || first.iter().all(|&b| b == 0xFF))
    }

    pub(crate) fn read_capability_container(&mut self) -> Result<CapabilityContainer> {
        let page = self.transport.read_page(CC_PAGE)?;
        CapabilityContainer::parse(&page)
    }

    /// Scan the user area for the NDEF message TLV, pulling pages from the
    /// transport only as the scanner consumes them.
    pub(crate) fn find_ndef(&mut self, data_area_len: usize) -> Result<NdefLocation> {
        let transport = &mut self.transport;
        let mut cache: Vec<u8> = Vec::with_capacity(PAGE_SIZE * 4);
        let read_byte = |index: usize| -> Result<u8> {
            while cache.len() <= index {
                let page = user_page(cache.len() / PAGE_SIZE)?;
                cache.extend_from_slice(&transport.read_page(page)?);
            }
            Ok(cache[index])
        };
        tlv::scan(read_byte, data_area_len)
    }

    /// Read `len` bytes at `offset` in the user area, over-reading whole
    /// pages and trimming to the requested span.
    pub(crate) fn read_user_bytes(&mut self, offset: usize, len: usize) -> Result<Vec<u8>> {
        if len == 0 {
            return Ok(Vec::new());
        }
        let first_index = offset / PAGE_SIZE;
        let skip = offset % PAGE_SIZE;
        let page_count = (skip + len).div_ceil(PAGE_SIZE);
        let mut buf = Vec::with_capacity(page_count * PAGE_SIZE);
        for i in 0..page_count {
            let page = user_page(first_index + i)?;
            buf.extend_from_slice(&self.transport.read_page(page)?);
        }
        Ok(buf[skip..skip + len].to_vec())
    }

    /// Write `bytes` at `offset` in the user area as whole pages. A
    /// partial leading page is read back and merged so bytes before
    /// `offset` survive; the trailing page is zero-padded.
    pub(crate) fn write_user_bytes(&mut self, offset: usize, bytes: &[u8]) -> Result<()> {
        let first_index = offset / PAGE_SIZE;
        let lead = offset % PAGE_SIZE;
        let mut image = Vec::with_capacity(lead + bytes.len() + PAGE_SIZE);
        if lead > 0 {
            let head = self.transport.read_page(user_page(first_index)?)?;
            image.extend_from_slice(&head[..lead]);
        }
        image.extend_from_slice(bytes);
        while image.len() % PAGE_SIZE != 0 {
            image.push(0x00);
        }
        for (i, chunk) in image.chunks_exact(PAGE_SIZE).enumerate() {
            let mut page = [0u8; PAGE_SIZE];
            page.copy_from_slice(chunk);
            self.transport.write_page(user_page(first_index + i)?, &page)?;
        }
        Ok(())
    }
}

/// Translate a user-area page index to an absolute page number.
fn user_page(index: usize) -> Result<u8> {
    u8::try_from(DATA_START_PAGE as usize + index)
        .map_err(|_| Error::Transport(format!("user page {} beyond addressable range", index)))
}

/// Whole-page span from the user-area start through a TLV at `tlv_offset`
/// framing `value_len` bytes, including the trailing terminator TLV.
pub(crate) fn buffer_len(tlv_offset: usize, value_len: usize) -> usize {
    let end = tlv_offset + tlv::header_len(value_len) + value_len + 1;
    end.div_ceil(PAGE_SIZE) * PAGE_SIZE
}
