// ultralight/src/transport/pcsc.rs

//! PC/SC transport for contactless readers that expose Type 2 tags
//! through the standard PC/SC pseudo-APDUs.

use pcsc::{Card, Context, Protocols, Scope, ShareMode};

use crate::constants::PAGE_SIZE;
use crate::transport::traits::TagTransport;
use crate::types::Uid;
use crate::{Error, Result};

// Contactless storage card pseudo-APDUs (PC/SC part 3)
const APDU_GET_UID: [u8; 5] = [0xFF, 0xCA, 0x00, 0x00, 0x00];
const APDU_READ_BINARY: u8 = 0xB0;
const APDU_UPDATE_BINARY: u8 = 0xD6;
const APDU_CLASS: u8 = 0xFF;

const SW_OK: [u8; 2] = [0x90, 0x00];

/// Transport backed by the first PC/SC reader with a tag in the field.
pub struct PcscTransport {
    card: Card,
}

impl PcscTransport {
    /// Connect to the first available reader.
    pub fn open() -> Result<Self> {
        let ctx = Context::establish(Scope::User)?;
        let mut readers_buf = [0u8; 2048];
        let mut readers = ctx.list_readers(&mut readers_buf)?;
        let reader = readers
            .next()
            .ok_or_else(|| Error::Transport("no pcsc reader found".to_string()))?;
        let card = ctx.connect(reader, ShareMode::Shared, Protocols::ANY)?;
        Ok(Self { card })
    }

    /// Wrap an already-connected card, e.g. one picked from a specific
    /// reader by the caller.
    pub fn from_card(card: Card) -> Self {
        Self { card }
    }

    fn transmit(&self, apdu: &[u8]) -> Result<Vec<u8>> {
        let mut buf = [0u8; pcsc::MAX_BUFFER_SIZE];
        let resp = self.card.transmit(apdu, &mut buf)?;
        if resp.len() < 2 || resp[resp.len() - 2..] != SW_OK {
            return Err(Error::Transport(format!(
                "apdu {:02x}{:02x} failed: {}",
                apdu[0],
                apdu[1],
                crate::utils::bytes_to_hex(resp)
            )));
        }
        Ok(resp[..resp.len() - 2].to_vec())
    }
}

impl TagTransport for PcscTransport {
    fn read_page(&mut self, page: u8) -> Result<[u8; PAGE_SIZE]> {
        let data = self.transmit(&[APDU_CLASS, APDU_READ_BINARY, 0x00, page, PAGE_SIZE as u8])?;
        // Some readers return 16 bytes for a 4-byte read; take the page.
        data.get(..PAGE_SIZE)
            .and_then(|s| s.try_into().ok())
            .ok_or(Error::InvalidLength {
                expected: PAGE_SIZE,
                actual: data.len(),
            })
    }

    fn write_page(&mut self, page: u8, data: &[u8; PAGE_SIZE]) -> Result<()> {
        let mut apdu = vec![APDU_CLASS, APDU_UPDATE_BINARY, 0x00, page, PAGE_SIZE as u8];
        apdu.extend_from_slice(data);
        self.transmit(&apdu)?;
        Ok(())
    }

    fn uid(&mut self) -> Result<Uid> {
        let data = self.transmit(&APDU_GET_UID)?;
        Uid::try_from(data.as_slice())
    }
}
