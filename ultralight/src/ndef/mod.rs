// ultralight/src/ndef/mod.rs

//! NDEF message model and the codec seam the driver talks through.
//!
//! The driver never interprets message bytes itself; it hands the TLV
//! value to a [`MessageCodec`]. [`NdefCodec`] is the bundled record-level
//! implementation, [`RawCodec`] passes bytes through untouched for
//! callers that frame their own records.

mod message;
mod record;

pub use message::{NdefCodec, NdefMessage};
pub use record::{NdefRecord, Tnf};

use crate::Result;

/// Codec seam between the tag driver and the NDEF object model.
pub trait MessageCodec {
    /// Decoded message type this codec produces and consumes.
    type Message;

    /// Decode the bytes of an NDEF message TLV value.
    fn decode(&self, bytes: &[u8]) -> Result<Self::Message>;

    /// Serialize a message into the bytes of an NDEF message TLV value.
    fn encode(&self, message: &Self::Message) -> Result<Vec<u8>>;
}

/// Identity codec: the message is its raw bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawCodec;

impl MessageCodec for RawCodec {
    type Message = Vec<u8>;

    fn decode(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        Ok(bytes.to_vec())
    }

    fn encode(&self, message: &Vec<u8>) -> Result<Vec<u8>> {
        Ok(message.clone())
    }
}
