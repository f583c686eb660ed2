// ultralight/src/prelude.rs

pub use crate::cc::CapabilityContainer;
pub use crate::driver::MifareUltralight;
pub use crate::ndef::{MessageCodec, NdefCodec, NdefMessage, NdefRecord, RawCodec, Tnf};
pub use crate::tag::NdefTag;
pub use crate::tlv::{NdefLocation, TlvKind};
pub use crate::transport::TagTransport;
pub use crate::{Error, Result, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
