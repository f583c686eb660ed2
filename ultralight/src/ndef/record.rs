// ultralight/src/ndef/record.rs

use crate::{Error, Result};

// Record header flag bits
pub(crate) const FLAG_MB: u8 = 0x80;
pub(crate) const FLAG_ME: u8 = 0x40;
pub(crate) const FLAG_CF: u8 = 0x20;
pub(crate) const FLAG_SR: u8 = 0x10;
pub(crate) const FLAG_IL: u8 = 0x08;
pub(crate) const TNF_MASK: u8 = 0x07;

/// URI identifier codes from the NFC Forum URI record type definition.
/// Only the common prefixes; anything else is written uncompressed.
const URI_PREFIXES: &[(u8, &str)] = &[
    (0x01, "http://www."),
    (0x02, "https://www."),
    (0x03, "http://"),
    (0x04, "https://"),
    (0x05, "tel:"),
    (0x06, "mailto:"),
];

/// Type Name Format field of a record header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Tnf {
    Empty = 0x00,
    WellKnown = 0x01,
    Mime = 0x02,
    AbsoluteUri = 0x03,
    External = 0x04,
    Unknown = 0x05,
    Unchanged = 0x06,
}

impl Tnf {
    pub(crate) fn from_header(header: u8) -> Result<Self> {
        match header & TNF_MASK {
            0x00 => Ok(Tnf::Empty),
            0x01 => Ok(Tnf::WellKnown),
            0x02 => Ok(Tnf::Mime),
            0x03 => Ok(Tnf::AbsoluteUri),
            0x04 => Ok(Tnf::External),
            0x05 => Ok(Tnf::Unknown),
            0x06 => Ok(Tnf::Unchanged),
            bits => Err(Error::MalformedNdef(format!("reserved tnf {:#x}", bits))),
        }
    }
}

/// A single NDEF record: type name format, type, optional id, payload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NdefRecord {
    pub tnf: Tnf,
    pub record_type: Vec<u8>,
    pub id: Vec<u8>,
    pub payload: Vec<u8>,
}

impl NdefRecord {
    pub fn new(tnf: Tnf, record_type: Vec<u8>, payload: Vec<u8>) -> Self {
        Self {
            tnf,
            record_type,
            id: Vec::new(),
            payload,
        }
    }

    /// UTF-8 text record (well-known type `T`).
    pub fn text(language: &str, text: &str) -> Self {
        let mut payload = Vec::with_capacity(1 + language.len() + text.len());
        // Status byte: bit 7 clear for UTF-8, low bits carry the language
        // code length.
        payload.push(language.len() as u8 & 0x3F);
        payload.extend_from_slice(language.as_bytes());
        payload.extend_from_slice(text.as_bytes());
        Self::new(Tnf::WellKnown, b"T".to_vec(), payload)
    }

    /// URI record (well-known type `U`) with prefix compression.
    pub fn uri(uri: &str) -> Self {
        let (code, rest) = URI_PREFIXES
            .iter()
            .find(|(_, prefix)| uri.starts_with(prefix))
            .map(|(code, prefix)| (*code, &uri[prefix.len()..]))
            .unwrap_or((0x00, uri));
        let mut payload = Vec::with_capacity(1 + rest.len());
        payload.push(code);
        payload.extend_from_slice(rest.as_bytes());
        Self::new(Tnf::WellKnown, b"U".to_vec(), payload)
    }

    /// Text content of a well-known `T` record, if that is what this is.
    pub fn to_text(&self) -> Option<String> {
        if self.tnf != Tnf::WellKnown || self.record_type != b"T" {
            return None;
        }
        let status = *self.payload.first()?;
        let language_len = (status & 0x3F) as usize;
        let text = self.payload.get(1 + language_len..)?;
        String::from_utf8(text.to_vec()).ok()
    }

    /// Expanded URI of a well-known `U` record, if that is what this is.
    pub fn to_uri(&self) -> Option<String> {
        if self.tnf != Tnf::WellKnown || self.record_type != b"U" {
            return None;
        }
        let code = *self.payload.first()?;
        let rest = std::str::from_utf8(self.payload.get(1..)?).ok()?;
        let prefix = URI_PREFIXES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, p)| *p)
            .unwrap_or("");
        Some(format!("{}{}", prefix, rest))
    }

    pub(crate) fn is_short(&self) -> bool {
        self.payload.len() <= 0xFF
    }
}
