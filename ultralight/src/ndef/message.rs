// ultralight/src/ndef/message.rs

use super::record::{FLAG_CF, FLAG_IL, FLAG_MB, FLAG_ME, FLAG_SR, NdefRecord, Tnf};
use super::MessageCodec;
use crate::{Error, Result};

/// An NDEF message: an ordered sequence of records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NdefMessage {
    records: Vec<NdefRecord>,
}

impl NdefMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<NdefRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: NdefRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[NdefRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize the message. MB is set on the first record, ME on the
    /// last, SR whenever the payload fits a 1-byte length.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        let last = self.records.len().saturating_sub(1);
        for (i, record) in self.records.iter().enumerate() {
            let mut header = record.tnf as u8;
            if i == 0 {
                header |= FLAG_MB;
            }
            if i == last {
                header |= FLAG_ME;
            }
            if record.is_short() {
                header |= FLAG_SR;
            }
            if !record.id.is_empty() {
                header |= FLAG_IL;
            }
            bytes.push(header);
            bytes.push(record.record_type.len() as u8);
            if record.is_short() {
                bytes.push(record.payload.len() as u8);
            } else {
                bytes.extend_from_slice(&(record.payload.len() as u32).to_be_bytes());
            }
            if !record.id.is_empty() {
                bytes.push(record.id.len() as u8);
            }
            bytes.extend_from_slice(&record.record_type);
            bytes.extend_from_slice(&record.id);
            bytes.extend_from_slice(&record.payload);
        }
        bytes
    }

    /// Parse a serialized message. Stops after the record flagged ME;
    /// chunked records are not supported.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::MalformedNdef("empty message".to_string()));
        }

        let mut records = Vec::new();
        let mut i = 0usize;
        while i < bytes.len() {
            let header = bytes[i];
            if header & FLAG_CF != 0 {
                return Err(Error::MalformedNdef(
                    "chunked records are not supported".to_string(),
                ));
            }
            let tnf = Tnf::from_header(header)?;
            i += 1;

            let type_len = *bytes.get(i).ok_or_else(truncated)? as usize;
            i += 1;

            let payload_len = if header & FLAG_SR != 0 {
                let len = *bytes.get(i).ok_or_else(truncated)? as usize;
                i += 1;
                len
            } else {
                let raw = bytes.get(i..i + 4).ok_or_else(truncated)?;
                i += 4;
                u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]) as usize
            };

            let id_len = if header & FLAG_IL != 0 {
                let len = *bytes.get(i).ok_or_else(truncated)? as usize;
                i += 1;
                len
            } else {
                0
            };

            let record_type = bytes.get(i..i + type_len).ok_or_else(truncated)?.to_vec();
            i += type_len;
            let id = bytes.get(i..i + id_len).ok_or_else(truncated)?.to_vec();
            i += id_len;
            let payload = bytes.get(i..i + payload_len).ok_or_else(truncated)?.to_vec();
            i += payload_len;

            records.push(NdefRecord {
                tnf,
                record_type,
                id,
                payload,
            });

            if header & FLAG_ME != 0 {
                break;
            }
        }

        Ok(Self { records })
    }
}

fn truncated() -> Error {
    Error::MalformedNdef("record truncated".to_string())
}

impl From<NdefRecord> for NdefMessage {
    fn from(record: NdefRecord) -> Self {
        Self::from_records(vec![record])
    }
}

/// [`MessageCodec`] implementation for the bundled NDEF model.
#[derive(Debug, Default, Clone, Copy)]
pub struct NdefCodec;

impl MessageCodec for NdefCodec {
    type Message = NdefMessage;

    fn decode(&self, bytes: &[u8]) -> Result<NdefMessage> {
        NdefMessage::from_bytes(bytes)
    }

    fn encode(&self, message: &NdefMessage) -> Result<Vec<u8>> {
        Ok(message.to_bytes())
    }
}
