// ultralight/src/tag.rs

use crate::types::Uid;

/// What a read operation produced: the tag identity, whether the tag
/// carries NDEF structure at all, and the decoded message if one was
/// stored. `M` is the codec's message type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NdefTag<M> {
    uid: Uid,
    formatted: bool,
    message: Option<M>,
}

impl<M> NdefTag<M> {
    /// Tag without a Capability Container or TLV structure.
    pub fn unformatted(uid: Uid) -> Self {
        Self {
            uid,
            formatted: false,
            message: None,
        }
    }

    /// NDEF-formatted tag holding no message.
    pub fn empty(uid: Uid) -> Self {
        Self {
            uid,
            formatted: true,
            message: None,
        }
    }

    /// NDEF-formatted tag with a decoded message.
    pub fn with_message(uid: Uid, message: M) -> Self {
        Self {
            uid,
            formatted: true,
            message: Some(message),
        }
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    pub fn is_formatted(&self) -> bool {
        self.formatted
    }

    pub fn message(&self) -> Option<&M> {
        self.message.as_ref()
    }

    pub fn into_message(self) -> Option<M> {
        self.message
    }
}
