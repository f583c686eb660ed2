// ultralight/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// First user page is blank: the tag never received a CC or TLV
    /// structure. The read path reports this as an unformatted tag
    /// instead of an error so callers can format tags on demand.
    #[error("tag is not ndef formatted")]
    UnformattedTag,

    #[error("invalid capability container: magic {magic:#04x}")]
    InvalidCapabilityContainer { magic: u8 },

    #[error("no ndef message tlv before end of user area")]
    NdefNotFound,

    #[error("malformed ndef payload: {0}")]
    MalformedNdef(String),

    #[error("message needs {needed} bytes but tag data area holds {capacity}")]
    CapacityExceeded { needed: usize, capacity: usize },

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("transport error: {0}")]
    Transport(String),

    // PC/SC 実装を後から有効化できるように optional dependency にしている
    #[cfg(feature = "pcsc")]
    #[error("pcsc error: {0}")]
    Pcsc(#[from] pcsc::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
