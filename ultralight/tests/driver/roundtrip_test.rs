#[path = "../common/mod.rs"]
mod common;

use proptest::prelude::*;
use ultralight::driver::MifareUltralight;
use ultralight::ndef::{NdefCodec, NdefMessage, NdefRecord, RawCodec};

proptest! {
    // Any payload that fits a 144-byte data area survives a write/read
    // cycle byte for byte.
    #[test]
    fn raw_payload_roundtrip(payload in proptest::collection::vec(any::<u8>(), 1..=141)) {
        let mut driver = MifareUltralight::new(common::fixtures::empty_message_tag(), RawCodec);
        driver.write(&payload).unwrap();
        let tag = driver.read().unwrap();
        prop_assert_eq!(tag.message(), Some(&payload));
    }

    #[test]
    fn text_message_roundtrip(text in "[ -~]{0,80}") {
        let message = NdefMessage::from(NdefRecord::text("en", &text));
        let mut driver = MifareUltralight::new(common::fixtures::empty_message_tag(), NdefCodec);
        driver.write(&message).unwrap();
        let tag = driver.read().unwrap();
        prop_assert_eq!(tag.message(), Some(&message));
    }

    // Rewriting over an existing message never leaves stale bytes visible.
    #[test]
    fn rewrite_shrinking_message(
        first in proptest::collection::vec(any::<u8>(), 64..=100),
        second in proptest::collection::vec(any::<u8>(), 1..=32),
    ) {
        let mut driver = MifareUltralight::new(common::fixtures::empty_message_tag(), RawCodec);
        driver.write(&first).unwrap();
        driver.write(&second).unwrap();
        let tag = driver.read().unwrap();
        prop_assert_eq!(tag.message(), Some(&second));
    }
}
