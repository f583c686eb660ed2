#[path = "../common/mod.rs"]
mod common;

use ultralight::Error;
use ultralight::driver::MifareUltralight;
use ultralight::ndef::{NdefCodec, RawCodec};

#[test]
fn unformatted_tag_reads_as_unformatted() {
    let mut driver = MifareUltralight::new(common::fixtures::blank_tag(), RawCodec);
    let tag = driver.read().unwrap();
    assert!(!tag.is_formatted());
    assert!(tag.message().is_none());
    assert_eq!(tag.uid(), &common::fixtures::sample_uid());
}

#[test]
fn erased_tag_reads_as_unformatted() {
    let mut driver = MifareUltralight::new(common::fixtures::erased_tag(), RawCodec);
    let tag = driver.read().unwrap();
    assert!(!tag.is_formatted());
}

#[test]
fn terminator_before_ndef_reads_as_empty() {
    let mut driver = MifareUltralight::new(common::fixtures::terminator_only_tag(), RawCodec);
    let tag = driver.read().unwrap();
    assert!(tag.is_formatted());
    assert!(tag.message().is_none());
}

#[test]
fn corrupt_cc_fails_without_tlv_scan() {
    let mut driver = MifareUltralight::new(common::fixtures::corrupt_cc_tag(), RawCodec);
    match driver.read() {
        Err(Error::InvalidCapabilityContainer { magic: 0x00 }) => {}
        other => panic!("expected InvalidCapabilityContainer, got {:?}", other),
    }
    // Formatting check touched page 4, the CC page 3, and nothing else:
    // no user-area scan happened after the CC was rejected.
    assert_eq!(driver.transport_mut().reads, vec![4, 3]);
}

#[test]
fn reads_raw_message_bytes() {
    let payload = [0xD1, 0x01, 0x05, 0x54, 0x02, b'e', b'n', b'x'];
    let mut driver = MifareUltralight::new(common::fixtures::message_tag(&payload), RawCodec);
    let tag = driver.read().unwrap();
    assert_eq!(tag.message(), Some(&payload.to_vec()));
}

#[test]
fn reads_message_behind_lock_control_tlv() {
    let payload = [0xAA, 0xBB, 0xCC];
    let mut driver =
        MifareUltralight::new(common::fixtures::lock_control_tag(&payload), RawCodec);
    let tag = driver.read().unwrap();
    assert_eq!(tag.message(), Some(&payload.to_vec()));
}

#[test]
fn decodes_text_record_via_codec() {
    let message = common::fixtures::sample_text_message();
    let bytes = message.to_bytes();
    let mut driver = MifareUltralight::new(common::fixtures::message_tag(&bytes), NdefCodec);
    let tag = driver.read().unwrap();
    let read_back = tag.message().unwrap();
    assert_eq!(read_back, &message);
    assert_eq!(read_back.records()[0].to_text().unwrap(), "hello tag");
}

#[test]
fn extended_length_message_reads_back() {
    let payload = vec![0x5A; 300];
    let mock = ultralight::test_support::message_tag(common::fixtures::NTAG216_AREA, &payload);
    let mut driver = MifareUltralight::new(mock, RawCodec);
    let tag = driver.read().unwrap();
    assert_eq!(tag.message(), Some(&payload));
}

#[test]
fn malformed_payload_surfaces_codec_error() {
    // Header claims a longer payload than the TLV carries
    let payload = [0xD1, 0x01, 0x40, 0x54];
    let mut driver = MifareUltralight::new(common::fixtures::message_tag(&payload), NdefCodec);
    assert!(matches!(driver.read(), Err(Error::MalformedNdef(_))));
}

#[test]
fn scan_without_ndef_or_terminator_is_not_found() {
    // Valid CC, user area full of an unknown TLV running to the end
    let mut mock = ultralight::test_support::blank_tag(common::fixtures::NTAG213_AREA);
    mock.load(3, &ultralight::test_support::capability_container(144));
    mock.load(4, &[0x42, 0xFF, 0x00, 0x8C]);
    let mut driver = MifareUltralight::new(mock, RawCodec);
    assert!(matches!(driver.read(), Err(Error::NdefNotFound)));
}

#[test]
fn read_failure_propagates() {
    let mut mock = common::fixtures::message_tag(&[0x01, 0x02]);
    mock.set_read_failures(1);
    let mut driver = MifareUltralight::new(mock, RawCodec);
    assert!(matches!(driver.read(), Err(Error::Transport(_))));
}
