#[path = "../common/mod.rs"]
mod common;

use ultralight::Error;
use ultralight::driver::MifareUltralight;
use ultralight::ndef::{NdefCodec, RawCodec};

#[test]
fn write_then_read_back() {
    let payload = vec![0x11, 0x22, 0x33, 0x44, 0x55];
    let mut driver = MifareUltralight::new(common::fixtures::empty_message_tag(), RawCodec);
    driver.write(&payload).unwrap();
    let tag = driver.read().unwrap();
    assert_eq!(tag.message(), Some(&payload));
}

#[test]
fn write_frames_value_with_terminator() {
    let mut driver = MifareUltralight::new(common::fixtures::empty_message_tag(), RawCodec);
    driver.write(&vec![0xAB, 0xCD]).unwrap();
    let mock = driver.transport_mut();
    assert_eq!(mock.bytes_at(4, 8), vec![0x03, 0x02, 0xAB, 0xCD, 0xFE, 0x00, 0x00, 0x00]);
}

#[test]
fn length_form_boundary_254_is_short() {
    let mock = ultralight::test_support::empty_message_tag(common::fixtures::NTAG216_AREA);
    let mut driver = MifareUltralight::new(mock, RawCodec);
    driver.write(&vec![0x01; 254]).unwrap();
    let mock = driver.transport_mut();
    assert_eq!(mock.bytes_at(4, 2), vec![0x03, 0xFE]);
    // value + terminator directly after the 1-byte length
    assert_eq!(mock.bytes_at(4, 257)[256], 0xFE);
    let tag = driver.read().unwrap();
    assert_eq!(tag.message().map(Vec::len), Some(254));
}

#[test]
fn length_form_boundary_255_is_extended() {
    let mock = ultralight::test_support::empty_message_tag(common::fixtures::NTAG216_AREA);
    let mut driver = MifareUltralight::new(mock, RawCodec);
    driver.write(&vec![0x02; 255]).unwrap();
    let mock = driver.transport_mut();
    assert_eq!(mock.bytes_at(4, 4), vec![0x03, 0xFF, 0x00, 0xFF]);
    let tag = driver.read().unwrap();
    assert_eq!(tag.message().map(Vec::len), Some(255));
}

#[test]
fn capacity_exact_fit_succeeds() {
    // 144-byte area: tag + length + 141 + terminator fills it exactly
    let payload = vec![0x77; 141];
    let mut driver = MifareUltralight::new(common::fixtures::empty_message_tag(), RawCodec);
    driver.write(&payload).unwrap();
    let mock = driver.transport_mut();
    let area = mock.bytes_at(4, 144);
    assert_eq!(area[143], 0xFE);
    let tag = driver.read().unwrap();
    assert_eq!(tag.message(), Some(&payload));
}

#[test]
fn one_byte_over_capacity_fails_before_any_write() {
    let mut driver = MifareUltralight::new(common::fixtures::empty_message_tag(), RawCodec);
    match driver.write(&vec![0x77; 142]) {
        Err(Error::CapacityExceeded {
            needed,
            capacity: 144,
        }) => assert!(needed > 144),
        other => panic!("expected CapacityExceeded, got {:?}", other),
    }
    assert!(driver.transport_mut().writes.is_empty());
}

#[test]
fn write_on_unformatted_tag_fails() {
    let mut driver = MifareUltralight::new(common::fixtures::blank_tag(), RawCodec);
    assert!(matches!(
        driver.write(&vec![0x01]),
        Err(Error::UnformattedTag)
    ));
    assert!(driver.transport_mut().writes.is_empty());
}

#[test]
fn write_on_corrupt_cc_fails() {
    let mut driver = MifareUltralight::new(common::fixtures::corrupt_cc_tag(), RawCodec);
    assert!(matches!(
        driver.write(&vec![0x01]),
        Err(Error::InvalidCapabilityContainer { .. })
    ));
    assert!(driver.transport_mut().writes.is_empty());
}

#[test]
fn write_preserves_leading_lock_control_tlv() {
    let mut driver =
        MifareUltralight::new(common::fixtures::lock_control_tag(&[0xAA, 0xBB]), RawCodec);
    driver.write(&vec![0x11, 0x22, 0x33]).unwrap();
    let mock = driver.transport_mut();
    assert_eq!(
        mock.bytes_at(4, 12),
        vec![0x01, 0x03, 0xA0, 0x10, 0x44, 0x03, 0x03, 0x11, 0x22, 0x33, 0xFE, 0x00]
    );
    let tag = driver.read().unwrap();
    assert_eq!(tag.message(), Some(&vec![0x11, 0x22, 0x33]));
}

#[test]
fn write_on_terminator_only_tag_starts_at_user_area() {
    let mut driver = MifareUltralight::new(common::fixtures::terminator_only_tag(), RawCodec);
    driver.write(&vec![0x42]).unwrap();
    let mock = driver.transport_mut();
    assert_eq!(mock.bytes_at(4, 4), vec![0x03, 0x01, 0x42, 0xFE]);
}

#[test]
fn failed_page_write_aborts_remaining_writes() {
    let mut mock = common::fixtures::empty_message_tag();
    mock.fail_writes_from = Some(2);
    let mut driver = MifareUltralight::new(mock, RawCodec);
    match driver.write(&vec![0x99; 20]) {
        Err(Error::Transport(_)) => {}
        other => panic!("expected Transport error, got {:?}", other),
    }
    // Two pages made it out, nothing after the failure did
    assert_eq!(driver.transport_mut().writes.len(), 2);
}

#[test]
fn write_ndef_message_via_codec() {
    let message = common::fixtures::sample_text_message();
    let mut driver = MifareUltralight::new(common::fixtures::empty_message_tag(), NdefCodec);
    driver.write(&message).unwrap();
    let tag = driver.read().unwrap();
    assert_eq!(tag.message(), Some(&message));
}
