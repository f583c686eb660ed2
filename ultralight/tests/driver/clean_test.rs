#[path = "../common/mod.rs"]
mod common;

use ultralight::Error;
use ultralight::driver::MifareUltralight;
use ultralight::ndef::RawCodec;

#[test]
fn clean_then_read_yields_empty_tag() {
    let mock = common::fixtures::message_tag(&[0xDE, 0xAD, 0xBE, 0xEF]);
    let mut driver = MifareUltralight::new(mock, RawCodec);
    driver.clean().unwrap();
    let tag = driver.read().unwrap();
    assert!(tag.is_formatted());
    assert!(tag.message().is_none());
}

#[test]
fn clean_is_idempotent() {
    let mock = common::fixtures::message_tag(&[0x01, 0x02, 0x03]);
    let mut driver = MifareUltralight::new(mock, RawCodec);
    driver.clean().unwrap();
    let after_first = driver.transport_mut().bytes_at(4, common::fixtures::NTAG213_AREA);
    driver.clean().unwrap();
    let after_second = driver.transport_mut().bytes_at(4, common::fixtures::NTAG213_AREA);
    assert_eq!(after_first, after_second);
    assert!(driver.read().unwrap().message().is_none());
}

#[test]
fn clean_leaves_cc_intact() {
    let mock = common::fixtures::message_tag(&[0x42; 16]);
    let mut driver = MifareUltralight::new(mock, RawCodec);
    driver.clean().unwrap();
    let mock = driver.transport_mut();
    assert_eq!(mock.pages[3], [0xE1, 0x10, 0x12, 0x00]);
}

#[test]
fn clean_writes_empty_tlv_and_zero_fill() {
    let mock = common::fixtures::message_tag(&[0x42; 100]);
    let mut driver = MifareUltralight::new(mock, RawCodec);
    driver.clean().unwrap();
    let area = driver.transport_mut().bytes_at(4, common::fixtures::NTAG213_AREA);
    assert_eq!(&area[..3], &[0x03, 0x00, 0xFE]);
    assert!(area[3..].iter().all(|&b| b == 0x00));
}

#[test]
fn clean_on_unformatted_tag_fails() {
    let mut driver = MifareUltralight::new(common::fixtures::blank_tag(), RawCodec);
    assert!(matches!(driver.clean(), Err(Error::UnformattedTag)));
}

#[test]
fn clean_on_corrupt_cc_fails() {
    let mut driver = MifareUltralight::new(common::fixtures::corrupt_cc_tag(), RawCodec);
    assert!(matches!(
        driver.clean(),
        Err(Error::InvalidCapabilityContainer { .. })
    ));
}

#[test]
fn clean_write_failure_propagates() {
    let mut mock = common::fixtures::message_tag(&[0x55; 40]);
    mock.fail_writes_from = Some(3);
    let mut driver = MifareUltralight::new(mock, RawCodec);
    assert!(matches!(driver.clean(), Err(Error::Transport(_))));
    assert_eq!(driver.transport_mut().writes.len(), 3);
}
