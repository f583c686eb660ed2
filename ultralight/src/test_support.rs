//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize MockTransport tag-image setup so tests across
//! the crate and tests/ directory can reuse the same memory layouts.
#![allow(dead_code)]

use crate::constants::{
    CC_MAGIC, CC_SIZE_UNIT, DATA_START_PAGE, PAGE_SIZE, TLV_NDEF_MESSAGE, TLV_TERMINATOR,
};
use crate::tlv;
use crate::transport::mock::MockTransport;
use crate::types::Uid;

/// UID used by the mock fixtures.
#[doc(hidden)]
pub fn sample_uid() -> Uid {
    Uid::try_from([0x04, 0xD1, 0x5E, 0x2A, 0x33, 0x80, 0x91].as_slice()).unwrap()
}

/// CC page describing a data area of `data_area_len` bytes (a multiple
/// of 8), mapping version 1.0, no access restrictions.
#[doc(hidden)]
pub fn capability_container(data_area_len: usize) -> [u8; PAGE_SIZE] {
    [CC_MAGIC, 0x10, (data_area_len / CC_SIZE_UNIT) as u8, 0x00]
}

/// Never-formatted tag: every page zero, sized to hold `data_area_len`
/// user bytes plus the four header pages.
#[doc(hidden)]
pub fn blank_tag(data_area_len: usize) -> MockTransport {
    let mut mock = MockTransport::new(DATA_START_PAGE as usize + data_area_len / PAGE_SIZE);
    mock.uid = sample_uid();
    mock
}

/// NDEF-formatted tag holding a zero-length message TLV, the state the
/// clean operation leaves behind.
#[doc(hidden)]
pub fn empty_message_tag(data_area_len: usize) -> MockTransport {
    let mut mock = blank_tag(data_area_len);
    mock.load(3, &capability_container(data_area_len));
    mock.load(DATA_START_PAGE, &[TLV_NDEF_MESSAGE, 0x00, TLV_TERMINATOR, 0x00]);
    mock
}

/// NDEF-formatted tag holding only a terminator TLV.
#[doc(hidden)]
pub fn terminator_only_tag(data_area_len: usize) -> MockTransport {
    let mut mock = blank_tag(data_area_len);
    mock.load(3, &capability_container(data_area_len));
    mock.load(DATA_START_PAGE, &[TLV_TERMINATOR, 0x00, 0x00, 0x00]);
    mock
}

/// NDEF-formatted tag with `payload` framed at the user-area start.
#[doc(hidden)]
pub fn message_tag(data_area_len: usize, payload: &[u8]) -> MockTransport {
    let mut mock = blank_tag(data_area_len);
    mock.load(3, &capability_container(data_area_len));
    mock.load(DATA_START_PAGE, &ndef_tlv(payload));
    mock
}

/// TLV framing for `payload`: tag byte, short or extended length field,
/// value, terminator.
#[doc(hidden)]
pub fn ndef_tlv(payload: &[u8]) -> Vec<u8> {
    let mut tlv = vec![TLV_NDEF_MESSAGE];
    tlv.extend_from_slice(&tlv::encode_length(payload.len()));
    tlv.extend_from_slice(payload);
    tlv.push(TLV_TERMINATOR);
    tlv
}
